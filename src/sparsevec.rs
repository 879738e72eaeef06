// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Sparse vectors over GF(2), stored as sorted lists of indices.

use std::ops::AddAssign;

use crate::error::{check_index, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseVector {
    dimension: usize,
    // Strictly increasing, all below dimension.
    indices: Vec<usize>,
}

impl SparseVector {
    pub fn zero(dimension: usize) -> Self {
        SparseVector {
            dimension,
            indices: vec![],
        }
    }

    /// The i-th vector of the canonical basis.
    pub fn unit(dimension: usize, i: usize) -> Result<Self> {
        check_index(i, dimension)?;
        Ok(SparseVector {
            dimension,
            indices: vec![i],
        })
    }

    /// Builds a vector from arbitrary indices: repeated indices
    /// cancel in pairs.
    pub fn from_indices(dimension: usize, mut indices: Vec<usize>) -> Result<Self> {
        for &i in &indices {
            check_index(i, dimension)?;
        }
        indices.sort_unstable();
        let mut folded: Vec<usize> = Vec::with_capacity(indices.len());
        for i in indices {
            if folded.last() == Some(&i) {
                folded.pop();
            } else {
                folded.push(i);
            }
        }
        Ok(SparseVector {
            dimension,
            indices: folded,
        })
    }

    // Indices must be strictly increasing and below dimension.
    pub(crate) fn from_sorted(dimension: usize, indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.last().map_or(true, |&i| i < dimension));
        SparseVector { dimension, indices }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Number of nonzero coordinates.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.indices.binary_search(&i).is_ok()
    }

    /// Sum of 2 vectors: the symmetric difference of index sets.
    pub fn add(&self, other: &SparseVector) -> SparseVector {
        debug_assert_eq!(self.dimension, other.dimension);
        let (a, b) = (&self.indices, &other.indices);
        let mut res = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                res.push(a[i]);
                i += 1;
            } else if a[i] > b[j] {
                res.push(b[j]);
                j += 1;
            } else {
                i += 1;
                j += 1;
            }
        }
        res.extend_from_slice(&a[i..]);
        res.extend_from_slice(&b[j..]);
        SparseVector {
            dimension: self.dimension,
            indices: res,
        }
    }
}

impl AddAssign<&SparseVector> for SparseVector {
    fn add_assign(&mut self, other: &SparseVector) {
        *self = SparseVector::add(self, other);
    }
}
