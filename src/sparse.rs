// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Sparse matrices over GF(2) in coordinate form.
//!
//! A matrix is a list of coordinates of its one entries. The list is
//! a multiset: inserting the same coordinate twice is the same as
//! adding 1 + 1 = 0, so the logical value of the matrix at (i, j) is
//! the parity of the number of occurrences of (i, j).
//!
//! The canonical form is the sorted list (row-major order) where each
//! coordinate appears at most once. All operations producing a new
//! matrix return canonical matrices; only insertion may leave a matrix
//! in non-canonical form until `remove_duplicates` is called.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{check_dims, check_index, Result};

/// The position of a one entry.
///
/// The derived ordering is the row-major order (row, then column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Column-major order (column, then row).
    pub fn cmp_col_major(&self, other: &Self) -> Ordering {
        (self.col, self.row).cmp(&(other.col, other.row))
    }

    pub fn transposed(self) -> Self {
        Coordinate {
            row: self.col,
            col: self.row,
        }
    }
}

pub(crate) fn sort_col_major(ones: &mut [Coordinate]) {
    ones.sort_unstable_by(Coordinate::cmp_col_major);
}

/// Sort coordinates in row-major order and keep coordinates
/// appearing an odd number of times, once.
pub(crate) fn fold_parity(ones: &mut Vec<Coordinate>) {
    ones.sort_unstable();
    let mut kept = 0;
    let mut i = 0;
    while i < ones.len() {
        let c = ones[i];
        let mut j = i + 1;
        while j < ones.len() && ones[j] == c {
            j += 1;
        }
        if (j - i) % 2 == 1 {
            ones[kept] = c;
            kept += 1;
        }
        i = j;
    }
    ones.truncate(kept);
}

#[derive(Clone, Debug)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    ones: Vec<Coordinate>,
    // Whether ones is sorted (row-major) without repetitions.
    canonical: bool,
}

impl SparseMatrix {
    /// Returns the zero matrix of given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            ones: vec![],
            canonical: true,
        }
    }

    pub fn identity(n: usize) -> Self {
        SparseMatrix {
            rows: n,
            cols: n,
            ones: (0..n).map(|i| Coordinate::new(i, i)).collect(),
            canonical: true,
        }
    }

    /// Builds a matrix from a list of coordinates, which may contain
    /// repetitions (they are summed modulo 2).
    pub fn from_coordinates<I>(rows: usize, cols: usize, ones: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut m = SparseMatrix::new(rows, cols);
        for c in ones {
            m.add_unchecked(c.row, c.col)?;
        }
        m.remove_duplicates();
        Ok(m)
    }

    // Internal constructor: coordinates are known to be in range.
    pub(crate) fn from_raw(rows: usize, cols: usize, mut ones: Vec<Coordinate>) -> Self {
        fold_parity(&mut ones);
        SparseMatrix {
            rows,
            cols,
            ones,
            canonical: true,
        }
    }

    // Internal constructor for lists already in canonical form.
    pub(crate) fn from_canonical(rows: usize, cols: usize, ones: Vec<Coordinate>) -> Self {
        debug_assert!(ones.windows(2).all(|w| w[0] < w[1]));
        SparseMatrix {
            rows,
            cols,
            ones,
            canonical: true,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Appends a one entry at (row, col). The coordinate is not
    /// compared to existing entries: if it is already present,
    /// the two entries will cancel during canonicalization.
    pub fn add_unchecked(&mut self, row: usize, col: usize) -> Result<()> {
        check_index(row, self.rows)?;
        check_index(col, self.cols)?;
        self.ones.push(Coordinate::new(row, col));
        self.canonical = false;
        Ok(())
    }

    /// Puts the matrix in canonical form: coordinates inserted an even
    /// number of times disappear, other coordinates are kept once.
    pub fn remove_duplicates(&mut self) {
        if !self.canonical {
            fold_parity(&mut self.ones);
            self.canonical = true;
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// The one entries in row-major order, without repetitions.
    /// This does not modify the matrix: if insertions are pending,
    /// a folded copy is returned.
    pub fn ones(&self) -> Cow<'_, [Coordinate]> {
        if self.canonical {
            Cow::Borrowed(&self.ones)
        } else {
            let mut ones = self.ones.clone();
            fold_parity(&mut ones);
            Cow::Owned(ones)
        }
    }

    pub fn into_ones(mut self) -> Vec<Coordinate> {
        self.remove_duplicates();
        self.ones
    }

    pub fn hamming_weight(&self) -> usize {
        self.ones().len()
    }

    pub fn hamming_weights_of_rows(&self) -> Vec<usize> {
        let mut weights = vec![0; self.rows];
        for c in self.ones().iter() {
            weights[c.row] += 1;
        }
        weights
    }

    pub fn hamming_weights_of_cols(&self) -> Vec<usize> {
        let mut weights = vec![0; self.cols];
        for c in self.ones().iter() {
            weights[c.col] += 1;
        }
        weights
    }

    /// Minimal and maximal weights of rows and columns.
    /// Returns None for matrices without rows or columns.
    pub fn weight_stats(&self) -> Option<WeightStats> {
        let (min_row, max_row) = min_max(&self.hamming_weights_of_rows())?;
        let (min_col, max_col) = min_max(&self.hamming_weights_of_cols())?;
        Some(WeightStats {
            weight: self.hamming_weight(),
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.ones().binary_search(&Coordinate::new(row, col)).is_ok()
    }

    pub fn is_zero(&self) -> bool {
        self.ones().is_empty()
    }

    /// Whether the matrix is a square identity matrix.
    pub fn is_identity(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let ones = self.ones();
        ones.len() == self.cols
            && ones
                .iter()
                .enumerate()
                .all(|(k, c)| c.row == k && c.col == k)
    }

    pub fn transpose(&self) -> SparseMatrix {
        let ones = self.ones.iter().map(|c| c.transposed()).collect();
        SparseMatrix::from_raw(self.cols, self.rows, ones)
    }

    /// Sum of matrices of the same shape.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_dims("add (rows)", self.rows, other.rows)?;
        check_dims("add (cols)", self.cols, other.cols)?;
        let mut ones = Vec::with_capacity(self.ones.len() + other.ones.len());
        ones.extend_from_slice(&self.ones);
        ones.extend_from_slice(&other.ones);
        Ok(SparseMatrix::from_raw(self.rows, self.cols, ones))
    }
}

impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.ones() == other.ones()
    }
}

impl Eq for SparseMatrix {}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} matrix with {} ones",
            self.rows,
            self.cols,
            self.hamming_weight()
        )
    }
}

pub fn transpose(m: &SparseMatrix) -> SparseMatrix {
    m.transpose()
}

/// Horizontal concatenation [left | right].
pub fn concatenate(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
    check_dims("concatenate", left.rows, right.rows)?;
    let mut ones = Vec::with_capacity(left.ones.len() + right.ones.len());
    ones.extend_from_slice(&left.ones);
    ones.extend(
        right
            .ones
            .iter()
            .map(|c| Coordinate::new(c.row, c.col + left.cols)),
    );
    Ok(SparseMatrix::from_raw(
        left.rows,
        left.cols + right.cols,
        ones,
    ))
}

/// Degree distribution of a sparse matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightStats {
    pub weight: usize,
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl fmt::Display for WeightStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weight {} rows {}..{} cols {}..{}",
            self.weight, self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}

pub fn min_max(a: &[usize]) -> Option<(usize, usize)> {
    let first = *a.first()?;
    Some(
        a.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}
