// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Random invertible matrices with a known inverse.
//!
//! Inverting a large sparse matrix by Gauss elimination is expensive
//! and fills the matrix. Instead, we start from the identity and apply
//! elementary column operations E1, E2, ... En:
//!
//! A = E1 E2 ... En
//! A^-1 = En^-1 ... E2^-1 E1^-1
//!
//! Over GF(2), a swap (multiplication by a permutation P(i,j)) and a
//! column addition (multiplication by I + E(j,i)) are involutions, so
//! A^-1 = En ... E1 and its transpose is E1^T ... En^T. That is,
//! the transpose of the inverse is obtained by applying the same
//! sequence of column operations, each replaced by its transpose:
//! P(i,j)^T = P(j,i) and (I + E(j,i))^T = I + E(i,j), that is the
//! operation with arguments exchanged.

use rand::Rng;

use crate::colmatrix::ColumnVectorMatrix;
use crate::error::Result;
use crate::multiply::multiply_par;
use crate::sparse::SparseMatrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementaryOp {
    /// Exchange columns i and j.
    Swap(usize, usize),
    /// Add column j to column i.
    Add(usize, usize),
}

impl ElementaryOp {
    /// The operation to apply to the transposed inverse.
    pub fn mirrored(self) -> Self {
        match self {
            ElementaryOp::Swap(i, j) => ElementaryOp::Swap(j, i),
            ElementaryOp::Add(i, j) => ElementaryOp::Add(j, i),
        }
    }

    pub fn apply(self, m: &mut ColumnVectorMatrix) -> Result<()> {
        match self {
            ElementaryOp::Swap(i, j) => m.swap(i, j),
            ElementaryOp::Add(i, j) => m.add(i, j),
        }
    }
}

/// A square matrix A together with the transpose of its inverse,
/// and the log of operations used to build them.
#[derive(Clone, Debug)]
pub struct InversePair {
    a: ColumnVectorMatrix,
    bt: ColumnVectorMatrix,
    log: Vec<ElementaryOp>,
}

impl InversePair {
    /// The pair (I, I).
    pub fn new(n: usize) -> Self {
        InversePair {
            a: ColumnVectorMatrix::identity(n),
            bt: ColumnVectorMatrix::identity(n),
            log: vec![],
        }
    }

    /// Builds a random invertible matrix of size n using `swaps` random
    /// column exchanges followed by `adds` random column additions.
    pub fn random<R: Rng + ?Sized>(n: usize, swaps: usize, adds: usize, rng: &mut R) -> Self {
        let mut pair = InversePair::new(n);
        if n < 2 {
            return pair;
        }
        pair.log.reserve(swaps + adds);
        for k in 0..swaps + adds {
            let (i, j) = distinct_pair(n, rng);
            let op = if k < swaps {
                ElementaryOp::Swap(i, j)
            } else {
                ElementaryOp::Add(i, j)
            };
            // Indices are distinct and below n: cannot fail.
            let _ = pair.apply(op);
        }
        pair
    }

    /// Replays a log of operations starting from the identity.
    pub fn replay(n: usize, ops: &[ElementaryOp]) -> Result<Self> {
        let mut pair = InversePair::new(n);
        for &op in ops {
            pair.apply(op)?;
        }
        Ok(pair)
    }

    /// Applies op to A and its mirror to the transposed inverse.
    /// On error, the pair is unchanged.
    pub fn apply(&mut self, op: ElementaryOp) -> Result<()> {
        op.apply(&mut self.a)?;
        op.mirrored().apply(&mut self.bt)?;
        self.log.push(op);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.a.cols()
    }

    pub fn log(&self) -> &[ElementaryOp] {
        &self.log
    }

    pub fn forward_columns(&self) -> &ColumnVectorMatrix {
        &self.a
    }

    pub fn inverse_transposed(&self) -> &ColumnVectorMatrix {
        &self.bt
    }

    pub fn forward(&self) -> SparseMatrix {
        self.a.convert_matrix()
    }

    pub fn inverse(&self) -> SparseMatrix {
        self.bt.convert_matrix().transpose()
    }

    /// Checks that A * B is the identity matrix.
    pub fn verify(&self, tpool: Option<&rayon::ThreadPool>) -> Result<bool> {
        let ab = multiply_par(&self.forward(), &self.inverse(), tpool)?;
        Ok(ab.is_identity())
    }
}

fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    loop {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j {
            return (i, j);
        }
    }
}
