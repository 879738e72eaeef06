// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Parity-check and generator matrices in systematic form.
//!
//! Given a sparse k x m matrix P, the generator matrix is G = [I | P]
//! and the parity-check matrix is H = [P^T | I], so that
//! H G^T = P^T + P^T = 0.

use crate::error::Result;
use crate::multiply::multiply_par;
use crate::sparse::{concatenate, transpose, SparseMatrix};

/// Returns (H, G^T) for the systematic code defined by p.
pub fn parity_pair(p: &SparseMatrix) -> Result<(SparseMatrix, SparseMatrix)> {
    let gt = transpose(&concatenate(&SparseMatrix::identity(p.rows()), p)?);
    let h = concatenate(&transpose(p), &SparseMatrix::identity(p.cols()))?;
    Ok((h, gt))
}

/// Returns the Hamming weight of H G^T, which is zero when
/// the matrices are consistent.
pub fn check(
    h: &SparseMatrix,
    gt: &SparseMatrix,
    tpool: Option<&rayon::ThreadPool>,
) -> Result<usize> {
    Ok(multiply_par(h, gt, tpool)?.hamming_weight())
}
