// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Random sparse matrices for tests and demonstrations.

use rand::Rng;

use crate::sparse::{Coordinate, SparseMatrix};

/// Returns a matrix obtained by adding `ones` uniformly random
/// entries. Since colliding entries cancel, the weight of the result
/// is at most `ones` and has the same parity.
pub fn random_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    ones: usize,
    rng: &mut R,
) -> SparseMatrix {
    if rows == 0 || cols == 0 {
        return SparseMatrix::new(rows, cols);
    }
    let coords = (0..ones)
        .map(|_| Coordinate::new(rng.gen_range(0..rows), rng.gen_range(0..cols)))
        .collect();
    SparseMatrix::from_raw(rows, cols, coords)
}

/// Returns a matrix where each row has exactly `weight` ones
/// at distinct random positions.
pub fn random_row_regular<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    weight: usize,
    rng: &mut R,
) -> SparseMatrix {
    let weight = weight.min(cols);
    let mut coords = Vec::with_capacity(rows * weight);
    for row in 0..rows {
        for col in rand::seq::index::sample(rng, cols, weight) {
            coords.push(Coordinate::new(row, col));
        }
    }
    SparseMatrix::from_raw(rows, cols, coords)
}
