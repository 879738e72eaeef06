// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Product of sparse matrices over GF(2).
//!
//! The left matrix is sorted by rows and the right matrix by columns,
//! so that each row of the left matrix and each column of the right
//! matrix is a contiguous slice sorted by the inner index. Each coefficient
//! of the product is then a merge of 2 sorted lists, counting common
//! indices modulo 2.
//!
//! The cost is proportional to (rows of left) * (ones of right) plus
//! the number of ones of left, and never depends on the dense size.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::{check_dims, Result};
use crate::sparse::{sort_col_major, Coordinate, SparseMatrix};

/// Computes left * right.
pub fn multiply(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
    multiply_par(left, right, None)
}

/// Computes left * right, processing rows of the left matrix
/// in parallel if a thread pool is given.
pub fn multiply_par(
    left: &SparseMatrix,
    right: &SparseMatrix,
    tpool: Option<&rayon::ThreadPool>,
) -> Result<SparseMatrix> {
    check_dims("multiply", left.cols(), right.rows())?;
    // Canonical form is sorted by rows.
    let lones = left.ones();
    let mut rones = right.ones().into_owned();
    sort_col_major(&mut rones);
    let lrows = groups(&lones, |c| c.row);
    let rcols = groups(&rones, |c| c.col);

    let ones: Vec<Coordinate> = if let Some(pool) = tpool {
        // Row groups write disjoint rows of the result.
        let chunks: Vec<Vec<Coordinate>> = pool.install(|| {
            lrows
                .par_iter()
                .map(|lrow| {
                    let mut out = vec![];
                    row_product(lrow, &rcols, &mut out);
                    out
                })
                .collect()
        });
        chunks.concat()
    } else {
        let mut out = vec![];
        for lrow in &lrows {
            row_product(lrow, &rcols, &mut out);
        }
        out
    };
    // Rows are visited in order, and columns in order within a row.
    Ok(SparseMatrix::from_canonical(left.rows(), right.cols(), ones))
}

/// Splits a sorted slice into maximal runs sharing the same key.
fn groups<F>(ones: &[Coordinate], key: F) -> Vec<&[Coordinate]>
where
    F: Fn(&Coordinate) -> usize,
{
    let mut res = vec![];
    let mut start = 0;
    while start < ones.len() {
        let k = key(&ones[start]);
        let len = ones[start..].partition_point(|c| key(c) == k);
        res.push(&ones[start..start + len]);
        start += len;
    }
    res
}

fn row_product(lrow: &[Coordinate], rcols: &[&[Coordinate]], out: &mut Vec<Coordinate>) {
    let row = lrow[0].row;
    for rcol in rcols {
        if dot(lrow, rcol) {
            out.push(Coordinate::new(row, rcol[0].col));
        }
    }
}

// Dot product of a row (sorted by column) and a column (sorted by row).
fn dot(lrow: &[Coordinate], rcol: &[Coordinate]) -> bool {
    let (mut l, mut r) = (0, 0);
    let mut sum = false;
    while l < lrow.len() && r < rcol.len() {
        match lrow[l].col.cmp(&rcol[r].row) {
            Ordering::Less => l += 1,
            Ordering::Greater => r += 1,
            Ordering::Equal => {
                sum = !sum;
                l += 1;
                r += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_matrix;
    use crate::sparse::{concatenate, transpose};
    use crate::Error;
    use bitvec_simd::BitVec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Naive product using dense bit vectors.
    fn dense_multiply(left: &SparseMatrix, right: &SparseMatrix) -> SparseMatrix {
        let mut lrows = vec![BitVec::zeros(left.cols()); left.rows()];
        for c in left.ones().iter() {
            lrows[c.row].set(c.col, true);
        }
        let mut rcols = vec![BitVec::zeros(right.rows()); right.cols()];
        for c in right.ones().iter() {
            rcols[c.col].set(c.row, true);
        }
        let mut res = SparseMatrix::new(left.rows(), right.cols());
        for i in 0..left.rows() {
            for j in 0..right.cols() {
                let mut v = lrows[i].clone();
                v.and_inplace(&rcols[j]);
                if v.count_ones() % 2 == 1 {
                    res.add_unchecked(i, j).unwrap();
                }
            }
        }
        res.remove_duplicates();
        res
    }

    #[test]
    fn test_multiply_small() {
        // [1 1 0]   [1 0]   [0 1]
        // [0 1 1] x [1 1] = [0 0]
        //           [1 1]
        let a = SparseMatrix::from_coordinates(
            2,
            3,
            [(0, 0), (0, 1), (1, 1), (1, 2)].map(|(r, c)| Coordinate::new(r, c)),
        )
        .unwrap();
        let b = SparseMatrix::from_coordinates(
            3,
            2,
            [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1)].map(|(r, c)| Coordinate::new(r, c)),
        )
        .unwrap();
        let ab = multiply(&a, &b).unwrap();
        assert_eq!((ab.rows(), ab.cols()), (2, 2));
        assert_eq!(&ab.ones()[..], &[Coordinate::new(0, 1)]);
    }

    #[test]
    fn test_multiply_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        for (rows, cols) in [(1, 1), (10, 30), (50, 7), (200, 200)] {
            let m = random_matrix(rows, cols, rows + cols, &mut rng);
            assert_eq!(multiply(&m, &SparseMatrix::identity(cols)).unwrap(), m);
            assert_eq!(multiply(&SparseMatrix::identity(rows), &m).unwrap(), m);
        }
    }

    #[test]
    fn test_multiply_dense() {
        let mut rng = StdRng::seed_from_u64(2);
        for (n, k, m, ones) in [(5, 5, 5, 10), (20, 40, 30, 200), (64, 3, 64, 100)] {
            let a = random_matrix(n, k, ones, &mut rng);
            let b = random_matrix(k, m, ones, &mut rng);
            let ab = multiply(&a, &b).unwrap();
            assert!(ab.is_canonical());
            assert_eq!(ab, dense_multiply(&a, &b));
            // (AB)^T = B^T A^T
            assert_eq!(
                transpose(&ab),
                multiply(&transpose(&b), &transpose(&a)).unwrap()
            );
        }
    }

    #[test]
    fn test_multiply_non_canonical() {
        // Pending insertions are folded before the product.
        let mut a = SparseMatrix::identity(3);
        a.add_unchecked(0, 2).unwrap();
        a.add_unchecked(0, 2).unwrap();
        a.add_unchecked(1, 1).unwrap();
        let b = SparseMatrix::identity(3);
        let ab = multiply(&a, &b).unwrap();
        assert_eq!(
            &ab.ones()[..],
            &[Coordinate::new(0, 0), Coordinate::new(2, 2)]
        );
        // Operands are left untouched.
        assert!(!a.is_canonical());
    }

    #[test]
    fn test_multiply_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let zero = SparseMatrix::new(7, 40);
        let m = random_matrix(40, 13, 60, &mut rng);
        let p = multiply(&zero, &m).unwrap();
        assert_eq!((p.rows(), p.cols()), (7, 13));
        assert!(p.is_zero());
        assert!(multiply(&transpose(&m), &transpose(&zero)).unwrap().is_zero());
        assert!(multiply(&SparseMatrix::new(0, 0), &SparseMatrix::new(0, 5))
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = SparseMatrix::new(3, 4);
        let b = SparseMatrix::new(3, 4);
        assert!(matches!(
            multiply(&a, &b),
            Err(Error::DimensionMismatch {
                left: 4,
                right: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_multiply_parity_pair() {
        let mut rng = StdRng::seed_from_u64(4);
        let n = 100;
        let p = random_matrix(n, n, n, &mut rng);
        let gt = transpose(&concatenate(&SparseMatrix::identity(n), &p).unwrap());
        let h = concatenate(&transpose(&p), &SparseMatrix::identity(n)).unwrap();
        assert!(multiply(&h, &gt).unwrap().is_zero());
    }

    #[test]
    fn test_multiply_par() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = random_matrix(300, 200, 900, &mut rng);
        let b = random_matrix(200, 250, 700, &mut rng);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();
        let seq = multiply(&a, &b).unwrap();
        let par = multiply_par(&a, &b, Some(&pool)).unwrap();
        assert!(par.is_canonical());
        assert_eq!(seq, par);
        assert_eq!(seq.ones(), par.ones());
    }
}
