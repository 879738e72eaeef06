// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Matrices stored as a list of sparse columns.
//!
//! This representation makes elementary column operations cheap:
//! a swap exchanges 2 vectors, an addition merges 2 sorted lists.

use crate::error::{check_index, Error, Result};
use crate::sparse::{sort_col_major, Coordinate, SparseMatrix};
use crate::sparsevec::SparseVector;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnVectorMatrix {
    rows: usize,
    // columns[j] is the set of rows having a one in column j.
    columns: Vec<SparseVector>,
}

impl ColumnVectorMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        ColumnVectorMatrix {
            rows,
            columns: vec![SparseVector::zero(rows); cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        ColumnVectorMatrix {
            rows: n,
            columns: (0..n)
                .map(|i| SparseVector::from_sorted(n, vec![i]))
                .collect(),
        }
    }

    pub fn from_matrix(m: &SparseMatrix) -> Self {
        let mut ones = m.ones().into_owned();
        sort_col_major(&mut ones);
        let mut columns = Vec::with_capacity(m.cols());
        let mut idx = 0;
        for j in 0..m.cols() {
            let mut rows = vec![];
            while idx < ones.len() && ones[idx].col == j {
                rows.push(ones[idx].row);
                idx += 1;
            }
            columns.push(SparseVector::from_sorted(m.rows(), rows));
        }
        ColumnVectorMatrix {
            rows: m.rows(),
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, j: usize) -> Result<&SparseVector> {
        check_index(j, self.cols())?;
        Ok(&self.columns[j])
    }

    pub fn hamming_weight(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum()
    }

    /// Exchanges columns i and j.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.cols())?;
        check_index(j, self.cols())?;
        self.columns.swap(i, j);
        Ok(())
    }

    /// Adds column j to column i.
    pub fn add(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.cols())?;
        check_index(j, self.cols())?;
        if i == j {
            return Err(Error::DegenerateOperation {
                op: "add",
                index: i,
            });
        }
        let sum = self.columns[i].add(&self.columns[j]);
        self.columns[i] = sum;
        Ok(())
    }

    /// Converts to coordinate form (canonical, sorted by rows).
    pub fn convert_matrix(&self) -> SparseMatrix {
        let mut ones = Vec::with_capacity(self.hamming_weight());
        for (j, col) in self.columns.iter().enumerate() {
            ones.extend(col.iter().map(|i| Coordinate::new(i, j)));
        }
        ones.sort_unstable();
        SparseMatrix::from_canonical(self.rows, self.cols(), ones)
    }

    pub fn is_identity(&self) -> bool {
        self.rows == self.cols()
            && self
                .columns
                .iter()
                .enumerate()
                .all(|(j, col)| col.indices() == &[j][..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiply::multiply;
    use crate::random::random_matrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_conversion() {
        let mut rng = StdRng::seed_from_u64(10);
        for (rows, cols) in [(0, 0), (1, 5), (30, 20), (20, 30)] {
            let m = random_matrix(rows, cols, 2 * rows, &mut rng);
            let cm = ColumnVectorMatrix::from_matrix(&m);
            assert_eq!((cm.rows(), cm.cols()), (rows, cols));
            assert_eq!(cm.hamming_weight(), m.hamming_weight());
            assert_eq!(cm.convert_matrix(), m);
        }
        let id = ColumnVectorMatrix::identity(6);
        assert!(id.is_identity());
        assert!(id.convert_matrix().is_identity());
        assert!(!ColumnVectorMatrix::new(3, 3).is_identity());
        assert!(ColumnVectorMatrix::identity(0).is_identity());
    }

    #[test]
    fn test_swap() {
        let mut m = ColumnVectorMatrix::identity(4);
        m.swap(0, 3).unwrap();
        assert!(!m.is_identity());
        assert_eq!(m.column(0).unwrap().indices(), &[3]);
        assert_eq!(m.column(3).unwrap().indices(), &[0]);
        m.swap(3, 0).unwrap();
        assert!(m.is_identity());
        m.swap(2, 2).unwrap();
        assert!(m.is_identity());
        assert!(matches!(
            m.swap(1, 4),
            Err(Error::OutOfRange { index: 4, bound: 4 })
        ));
    }

    #[test]
    fn test_add() {
        let mut m = ColumnVectorMatrix::identity(4);
        m.add(1, 2).unwrap();
        assert_eq!(m.column(1).unwrap().indices(), &[1, 2]);
        // Adding twice is the identity.
        m.add(1, 2).unwrap();
        assert!(m.is_identity());
        assert!(matches!(m.add(5, 0), Err(Error::OutOfRange { .. })));
        assert!(matches!(
            m.add(2, 2),
            Err(Error::DegenerateOperation { index: 2, .. })
        ));
        assert!(m.column(4).is_err());
    }

    #[test]
    fn test_column_operation_is_product() {
        // Adding column j to column i is multiplying on the right
        // by I + E(j, i).
        let mut rng = StdRng::seed_from_u64(11);
        let m = random_matrix(12, 8, 30, &mut rng);
        let mut cm = ColumnVectorMatrix::from_matrix(&m);
        cm.add(5, 2).unwrap();
        let mut e = SparseMatrix::identity(8);
        e.add_unchecked(2, 5).unwrap();
        assert_eq!(cm.convert_matrix(), multiply(&m, &e).unwrap());
    }
}
