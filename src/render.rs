// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Pictures of matrices as binary PGM greymaps: one pixel per
//! coefficient, white for ones on a black background.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use bitvec_simd::BitVec;

use crate::colmatrix::ColumnVectorMatrix;
use crate::error::Result;
use crate::sparse::SparseMatrix;

/// Matrices which can enumerate their one entries.
pub trait OneEntries {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Calls f(row, col) for each one entry, in no particular order.
    fn for_each_one<F: FnMut(usize, usize)>(&self, f: F);
}

impl OneEntries for SparseMatrix {
    fn rows(&self) -> usize {
        SparseMatrix::rows(self)
    }

    fn cols(&self) -> usize {
        SparseMatrix::cols(self)
    }

    fn for_each_one<F: FnMut(usize, usize)>(&self, mut f: F) {
        for c in self.ones().iter() {
            f(c.row, c.col)
        }
    }
}

impl OneEntries for ColumnVectorMatrix {
    fn rows(&self) -> usize {
        ColumnVectorMatrix::rows(self)
    }

    fn cols(&self) -> usize {
        ColumnVectorMatrix::cols(self)
    }

    fn for_each_one<F: FnMut(usize, usize)>(&self, mut f: F) {
        for j in 0..ColumnVectorMatrix::cols(self) {
            if let Ok(col) = self.column(j) {
                for i in col.iter() {
                    f(i, j)
                }
            }
        }
    }
}

const WHITE: u8 = 255;
const BLACK: u8 = 0;

pub fn to_pgm<M: OneEntries, W: Write>(m: &M, mut w: W) -> Result<()> {
    let (rows, cols) = (m.rows(), m.cols());
    let mut bits = vec![BitVec::zeros(cols); rows];
    m.for_each_one(|i, j| bits[i].set(j, true));
    write!(w, "P5\n{cols} {rows}\n255\n")?;
    let mut line = vec![BLACK; cols];
    for row in &bits {
        for (x, px) in line.iter_mut().enumerate() {
            *px = if row[x] { WHITE } else { BLACK };
        }
        w.write_all(&line)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_pgm<M: OneEntries, P: AsRef<Path>>(m: &M, path: P) -> Result<()> {
    let f = fs::File::create(path)?;
    to_pgm(m, BufWriter::new(f))
}
