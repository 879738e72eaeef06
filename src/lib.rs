// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Sparse matrices over GF(2).
//!
//! Matrices are stored as lists of coordinates of their one entries,
//! so that memory and running time depend on the number of ones
//! rather than on the dimensions. A coordinate appearing twice
//! cancels out (1 + 1 = 0).

pub mod colmatrix;
pub mod error;
pub mod invertible;
pub mod multiply;
pub mod parity;
pub mod random;
pub mod render;
pub mod sparse;
pub mod sparsevec;

use std::str::FromStr;

pub use colmatrix::ColumnVectorMatrix;
pub use error::{Error, Result};
pub use invertible::{ElementaryOp, InversePair};
pub use multiply::{multiply, multiply_par};
pub use sparse::{concatenate, min_max, transpose, Coordinate, SparseMatrix, WeightStats};
pub use sparsevec::SparseVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent,
    Info,
    Verbose,
    Debug,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "silent" => Ok(Self::Silent),
            "info" => Ok(Self::Info),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid verbosity level {s:?}")),
        }
    }
}

/// Settings shared by the demonstration programs.
#[derive(Clone, Debug)]
pub struct Preferences {
    pub verbosity: Verbosity,
    // Number of threads used for products (None means sequential).
    pub threads: Option<usize>,
    // Seed of the random generator, None to pick one.
    pub seed: Option<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            verbosity: Verbosity::Info,
            threads: None,
            seed: None,
        }
    }
}

impl Preferences {
    pub fn verbose(&self, v: Verbosity) -> bool {
        self.verbosity >= v
    }
}
