// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

/// Errors reported by matrix operations.
///
/// Dimension and index errors are contract violations by the caller:
/// retrying the same operation will fail again.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{op}: dimension mismatch ({left} != {right})")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("index {index} out of range (bound {bound})")]
    OutOfRange { index: usize, bound: usize },

    #[error("{op}: column {index} cannot be combined with itself")]
    DegenerateOperation { op: &'static str, index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(Error::OutOfRange { index, bound });
    }
    Ok(())
}

pub(crate) fn check_dims(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::DimensionMismatch { op, left, right });
    }
    Ok(())
}
