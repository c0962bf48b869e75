//! Error types for grid geometry.

use std::error::Error;
use std::fmt;

/// Errors arising from grid dimension validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// At least one dimension is zero.
    EmptyGrid {
        /// Cells along the x axis.
        nx: usize,
        /// Cells along the y axis.
        ny: usize,
        /// Cells along the z axis.
        nz: usize,
    },
    /// `nx * ny * nz` does not fit in `usize`.
    CellCountOverflow {
        /// Cells along the x axis.
        nx: usize,
        /// Cells along the y axis.
        ny: usize,
        /// Cells along the z axis.
        nz: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { nx, ny, nz } => {
                write!(f, "grid {nx}x{ny}x{nz} has no cells")
            }
            Self::CellCountOverflow { nx, ny, nz } => {
                write!(f, "cell count of grid {nx}x{ny}x{nz} overflows usize")
            }
        }
    }
}

impl Error for GridError {}
