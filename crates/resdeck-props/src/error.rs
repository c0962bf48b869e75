//! Property-store error types.

use std::error::Error;
use std::fmt;

use resdeck_core::GridError;

/// Errors from per-cell properties and the property container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// The grid dimensions cannot back a property.
    Grid(GridError),
    /// The keyword is not in the container's supported set.
    UnsupportedKeyword {
        /// The requested keyword.
        keyword: String,
    },
    /// The keyword is supported but no data has been given for it.
    NotInitialized {
        /// The requested keyword.
        keyword: String,
    },
    /// A cell or property index is past the end.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of valid slots.
        len: usize,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnsupportedKeyword { keyword } => {
                write!(f, "keyword '{keyword}' is not supported in this container")
            }
            Self::NotInitialized { keyword } => {
                write!(f, "keyword '{keyword}' is supported but not initialized")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for PropertyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PropertyError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
