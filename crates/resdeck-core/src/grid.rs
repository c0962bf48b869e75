//! Grid geometry: the cell-count dimensions a property is sized from.

use crate::error::GridError;

/// Source of logical grid dimensions.
///
/// Implemented by whatever owns the real corner-point geometry. Property
/// storage only needs the three logical extents; everything else about
/// the grid stays behind this trait.
pub trait GridGeometry {
    /// Cells along the x axis.
    fn nx(&self) -> usize;

    /// Cells along the y axis.
    fn ny(&self) -> usize;

    /// Cells along the z axis.
    fn nz(&self) -> usize;

    /// Total number of cells, or `None` if the product overflows.
    fn cell_count(&self) -> Option<usize> {
        self.nx().checked_mul(self.ny())?.checked_mul(self.nz())
    }
}

/// Validated `nx × ny × nz` logical grid dimensions.
///
/// Every dimension is non-zero and the cell count fits in `usize`;
/// both are checked once at construction.
///
/// # Examples
///
/// ```
/// use resdeck_core::{GridDims, GridGeometry};
///
/// let dims = GridDims::new(3, 3, 3).unwrap();
/// assert_eq!(dims.cell_count(), Some(27));
/// assert!(GridDims::new(3, 0, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridDims {
    /// Create validated dimensions.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if any dimension is zero, or
    /// `Err(GridError::CellCountOverflow)` if the product overflows.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        check_dims(nx, ny, nz)?;
        Ok(Self { nx, ny, nz })
    }

    /// Capture the dimensions of any geometry provider.
    pub fn of(grid: &impl GridGeometry) -> Result<Self, GridError> {
        Self::new(grid.nx(), grid.ny(), grid.nz())
    }

    /// The `(nx, ny, nz)` triple.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells. Never overflows after construction.
    pub fn total(&self) -> usize {
        self.nx * self.ny * self.nz
    }
}

impl GridGeometry for GridDims {
    fn nx(&self) -> usize {
        self.nx
    }

    fn ny(&self) -> usize {
        self.ny
    }

    fn nz(&self) -> usize {
        self.nz
    }
}

/// Check `nx * ny * nz` is positive and representable; return the product.
pub(crate) fn check_dims(nx: usize, ny: usize, nz: usize) -> Result<usize, GridError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(GridError::EmptyGrid { nx, ny, nz });
    }
    nx.checked_mul(ny)
        .and_then(|v| v.checked_mul(nz))
        .ok_or(GridError::CellCountOverflow { nx, ny, nz })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            GridDims::new(0, 2, 2),
            Err(GridError::EmptyGrid { nx: 0, ny: 2, nz: 2 })
        );
        assert!(GridDims::new(2, 2, 0).is_err());
    }

    #[test]
    fn overflow_rejected() {
        let result = GridDims::new(usize::MAX, 2, 1);
        assert!(matches!(result, Err(GridError::CellCountOverflow { .. })));
    }

    #[test]
    fn total_matches_trait_cell_count() {
        let dims = GridDims::new(4, 5, 6).unwrap();
        assert_eq!(dims.total(), 120);
        assert_eq!(dims.cell_count(), Some(120));
        assert_eq!(dims.as_tuple(), (4, 5, 6));
    }

    #[test]
    fn of_copies_foreign_geometry() {
        struct Box3;
        impl GridGeometry for Box3 {
            fn nx(&self) -> usize {
                2
            }
            fn ny(&self) -> usize {
                3
            }
            fn nz(&self) -> usize {
                4
            }
        }
        let dims = GridDims::of(&Box3).unwrap();
        assert_eq!(dims.as_tuple(), (2, 3, 4));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_extent() -> impl Strategy<Value = usize> {
            prop_oneof![
                Just(0usize),
                1usize..64,
                Just(usize::MAX / 2),
                Just(usize::MAX),
            ]
        }

        proptest! {
            #[test]
            fn new_agrees_with_checked_mul(
                nx in arb_extent(),
                ny in arb_extent(),
                nz in arb_extent(),
            ) {
                let product = nx.checked_mul(ny).and_then(|v| v.checked_mul(nz));
                match GridDims::new(nx, ny, nz) {
                    Ok(dims) => {
                        prop_assert!(nx > 0 && ny > 0 && nz > 0);
                        prop_assert_eq!(Some(dims.total()), product);
                        prop_assert_eq!(dims.cell_count(), product);
                    }
                    Err(GridError::EmptyGrid { .. }) => {
                        prop_assert!(nx == 0 || ny == 0 || nz == 0);
                    }
                    Err(GridError::CellCountOverflow { .. }) => {
                        prop_assert!(nx > 0 && ny > 0 && nz > 0);
                        prop_assert!(product.is_none());
                    }
                }
            }
        }
    }
}
