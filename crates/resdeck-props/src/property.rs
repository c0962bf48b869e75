//! A single per-cell property: one scalar per grid cell.

use resdeck_core::{GridDims, KeywordDescriptor, PropertyValue};

use crate::error::PropertyError;

/// Per-cell values for one keyword over an `nx × ny × nz` grid.
///
/// Cells are stored in natural order (x fastest, then y, then z), so the
/// linear index of cell `(i, j, k)` is `i + nx * (j + ny * k)`. Every
/// cell starts at the descriptor's default value.
#[derive(Clone, Debug, PartialEq)]
pub struct GridProperty<T> {
    dims: GridDims,
    descriptor: KeywordDescriptor<T>,
    data: Vec<T>,
}

impl<T: PropertyValue> GridProperty<T> {
    /// Allocate `nx * ny * nz` cells filled with `descriptor.default_value()`.
    ///
    /// Returns `Err(PropertyError::Grid)` if a dimension is zero or the
    /// cell count overflows.
    pub fn new(
        nx: usize,
        ny: usize,
        nz: usize,
        descriptor: KeywordDescriptor<T>,
    ) -> Result<Self, PropertyError> {
        let dims = GridDims::new(nx, ny, nz)?;
        Ok(Self::with_dims(dims, descriptor))
    }

    /// Allocate over already-validated dimensions.
    pub fn with_dims(dims: GridDims, descriptor: KeywordDescriptor<T>) -> Self {
        let data = vec![descriptor.default_value(); dims.total()];
        Self {
            dims,
            descriptor,
            data,
        }
    }

    /// The keyword this property holds data for.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Descriptor the property was created from.
    pub fn descriptor(&self) -> &KeywordDescriptor<T> {
        &self.descriptor
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the property has no cells (never true for a validated grid).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at a linear cell index.
    pub fn get(&self, index: usize) -> Result<T, PropertyError> {
        self.data
            .get(index)
            .copied()
            .ok_or(PropertyError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrite the value at a linear cell index.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), PropertyError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(PropertyError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Linear index of cell `(i, j, k)`, or `None` outside the grid.
    pub fn global_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let (nx, ny, nz) = self.dims.as_tuple();
        if i >= nx || j >= ny || k >= nz {
            return None;
        }
        Some(i + nx * (j + ny * k))
    }

    /// Value at cell `(i, j, k)`.
    ///
    /// Out-of-grid cells report the unchecked flat index
    /// `i + nx * (j + ny * k)` in the error.
    pub fn get_ijk(&self, i: usize, j: usize, k: usize) -> Result<T, PropertyError> {
        let index = self.ijk_index(i, j, k)?;
        self.get(index)
    }

    /// Overwrite the value at cell `(i, j, k)`.
    pub fn set_ijk(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<(), PropertyError> {
        let index = self.ijk_index(i, j, k)?;
        self.set(index, value)
    }

    /// Largest value over all cells.
    ///
    /// An untouched property returns its default value. NaN cells are
    /// skipped unless every cell is NaN.
    pub fn max_value(&self) -> T {
        self.data
            .iter()
            .copied()
            .reduce(|acc, v| {
                if v > acc || acc.partial_cmp(&acc).is_none() {
                    v
                } else {
                    acc
                }
            })
            .unwrap_or(self.descriptor.default_value())
    }

    /// All cell values in natural order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over cell values in natural order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    fn ijk_index(&self, i: usize, j: usize, k: usize) -> Result<usize, PropertyError> {
        let (nx, ny, _) = self.dims.as_tuple();
        self.global_index(i, j, k)
            .ok_or(PropertyError::IndexOutOfBounds {
                index: i.saturating_add(nx.saturating_mul(j.saturating_add(ny.saturating_mul(k)))),
                len: self.data.len(),
            })
    }
}
