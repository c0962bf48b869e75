//! Keyword-indexed container of lazily instantiated grid properties.
//!
//! The container is constructed with the full set of keywords it may
//! ever hold. Properties are only allocated when first asked for with
//! [`GridProperties::get_or_create`] or [`GridProperties::add`]; until
//! then a supported keyword costs nothing beyond its descriptor.

use indexmap::IndexMap;
use resdeck_core::{GridDims, GridGeometry, GridKeyword, KeywordDescriptor, PropertyValue};

use crate::error::PropertyError;
use crate::property::GridProperty;

/// Maps keyword names to per-cell properties over one grid.
///
/// Both tables are `IndexMap`s so iteration follows registration order:
/// the supported table in the order descriptors were given, the
/// instantiated table in the order properties were first created.
/// Every instantiated key is also a supported key.
///
/// # Examples
///
/// ```
/// use resdeck_core::{GridDims, KeywordDescriptor};
/// use resdeck_props::{GridProperties, PropertyError};
///
/// let dims = GridDims::new(3, 3, 3).unwrap();
/// let mut props = GridProperties::new(&dims, [KeywordDescriptor::new("EQLNUM", 1, "")]).unwrap();
///
/// assert!(props.supports("EQLNUM"));
/// assert!(!props.has("EQLNUM"));
/// assert!(matches!(
///     props.get_initialized("EQLNUM"),
///     Err(PropertyError::NotInitialized { .. })
/// ));
///
/// props.get_or_create("EQLNUM").unwrap().set(0, 2).unwrap();
/// assert_eq!(props.get_initialized("EQLNUM").unwrap().max_value(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GridProperties<T> {
    dims: GridDims,
    supported: IndexMap<String, KeywordDescriptor<T>>,
    instantiated: IndexMap<String, GridProperty<T>>,
}

impl<T: PropertyValue> GridProperties<T> {
    /// Create a container for `grid` accepting the given keywords.
    ///
    /// No properties are allocated. A later descriptor with the same
    /// name as an earlier one replaces it.
    pub fn new(
        grid: &impl GridGeometry,
        supported: impl IntoIterator<Item = KeywordDescriptor<T>>,
    ) -> Result<Self, PropertyError> {
        let dims = GridDims::of(grid)?;
        let supported: IndexMap<_, _> = supported
            .into_iter()
            .map(|desc| (desc.name().to_string(), desc))
            .collect();
        Ok(Self {
            dims,
            supported,
            instantiated: IndexMap::new(),
        })
    }

    /// Whether `keyword` may be held by this container.
    pub fn supports(&self, keyword: &str) -> bool {
        self.supported.contains_key(keyword)
    }

    /// Whether `keyword` has been instantiated.
    pub fn has(&self, keyword: &str) -> bool {
        self.instantiated.contains_key(keyword)
    }

    /// Number of instantiated properties.
    pub fn count(&self) -> usize {
        self.instantiated.len()
    }

    /// Grid dimensions every property is sized from.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Instantiate `keyword` if needed.
    ///
    /// Returns `Ok(true)` if a new property was allocated and `Ok(false)`
    /// if it already existed.
    pub fn add(&mut self, keyword: &str) -> Result<bool, PropertyError> {
        if self.has(keyword) {
            return Ok(false);
        }
        let descriptor = self
            .supported
            .get(keyword)
            .ok_or_else(|| PropertyError::UnsupportedKeyword {
                keyword: keyword.to_string(),
            })?
            .clone();
        tracing::debug!(keyword, cells = self.dims.total(), "instantiating grid property");
        let property = GridProperty::with_dims(self.dims, descriptor);
        self.instantiated.insert(keyword.to_string(), property);
        Ok(true)
    }

    /// The property for `keyword`, allocating it on first access.
    ///
    /// Returns `Err(PropertyError::UnsupportedKeyword)` if the keyword is
    /// not in the supported set.
    pub fn get_or_create(&mut self, keyword: &str) -> Result<&mut GridProperty<T>, PropertyError> {
        self.add(keyword)?;
        Ok(&mut self.instantiated[keyword])
    }

    /// The property for `keyword`, only if already instantiated.
    ///
    /// Distinguishes a keyword that could exist but was given no data
    /// (`NotInitialized`) from one this container never holds
    /// (`UnsupportedKeyword`).
    pub fn get_initialized(&self, keyword: &str) -> Result<&GridProperty<T>, PropertyError> {
        self.instantiated
            .get(keyword)
            .ok_or_else(|| self.lookup_error(keyword))
    }

    /// Mutable variant of [`get_initialized`](Self::get_initialized).
    pub fn get_initialized_mut(
        &mut self,
        keyword: &str,
    ) -> Result<&mut GridProperty<T>, PropertyError> {
        match self.instantiated.get_index_of(keyword) {
            Some(index) => Ok(&mut self.instantiated[index]),
            None => Err(self.lookup_error(keyword)),
        }
    }

    /// The `index`-th instantiated property, in creation order.
    pub fn get_by_index(&self, index: usize) -> Result<&GridProperty<T>, PropertyError> {
        self.instantiated
            .get_index(index)
            .map(|(_, prop)| prop)
            .ok_or(PropertyError::IndexOutOfBounds {
                index,
                len: self.instantiated.len(),
            })
    }

    /// Iterate over instantiated properties in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GridProperty<T>)> {
        self.instantiated
            .iter()
            .map(|(name, prop)| (name.as_str(), prop))
    }

    /// Iterate over supported descriptors in registration order.
    pub fn supported_keywords(&self) -> impl Iterator<Item = &KeywordDescriptor<T>> {
        self.supported.values()
    }

    /// [`has`](Self::has) for a compile-time keyword.
    pub fn has_keyword<K: GridKeyword>(&self) -> bool {
        self.has(K::NAME)
    }

    /// [`get_or_create`](Self::get_or_create) for a compile-time keyword.
    pub fn get_or_create_keyword<K: GridKeyword>(
        &mut self,
    ) -> Result<&mut GridProperty<T>, PropertyError> {
        self.get_or_create(K::NAME)
    }

    /// [`get_initialized`](Self::get_initialized) for a compile-time keyword.
    pub fn get_initialized_keyword<K: GridKeyword>(
        &self,
    ) -> Result<&GridProperty<T>, PropertyError> {
        self.get_initialized(K::NAME)
    }

    fn lookup_error(&self, keyword: &str) -> PropertyError {
        if self.supports(keyword) {
            PropertyError::NotInitialized {
                keyword: keyword.to_string(),
            }
        } else {
            PropertyError::UnsupportedKeyword {
                keyword: keyword.to_string(),
            }
        }
    }
}
