//! Keyword descriptors and the per-cell scalar trait.

use std::fmt;

/// Scalar types a per-cell property may hold.
///
/// Region assignments are integers, petrophysical properties are
/// floating point; both are stored the same way.
pub trait PropertyValue:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl PropertyValue for i32 {}
impl PropertyValue for f64 {}

/// Static metadata for one supported per-cell keyword.
///
/// A descriptor names the keyword, gives the value every cell starts
/// with, and records the unit its data is expressed in (empty for
/// dimensionless quantities such as region indices).
///
/// # Examples
///
/// ```
/// use resdeck_core::KeywordDescriptor;
///
/// let eqlnum = KeywordDescriptor::new("EQLNUM", 1, "");
/// assert_eq!(eqlnum.name(), "EQLNUM");
/// assert_eq!(eqlnum.default_value(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordDescriptor<T> {
    name: String,
    default_value: T,
    unit: String,
}

impl<T: PropertyValue> KeywordDescriptor<T> {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, default_value: T, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value,
            unit: unit.into(),
        }
    }

    /// Keyword name as it appears in the deck.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value every cell is initialised to.
    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// Unit annotation, empty if dimensionless.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// A keyword known at compile time.
///
/// Implemented by zero-sized marker types so containers can be queried
/// with `has_keyword::<Eqlnum>()` instead of a string literal.
pub trait GridKeyword {
    /// Keyword name as it appears in the deck.
    const NAME: &'static str;
}
