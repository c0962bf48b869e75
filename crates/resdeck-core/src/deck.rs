//! In-memory deck model: sections of keywords of records of items.
//!
//! A [`Deck`] is what the external parser hands over. Nothing in this
//! module knows the deck grammar; it only stores and looks up what was
//! parsed. Lookups by name return the first match, which is how a deck
//! section with a repeated keyword is read by consumers that only care
//! about one occurrence.

use std::fmt;

use smallvec::SmallVec;

/// One typed value in a record, or a slot the deck left unset.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckItem {
    /// An integer value.
    Int(i32),
    /// A floating-point value.
    Double(f64),
    /// A string token.
    Str(String),
    /// Explicitly defaulted (e.g. `1*`) and carrying no value.
    Defaulted,
}

impl DeckItem {
    /// Whether the item carries data.
    pub fn has_value(&self) -> bool {
        !matches!(self, Self::Defaulted)
    }

    /// The integer value, if this is an integer item.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The floating-point value. Integer items widen to `f64`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Int(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    /// The string value, if this is a string item.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for DeckItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Defaulted => write!(f, "1*"),
        }
    }
}

impl From<i32> for DeckItem {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for DeckItem {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for DeckItem {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for DeckItem {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// An ordered list of items terminated by `/` in the deck.
///
/// A record may be shorter than the keyword's item list; trailing
/// items that were never written read back as `None` from
/// [`item`](DeckRecord::item), exactly like defaulted ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckRecord {
    items: SmallVec<[DeckItem; 4]>,
}

impl DeckRecord {
    /// Build a record from items in order.
    pub fn new(items: impl IntoIterator<Item = DeckItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// The item at `index` if it was written and carries a value.
    pub fn item(&self, index: usize) -> Option<&DeckItem> {
        self.items.get(index).filter(|item| item.has_value())
    }

    /// Number of items physically present, defaulted ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the record is bare (`/` alone).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items physically present.
    pub fn iter(&self) -> impl Iterator<Item = &DeckItem> {
        self.items.iter()
    }
}

impl FromIterator<DeckItem> for DeckRecord {
    fn from_iter<I: IntoIterator<Item = DeckItem>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Build a [`DeckRecord`] from heterogeneous values.
///
/// Each argument is converted with `DeckItem::from`.
///
/// ```
/// use resdeck_core::{deck_record, DeckItem};
///
/// let rec = deck_record![1, 2, 12.0];
/// assert_eq!(rec.item(2), Some(&DeckItem::Double(12.0)));
/// ```
#[macro_export]
macro_rules! deck_record {
    ($($item:expr),* $(,)?) => {
        $crate::DeckRecord::new([$($crate::DeckItem::from($item)),*])
    };
}

/// A named keyword and the records that follow it.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckKeyword {
    name: String,
    records: Vec<DeckRecord>,
}

impl DeckKeyword {
    /// Create a keyword with no records.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Append a record, builder style.
    pub fn with_record(mut self, record: DeckRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Append a record in place.
    pub fn push_record(&mut self, record: DeckRecord) {
        self.records.push(record);
    }

    /// Keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record at `index`.
    pub fn record(&self, index: usize) -> Option<&DeckRecord> {
        self.records.get(index)
    }

    /// All records in file order.
    pub fn records(&self) -> &[DeckRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the keyword carries no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A named deck section such as `RUNSPEC` or `SOLUTION`.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    keywords: Vec<DeckKeyword>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
        }
    }

    /// Append a keyword, builder style.
    pub fn with_keyword(mut self, keyword: DeckKeyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Append a keyword in place.
    pub fn push_keyword(&mut self, keyword: DeckKeyword) {
        self.keywords.push(keyword);
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether at least one keyword named `name` is present.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keyword(name).is_some()
    }

    /// First keyword named `name`.
    pub fn keyword(&self, name: &str) -> Option<&DeckKeyword> {
        self.keywords.iter().find(|kw| kw.name == name)
    }

    /// All keywords in file order.
    pub fn keywords(&self) -> &[DeckKeyword] {
        &self.keywords
    }
}

/// A parsed deck: sections in file order.
///
/// # Examples
///
/// ```
/// use resdeck_core::{deck_record, Deck, DeckKeyword, Section};
///
/// let deck = Deck::new().with_section(
///     Section::new("RUNSPEC")
///         .with_keyword(DeckKeyword::new("EQLOPTS").with_record(deck_record!["THPRES"])),
/// );
/// assert!(deck.has_section("RUNSPEC"));
/// assert!(!deck.has_section("SOLUTION"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    sections: Vec<Section>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, builder style.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a section in place.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Whether a section named `name` is present.
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// First section named `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// All sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the deck has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
