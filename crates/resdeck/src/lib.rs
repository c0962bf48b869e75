//! resdeck: grid properties and threshold pressure tables for reservoir decks.
//!
//! This is the facade crate that re-exports the public API of the
//! resdeck sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use resdeck::prelude::*;
//! use resdeck::types::deck_record;
//!
//! let deck = Deck::new()
//!     .with_section(Section::new("RUNSPEC").with_keyword(
//!         DeckKeyword::new("EQLOPTS").with_record(deck_record!["THPRES"]),
//!     ))
//!     .with_section(Section::new("SOLUTION").with_keyword(
//!         DeckKeyword::new("THPRES")
//!             .with_record(deck_record![1, 2, 12.0])
//!             .with_record(deck_record![1, 3, 5.0])
//!             .with_record(deck_record![2, 3, 7.0]),
//!     ));
//!
//! let dims = GridDims::new(3, 3, 3).unwrap();
//! let mut props = GridProperties::new(&dims, resdeck::props::keywords::region_keywords()).unwrap();
//! props.get_or_create("EQLNUM").unwrap().set(26, 3).unwrap();
//!
//! let thpres = ThresholdPressure::from_deck(&deck, &props).unwrap();
//! assert_eq!(thpres.region_count(), 3);
//! assert_eq!(thpres.pressure(1, 3), Some(500_000.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `resdeck-core` | Deck model, keyword descriptors, grid geometry |
//! | [`props`] | `resdeck-props` | Per-cell properties and the keyword container |
//! | [`thpres`] | `resdeck-thpres` | Threshold pressure table builder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Deck model, keyword descriptors and grid geometry (`resdeck-core`).
pub use resdeck_core as types;

/// Per-cell grid properties and the keyword-indexed container (`resdeck-props`).
pub use resdeck_props as props;

/// Threshold pressure tables (`resdeck-thpres`).
pub use resdeck_thpres as thpres;

/// Common imports.
///
/// ```rust
/// use resdeck::prelude::*;
/// ```
pub mod prelude {
    pub use resdeck_core::{
        Deck, DeckItem, DeckKeyword, DeckRecord, GridDims, GridGeometry, KeywordDescriptor,
        PropertyValue, Section,
    };

    pub use resdeck_props::{GridProperties, GridProperty, PropertyError};

    pub use resdeck_thpres::{
        Checkpoint, EquilibrationOptions, ThresholdPressure, ThresholdPressureError,
    };
}
