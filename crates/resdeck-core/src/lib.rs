//! Core types and traits for reservoir deck processing.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the rest of the workspace: keyword
//! descriptors, the per-cell scalar trait, grid geometry, and the
//! in-memory deck model that parsed input is delivered in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod grid;
pub mod keyword;

pub use deck::{Deck, DeckItem, DeckKeyword, DeckRecord, Section};
pub use error::GridError;
pub use grid::{GridDims, GridGeometry};
pub use keyword::{GridKeyword, KeywordDescriptor, PropertyValue};
