//! Deck and property fixtures for resdeck development.
//!
//! [`DeckBuilder`] assembles in-memory decks section by section the way
//! a parser would deliver them, and [`region_properties`] sets up the
//! `EQLNUM` container the threshold pressure tests resolve regions from.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{region_properties, thpres_deck, thpres_record, DeckBuilder};
