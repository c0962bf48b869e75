//! Reusable decks and containers.
//!
//! - [`DeckBuilder`] — fluent construction of sections, keywords and records.
//! - [`thpres_deck`] — `RUNSPEC`/`EQLOPTS` plus an optional `SOLUTION`/`THPRES`.
//! - [`region_properties`] — a 3×3×3 grid with an `EQLNUM` property.

use resdeck_core::{Deck, DeckItem, DeckKeyword, DeckRecord, GridDims, KeywordDescriptor, Section};
use resdeck_props::GridProperties;

/// Builds a [`Deck`] one section at a time.
///
/// Keywords attach to the most recently opened section and records to
/// the most recently opened keyword, mirroring the order they appear
/// in deck text. Keywords before any section, or records before any
/// keyword, are dropped.
#[derive(Default)]
pub struct DeckBuilder {
    deck: Deck,
    section: Option<Section>,
    keyword: Option<DeckKeyword>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new section, closing the current one.
    pub fn section(mut self, name: &str) -> Self {
        self.close_section();
        self.section = Some(Section::new(name));
        self
    }

    /// Open a new keyword in the current section.
    pub fn keyword(mut self, name: &str) -> Self {
        self.close_keyword();
        self.keyword = Some(DeckKeyword::new(name));
        self
    }

    /// Append a record to the current keyword.
    pub fn record(mut self, items: impl IntoIterator<Item = DeckItem>) -> Self {
        if let Some(kw) = self.keyword.as_mut() {
            kw.push_record(DeckRecord::new(items));
        }
        self
    }

    pub fn build(mut self) -> Deck {
        self.close_section();
        self.deck
    }

    fn close_keyword(&mut self) {
        if let (Some(section), Some(kw)) = (self.section.as_mut(), self.keyword.take()) {
            section.push_keyword(kw);
        }
    }

    fn close_section(&mut self) {
        self.close_keyword();
        if let Some(section) = self.section.take() {
            self.deck.push_section(section);
        }
    }
}

/// One `THPRES` data record. `None` leaves the pressure unset.
pub fn thpres_record(region1: i32, region2: i32, pressure: Option<f64>) -> Vec<DeckItem> {
    let mut items = vec![DeckItem::Int(region1), DeckItem::Int(region2)];
    if let Some(p) = pressure {
        items.push(DeckItem::Double(p));
    }
    items
}

/// A deck with `EQLOPTS` carrying `options` in `RUNSPEC`.
///
/// With `solution = None` there is no `SOLUTION` section. With
/// `Some(records)` a `SOLUTION` section holds a `THPRES` keyword with
/// those records, which may be empty.
pub fn thpres_deck(options: &[&str], solution: Option<&[(i32, i32, Option<f64>)]>) -> Deck {
    let mut builder = DeckBuilder::new()
        .section("RUNSPEC")
        .keyword("EQLOPTS")
        .record(options.iter().map(|&opt| DeckItem::from(opt)));
    if let Some(records) = solution {
        builder = builder.section("SOLUTION").keyword("THPRES");
        for &(a, b, p) in records {
            builder = builder.record(thpres_record(a, b, p));
        }
    }
    builder.build()
}

/// A 3×3×3 container supporting `EQLNUM` with every cell at `default_eqlnum`.
///
/// With `add_keyword = false` the keyword is supported but never
/// instantiated.
pub fn region_properties(default_eqlnum: i32, add_keyword: bool) -> GridProperties<i32> {
    let dims = GridDims::new(3, 3, 3).expect("3x3x3 grid is valid");
    let mut props = GridProperties::new(&dims, [KeywordDescriptor::new("EQLNUM", default_eqlnum, "")])
        .expect("EQLNUM container over a valid grid");
    if add_keyword {
        props.add("EQLNUM").expect("EQLNUM is supported");
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_nests_in_text_order() {
        let deck = DeckBuilder::new()
            .section("RUNSPEC")
            .keyword("EQLOPTS")
            .record([DeckItem::from("THPRES")])
            .section("SOLUTION")
            .keyword("THPRES")
            .build();
        assert_eq!(deck.len(), 2);
        let solution = deck.section("SOLUTION").unwrap();
        assert!(solution.keyword("THPRES").unwrap().is_empty());
    }

    #[test]
    fn thpres_deck_without_solution() {
        let deck = thpres_deck(&["THPRES"], None);
        assert!(deck.has_section("RUNSPEC"));
        assert!(!deck.has_section("SOLUTION"));
    }

    #[test]
    fn region_properties_respects_add_flag() {
        assert!(region_properties(3, true).has("EQLNUM"));
        assert!(!region_properties(3, false).has("EQLNUM"));
    }
}
