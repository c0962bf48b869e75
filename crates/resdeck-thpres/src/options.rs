//! Equilibration options read from `EQLOPTS`.

use resdeck_core::Deck;

use crate::{IRREVERS_OPTION, OPTION_KEYWORD, RUNSPEC_SECTION, THPRES_OPTION};

/// Flags carried by the first `EQLOPTS` record in `RUNSPEC`.
///
/// Tokens other than the ones tracked here are ignored. A deck without
/// a `RUNSPEC` section, without `EQLOPTS`, or with a bare `EQLOPTS`
/// record has every flag off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquilibrationOptions {
    /// `THPRES` was given: threshold pressures are in use.
    pub threshold_pressure: bool,
    /// `IRREVERS` was given: threshold pressures are directional.
    pub irreversible: bool,
}

impl EquilibrationOptions {
    /// Read the options from `deck`.
    pub fn from_deck(deck: &Deck) -> Self {
        let mut options = Self::default();
        let Some(record) = deck
            .section(RUNSPEC_SECTION)
            .and_then(|section| section.keyword(OPTION_KEYWORD))
            .and_then(|keyword| keyword.record(0))
        else {
            return options;
        };

        for token in record.iter().filter_map(|item| item.as_str()) {
            match token {
                THPRES_OPTION => options.threshold_pressure = true,
                IRREVERS_OPTION => options.irreversible = true,
                _ => {}
            }
        }
        options
    }
}
