//! The threshold pressure table.

use resdeck_core::Deck;
use resdeck_props::GridProperties;

use crate::error::{Checkpoint, ThresholdPressureError};
use crate::pipeline::{self, Presence};

/// Symmetric inter-region threshold pressures, in pascal.
///
/// Stored flat in row-major order: the pressure between regions `i` and
/// `j` (1-based) sits at `(i - 1) * R + (j - 1)`. The diagonal is zero.
/// An inactive or deferred table has `R = 0` and no entries.
///
/// # Examples
///
/// ```
/// use resdeck_core::{deck_record, Deck, DeckKeyword, GridDims, KeywordDescriptor, Section};
/// use resdeck_props::GridProperties;
/// use resdeck_thpres::ThresholdPressure;
///
/// let deck = Deck::new()
///     .with_section(Section::new("RUNSPEC").with_keyword(
///         DeckKeyword::new("EQLOPTS").with_record(deck_record!["THPRES"]),
///     ))
///     .with_section(Section::new("SOLUTION").with_keyword(
///         DeckKeyword::new("THPRES").with_record(deck_record![1, 2, 12.0]),
///     ));
///
/// let dims = GridDims::new(2, 1, 1).unwrap();
/// let mut props = GridProperties::new(&dims, [KeywordDescriptor::new("EQLNUM", 1, "")]).unwrap();
/// props.get_or_create("EQLNUM").unwrap().set(1, 2).unwrap();
///
/// let thpres = ThresholdPressure::from_deck(&deck, &props).unwrap();
/// assert_eq!(thpres.table(), &[0.0, 1.2e6, 1.2e6, 0.0]);
/// assert_eq!(thpres.pressure(2, 1), Some(1.2e6));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdPressure {
    region_count: usize,
    table: Vec<f64>,
    irreversible: bool,
    concluded_at: Checkpoint,
}

impl ThresholdPressure {
    /// Build the table for `deck`, resolving regions through `props`.
    ///
    /// Runs the option check, the presence check and record validation
    /// in that order, stopping at the first that either settles the
    /// result or fails.
    pub fn from_deck(
        deck: &Deck,
        props: &GridProperties<i32>,
    ) -> Result<Self, ThresholdPressureError> {
        let options = pipeline::check_option(deck);
        if !options.threshold_pressure {
            tracing::debug!("threshold pressure option not set; table is empty");
            return Ok(Self::empty(options.irreversible, Checkpoint::Option));
        }
        if options.irreversible {
            tracing::debug!("IRREVERS given; threshold pressures are directional");
        }

        let keyword = match pipeline::check_presence(deck)? {
            Presence::Deferred => {
                tracing::debug!("no SOLUTION section; threshold pressure table deferred");
                return Ok(Self::empty(options.irreversible, Checkpoint::Presence));
            }
            Presence::Data(keyword) => keyword,
        };

        let filled = pipeline::fill_table(keyword, props)?;
        tracing::debug!(
            regions = filled.region_count,
            records = keyword.len(),
            "threshold pressure table built"
        );
        Ok(Self {
            region_count: filled.region_count,
            table: filled.table,
            irreversible: options.irreversible,
            concluded_at: Checkpoint::Records,
        })
    }

    fn empty(irreversible: bool, concluded_at: Checkpoint) -> Self {
        Self {
            region_count: 0,
            table: Vec::new(),
            irreversible,
            concluded_at,
        }
    }

    /// The flat `R × R` table.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// Consume into the flat table.
    pub fn into_table(self) -> Vec<f64> {
        self.table
    }

    /// Number of equilibration regions `R`.
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Number of entries, `R * R`.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether threshold pressures apply to this deck.
    pub fn is_active(&self) -> bool {
        self.region_count > 0
    }

    /// Whether `IRREVERS` was given alongside the option.
    pub fn is_irreversible(&self) -> bool {
        self.irreversible
    }

    /// The checkpoint that settled the result.
    ///
    /// [`Checkpoint::Option`] for an inactive option,
    /// [`Checkpoint::Presence`] for a deferred table, and
    /// [`Checkpoint::Records`] for a built one.
    pub fn concluded_at(&self) -> Checkpoint {
        self.concluded_at
    }

    /// Pressure between 1-based regions `region1` and `region2`.
    pub fn pressure(&self, region1: usize, region2: usize) -> Option<f64> {
        let r = self.region_count;
        if !(1..=r).contains(&region1) || !(1..=r).contains(&region2) {
            return None;
        }
        self.table.get((region1 - 1) * r + (region2 - 1)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resdeck_core::{deck_record, DeckKeyword, GridDims, KeywordDescriptor, Section};

    fn props() -> GridProperties<i32> {
        let dims = GridDims::new(3, 1, 1).unwrap();
        let mut props =
            GridProperties::new(&dims, [KeywordDescriptor::new("EQLNUM", 1, "")]).unwrap();
        let eqlnum = props.get_or_create("EQLNUM").unwrap();
        eqlnum.set(1, 2).unwrap();
        eqlnum.set(2, 3).unwrap();
        props
    }

    fn deck(option: &str, records: &[(i32, i32, f64)]) -> Deck {
        let mut thpres = DeckKeyword::new("THPRES");
        for &(a, b, p) in records {
            thpres.push_record(deck_record![a, b, p]);
        }
        Deck::new()
            .with_section(Section::new("RUNSPEC").with_keyword(
                DeckKeyword::new("EQLOPTS").with_record(deck_record![option]),
            ))
            .with_section(Section::new("SOLUTION").with_keyword(thpres))
    }

    #[test]
    fn inactive_option_concludes_at_option_check() {
        let t = ThresholdPressure::from_deck(&deck("FOO", &[]), &props()).unwrap();
        assert!(t.is_empty());
        assert!(!t.is_active());
        assert_eq!(t.concluded_at(), Checkpoint::Option);
    }

    #[test]
    fn last_record_wins_for_repeated_pair() {
        let d = deck("THPRES", &[(1, 2, 1.0), (2, 1, 4.0)]);
        let t = ThresholdPressure::from_deck(&d, &props()).unwrap();
        assert_eq!(t.pressure(1, 2), Some(400_000.0));
        assert_eq!(t.pressure(2, 1), Some(400_000.0));
        assert_eq!(t.concluded_at(), Checkpoint::Records);
    }

    #[test]
    fn unlisted_pairs_stay_zero() {
        let t = ThresholdPressure::from_deck(&deck("THPRES", &[(1, 3, 2.0)]), &props()).unwrap();
        assert_eq!(t.region_count(), 3);
        assert_eq!(t.len(), 9);
        assert_eq!(t.pressure(1, 2), Some(0.0));
        assert_eq!(t.pressure(3, 1), Some(200_000.0));
    }

    #[test]
    fn pressure_outside_regions_is_none() {
        let t = ThresholdPressure::from_deck(&deck("THPRES", &[(1, 2, 1.0)]), &props()).unwrap();
        assert_eq!(t.pressure(0, 1), None);
        assert_eq!(t.pressure(1, 4), None);
    }

    #[test]
    fn into_table_hands_over_storage() {
        let t = ThresholdPressure::from_deck(&deck("THPRES", &[(1, 2, 1.0)]), &props()).unwrap();
        let flat = t.clone().into_table();
        assert_eq!(flat.as_slice(), t.table());
    }
}
