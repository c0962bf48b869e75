//! The three ordered checkpoints behind [`ThresholdPressure::from_deck`].
//!
//! [`ThresholdPressure::from_deck`]: crate::ThresholdPressure::from_deck

use resdeck_core::{Deck, DeckItem, DeckKeyword, DeckRecord};
use resdeck_props::keywords::Eqlnum;
use resdeck_props::GridProperties;

use crate::error::ThresholdPressureError;
use crate::options::EquilibrationOptions;
use crate::{BARS_TO_PASCAL, DATA_KEYWORD, SOLUTION_SECTION};

/// Where the presence check left the build.
#[derive(Debug)]
pub(crate) enum Presence<'d> {
    /// Option active but no solution section yet; nothing to build.
    Deferred,
    /// The data keyword to validate.
    Data(&'d DeckKeyword),
}

/// A fully validated table.
#[derive(Debug)]
pub(crate) struct Filled {
    pub(crate) region_count: usize,
    pub(crate) table: Vec<f64>,
}

/// Checkpoint 1: is the option active at all?
pub(crate) fn check_option(deck: &Deck) -> EquilibrationOptions {
    EquilibrationOptions::from_deck(deck)
}

/// Checkpoint 2: does the deck carry the data the option promises?
///
/// A missing solution section is tolerated; a present one must hold the
/// data keyword with at least one record.
pub(crate) fn check_presence(deck: &Deck) -> Result<Presence<'_>, ThresholdPressureError> {
    let Some(solution) = deck.section(SOLUTION_SECTION) else {
        return Ok(Presence::Deferred);
    };
    match solution.keyword(DATA_KEYWORD) {
        None => Err(ThresholdPressureError::InconsistentDeck {
            reason: format!(
                "threshold pressure option is set but {SOLUTION_SECTION} has no {DATA_KEYWORD} keyword"
            ),
        }),
        Some(keyword) if keyword.is_empty() => Err(ThresholdPressureError::InconsistentDeck {
            reason: format!(
                "threshold pressure option is set but {DATA_KEYWORD} in {SOLUTION_SECTION} has no records"
            ),
        }),
        Some(keyword) => Ok(Presence::Data(keyword)),
    }
}

/// Checkpoint 3: resolve the region count and apply every record.
pub(crate) fn fill_table(
    keyword: &DeckKeyword,
    props: &GridProperties<i32>,
) -> Result<Filled, ThresholdPressureError> {
    let max_region = props.get_initialized_keyword::<Eqlnum>()?.max_value();
    if max_region <= 0 {
        return Err(ThresholdPressureError::InvalidRegionCount { max_region });
    }
    let region_count = max_region as usize;
    let mut table = allocate_table(region_count)?;

    for (index, record) in keyword.records().iter().enumerate() {
        let entry = read_record(index, record, region_count)?;
        let value = entry.pressure * BARS_TO_PASCAL;
        tracing::trace!(
            record = index,
            region1 = entry.region1,
            region2 = entry.region2,
            pascal = value,
            "applying threshold pressure"
        );
        // Regions were range-checked, so both offsets are in the table.
        let (a, b) = (entry.region1 - 1, entry.region2 - 1);
        if a != b {
            table[a * region_count + b] = value;
            table[b * region_count + a] = value;
        }
    }

    Ok(Filled {
        region_count,
        table,
    })
}

/// Zero-filled `region_count²` table, or `TableTooLarge` if it cannot be allocated.
fn allocate_table(region_count: usize) -> Result<Vec<f64>, ThresholdPressureError> {
    let too_large = ThresholdPressureError::TableTooLarge { region_count };
    let len = region_count
        .checked_mul(region_count)
        .ok_or_else(|| too_large.clone())?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large)?;
    table.resize(len, 0.0);
    Ok(table)
}

/// One validated record, regions 1-based.
struct Entry {
    region1: usize,
    region2: usize,
    pressure: f64,
}

fn read_record(
    index: usize,
    record: &DeckRecord,
    region_count: usize,
) -> Result<Entry, ThresholdPressureError> {
    let missing = |item: &'static str| ThresholdPressureError::MissingData {
        record: index,
        item,
    };
    let region1 = record
        .item(0)
        .and_then(region_number)
        .ok_or_else(|| missing("REGION1"))?;
    let region2 = record
        .item(1)
        .and_then(region_number)
        .ok_or_else(|| missing("REGION2"))?;
    let pressure = record
        .item(2)
        .and_then(DeckItem::as_double)
        .ok_or_else(|| missing("VALUE"))?;

    Ok(Entry {
        region1: check_region(index, region1, region_count)?,
        region2: check_region(index, region2, region_count)?,
        pressure,
    })
}

/// Region numbers are integers; a double with no fractional part counts.
fn region_number(item: &DeckItem) -> Option<i32> {
    match item {
        DeckItem::Int(v) => Some(*v),
        DeckItem::Double(v)
            if v.fract() == 0.0 && *v >= f64::from(i32::MIN) && *v <= f64::from(i32::MAX) =>
        {
            Some(*v as i32)
        }
        _ => None,
    }
}

fn check_region(
    index: usize,
    region: i32,
    region_count: usize,
) -> Result<usize, ThresholdPressureError> {
    usize::try_from(region)
        .ok()
        .filter(|r| (1..=region_count).contains(r))
        .ok_or(ThresholdPressureError::RegionOutOfRange {
            record: index,
            region,
            region_count,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use resdeck_core::{deck_record, DeckKeyword, GridDims, KeywordDescriptor, Section};
    use crate::REGION_KEYWORD;

    fn regions(max: i32) -> GridProperties<i32> {
        let dims = GridDims::new(2, 2, 1).unwrap();
        let mut props =
            GridProperties::new(&dims, [KeywordDescriptor::new(REGION_KEYWORD, 1, "")]).unwrap();
        props.get_or_create(REGION_KEYWORD).unwrap().set(3, max).unwrap();
        props
    }

    #[test]
    fn presence_defers_without_solution_section() {
        assert!(matches!(check_presence(&Deck::new()), Ok(Presence::Deferred)));
    }

    #[test]
    fn presence_rejects_missing_and_empty_keyword() {
        let no_kw = Deck::new().with_section(Section::new(SOLUTION_SECTION));
        assert!(matches!(
            check_presence(&no_kw),
            Err(ThresholdPressureError::InconsistentDeck { .. })
        ));

        let empty_kw = Deck::new().with_section(
            Section::new(SOLUTION_SECTION).with_keyword(DeckKeyword::new(DATA_KEYWORD)),
        );
        assert!(matches!(
            check_presence(&empty_kw),
            Err(ThresholdPressureError::InconsistentDeck { .. })
        ));
    }

    #[test]
    fn fill_table_writes_both_halves() {
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![2, 1, 0.5]);
        let filled = fill_table(&kw, &regions(2)).unwrap();
        assert_eq!(filled.region_count, 2);
        assert_eq!(filled.table, vec![0.0, 50_000.0, 50_000.0, 0.0]);
    }

    #[test]
    fn integer_pressure_is_accepted() {
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![1, 2, 3]);
        let filled = fill_table(&kw, &regions(2)).unwrap();
        assert_eq!(filled.table[1], 300_000.0);
    }

    #[test]
    fn same_region_pair_leaves_diagonal_zero() {
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![2, 2, 9.0]);
        let filled = fill_table(&kw, &regions(2)).unwrap();
        assert!(filled.table.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn negative_and_zero_regions_are_out_of_range() {
        for bad in [0, -1] {
            let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![bad, 1, 1.0]);
            assert_eq!(
                fill_table(&kw, &regions(2)).unwrap_err(),
                ThresholdPressureError::RegionOutOfRange {
                    record: 0,
                    region: bad,
                    region_count: 2,
                }
            );
        }
    }

    #[test]
    fn missing_items_are_named() {
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![1]);
        assert_eq!(
            fill_table(&kw, &regions(2)).unwrap_err(),
            ThresholdPressureError::MissingData {
                record: 0,
                item: "REGION2",
            }
        );
    }

    #[test]
    fn negative_max_region_is_invalid() {
        let dims = GridDims::new(1, 1, 1).unwrap();
        let mut props =
            GridProperties::new(&dims, [KeywordDescriptor::new(REGION_KEYWORD, -3, "")]).unwrap();
        props.add(REGION_KEYWORD).unwrap();
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![1, 2, 1.0]);
        assert_eq!(
            fill_table(&kw, &props).unwrap_err(),
            ThresholdPressureError::InvalidRegionCount { max_region: -3 }
        );
    }

    #[test]
    fn integral_double_region_is_accepted() {
        let rec = DeckRecord::new([DeckItem::Double(1.0), DeckItem::Int(2), DeckItem::Double(3.0)]);
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(rec);
        let filled = fill_table(&kw, &regions(2)).unwrap();
        assert_eq!(filled.table[1], 300_000.0);
    }

    #[test]
    fn fractional_or_text_region_is_invalid() {
        for bad in [DeckItem::Double(1.5), DeckItem::from("ONE"), DeckItem::Double(f64::NAN)] {
            let rec = DeckRecord::new([bad, DeckItem::Int(2), DeckItem::Double(3.0)]);
            let kw = DeckKeyword::new(DATA_KEYWORD).with_record(rec);
            let err = fill_table(&kw, &regions(2)).unwrap_err();
            assert_eq!(
                err,
                ThresholdPressureError::MissingData {
                    record: 0,
                    item: "REGION1",
                }
            );
            assert_eq!(err.to_string(), "THPRES record 1: missing or invalid REGION1");
        }
    }

    #[test]
    fn oversized_region_count_is_reported_not_allocated() {
        let mut props = regions(2);
        props
            .get_initialized_mut(REGION_KEYWORD)
            .unwrap()
            .set(0, i32::MAX)
            .unwrap();
        let kw = DeckKeyword::new(DATA_KEYWORD).with_record(deck_record![1, 2, 1.0]);
        assert_eq!(
            fill_table(&kw, &props).unwrap_err(),
            ThresholdPressureError::TableTooLarge {
                region_count: i32::MAX as usize,
            }
        );
    }

    #[test]
    fn allocate_table_rejects_overflowing_size() {
        assert_eq!(
            allocate_table(usize::MAX).unwrap_err(),
            ThresholdPressureError::TableTooLarge {
                region_count: usize::MAX,
            }
        );
        assert_eq!(allocate_table(3).unwrap(), vec![0.0; 9]);
    }
}
