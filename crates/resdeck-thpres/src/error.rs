//! Threshold-pressure build errors.

use std::error::Error;
use std::fmt;

use resdeck_props::PropertyError;

/// The validation stage a build failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Checkpoint {
    /// Reading the equilibration options.
    Option,
    /// Matching the declared option against the data keyword.
    Presence,
    /// Resolving regions and validating each data record.
    Records,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option => write!(f, "option check"),
            Self::Presence => write!(f, "presence check"),
            Self::Records => write!(f, "record validation"),
        }
    }
}

/// Errors from building a threshold pressure table.
///
/// Every variant describes a deck-authoring problem. None is retried;
/// the deck has to be fixed and the build run again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThresholdPressureError {
    /// The region property could not be resolved.
    Property(PropertyError),
    /// The option and the data keyword disagree.
    InconsistentDeck {
        /// What is missing.
        reason: String,
    },
    /// A record lacks a required item, or the item has the wrong type.
    MissingData {
        /// Zero-based record index within the data keyword.
        record: usize,
        /// Name of the missing item.
        item: &'static str,
    },
    /// A record names a region outside `[1, region_count]`.
    RegionOutOfRange {
        /// Zero-based record index within the data keyword.
        record: usize,
        /// The offending region number.
        region: i32,
        /// Number of regions defined by the region property.
        region_count: usize,
    },
    /// The region property defines no regions.
    InvalidRegionCount {
        /// Largest value found in the region property.
        max_region: i32,
    },
    /// The `R × R` table for the defined region count cannot be allocated.
    TableTooLarge {
        /// Number of regions defined by the region property.
        region_count: usize,
    },
}

impl ThresholdPressureError {
    /// The checkpoint that raised this error.
    pub fn checkpoint(&self) -> Checkpoint {
        match self {
            Self::InconsistentDeck { .. } => Checkpoint::Presence,
            Self::Property(_)
            | Self::MissingData { .. }
            | Self::RegionOutOfRange { .. }
            | Self::InvalidRegionCount { .. }
            | Self::TableTooLarge { .. } => Checkpoint::Records,
        }
    }
}

impl fmt::Display for ThresholdPressureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(e) => write!(f, "region property: {e}"),
            Self::InconsistentDeck { reason } => write!(f, "inconsistent deck: {reason}"),
            Self::MissingData { record, item } => {
                write!(f, "THPRES record {}: missing or invalid {item}", record + 1)
            }
            Self::RegionOutOfRange {
                record,
                region,
                region_count,
            } => {
                write!(
                    f,
                    "THPRES record {}: region {region} outside defined regions 1..={region_count}",
                    record + 1
                )
            }
            Self::InvalidRegionCount { max_region } => {
                write!(
                    f,
                    "region property defines no regions (max value {max_region})"
                )
            }
            Self::TableTooLarge { region_count } => {
                write!(
                    f,
                    "threshold pressure table for {region_count} regions is too large to allocate"
                )
            }
        }
    }
}

impl Error for ThresholdPressureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Property(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PropertyError> for ThresholdPressureError {
    fn from(e: PropertyError) -> Self {
        Self::Property(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_numbers_are_one_based_in_messages() {
        let err = ThresholdPressureError::RegionOutOfRange {
            record: 1,
            region: 4,
            region_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "THPRES record 2: region 4 outside defined regions 1..=3"
        );
    }

    #[test]
    fn property_errors_keep_their_source() {
        let err = ThresholdPressureError::from(PropertyError::NotInitialized {
            keyword: "EQLNUM".into(),
        });
        assert!(err.source().is_some());
        assert_eq!(err.checkpoint(), Checkpoint::Records);
    }
}
