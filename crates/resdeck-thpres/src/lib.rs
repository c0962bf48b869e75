//! Inter-region threshold pressure tables.
//!
//! A deck opts in to threshold pressures with the `THPRES` token of the
//! `EQLOPTS` keyword in `RUNSPEC`, then lists region pairs and pressures
//! under the `THPRES` keyword in `SOLUTION`. [`ThresholdPressure::from_deck`]
//! validates that declaration against the data and the `EQLNUM` region
//! property, producing a symmetric `R × R` table in pascal.
//!
//! Validation runs as three ordered checkpoints, see [`Checkpoint`]. The
//! first failing check aborts the build; no partial table is returned.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use resdeck_core::GridKeyword;
use resdeck_props::keywords::Eqlnum;

pub mod error;
pub mod options;
mod pipeline;
pub mod table;

pub use error::{Checkpoint, ThresholdPressureError};
pub use options::EquilibrationOptions;
pub use table::ThresholdPressure;

/// Section holding the option keyword.
pub const RUNSPEC_SECTION: &str = "RUNSPEC";

/// Section holding the threshold pressure data.
pub const SOLUTION_SECTION: &str = "SOLUTION";

/// Equilibration option keyword.
pub const OPTION_KEYWORD: &str = "EQLOPTS";

/// Option token that activates threshold pressures.
pub const THPRES_OPTION: &str = "THPRES";

/// Option token that makes threshold pressures directional.
pub const IRREVERS_OPTION: &str = "IRREVERS";

/// Data keyword listing region pairs and pressures.
pub const DATA_KEYWORD: &str = "THPRES";

/// Region-index property the region numbers refer to.
pub const REGION_KEYWORD: &str = Eqlnum::NAME;

/// Deck pressures are in bar; the table is in pascal.
pub const BARS_TO_PASCAL: f64 = 1.0e5;
