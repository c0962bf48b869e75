//! Standard supported-keyword tables and compile-time keyword markers.

use resdeck_core::{GridKeyword, KeywordDescriptor};

/// Declare zero-sized [`GridKeyword`] markers.
macro_rules! grid_keywords {
    ($($(#[$doc:meta])* $marker:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $marker;

            impl GridKeyword for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

grid_keywords! {
    /// Equilibration region index.
    Eqlnum => "EQLNUM",
    /// Fluid-in-place region index.
    Fipnum => "FIPNUM",
    /// PVT table region index.
    Pvtnum => "PVTNUM",
    /// Saturation table region index.
    Satnum => "SATNUM",
    /// Transmissibility multiplier region index.
    Multnum => "MULTNUM",
    /// Rock compaction table region index.
    Rocknum => "ROCKNUM",
}

/// Integer region keywords and their defaults.
///
/// Every region keyword defaults to region 1, so a grid with no region
/// data given still has exactly one region of each kind.
pub const REGION_KEYWORDS: &[(&str, i32)] = &[
    (Eqlnum::NAME, 1),
    (Fipnum::NAME, 1),
    (Pvtnum::NAME, 1),
    (Satnum::NAME, 1),
    (Multnum::NAME, 1),
    (Rocknum::NAME, 1),
];

/// Descriptors for [`REGION_KEYWORDS`], ready to hand to a container.
pub fn region_keywords() -> Vec<KeywordDescriptor<i32>> {
    REGION_KEYWORDS
        .iter()
        .map(|&(name, default)| KeywordDescriptor::new(name, default, ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_keywords_are_dimensionless_and_default_to_one() {
        let descs = region_keywords();
        assert_eq!(descs.len(), REGION_KEYWORDS.len());
        assert!(descs.iter().all(|d| d.unit().is_empty() && d.default_value() == 1));
        assert_eq!(descs[0].name(), "EQLNUM");
    }

    #[test]
    fn markers_carry_deck_names() {
        assert_eq!(Eqlnum::NAME, "EQLNUM");
        assert_eq!(Rocknum::NAME, "ROCKNUM");
    }
}
