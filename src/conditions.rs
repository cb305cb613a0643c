mod angle;
mod triplet;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use itertools::Itertools;

pub use angle::{
    AngleValue,
    AnglePair,
    complementary_supplementary,
};
pub use triplet::{
    TRIPLET_EPSILON,
    is_pythagorean_triplet,
};

/// Conditions the checker can evaluate.
/// Parsed case-insensitively, from either the short name or the long menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Condition {
    #[strum(to_string = "pythagorean-triplet", serialize = "triplet", serialize = "Pythagorean Triplet Checker")]
    PythagoreanTriplet,
    #[strum(to_string = "complementary-supplementary", serialize = "angle", serialize = "Complimentary&Supplementary Angles", serialize = "Complementary&Supplementary Angles")]
    ComplementarySupplementary,
}
impl Condition {
    /// Look up a condition by name.
    /// Returns `None` if nothing matches (no condition selected).
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    /// Comma separated list of every condition name.
    pub fn available() -> String {
        Condition::iter().join(", ")
    }
}
