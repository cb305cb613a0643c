use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use strum::Display;

use crate::shapes::{
    ShapeError,
    ProcResult,
};

/// A named scalar input to a shape formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    Radius,
    Length,
    Breadth,
    Height,
}

/// How dimension values are checked before they reach a formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DimensionPolicy {
    /// Every value passes through unchanged, including zero, negative and non-finite values.
    #[default]
    Permissive,
    /// Zero, negative and non-finite values are rejected with `ShapeError::InvalidDimension`.
    Strict,
}
impl DimensionPolicy {
    /// Policy selected by a `--strict` style flag.
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            DimensionPolicy::Strict
        }
        else {
            DimensionPolicy::Permissive
        }
    }

    /// Check a single dimension value for a shape.
    pub fn check(&self, shape: &str, dimension: Dimension, value: f64) -> ProcResult<f64> {
        match self {
            DimensionPolicy::Permissive => Ok(value),
            DimensionPolicy::Strict if value.is_finite() && value > 0.0 => Ok(value),
            DimensionPolicy::Strict => Err(ShapeError::InvalidDimension{
                shape: shape.to_string(),
                dimension,
                value,
            }),
        }
    }
}

/// Dimension set.
/// Maps each supplied dimension to its value. Not every shape needs every dimension,
/// and extra dimensions are ignored by the formulas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionSet {
    values: BTreeMap<Dimension, f64>,
}
impl DimensionSet {
    /// Create an empty dimension set.
    pub fn new() -> Self {
        DimensionSet{values: BTreeMap::new()}
    }

    /// Builder-style insert.
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.values.insert(dimension, value);
        self
    }

    /// Insert a value, returning the previous one if there was one.
    pub fn insert(&mut self, dimension: Dimension, value: f64) -> Option<f64> {
        self.values.insert(dimension, value)
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.values.get(&dimension).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fetch a dimension that the named shape requires, checked against the policy.
    /// Absent dimensions are never defaulted.
    pub fn require(&self, shape: &str, dimension: Dimension, policy: DimensionPolicy) -> ProcResult<f64> {
        match self.get(dimension) {
            Some(value) => policy.check(shape, dimension, value),
            None => Err(ShapeError::MissingDimension{
                shape: shape.to_string(),
                dimension,
            }),
        }
    }
}
impl FromIterator<(Dimension, f64)> for DimensionSet {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        DimensionSet{values: iter.into_iter().collect()}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_missing_dimension() {
        let dims = DimensionSet::new().with(Dimension::Length, 5.0);
        assert_eq!(
            dims.require("rectangle", Dimension::Breadth, DimensionPolicy::Permissive),
            Err(ShapeError::MissingDimension{shape: "rectangle".to_string(), dimension: Dimension::Breadth}),
        );
        assert_eq!(dims.require("rectangle", Dimension::Length, DimensionPolicy::Permissive), Ok(5.0));
    }

    #[test]
    fn permissive_passes_everything() {
        let policy = DimensionPolicy::Permissive;
        assert_eq!(policy.check("circle", Dimension::Radius, -2.0), Ok(-2.0));
        assert_eq!(policy.check("circle", Dimension::Radius, 0.0), Ok(0.0));
        assert!(policy.check("circle", Dimension::Radius, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn strict_rejects_non_positive_and_non_finite() {
        let policy = DimensionPolicy::Strict;
        assert_eq!(policy.check("cube", Dimension::Length, 2.5), Ok(2.5));
        for value in [0.0, -1.0, f64::INFINITY] {
            assert!(matches!(
                policy.check("cube", Dimension::Length, value),
                Err(ShapeError::InvalidDimension{dimension: Dimension::Length, ..})
            ));
        }
        assert!(policy.check("cube", Dimension::Length, f64::NAN).is_err());
    }

    #[test]
    fn collect_and_overwrite() {
        let mut dims: DimensionSet = [(Dimension::Radius, 1.0), (Dimension::Height, 2.0)].into_iter().collect();
        assert_eq!(dims.len(), 2);
        assert_eq!(dims.insert(Dimension::Radius, 3.0), Some(1.0));
        assert_eq!(dims.get(Dimension::Radius), Some(3.0));
        assert_eq!(dims.get(Dimension::Breadth), None);
        assert!(DimensionSet::new().is_empty());
    }

    #[test]
    fn dimension_names_are_lowercase() {
        assert_eq!(Dimension::Breadth.to_string(), "breadth");
        assert_eq!(DimensionPolicy::Strict.to_string(), "strict");
    }
}
