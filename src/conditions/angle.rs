use serde::{Serialize, Serializer};

/// A derived angle in degrees, or the marker for an angle that does not exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleValue {
    Defined(f64),
    Undefined,
}
impl AngleValue {
    /// The angle if it is defined.
    pub fn defined(&self) -> Option<f64> {
        match self {
            AngleValue::Defined(value) => Some(*value),
            AngleValue::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.defined().is_some()
    }
}
impl std::fmt::Display for AngleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleValue::Defined(value) => write!(f, "{}", value),
            AngleValue::Undefined => write!(f, "not defined"),
        }
    }
}
// Serialized as a bare number or the string "undefined", so reports stay flat in every format.
impl Serialize for AngleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AngleValue::Defined(value) => serializer.serialize_f64(*value),
            AngleValue::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Complementary and supplementary angles of one input angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePair {
    pub complementary: AngleValue,
    pub supplementary: AngleValue,
}

/// Complementary and supplementary angles of `angle` (degrees).
///
/// - `0 <= angle <= 90`: both defined
/// - `90 < angle <= 180`: only the supplementary angle is defined
/// - anything else, including negative angles and NaN: neither is defined
pub fn complementary_supplementary(angle: f64) -> AnglePair {
    if (0.0..=90.0).contains(&angle) {
        AnglePair{
            complementary: AngleValue::Defined(90.0 - angle),
            supplementary: AngleValue::Defined(180.0 - angle),
        }
    }
    else if angle > 90.0 && angle <= 180.0 {
        AnglePair{
            complementary: AngleValue::Undefined,
            supplementary: AngleValue::Defined(180.0 - angle),
        }
    }
    else {
        AnglePair{
            complementary: AngleValue::Undefined,
            supplementary: AngleValue::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acute_angle_has_both() {
        assert_eq!(complementary_supplementary(30.0), AnglePair{
            complementary: AngleValue::Defined(60.0),
            supplementary: AngleValue::Defined(150.0),
        });
    }

    #[test]
    fn obtuse_angle_has_supplementary_only() {
        assert_eq!(complementary_supplementary(120.0), AnglePair{
            complementary: AngleValue::Undefined,
            supplementary: AngleValue::Defined(60.0),
        });
    }

    #[test]
    fn reflex_angle_has_neither() {
        let pair = complementary_supplementary(200.0);
        assert!(!pair.complementary.is_defined());
        assert!(!pair.supplementary.is_defined());
    }

    #[test]
    fn boundaries() {
        assert_eq!(complementary_supplementary(0.0).complementary, AngleValue::Defined(90.0));
        assert_eq!(complementary_supplementary(90.0).complementary, AngleValue::Defined(0.0));
        assert_eq!(complementary_supplementary(90.0).supplementary, AngleValue::Defined(90.0));
        assert_eq!(complementary_supplementary(180.0).supplementary, AngleValue::Defined(0.0));
        assert_eq!(complementary_supplementary(180.0).complementary, AngleValue::Undefined);
    }

    #[test]
    fn negative_and_nan_have_neither() {
        for angle in [-10.0, -0.5, f64::NAN, f64::INFINITY] {
            let pair = complementary_supplementary(angle);
            assert_eq!(pair.complementary, AngleValue::Undefined, "angle {}", angle);
            assert_eq!(pair.supplementary, AngleValue::Undefined, "angle {}", angle);
        }
    }

    #[test]
    fn display() {
        assert_eq!(AngleValue::Defined(60.0).to_string(), "60");
        assert_eq!(AngleValue::Defined(42.5).to_string(), "42.5");
        assert_eq!(AngleValue::Undefined.to_string(), "not defined");
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_string(&complementary_supplementary(120.0)).unwrap();
        assert_eq!(json, r#"{"complementary":"undefined","supplementary":60.0}"#);
    }
}
