use crate::shapes::Dimension;

/// Shape metrics error type.
/// `UnknownShape` and `MissingDimension` both mean the shape is not available for the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Shape name not recognised for the requested measure.
    UnknownShape {
        name: String,
        available: Vec<String>,
    },
    /// A dimension the shape's formula needs was not supplied.
    MissingDimension {
        shape: String,
        dimension: Dimension,
    },
    /// A dimension was rejected by the strict dimension policy.
    InvalidDimension {
        shape: String,
        dimension: Dimension,
        value: f64,
    },
}
impl ShapeError {
    /// Whether the error is the "shape is not available" outcome
    /// (unknown name or missing dimension), as opposed to a rejected value.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ShapeError::UnknownShape{..} | ShapeError::MissingDimension{..})
    }
}
impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::UnknownShape{name, available} => write!(
                f,
                "- Shape not found: {}\n- Available shapes: {}",
                name,
                available.join(", "),
            ),
            ShapeError::MissingDimension{shape, dimension} => write!(
                f,
                "- Missing dimension for {}: {}",
                shape,
                dimension,
            ),
            ShapeError::InvalidDimension{shape, dimension, value} => write!(
                f,
                "- Invalid dimension for {}: {} = {} (must be positive and finite)",
                shape,
                dimension,
                value,
            ),
        }
    }
}

/// Result type for the `shapes` module.
pub type ProcResult<T> = std::result::Result<T, ShapeError>;
