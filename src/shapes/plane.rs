/*!
 * Plane (2-D) shapes and their area formulas.
 *
 * New shapes need:
 * - A variant in `PlaneKind` with its required dimensions
 * - A struct implementing `AreaMethod`
 * - An enum variant containing that struct in `PlaneShape`, built in `PlaneShape::from_dimensions`
 *
 */

use std::f64::consts::PI;

use enum_dispatch::enum_dispatch;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::shapes::{
    Dimension,
    DimensionSet,
    DimensionPolicy,
    ShapeError,
    ProcResult,
};

/// Plane shape names, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlaneKind {
    Rectangle,
    Square,
    Triangle,
    Circle,
}
impl PlaneKind {
    /// Look up a plane shape by name.
    /// Returns `ShapeError::UnknownShape` listing the available names if nothing matches.
    pub fn from_name(name: &str) -> ProcResult<Self> {
        name.parse().map_err(|_| ShapeError::UnknownShape{
            name: name.to_string(),
            available: PlaneKind::iter().map(|kind| kind.to_string()).collect(),
        })
    }

    /// Dimensions the area formula reads.
    pub fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            PlaneKind::Rectangle => &[Dimension::Length, Dimension::Breadth],
            PlaneKind::Square => &[Dimension::Length],
            PlaneKind::Triangle => &[Dimension::Breadth, Dimension::Height],
            PlaneKind::Circle => &[Dimension::Radius],
        }
    }
}

/// Area method trait.
/// Implemented by every plane shape.
#[enum_dispatch]
pub trait AreaMethod {
    /// Get the display name of the shape.
    fn get_shape_name(&self) -> &'static str;

    /// Area of the shape.
    fn area(&self) -> f64;
}

/// Plane shapes enum, one variant per `PlaneKind`.
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(AreaMethod)]
pub enum PlaneShape {
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    Circle(Circle),
}
impl PlaneShape {
    /// Build a plane shape from a dimension set.
    /// Fails on the first required dimension that is missing or rejected by the policy.
    pub fn from_dimensions(kind: PlaneKind, dims: &DimensionSet, policy: DimensionPolicy) -> ProcResult<Self> {
        let shape_name = kind.to_string();
        let get = |dimension| dims.require(&shape_name, dimension, policy);

        let shape = match kind {
            PlaneKind::Rectangle => PlaneShape::Rectangle(Rectangle{
                length: get(Dimension::Length)?,
                breadth: get(Dimension::Breadth)?,
            }),
            PlaneKind::Square => PlaneShape::Square(Square{
                length: get(Dimension::Length)?,
            }),
            PlaneKind::Triangle => PlaneShape::Triangle(Triangle{
                breadth: get(Dimension::Breadth)?,
                height: get(Dimension::Height)?,
            }),
            PlaneKind::Circle => PlaneShape::Circle(Circle{
                radius: get(Dimension::Radius)?,
            }),
        };
        Ok(shape)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub breadth: f64,
}
impl AreaMethod for Rectangle {
    fn get_shape_name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.length * self.breadth
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub length: f64,
}
impl AreaMethod for Square {
    fn get_shape_name(&self) -> &'static str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.length.powi(2)
    }
}

/// Triangle given its base (breadth) and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub breadth: f64,
    pub height: f64,
}
impl AreaMethod for Triangle {
    fn get_shape_name(&self) -> &'static str {
        "Triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.breadth * self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}
impl AreaMethod for Circle {
    fn get_shape_name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}
