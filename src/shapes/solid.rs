/*!
 * Solid (3-D) shapes and their volume formulas.
 * Laid out the same way as the plane shapes module.
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

/// Solid shape names, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SolidKind {
    Sphere,
    Cube,
    Cone,
    Cuboid,
    Cylinder,
}
impl SolidKind {
    /// Look up a solid shape by name.
    /// Returns `ShapeError::UnknownShape` listing the available names if nothing matches.
    pub fn from_name(name: &str) -> ProcResult<Self> {
        name.parse().map_err(|_| ShapeError::UnknownShape{
            name: name.to_string(),
            available: SolidKind::iter().map(|kind| kind.to_string()).collect(),
        })
    }

    /// Dimensions the volume formula reads.
    pub fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            SolidKind::Sphere => &[Dimension::Radius],
            SolidKind::Cube => &[Dimension::Length],
            SolidKind::Cone => &[Dimension::Radius, Dimension::Height],
            SolidKind::Cuboid => &[Dimension::Length, Dimension::Breadth, Dimension::Height],
            SolidKind::Cylinder => &[Dimension::Radius, Dimension::Height],
        }
    }
}

/// Volume method trait.
/// Implemented by every solid shape.
#[enum_dispatch]
pub trait VolumeMethod {
    /// Get the display name of the shape.
    fn get_shape_name(&self) -> &'static str;

    /// Volume of the shape.
    fn volume(&self) -> f64;
}

/// Solid shapes enum, one variant per `SolidKind`.
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(VolumeMethod)]
pub enum SolidShape {
    Sphere(Sphere),
    Cube(Cube),
    Cone(Cone),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
}
impl SolidShape {
    /// Build a solid shape from a dimension set.
    /// Fails on the first required dimension that is missing or rejected by the policy.
    pub fn from_dimensions(kind: SolidKind, dims: &DimensionSet, policy: DimensionPolicy) -> ProcResult<Self> {
        let shape_name = kind.to_string();
        let get = |dimension| dims.require(&shape_name, dimension, policy);

        let shape = match kind {
            SolidKind::Sphere => SolidShape::Sphere(Sphere{
                radius: get(Dimension::Radius)?,
            }),
            SolidKind::Cube => SolidShape::Cube(Cube{
                length: get(Dimension::Length)?,
            }),
            SolidKind::Cone => SolidShape::Cone(Cone{
                radius: get(Dimension::Radius)?,
                height: get(Dimension::Height)?,
            }),
            SolidKind::Cuboid => SolidShape::Cuboid(Cuboid{
                length: get(Dimension::Length)?,
                breadth: get(Dimension::Breadth)?,
                height: get(Dimension::Height)?,
            }),
            SolidKind::Cylinder => SolidShape::Cylinder(Cylinder{
                radius: get(Dimension::Radius)?,
                height: get(Dimension::Height)?,
            }),
        };
        Ok(shape)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}
impl VolumeMethod for Sphere {
    fn get_shape_name(&self) -> &'static str {
        "Sphere"
    }

    fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub length: f64,
}
impl VolumeMethod for Cube {
    fn get_shape_name(&self) -> &'static str {
        "Cube"
    }

    fn volume(&self) -> f64 {
        self.length.powi(3)
    }
}

/// Right circular cone.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
}
impl VolumeMethod for Cone {
    fn get_shape_name(&self) -> &'static str {
        "Cone"
    }

    fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.height / 3.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
}
impl VolumeMethod for Cuboid {
    fn get_shape_name(&self) -> &'static str {
        "Cuboid"
    }

    fn volume(&self) -> f64 {
        self.length * self.breadth * self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
}
impl VolumeMethod for Cylinder {
    fn get_shape_name(&self) -> &'static str {
        "Cylinder"
    }

    fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.height
    }
}
