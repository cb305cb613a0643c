mod proc_errors;
mod dimensions;
mod plane;
mod solid;

// Re-export errors
pub use proc_errors::{
    ShapeError,
    ProcResult,
};
// Re-export dimension handling
pub use dimensions::{
    Dimension,
    DimensionSet,
    DimensionPolicy,
};
// Re-export shapes
pub use plane::{
    AreaMethod,
    PlaneKind,
    PlaneShape,
    Rectangle,
    Square,
    Triangle,
    Circle,
};
pub use solid::{
    VolumeMethod,
    SolidKind,
    SolidShape,
    Sphere,
    Cube,
    Cone,
    Cuboid,
    Cylinder,
};

/// Compute the area of a plane shape by name.
/// Dimensions pass through unchecked; see `compute_area_with_policy`.
/// Returns the area, or a `ShapeError` if the shape is unknown or a dimension is missing.
pub fn compute_area(shape_name: &str, dims: &DimensionSet) -> ProcResult<f64> {
    compute_area_with_policy(shape_name, dims, DimensionPolicy::Permissive)
}

/// Compute the area of a plane shape by name, checking dimensions against `policy`.
pub fn compute_area_with_policy(shape_name: &str, dims: &DimensionSet, policy: DimensionPolicy) -> ProcResult<f64> {
    let kind = PlaneKind::from_name(shape_name)?;
    let shape = PlaneShape::from_dimensions(kind, dims, policy)?;
    let area = shape.area();
    log::debug!("{} area = {} ({:?})", shape.get_shape_name(), area, shape);
    Ok(area)
}

/// Compute the volume of a solid shape by name.
/// Dimensions pass through unchecked; see `compute_volume_with_policy`.
/// Returns the volume, or a `ShapeError` if the shape is unknown or a dimension is missing.
pub fn compute_volume(shape_name: &str, dims: &DimensionSet) -> ProcResult<f64> {
    compute_volume_with_policy(shape_name, dims, DimensionPolicy::Permissive)
}

/// Compute the volume of a solid shape by name, checking dimensions against `policy`.
pub fn compute_volume_with_policy(shape_name: &str, dims: &DimensionSet, policy: DimensionPolicy) -> ProcResult<f64> {
    let kind = SolidKind::from_name(shape_name)?;
    let shape = SolidShape::from_dimensions(kind, dims, policy)?;
    let volume = shape.volume();
    log::debug!("{} volume = {} ({:?})", shape.get_shape_name(), volume, shape);
    Ok(volume)
}
