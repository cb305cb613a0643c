use strum::IntoEnumIterator;

use crate::{
    args,
    io,
    MyMathResult,
};
use crate::batch::{
    BatchCfg,
    Calculation,
};
use crate::shapes::{
    Dimension,
    DimensionPolicy,
    PlaneKind,
    SolidKind,
};

/// Build an example batch config covering every shape and both conditions.
pub fn example_batch() -> BatchCfg {
    let mut calculations = Vec::<Calculation>::new();

    for kind in PlaneKind::iter() {
        calculations.push(Calculation::Area{
            shape: kind.to_string(),
            dimensions: example_dimensions(kind.required_dimensions()),
        });
    }
    for kind in SolidKind::iter() {
        calculations.push(Calculation::Volume{
            shape: kind.to_string(),
            dimensions: example_dimensions(kind.required_dimensions()),
        });
    }
    calculations.push(Calculation::Triplet{a: 3.0, b: 4.0, c: 5.0});
    calculations.push(Calculation::Angle{degrees: 30.0});

    BatchCfg{
        policy: DimensionPolicy::Permissive,
        calculations,
    }
}

/// Fill the required dimensions with 1.0, 2.0, 3.0, ... in order.
fn example_dimensions(required: &[Dimension]) -> args::DimensionArgs {
    let mut dimension_args = args::DimensionArgs::default();
    for (dim_id, dimension) in required.iter().enumerate() {
        let value = Some(dim_id as f64 + 1.0);
        match dimension {
            Dimension::Radius => dimension_args.radius = value,
            Dimension::Length => dimension_args.length = value,
            Dimension::Breadth => dimension_args.breadth = value,
            Dimension::Height => dimension_args.height = value,
        }
    }
    dimension_args
}

/// Display an example batch config file.
/// Returns a `MyMathResult` with `()` or an `Err`.
pub fn display_example(example_args: &args::ExampleArgs) -> MyMathResult<()> {
    let example_str = io::to_format_string(&example_batch(), example_args.format)?;
    println!("{}", example_str.trim_end());
    Ok(())
}
