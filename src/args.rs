mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use serde::{Serialize, Deserialize};

use crate::form;
use crate::io::Format;
use crate::shapes::{
    Dimension,
    DimensionSet,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Geometry calculator for areas, volumes, Pythagorean triplets and complementary/supplementary angles.
#[derive(Debug, Parser)]
pub struct MyMathCli {
    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the mymath binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "area")]
    /// Compute the area of a plane shape.
    Area(MeasureArgs),

    #[command(name = "volume")]
    /// Compute the volume of a solid shape.
    Volume(MeasureArgs),

    #[command(name = "triplet")]
    /// Check whether three numbers form a Pythagorean triplet (the third is the hypotenuse).
    Triplet(TripletArgs),

    #[command(name = "angle")]
    /// Compute the complementary and supplementary angles of an angle in degrees.
    Angle(AngleArgs),

    #[command(name = "form")]
    /// Fill in a calculator tab with text fields (blank or invalid fields count as 0).
    Form {
        #[command(subcommand)]
        tab: FormCommand,
    },

    #[command(name = "batch")]
    /// Run every calculation listed in a config file.
    Batch(BatchArgs),

    #[command(name = "example")]
    /// Print an example batch config file.
    Example(ExampleArgs),

    #[command(name = "list")]
    /// List the supported shapes, their dimensions and the conditions.
    List,
}

/// Calculator tabs for the `form` subcommand.
#[derive(Debug, Subcommand)]
pub enum FormCommand {
    #[command(name = "area")]
    /// Area calculator tab.
    Area(form::AreaForm),

    #[command(name = "volume")]
    /// Volume calculator tab.
    Volume(form::VolumeForm),

    #[command(name = "condition")]
    /// Condition checker tab.
    Condition(form::ConditionForm),
}

/// Named dimensions, shared by the CLI and batch config files.
/// Only the dimensions given are passed on; nothing is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Args, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionArgs {
    #[arg(short, long, allow_negative_numbers = true)]
    /// Radius, in m.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    #[arg(short, long, allow_negative_numbers = true)]
    /// Length or side, in m.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "side")]
    pub length: Option<f64>,

    #[arg(short, long, allow_negative_numbers = true)]
    /// Breadth or width, in m.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "width")]
    pub breadth: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    /// Height, in m.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}
impl From<&DimensionArgs> for DimensionSet {
    fn from(args: &DimensionArgs) -> Self {
        [
            (Dimension::Radius, args.radius),
            (Dimension::Length, args.length),
            (Dimension::Breadth, args.breadth),
            (Dimension::Height, args.height),
        ]
            .into_iter()
            .filter_map(|(dimension, value)| value.map(|value| (dimension, value)))
            .collect()
    }
}

/// Compiled arguments for the area and volume commands. Compiled with clap.
#[derive(Debug, Args)]
pub struct MeasureArgs {
    /// Shape name (case-insensitive).
    pub shape: String,

    #[command(flatten)]
    pub dimensions: DimensionArgs,

    #[arg(long)]
    /// Reject zero, negative and non-finite dimensions.
    pub strict: bool,
}

/// Compiled arguments for the triplet command. Compiled with clap.
#[derive(Debug, Args)]
pub struct TripletArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
    #[arg(allow_negative_numbers = true)]
    /// Candidate hypotenuse.
    pub c: f64,
}

/// Compiled arguments for the angle command. Compiled with clap.
#[derive(Debug, Args)]
pub struct AngleArgs {
    #[arg(allow_negative_numbers = true)]
    /// Angle in degrees.
    pub degrees: f64,
}

/// Compiled arguments for the batch command. Compiled with clap.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Path to the batch config file (.json, .toml, .yaml or .yml).
    pub cfg_file: String,

    #[arg(short, long = "output")]
    /// Write the report to this file instead of stdout (format taken from the extension).
    pub output_path: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Report format when printing to stdout.
    pub format: Format,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the example config.
    pub format: Format,
}

/// Parse the command line arguments.
pub fn parse_cli_args() -> MyMathCli {
    MyMathCli::parse()
}
