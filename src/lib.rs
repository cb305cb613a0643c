pub mod shapes;
pub mod conditions;
pub mod form;
pub mod batch;
pub mod example;
pub mod args;
pub mod io;
mod crate_errors;

use itertools::Itertools;
use strum::IntoEnumIterator;

use args::{
    Command,
    FormCommand,
};
use shapes::{
    DimensionPolicy,
    DimensionSet,
    PlaneKind,
    SolidKind,
};

pub use crate_errors::{
    MyMathError,
    MyMathResult,
};

/// Run a parsed command.
/// Shape, triplet and angle results (including unsupported shapes) are printed as messages;
/// only argument, config and IO failures come back as an `Err`.
pub fn run_command(cli_args: args::MyMathCli) -> MyMathResult<()> {
    match cli_args.command {
        Command::Area(measure_args) => {
            let result = shapes::compute_area_with_policy(
                &measure_args.shape,
                &DimensionSet::from(&measure_args.dimensions),
                DimensionPolicy::from_strict_flag(measure_args.strict),
            );
            println!("{}", form::area_message(&measure_args.shape, &result));
        },
        Command::Volume(measure_args) => {
            let result = shapes::compute_volume_with_policy(
                &measure_args.shape,
                &DimensionSet::from(&measure_args.dimensions),
                DimensionPolicy::from_strict_flag(measure_args.strict),
            );
            println!("{}", form::volume_message(&measure_args.shape, &result));
        },
        Command::Triplet(triplet_args) => {
            let is_triplet = conditions::is_pythagorean_triplet(triplet_args.a, triplet_args.b, triplet_args.c);
            println!("{}", form::triplet_message(is_triplet));
        },
        Command::Angle(angle_args) => {
            let pair = conditions::complementary_supplementary(angle_args.degrees);
            for message in form::angle_messages(&pair) {
                println!("{}", message);
            }
        },
        Command::Form{tab} => {
            let messages = match tab {
                FormCommand::Area(area_form) => vec![area_form.submit()],
                FormCommand::Volume(volume_form) => vec![volume_form.submit()],
                FormCommand::Condition(condition_form) => condition_form.submit(),
            };
            for message in messages {
                println!("{}", message);
            }
        },
        Command::Batch(batch_args) => {
            run_batch_command(&batch_args)?;
        },
        Command::Example(example_args) => {
            example::display_example(&example_args)?;
        },
        Command::List => {
            print_shape_list();
        },
    }
    Ok(())
}

/// Load a batch config, run it, and print or save the report.
fn run_batch_command(batch_args: &args::BatchArgs) -> MyMathResult<()> {
    log::info!("Loading batch config file: {}...", batch_args.cfg_file);
    let batch_cfg = batch::BatchCfg::from_cfg_file(&batch_args.cfg_file)?;

    let report = batch::run_batch(&batch_cfg);

    match &batch_args.output_path {
        Some(output_path) => {
            batch::save_report(&report, output_path)?;
            println!(
                "Saved report to {} ({} succeeded, {} failed)",
                output_path,
                report.succeeded,
                report.failed,
            );
        },
        None => {
            let report_str = batch::display_report(&report, batch_args.format)?;
            println!("{}", report_str.trim_end());
        },
    }
    Ok(())
}

fn print_shape_list() {
    println!("Area shapes:");
    for kind in PlaneKind::iter() {
        println!("    {} ({})", kind, kind.required_dimensions().iter().join(", "));
    }
    println!("Volume shapes:");
    for kind in SolidKind::iter() {
        println!("    {} ({})", kind, kind.required_dimensions().iter().join(", "));
    }
    println!("Conditions:");
    for condition in conditions::Condition::iter() {
        println!("    {}", condition);
    }
}
