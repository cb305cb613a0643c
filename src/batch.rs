mod cfg;

use serde::Serialize;

use crate::conditions::{
    self,
    AngleValue,
};
use crate::io::{
    self,
    Format,
};
use crate::shapes::{
    self,
    DimensionPolicy,
    DimensionSet,
};

// Re-export cfg handling
pub use cfg::{
    BatchCfg,
    Calculation,
};

/// Result of one batch calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Area {
        shape: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        area: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Volume {
        shape: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        volume: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Triplet {
        a: f64,
        b: f64,
        c: f64,
        is_triplet: bool,
    },
    Angle {
        degrees: f64,
        complementary: AngleValue,
        supplementary: AngleValue,
    },
}
impl Outcome {
    /// Run a single calculation.
    pub fn evaluate(calculation: &Calculation, policy: DimensionPolicy) -> Self {
        match calculation {
            Calculation::Area{shape, dimensions} => {
                let result = shapes::compute_area_with_policy(shape, &DimensionSet::from(dimensions), policy);
                let (area, error) = split_result(result);
                Outcome::Area{shape: shape.clone(), area, error}
            },
            Calculation::Volume{shape, dimensions} => {
                let result = shapes::compute_volume_with_policy(shape, &DimensionSet::from(dimensions), policy);
                let (volume, error) = split_result(result);
                Outcome::Volume{shape: shape.clone(), volume, error}
            },
            Calculation::Triplet{a, b, c} => Outcome::Triplet{
                a: *a,
                b: *b,
                c: *c,
                is_triplet: conditions::is_pythagorean_triplet(*a, *b, *c),
            },
            Calculation::Angle{degrees} => {
                let pair = conditions::complementary_supplementary(*degrees);
                Outcome::Angle{
                    degrees: *degrees,
                    complementary: pair.complementary,
                    supplementary: pair.supplementary,
                }
            },
        }
    }

    /// Whether the calculation failed (unsupported shape or rejected dimension).
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Area{error: Some(_), ..} | Outcome::Volume{error: Some(_), ..})
    }
}

/// Report for a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub policy: DimensionPolicy,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<Outcome>,
}

/// Run every calculation of a batch, in order.
/// Failed calculations are recorded in the report and do not stop the batch.
pub fn run_batch(batch_cfg: &BatchCfg) -> BatchReport {
    let total = batch_cfg.calculations.len();
    let mut outcomes = Vec::with_capacity(total);

    for (calc_id, calculation) in batch_cfg.calculations.iter().enumerate() {
        log::info!("Calculation {}/{}: {:?}", calc_id + 1, total, calculation);
        let outcome = Outcome::evaluate(calculation, batch_cfg.policy);
        if outcome.is_error() {
            log::warn!("Calculation {}/{} failed: {:?}", calc_id + 1, total, outcome);
        }
        outcomes.push(outcome);
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_error()).count();
    BatchReport{
        policy: batch_cfg.policy,
        succeeded: total - failed,
        failed,
        outcomes,
    }
}

/// Render a batch report in the given format.
pub fn display_report(report: &BatchReport, format: Format) -> io::IoResult<String> {
    io::to_format_string(report, format)
}

/// Save a batch report, with the format taken from the output path's extension.
pub fn save_report(report: &BatchReport, output_path: &str) -> io::IoResult<()> {
    io::write_cfg_file(output_path, report)
}

fn split_result(result: shapes::ProcResult<f64>) -> (Option<f64>, Option<String>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(error) => (None, Some(error.to_string())),
    }
}
