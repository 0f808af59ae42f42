use std::fs;
use std::path::PathBuf;

use clap::Args;
use decision_dss::engine::{DecisionEngine, DecisionRequest, EngineError};
use decision_dss::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a decision request JSON document
    pub(crate) request: PathBuf,
    /// Print the full response as JSON instead of a numbered ranking
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.request)?;
    let request: DecisionRequest = serde_json::from_str(&raw)?;

    let engine = DecisionEngine::new();
    let response = engine.evaluate(&request).map_err(|error| {
        if let EngineError::Validation(validation) = &error {
            for violation in &validation.violations {
                eprintln!("- {}: {}", violation.field, violation.message);
            }
        }
        AppError::from(error)
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", response.message);
    for (position, item) in response.ranking.iter().enumerate() {
        println!("{:>2}. {} ({:.6})", position + 1, item.alternative, item.score);
    }
    Ok(())
}
