use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tci::error::AppError;
use tci::inventory::{Dimension, ItemCatalog, ResponseMap, ScoringEngine};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file mapping item id to response (1-5)
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Print the raw calculated result as JSON instead of the breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

/// Score a saved response map and print the outcome, mirroring what the
/// result page renders.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.responses)?;
    let responses: ResponseMap = serde_json::from_str(&raw)?;

    let engine = ScoringEngine::new(Arc::new(ItemCatalog::standard()));
    let result = engine.score(Some(&responses))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Validity check: {}", if result.validity.all_valid { "PASS" } else { "FAIL" });
    for detail in &result.validity.details {
        let actual = detail
            .actual
            .map(|value| value.to_string())
            .unwrap_or_else(|| "no response".to_string());
        let verdict = if detail.valid { "ok" } else { "failed" };
        println!(
            "  item {:>3}: expected {}, got {} ({verdict})",
            detail.item, detail.expected, actual
        );
    }

    println!();
    for dimension in Dimension::ALL {
        let total = result.dimension_scores[&dimension];
        let percent = (f64::from(total) / f64::from(dimension.display_max()) * 100.0).round();
        println!("{} {}: {total}/{} ({percent}%)", dimension, dimension.label(), dimension.display_max());
        for &member in dimension.subdimensions() {
            let subtotal = result.subdimension_scores.get(&member).copied().unwrap_or(0);
            println!("  {member} {}: {subtotal}", member.label());
        }
    }

    Ok(())
}
