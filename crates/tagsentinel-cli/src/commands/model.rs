//! Show the fitted model.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<()> {
    let (_, validator) = super::load_validator(path)?;
    let summary = validator.summary();

    if json {
        println!("{}", summary.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", "Gaussian Model".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!(
        "  Training set:      {} unique identifiers",
        summary.training_size.to_string().cyan()
    );
    println!();

    println!("{}", "Features".blue().bold());
    for f in &summary.features {
        println!(
            "  {:<16} mean={:<12.4} std={:.4}",
            f.name, f.mean, f.std_dev
        );
    }
    println!();

    println!("{}", "Decision".blue().bold());
    println!("  Min log-likelihood: {:.4}", summary.min_log_likelihood);
    println!("  Threshold:          {:.4}", summary.threshold);
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
