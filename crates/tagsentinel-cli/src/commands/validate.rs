//! Validate ad-hoc identifiers against a training set.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tagsentinel_core::ValidationResult;

#[derive(Serialize)]
struct Line<'a> {
    rfid: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

pub fn run(training: &Path, ids: &[String], json: bool) -> Result<()> {
    if ids.is_empty() {
        bail!("No identifiers given. Usage: {}", "tagsentinel validate <ID>...".cyan());
    }

    let (_, validator) = super::load_validator(training)?;

    for rfid in ids {
        let result = validator.validate(rfid);
        if json {
            let line = serde_json::to_string(&Line { rfid: rfid.as_str(), result: &result })
                .context("Failed to serialize result")?;
            println!("{}", line);
            continue;
        }

        let (mark, verdict) = if result.is_valid {
            ("✓".green(), "VALID".green().bold())
        } else {
            ("✗".red(), "INVALID".red().bold())
        };
        println!(
            "{} {} -> {} (confidence: {:.4})",
            mark,
            rfid.cyan(),
            verdict,
            result.confidence
        );
        println!("    {}", result.reason.dimmed());
    }

    Ok(())
}
