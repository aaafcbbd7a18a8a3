//! Run the normal and anomaly test lists against a freshly fit model.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tagsentinel_core::{TagValidator, ValidationResult};
use tracing::info;

use crate::config::{Settings, TestData};

/// One identifier and its verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedTag {
    pub rfid: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Outcome of a full test run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub training_size: usize,
    pub threshold: f64,
    pub normal: Vec<CheckedTag>,
    pub anomaly: Vec<CheckedTag>,
    /// Anomaly-list entries flagged invalid.
    pub detected: usize,
    /// Percentage of the anomaly list detected; `None` when it is empty.
    pub detection_rate: Option<f64>,
}

impl Report {
    pub fn build(validator: &TagValidator, data: &TestData) -> Self {
        let check = |rfid: &String| CheckedTag {
            rfid: rfid.clone(),
            result: validator.validate(rfid),
        };

        let normal: Vec<CheckedTag> = data.test_normal.iter().map(check).collect();
        let anomaly: Vec<CheckedTag> = data.test_anomaly.iter().map(check).collect();
        let detected = anomaly.iter().filter(|c| !c.result.is_valid).count();
        let detection_rate = if anomaly.is_empty() {
            None
        } else {
            Some(100.0 * detected as f64 / anomaly.len() as f64)
        };

        Self {
            training_size: validator.training_size(),
            threshold: validator.threshold(),
            normal,
            anomaly,
            detected,
            detection_rate,
        }
    }

    /// Normal-list entries that were wrongly flagged.
    pub fn false_positives(&self) -> usize {
        self.normal.iter().filter(|c| !c.result.is_valid).count()
    }
}

pub fn run(path: &Path, settings: &Settings, json: bool) -> Result<()> {
    info!("Loaded config from: {}", path.display());
    let (data, validator) = super::load_validator(path)?;
    let report = Report::build(&validator, &data);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(());
    }

    print_report(&report, settings);
    Ok(())
}

fn verdict(result: &ValidationResult) -> colored::ColoredString {
    if result.is_valid {
        "VALID".green()
    } else {
        "INVALID".red()
    }
}

fn print_report(report: &Report, settings: &Settings) {
    println!("{}", "RFID Anomaly Detector".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!(
        "  Training set:  {} unique identifiers",
        report.training_size.to_string().cyan()
    );
    println!("  Threshold:     {:.4}", report.threshold);
    println!();

    println!("{}", "Normal RFIDs".blue().bold());
    for c in &report.normal {
        println!(
            "  {} -> {} (confidence: {:.4})",
            c.rfid.white(),
            verdict(&c.result),
            c.result.confidence
        );
        if settings.output.show_reason {
            println!("      {}", c.result.reason.dimmed());
        }
    }
    println!();

    println!("{}", "Anomaly RFIDs".blue().bold());
    for c in &report.anomaly {
        println!(
            "  {} -> {} ({})",
            format!("{:?}", c.rfid).white(),
            verdict(&c.result),
            c.result.reason.dimmed()
        );
    }
    println!();

    println!("{}", "Summary".blue().bold());
    match report.detection_rate {
        Some(rate) => println!(
            "  Anomaly detection rate: {}/{} ({:.1}%)",
            report.detected.to_string().green(),
            report.anomaly.len(),
            rate
        ),
        None => println!("  {} No anomaly tests were run.", "•".yellow()),
    }
    let fp = report.false_positives();
    if fp > 0 {
        println!(
            "  {} {} normal RFIDs flagged as anomalous",
            "!".yellow(),
            fp.to_string().yellow()
        );
    }
    println!("{}", "═".repeat(40).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(anomaly: &[&str]) -> TestData {
        TestData {
            normal_rfids: vec!["AB12CD34".into(), "ab12cd34".into(), "EF56GH78".into()],
            test_normal: vec!["AB12CD34".into(), " ef56gh78 ".into()],
            test_anomaly: anomaly.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn report_counts_detected_anomalies() {
        let data = data(&["", "!!!!!!!!", "AAAAAAAA", "AB12CD34"]);
        let validator = TagValidator::new(&data.normal_rfids).unwrap();
        let report = Report::build(&validator, &data);

        assert_eq!(report.training_size, 2);
        assert_eq!(report.detected, 3, "known-good tag in anomaly list stays valid");
        assert_eq!(report.detection_rate, Some(75.0));
        assert_eq!(report.false_positives(), 0);
    }

    #[test]
    fn empty_anomaly_list_has_no_rate() {
        let data = data(&[]);
        let validator = TagValidator::new(&data.normal_rfids).unwrap();
        let report = Report::build(&validator, &data);
        assert_eq!(report.detected, 0);
        assert!(report.detection_rate.is_none());
    }

    #[test]
    fn report_json_flattens_results() {
        let data = data(&["!!!!!!!!"]);
        let validator = TagValidator::new(&data.normal_rfids).unwrap();
        let json = serde_json::to_value(Report::build(&validator, &data)).unwrap();

        assert_eq!(json["anomaly"][0]["rfid"], "!!!!!!!!");
        assert_eq!(json["anomaly"][0]["isValid"], false);
        assert_eq!(json["detectionRate"], 100.0);
    }
}
