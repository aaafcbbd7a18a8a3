//! Tag validator — the public entry point.
//!
//! Wraps a fitted [`GaussianModel`] and turns raw identifiers into
//! verdicts with a confidence score and a diagnostic reason.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::features::{extract_features, normalize, FeatureVector, NUM_FEATURES};
use crate::gaussian::{GaussianModel, GaussianParams, ModelSummary};
use crate::negate::Negate;

/// Temperature of the confidence sigmoid.
pub const CONFIDENCE_TEMPERATURE: f64 = 5.0;

/// Reason reported for blank input.
pub const EMPTY_INPUT_REASON: &str = "Empty or null value";

/// Verdict for a single identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Sigmoid of the scaled distance to the threshold, kept strictly
    /// inside (0, 1) even when the sigmoid saturates. Only blank input
    /// reports exactly 0.0.
    pub confidence: f64,
    pub reason: String,
}

impl ValidationResult {
    fn empty_input() -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            reason: EMPTY_INPUT_REASON.to_string(),
        }
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Confidence for a log-likelihood at `margin` above the threshold.
fn confidence_for(margin: f64) -> f64 {
    sigmoid(margin / CONFIDENCE_TEMPERATURE).clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

/// Anomaly detector for RFID tag identifiers.
///
/// Fitting happens once in [`TagValidator::new`]; afterwards the validator
/// is immutable and can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct TagValidator {
    model: GaussianModel,
}

impl TagValidator {
    /// Fit a validator from a training corpus of known-good identifiers.
    ///
    /// Entries are trimmed, upper-cased and de-duplicated first. Returns
    /// [`crate::ModelError::EmptyTrainingSet`] if nothing remains.
    pub fn new<I, S>(training: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            model: GaussianModel::fit(training)?,
        })
    }

    /// Validate a raw identifier.
    ///
    /// Never fails: blank input yields an invalid verdict with zero
    /// confidence.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return ValidationResult::empty_input();
        }

        let features = extract_features(&normalized);
        let log_likelihood = self.model.log_likelihood(&features);
        let threshold = self.model.threshold();
        let confidence = confidence_for(log_likelihood - threshold);
        let is_valid = log_likelihood >= threshold;

        let comparison = if is_valid { ">=" } else { "<" };
        let reason = format!(
            "log-likelihood={} {} threshold={}",
            log_likelihood, comparison, threshold
        );

        debug!(identifier = %normalized, is_valid, confidence, "Validated identifier");

        ValidationResult {
            is_valid,
            confidence,
            reason,
        }
    }

    /// Log-likelihood of a raw identifier, or `None` for blank input.
    pub fn log_likelihood(&self, raw: &str) -> Option<f64> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        Some(self.model.score(&extract_features(&normalized)))
    }

    /// Feature vector of a raw identifier after normalization.
    pub fn features(&self, raw: &str) -> FeatureVector {
        extract_features(&normalize(raw))
    }

    pub fn threshold(&self) -> f64 {
        self.model.threshold()
    }

    pub fn params(&self) -> &[GaussianParams; NUM_FEATURES] {
        self.model.params()
    }

    pub fn training_size(&self) -> usize {
        self.model.training_size()
    }

    pub fn model(&self) -> &GaussianModel {
        &self.model
    }

    pub fn summary(&self) -> ModelSummary {
        self.model.summary()
    }
}
