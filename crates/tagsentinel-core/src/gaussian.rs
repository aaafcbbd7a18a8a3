//! Gaussian density model over identifier features.
//!
//! Each feature is modelled as an independent normal distribution whose
//! mean and standard deviation are estimated once from the training corpus.
//! The joint log-likelihood is the plain sum of the per-feature log
//! densities (naive independence, no covariance, no class priors).

use std::collections::HashSet;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ModelError, Result};
use crate::features::{extract_features, normalize, FeatureVector, NUM_FEATURES};
use crate::negate::Negate;

/// Human-readable names, in feature-vector order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Length",
    "Distinct Chars",
    "Entropy",
    "Numeric Value",
    "Letter Ratio",
    "Repeat Ratio",
];

/// Floor applied to every fitted standard deviation.
pub const MIN_STD_DEV: f64 = 0.1;

/// Distance below the worst training log-likelihood where the threshold sits.
pub const THRESHOLD_MARGIN: f64 = 1.0;

/// Fitted normal distribution for a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl GaussianParams {
    pub fn log_pdf(&self, x: f64) -> f64 {
        log_gaussian_pdf(x, self.mean, self.std_dev)
    }
}

/// Log of the normal density N(mean, std_dev²) at `x`.
pub fn log_gaussian_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    -0.5 * (2.0 * PI).ln() - std_dev.ln() - 0.5 * z * z
}

/// Normalize every entry and drop blanks and repeats.
///
/// First occurrences win and keep their relative order.
pub fn unique_normalized<I, S>(corpus: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for raw in corpus {
        let normalized = normalize(raw.as_ref());
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }
    unique
}

/// Per-feature Gaussian parameters plus the decision threshold.
#[derive(Debug, Clone)]
pub struct GaussianModel {
    params: [GaussianParams; NUM_FEATURES],
    min_log_likelihood: f64,
    threshold: f64,
    training_size: usize,
}

impl GaussianModel {
    /// Fit the model from a raw training corpus.
    ///
    /// Fails with [`ModelError::EmptyTrainingSet`] when nothing survives
    /// normalization and de-duplication.
    pub fn fit<I, S>(corpus: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut supplied = 0usize;
        let unique = unique_normalized(corpus.into_iter().inspect(|_| supplied += 1));

        if unique.is_empty() {
            return Err(ModelError::empty_training_set(supplied));
        }
        debug!(supplied, unique = unique.len(), "Deduplicated training corpus");

        let features: Vec<FeatureVector> = unique.iter().map(|s| extract_features(s)).collect();
        let params = fit_params(&features);

        info!("Learning Gaussian distribution from training data");
        for (name, p) in FEATURE_NAMES.iter().zip(params.iter()) {
            info!("  {}: mean={}, std={}", name, p.mean, p.std_dev);
        }

        let mut model = Self {
            params,
            min_log_likelihood: 0.0,
            threshold: 0.0,
            training_size: unique.len(),
        };

        let min_ll = features
            .iter()
            .map(|f| model.score(f))
            .fold(f64::INFINITY, f64::min);
        model.min_log_likelihood = min_ll;
        model.threshold = min_ll - THRESHOLD_MARGIN;

        info!(
            "Min log-likelihood: {}, Threshold: {}",
            model.min_log_likelihood, model.threshold
        );
        Ok(model)
    }

    /// Joint log-likelihood of a feature vector.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        self.params
            .iter()
            .zip(features.iter())
            .map(|(p, x)| p.log_pdf(x))
            .sum()
    }

    pub fn params(&self) -> &[GaussianParams; NUM_FEATURES] {
        &self.params
    }

    /// Parameters of a feature looked up by its name.
    pub fn param(&self, name: &str) -> Option<&GaussianParams> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| &self.params[i])
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Worst log-likelihood seen among the training examples.
    pub fn min_log_likelihood(&self) -> f64 {
        self.min_log_likelihood
    }

    /// Number of unique normalized identifiers the model was fit on.
    pub fn training_size(&self) -> usize {
        self.training_size
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            features: FEATURE_NAMES
                .iter()
                .zip(self.params.iter())
                .map(|(name, p)| FeatureSummary {
                    name: name.to_string(),
                    mean: p.mean,
                    std_dev: p.std_dev,
                })
                .collect(),
            min_log_likelihood: self.min_log_likelihood,
            threshold: self.threshold,
            training_size: self.training_size,
        }
    }
}

impl Negate for GaussianModel {
    type Observation = FeatureVector;

    fn log_likelihood(&self, observation: &FeatureVector) -> f64 {
        self.score(observation)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Population mean and floored standard deviation, per feature.
fn fit_params(features: &[FeatureVector]) -> [GaussianParams; NUM_FEATURES] {
    let n = features.len() as f64;
    std::array::from_fn(|f| {
        let (sum, sum_sq) = features
            .iter()
            .fold((0.0, 0.0), |(sum, sum_sq), v| (sum + v[f], sum_sq + v[f] * v[f]));
        let mean = sum / n;
        // Cancellation can leave a tiny negative variance.
        let variance = (sum_sq / n - mean * mean).max(0.0);
        GaussianParams {
            mean,
            std_dev: variance.sqrt().max(MIN_STD_DEV),
        }
    })
}

/// Serializable snapshot of a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub features: Vec<FeatureSummary>,
    pub min_log_likelihood: f64,
    pub threshold: f64,
    pub training_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
}

impl ModelSummary {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
