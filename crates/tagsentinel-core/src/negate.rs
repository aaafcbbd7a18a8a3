//! NEGATE — anomaly detection by exclusion.
//!
//! The detector never sees examples of bad tags. It learns what "self"
//! looks like from normal identifiers (a finite, learnable space) and
//! flags everything that scores below the self-model's threshold.

/// A fitted self-model that scores observations by log-likelihood.
pub trait Negate {
    /// An observation that can be classified as self or non-self.
    type Observation: ?Sized;

    /// Log-likelihood of the observation under the self-model.
    fn log_likelihood(&self, observation: &Self::Observation) -> f64;

    /// Scores below this are non-self.
    fn threshold(&self) -> f64;

    /// Whether the observation belongs to self.
    fn is_self(&self, observation: &Self::Observation) -> bool {
        self.log_likelihood(observation) >= self.threshold()
    }
}
