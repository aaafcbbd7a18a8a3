//! Error types for model construction.
//!
//! Validation itself never fails: malformed identifiers produce an
//! "invalid" verdict instead of an error. The only fallible step is
//! fitting the model from a training corpus.

use thiserror::Error;

/// Result type for tagsentinel operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building or exporting a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Nothing left to fit after normalization and de-duplication.
    #[error("training set is empty after normalization ({supplied} entries supplied)")]
    EmptyTrainingSet { supplied: usize },

    /// Model summary could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub fn empty_training_set(supplied: usize) -> Self {
        ModelError::EmptyTrainingSet { supplied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_training_set_reports_supplied_count() {
        let err = ModelError::empty_training_set(3);
        assert_eq!(
            err.to_string(),
            "training set is empty after normalization (3 entries supplied)"
        );
    }
}
