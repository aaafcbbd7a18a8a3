//! Convenient imports for common usage.
//!
//! ```rust
//! use tagsentinel_core::prelude::*;
//! ```

pub use crate::features::{
    extract_features, normalize, FeatureVector, HEX_PARSE_MAX_LEN, NUM_FEATURES,
};

pub use crate::gaussian::{
    FeatureSummary, GaussianModel, GaussianParams, ModelSummary, FEATURE_NAMES, MIN_STD_DEV,
    THRESHOLD_MARGIN,
};

pub use crate::validator::{
    TagValidator, ValidationResult, CONFIDENCE_TEMPERATURE, EMPTY_INPUT_REASON,
};

pub use crate::negate::Negate;

pub use crate::error::{ModelError, Result};
