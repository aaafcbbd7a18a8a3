//! # tagsentinel core
//!
//! Unsupervised anomaly detection for RFID tag identifiers.
//!
//! A validator is fit once from identifiers known to be good. Each
//! identifier is reduced to six shape features, every feature gets an
//! independent Gaussian, and new identifiers are judged by their joint
//! log-likelihood against a threshold just below the worst training fit:
//!
//! - **features** — normalization and the six-feature extractor
//! - **gaussian** — per-feature Gaussian fit, scoring and threshold
//! - **validator** — verdicts with confidence and a diagnostic reason
//! - **negate** — the self/non-self detector trait
//!
//! ## Quick Start
//!
//! ```rust
//! use tagsentinel_core::prelude::*;
//!
//! let validator = TagValidator::new(["AB12CD34", "ab12cd34", "EF56GH78"]).unwrap();
//! assert_eq!(validator.training_size(), 2);
//!
//! assert!(validator.validate("AB12CD34").is_valid);
//! assert!(!validator.validate("!!!!!!!!").is_valid);
//! ```

pub mod error;
pub mod features;
pub mod gaussian;
pub mod negate;
pub mod prelude;
pub mod validator;

pub use error::{ModelError, Result};
pub use validator::{TagValidator, ValidationResult};
