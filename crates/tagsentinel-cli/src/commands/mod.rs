//! CLI command implementations.

pub mod init;
pub mod model;
pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use tagsentinel_core::TagValidator;

use crate::config::TestData;

/// Load the test data at `path` and fit a validator on its training set.
pub(crate) fn load_validator(path: &Path) -> Result<(TestData, TagValidator)> {
    let data = TestData::load(path)?;
    let validator = TagValidator::new(&data.normal_rfids)
        .with_context(|| format!("Cannot build model from {}", path.display()))?;
    Ok((data, validator))
}
