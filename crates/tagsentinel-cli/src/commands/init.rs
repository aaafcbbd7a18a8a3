//! Initialize a tagsentinel project with sample data.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{Settings, TestData, DEFAULT_TEST_PATH, SETTINGS_FILE};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    println!("{} Initializing tagsentinel project...", "→".blue());
    let created = scaffold(&base_path)?;
    for file in &created {
        println!("  {} Created {}", "✓".green(), file.display());
    }
    if created.is_empty() {
        println!("  {} Nothing to do, files already exist", "•".yellow());
    }

    println!();
    println!("Next steps:");
    println!("  {} tagsentinel run", "1.".blue());
    println!("  {} tagsentinel model", "2.".blue());
    println!("  {} tagsentinel validate <ID>", "3.".blue());

    Ok(())
}

/// Write the sample test data and settings under `base`, skipping existing
/// files. Returns the files created.
pub fn scaffold(base: &Path) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let data_path = base.join(DEFAULT_TEST_PATH);
    if !data_path.exists() {
        if let Some(parent) = data_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        TestData::sample().save(&data_path)?;
        created.push(data_path);
    }

    let settings_path = base.join(SETTINGS_FILE);
    if !settings_path.exists() {
        Settings::default().save(&settings_path)?;
        created.push(settings_path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scaffold_writes_loadable_files_once() {
        let dir = tempdir().unwrap();

        let first = scaffold(dir.path()).unwrap();
        assert_eq!(first.len(), 2);

        let data = TestData::load(&dir.path().join(DEFAULT_TEST_PATH)).unwrap();
        assert_eq!(data, TestData::sample());
        assert!(Settings::load_from(&dir.path().join(SETTINGS_FILE)).is_ok());

        let second = scaffold(dir.path()).unwrap();
        assert!(second.is_empty(), "existing files must not be overwritten");
    }

    #[test]
    fn sample_data_fits_a_model() {
        let sample = TestData::sample();
        let validator = tagsentinel_core::TagValidator::new(&sample.normal_rfids).unwrap();
        assert!(!validator.validate("!!!!!!!!").is_valid);
    }
}
