//! Configuration management for the tagsentinel CLI.
//!
//! Two files are involved: the JSON test-data file holding the training
//! and test identifiers, and an optional `tagsentinel.toml` with CLI
//! settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Test-data path used when neither the command line nor settings name one.
pub const DEFAULT_TEST_PATH: &str = "test/test_data.json";

/// Settings file name searched for in the current and parent directories.
pub const SETTINGS_FILE: &str = "tagsentinel.toml";

/// Training and test identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    /// Known-good identifiers the model is fit on.
    pub normal_rfids: Vec<String>,
    /// Identifiers expected to validate.
    pub test_normal: Vec<String>,
    /// Identifiers expected to be flagged.
    pub test_anomaly: Vec<String>,
}

impl TestData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize test data")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write test data: {}", path.display()))?;
        Ok(())
    }

    /// Small EPC-style data set written by `tagsentinel init`.
    pub fn sample() -> Self {
        Self {
            normal_rfids: strings(&[
                "E2801160600002054CF1A2B3",
                "E2801160600002054CF1A2B4",
                "E2801160600002054CF1A2C7",
                "e2801160600002054cf1a2d9",
                "E28011606000020A1B2C3D4E",
                "E28011606000020A1B2C3D5F",
            ]),
            test_normal: strings(&["E2801160600002054CF1A2E1", "e28011606000020a1b2c3d6a"]),
            test_anomaly: strings(&["", "!!!!!!!!", "AAAAAAAAAAAAAAAAAAAAAAAA", "12", "hello world"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// CLI settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub output: OutputSettings,
    /// Directory of the settings file; relative paths resolve against it.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Print reasons for normal-case results too.
    #[serde(default)]
    pub show_reason: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_path() -> PathBuf { PathBuf::from(DEFAULT_TEST_PATH) }
fn default_color() -> bool { true }

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            show_reason: false,
            color: default_color(),
        }
    }
}

impl Settings {
    /// Load settings from tagsentinel.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Self::discover(&cwd)
    }

    /// Load settings from tagsentinel.toml in `start` or its parents.
    pub fn discover(start: &Path) -> Result<Self> {
        match find_settings_file(start) {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        settings.base_dir = path.parent().map(Path::to_path_buf);
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;
        Ok(())
    }

    /// The explicit path if given, otherwise the configured one.
    ///
    /// A relative configured path is taken relative to the settings file.
    pub fn data_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }
        match &self.base_dir {
            Some(base) if self.data.path.is_relative() => base.join(&self.data.path),
            _ => self.data.path.clone(),
        }
    }
}

/// Find tagsentinel.toml in `start` or any of its parents.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
