use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DupsError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_NGRAM_SIZE: usize = 3;
pub const DEFAULT_CELL_SIZE: u32 = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupsConfig {
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub ngram: NgramConfig,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Minimum score reported by thresholded comparisons.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_true")]
    pub remove_stop_words: bool,
    /// Worker pool size; `None` uses the global pool.
    #[serde(default)]
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramConfig {
    #[serde(default = "default_ngram_size")]
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Edge length of one matrix cell, in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

fn default_threshold() -> f64 { DEFAULT_THRESHOLD }
fn default_true() -> bool { true }
fn default_ngram_size() -> usize { DEFAULT_NGRAM_SIZE }
fn default_cell_size() -> u32 { DEFAULT_CELL_SIZE }
fn default_log_level() -> String { "warn".into() }

impl Default for DupsConfig {
    fn default() -> Self {
        Self {
            compare: CompareConfig::default(),
            ngram: NgramConfig::default(),
            heatmap: HeatmapConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            remove_stop_words: true,
            workers: None,
        }
    }
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self { size: DEFAULT_NGRAM_SIZE }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self { cell_size: DEFAULT_CELL_SIZE }
    }
}

impl DupsConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `<config_dir>/dups/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dups").join("config.json"))
    }

    /// Load from `explicit` if given, else from the default path when that
    /// file exists, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.compare.threshold) {
            return Err(DupsError::InvalidConfig(format!(
                "compare.threshold must be within [0, 1], got {}",
                self.compare.threshold
            )));
        }
        if self.compare.workers == Some(0) {
            return Err(DupsError::InvalidConfig("compare.workers must be at least 1".into()));
        }
        if self.ngram.size == 0 {
            return Err(DupsError::InvalidConfig("ngram.size must be at least 1".into()));
        }
        if self.heatmap.cell_size == 0 {
            return Err(DupsError::InvalidConfig("heatmap.cell_size must be at least 1".into()));
        }
        Ok(())
    }
}
