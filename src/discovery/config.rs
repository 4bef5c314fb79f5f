//! Project configuration (hues.yaml) parsing.
//!
//! The config file supplies defaults for analysis and display options.
//! Command-line flags always take precedence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HueError, Result};

/// Analysis defaults loaded from hues.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of each hue group in degrees.
    pub group_size: i32,

    /// Maximum width of a colour bar in characters.
    pub bar_width: usize,

    /// Entries with a count at or below this are dropped from count-sorted output.
    pub min_count: u64,

    /// Percent step for percentile reports.
    pub increment: u32,

    /// Opt-in hue quantization step in degrees.
    pub hue_step: Option<f32>,

    /// Image file extensions picked up when scanning directories.
    pub extensions: Vec<String>,

    /// Patterns to exclude from scanning.
    pub excludes: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "bmp", "tga", "tiff", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: 30,
            bar_width: 40,
            min_count: 20,
            increment: 5,
            hue_step: None,
            extensions: default_extensions(),
            excludes: vec![],
        }
    }
}

impl Config {
    /// Load config from a hues.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HueError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| HueError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check hues.yaml syntax".to_string()),
        })
    }

    /// Check whether a file has one of the configured image extensions.
    pub fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
