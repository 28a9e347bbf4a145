// File: src/config.rs
// Purpose: Scanner configuration, loaded from `asterism.toml` or built in code

use std::path::Path;

use serde::Deserialize;

/// Scanner configuration.
///
/// Assembled once at scan start (defaults merged with caller overrides)
/// and passed by reference through the whole pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Root subdirectory to scan, relative to the project root.
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,
    /// File suffixes eligible for classification.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob rules removed before classification (`*`, `?`, `**`).
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Stem marker identifying island files.
    #[serde(default = "default_island_suffix")]
    pub island_suffix: String,
}

fn default_routes_dir() -> String {
    "routes".into()
}

fn default_extensions() -> Vec<String> {
    vec![".rsx".into(), ".rs".into()]
}

fn default_island_suffix() -> String {
    ".island".into()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            island_suffix: default_island_suffix(),
        }
    }
}

impl ScanConfig {
    /// Load from `asterism.toml` in the current directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from("asterism.toml")
    }

    /// Load from a specific path.
    /// Returns the default config if the file doesn't exist; a file that
    /// fails to parse logs a warning and falls back to defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Whether a file's extension makes it eligible for classification.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.') == ext)
    }
}
