use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Env var naming an optional JSON config file.
pub const CONFIG_ENV: &str = "COMPACT_HARNESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Suite name printed in front of every report line.
    pub name: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            name: "compact".into(),
            log_level: "warn".into(),
        }
    }
}

impl HarnessConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid harness config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading harness config {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Load from the file named by [`CONFIG_ENV`], or defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var_os(CONFIG_ENV))
    }

    /// Load from an already-read value of [`CONFIG_ENV`].
    pub fn from_env_value(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The loaded config, or defaults when loading failed.
    pub fn or_default(loaded: &Result<Self>) -> Self {
        loaded.as_ref().cloned().unwrap_or_default()
    }
}
