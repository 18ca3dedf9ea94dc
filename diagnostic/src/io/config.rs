//! Optional diagnostic configuration stored in `diagnostic.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::MAX_WIDTH;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "diagnostic.toml";

/// Diagnostic configuration (TOML).
///
/// Every field is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticConfig {
    /// Width every reading must have. Unset: the first reading decides.
    pub width: Option<usize>,

    /// Render JSON instead of text unless the command says otherwise.
    pub json: bool,
}

impl DiagnosticConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.width {
            if width == 0 {
                return Err(anyhow!("width must be > 0"));
            }
            if width > MAX_WIDTH {
                return Err(anyhow!("width must be <= {MAX_WIDTH}, got {width}"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DiagnosticConfig::default()`.
pub fn load_config(path: &Path) -> Result<DiagnosticConfig> {
    if !path.exists() {
        return Ok(DiagnosticConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DiagnosticConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Load a config file the user named explicitly; unlike [`load_config`], a
/// missing file is an error.
pub fn require_config(path: &Path) -> Result<DiagnosticConfig> {
    if !path.exists() {
        return Err(anyhow!("config file {} not found", path.display()));
    }
    load_config(path)
}
