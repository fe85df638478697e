//! Generator settings persistence.
//!
//! Settings are read from an explicit JSON file, or from `~/.sopa-de-letras/config.json`
//! when that file exists.

use crate::error::ExternalError;
use serde::{Deserialize, Serialize};
use sopa_core::GeneratorConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "sopa_de_letras.txt";

/// Everything needed for one run: generator parameters plus where to save the puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    /// Text file the rendered puzzle is written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            output: default_output(),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }
}

/// Get the user settings file path (`~/.sopa-de-letras/config.json`).
pub fn settings_path() -> Result<PathBuf, ExternalError> {
    let home = dirs::home_dir().ok_or(ExternalError::NoHomeDir)?;
    Ok(home.join(".sopa-de-letras").join("config.json"))
}

/// Resolve the settings for this run.
///
/// An explicit path must load; otherwise the user settings file is used when present, and
/// the built-in defaults when it is not.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ExternalError> {
    if let Some(path) = explicit {
        log::debug!("Loading settings from {}", path.display());
        return Settings::load(path);
    }

    match settings_path() {
        Ok(path) if path.exists() => {
            log::debug!("Loading settings from {}", path.display());
            Settings::load(path)
        }
        _ => Ok(Settings::default()),
    }
}
