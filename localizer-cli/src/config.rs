//! Run options: `localizer.toml` plus command-line overrides.
//!
//! ```toml
//! locales = ["fr", "de"]
//! import_mode = "streaming"
//! backup = false
//! ```

use localizer::{ImportMode, LocalizerOptions};
use std::path::{Path, PathBuf};

/// Config file looked up in the project directory when `--config` is not given.
pub const CONFIG_FILE: &str = "localizer.toml";

/// Options given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locales: Vec<String>,
    pub import_mode: Option<ImportMode>,
    pub no_backup: bool,
}

/// Parses config file content.
pub fn parse_options(text: &str) -> Result<LocalizerOptions, String> {
    toml::from_str(text).map_err(|e| e.to_string())
}

/// Reads the config file, if any.
///
/// An explicit path must exist. Without one, `<project>/localizer.toml` is
/// used when present and defaults apply otherwise.
pub fn load_options(explicit: Option<&Path>, project: &Path) -> Result<LocalizerOptions, String> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = project.join(CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(LocalizerOptions::default());
            }
            candidate
        }
    };

    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
    let options = parse_options(&text)
        .map_err(|e| format!("Invalid config '{}': {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), ?options, "loaded config");
    Ok(options)
}

pub fn apply_overrides(mut options: LocalizerOptions, overrides: Overrides) -> LocalizerOptions {
    if !overrides.locales.is_empty() {
        options.locales = overrides.locales;
    }
    if let Some(mode) = overrides.import_mode {
        options.import_mode = mode;
    }
    if overrides.no_backup {
        options.backup = false;
    }
    options
}
