//! Persistent defaults for the command line.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.smartcard-compare.Smartcard-Compare/
//! - Windows: %APPDATA%/smartcard-compare/config/
//! - Linux: ~/.config/smartcard-compare/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scc_ingest::DEFAULT_ID_KEYWORD;
use scc_output::DEFAULT_ID_HEADER;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "smartcard-compare";
const APP_NAME: &str = "Smartcard Compare";
const CONFIG_FILENAME: &str = "settings.toml";

/// Default folder for the identifier downloads.
pub const DEFAULT_OUTPUT_DIR: &str = "smartcard-output";

/// Default number of identifiers shown per preview table.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// User defaults. Command-line flags override every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder the three identifier CSVs are written to.
    pub output_dir: PathBuf,
    /// Header of the identifier column in each download.
    pub id_header: String,
    /// Keyword used to guess the smartcard column.
    pub column_keyword: String,
    /// Identifiers shown per preview table.
    pub preview_rows: usize,
    /// Infer numeric CSV column types.
    pub infer_types: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            id_header: DEFAULT_ID_HEADER.to_string(),
            column_keyword: DEFAULT_ID_KEYWORD.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            infer_types: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the settings directory")]
    NoConfigDir,
    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `explicit`, or from the default location.
///
/// Returns default settings if the file is missing or cannot be parsed.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to parse settings file: {e}, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            tracing::debug!(path = %path.display(), "no settings file found, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read settings file: {e}, using defaults");
            Settings::default()
        }
    }
}

/// Parses settings from TOML text. Missing keys take their defaults.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

/// Saves settings to the default location.
pub fn save_default_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings(settings, &path)?;
    Ok(path)
}
