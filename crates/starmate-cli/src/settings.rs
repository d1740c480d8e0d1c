//! Settings and session persistence.
//!
//! Settings are read from `starmate.toml` in the platform config folder
//! (or from `--config`); the session is kept as JSON in the platform data
//! folder unless `session_file` points elsewhere.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starmate_client::{ClientConfig, DEFAULT_BASE_URL, Session};
use starmate_validate::{DEFAULT_MIN_PASSWORD_LENGTH, ValidationOptions};
use tracing::{debug, info};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "starmate";
const APP_NAME: &str = "starmate";
const CONFIG_FILENAME: &str = "starmate.toml";
const SESSION_FILENAME: &str = "session.json";

/// User settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API origin, without the `/api` path.
    pub api_base_url: String,
    /// Minimum password length for the login and register forms.
    pub min_password_length: usize,
    /// Where the session is stored; the platform data folder when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            session_file: None,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match default_settings_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                Some(path) => {
                    debug!(path = %path.display(), "no settings file, using defaults");
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse one TOML settings file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse settings {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write settings as TOML, creating parent folders.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        fs::write(path, content).with_context(|| format!("write settings {}", path.display()))?;
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions::default().with_min_password_length(self.min_password_length)
    }

    /// Resolved session file location.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(path) => Ok(path.clone()),
            None => default_session_path().context("could not determine the data directory"),
        }
    }
}

/// Default settings file path, if the platform has a config folder.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn default_session_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(SESSION_FILENAME))
}

/// Read the stored session. A missing file is an anonymous session.
pub fn load_session(path: &Path) -> Result<Session> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("parse session {}", path.display())),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Session::new()),
        Err(error) => {
            Err(error).with_context(|| format!("read session {}", path.display()))
        }
    }
}

/// Persist the session as JSON.
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(session).context("serialize session")?;
    fs::write(path, content).with_context(|| format!("write session {}", path.display()))?;
    debug!(path = %path.display(), "saved session");
    Ok(())
}

/// Delete the stored session; a missing file is not an error.
pub fn clear_session(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => {
            Err(error).with_context(|| format!("remove session {}", path.display()))
        }
    }
}
