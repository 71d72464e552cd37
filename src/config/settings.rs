//! User preference management with XDG Base Directory compliance.
//!
//! This module provides notification settings management with proper XDG
//! directory usage for the config file.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::notify::{disclosure::ModalBounds, toast::ToastAnchor};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable notification settings structure with default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifySettings {
    /// Whether stack-trace disclosure triggers are offered at all.
    pub show_stack_traces: bool,
    /// Fixed screen anchor of the shared toast instance.
    pub toast_anchor: ToastAnchor,
    /// Toast auto-dismissal delay in milliseconds.
    pub toast_timeout_ms: u32,
    /// Viewport clamp for the stack-trace modal.
    pub trace_modal: ModalBounds,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            show_stack_traces: true,
            toast_anchor: ToastAnchor::TopRight,
            toast_timeout_ms: 5000,
            trace_modal: ModalBounds::default(),
        }
    }
}

impl NotifySettings {
    /// Validates that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for out-of-range values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.toast_timeout_ms == 0 {
            return Err(SettingsError::InvalidValue {
                reason: "toast_timeout_ms must be nonzero".to_string(),
            });
        }

        for (name, pct) in [
            ("trace_modal.max_width_pct", self.trace_modal.max_width_pct),
            ("trace_modal.max_height_pct", self.trace_modal.max_height_pct),
        ] {
            if pct == 0 || pct > 100 {
                return Err(SettingsError::InvalidValue {
                    reason: format!("{name} must be between 1 and 100, got {pct}"),
                });
            }
        }

        Ok(())
    }
}

/// Handles loading, saving, and validation of notification preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe settings storage.
    settings: RwLock<NotifySettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl Clone for SettingsManager {
    fn clone(&self) -> Self {
        Self {
            settings: RwLock::new(self.settings.read().clone()),
            config_path: self.config_path.clone(),
        }
    }
}

impl SettingsManager {
    /// Creates a new settings manager with the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path (for testing).
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("Creating new default settings file: {:?}", config_path);
            NotifySettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, NotifySettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Validates, applies, and persists new settings.
    ///
    /// # Arguments
    ///
    /// * `new_settings` - New settings to apply.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the new settings are invalid or cannot be
    /// saved to disk.
    pub fn update_settings(&self, new_settings: NotifySettings) -> Result<(), SettingsError> {
        new_settings.validate()?;
        let mut settings_write = self.settings.write();
        *settings_write = new_settings;
        drop(settings_write);
        self.save_settings()
    }

    /// Saves the current settings to disk.
    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Ensures proper XDG directory usage for the config file.
///
/// # Returns
///
/// The path to the configuration file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("toastlink");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}
