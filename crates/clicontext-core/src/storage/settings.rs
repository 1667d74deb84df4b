//! TOML-backed settings for opening a [`Store`](super::store::Store).
//!
//! [`StoreSettings`] is the on-disk form of the [`StoreOption`] set:
//!
//! ```toml
//! directory = "/home/me/.config/clicontext/contexts"
//! disable_symlinks = true
//! ```
//!
//! Both keys are optional.  When `directory` is absent the platform default
//! is used:
//! - Windows:  `%APPDATA%\clicontext\contexts`
//! - Linux:    `$XDG_CONFIG_HOME/clicontext/contexts` or `~/.config/clicontext/contexts`
//! - macOS:    `~/Library/Application Support/clicontext/contexts`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::store::StoreOption;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings controlling where and how contexts are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    /// Base directory for context files.  `None` means the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Write the default indicator as a plain file instead of a symlink.
    #[serde(default)]
    pub disable_symlinks: bool,
}

impl StoreSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from `path`, returning the defaults if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] for file-system errors other than "not
    /// found", and [`SettingsError::Parse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// The configured directory, or the platform default when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoPlatformConfigDir`] when no directory is
    /// configured and the platform default cannot be determined.
    pub fn resolve_directory(&self) -> Result<PathBuf, SettingsError> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => default_context_dir(),
        }
    }

    /// Converts the settings into options for [`Store::new`](super::store::Store::new).
    pub fn to_options(&self) -> Result<Vec<StoreOption>, SettingsError> {
        Ok(vec![
            StoreOption::Directory(self.resolve_directory()?),
            StoreOption::DisableSymlinks(self.disable_symlinks),
        ])
    }
}

/// Platform default directory for context files.
pub fn default_context_dir() -> Result<PathBuf, SettingsError> {
    platform_config_dir()
        .map(|base| base.join("contexts"))
        .ok_or(SettingsError::NoPlatformConfigDir)
}

/// Default location of the settings file itself.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    platform_config_dir()
        .map(|base| base.join("settings.toml"))
        .ok_or(SettingsError::NoPlatformConfigDir)
}

/// Resolves the per-application config directory (`.../clicontext`).
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("clicontext"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("clicontext"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("clicontext")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_symlinks_and_platform_dir() {
        let settings = StoreSettings::default();
        assert!(settings.directory.is_none());
        assert!(!settings.disable_symlinks);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = StoreSettings::from_toml_str("").expect("parse empty");
        assert_eq!(settings, StoreSettings::default());
    }

    #[test]
    fn test_full_toml_is_parsed() {
        // Arrange
        let text = r#"
directory = "/srv/ctx"
disable_symlinks = true
"#;

        // Act
        let settings = StoreSettings::from_toml_str(text).expect("parse");

        // Assert
        assert_eq!(settings.directory, Some(PathBuf::from("/srv/ctx")));
        assert!(settings.disable_symlinks);
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let err = StoreSettings::from_toml_str("[[[ not valid toml").expect_err("must fail");
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_returns_default_when_file_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = StoreSettings::load(&dir.path().join("settings.toml")).expect("load");
        assert_eq!(settings, StoreSettings::default());
    }

    #[test]
    fn test_save_and_load_round_trip_via_temp_dir() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let settings = StoreSettings {
            directory: Some(dir.path().join("contexts")),
            disable_symlinks: true,
        };

        // Act
        std::fs::write(&path, toml::to_string_pretty(&settings).expect("serialize"))
            .expect("write");
        let loaded = StoreSettings::load(&path).expect("load");

        // Assert
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_to_options_uses_configured_directory() {
        let settings = StoreSettings {
            directory: Some(PathBuf::from("/srv/ctx")),
            disable_symlinks: true,
        };
        assert_eq!(
            settings.to_options().expect("options"),
            vec![
                StoreOption::Directory(PathBuf::from("/srv/ctx")),
                StoreOption::DisableSymlinks(true),
            ]
        );
    }

    #[test]
    fn test_default_context_dir_ends_with_contexts() {
        // The platform directory may be unavailable in a stripped environment.
        if let Ok(dir) = default_context_dir() {
            assert!(dir.ends_with("clicontext/contexts"), "got {dir:?}");
        }
    }
}
