use std::path::{Path, PathBuf};

use crate::egui_app::theme::ThemeName;
use crate::shared::config::{config_dir, ConfigError};

/// File name of the theme preference inside the config directory
pub const THEME_FILE_NAME: &str = "theme";

/// Persisted theme choice.
///
/// The file holds a single theme name. A missing, unreadable or unknown
/// value falls back to the default theme.
#[derive(Debug, Clone, Default)]
pub struct ThemePreference {
    path: Option<PathBuf>,
}

impl ThemePreference {
    /// `<config_dir>/localfetch/theme`, or no persistence if the platform
    /// has no config directory
    pub fn default_location() -> Self {
        Self {
            path: config_dir().map(|dir| dir.join(THEME_FILE_NAME)),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> ThemeName {
        let Some(path) = &self.path else {
            return ThemeName::default();
        };
        match std::fs::read_to_string(path) {
            Ok(contents) => contents.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring theme preference {}: {}", path.display(), e);
                ThemeName::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ThemeName::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                ThemeName::default()
            }
        }
    }

    pub fn save(&self, theme: ThemeName) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, format!("{}\n", theme.as_str()))?;
        Ok(())
    }
}
