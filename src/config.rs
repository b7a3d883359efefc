//! Workspace configuration persistence
//!
//! Stores layout constants and preferences in `~/.config/dockspace/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::panel::DEFAULT_TITLE_PADDING;

/// Button title styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Title font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Padding around the title (horizontal, vertical)
    #[serde(default = "default_padding")]
    pub padding: Size,
}

fn default_font_size() -> f32 {
    11.0
}

fn default_padding() -> Size {
    DEFAULT_TITLE_PADDING
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            padding: default_padding(),
        }
    }
}

/// Workspace configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Selected theme id (e.g., "default-light", "default-dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// The main area never shrinks below this while bars are resized
    #[serde(default = "default_main_view_minimum_size")]
    pub main_view_minimum_size: Size,

    /// Smallest thickness of an open bar
    #[serde(default = "default_minimum_dimension")]
    pub minimum_dimension: f32,

    #[serde(default = "default_separator_thickness")]
    pub separator_thickness: f32,

    /// Grab band next to an open bar's outer separator
    #[serde(default = "default_resize_handle")]
    pub resize_handle: f32,

    /// Resize drags snap to multiples of this
    #[serde(default = "default_drag_increment")]
    pub drag_increment: f32,

    #[serde(default)]
    pub button: ButtonConfig,
}

fn default_theme() -> String {
    "default-light".to_string()
}

fn default_main_view_minimum_size() -> Size {
    Size::new(100.0, 100.0)
}

fn default_minimum_dimension() -> f32 {
    50.0
}

fn default_separator_thickness() -> f32 {
    1.0
}

fn default_resize_handle() -> f32 {
    4.0
}

fn default_drag_increment() -> f32 {
    1.0
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            main_view_minimum_size: default_main_view_minimum_size(),
            minimum_dimension: default_minimum_dimension(),
            separator_thickness: default_separator_thickness(),
            resize_handle: default_resize_handle(),
            drag_increment: default_drag_increment(),
            button: ButtonConfig::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_constants() {
        let config = WorkspaceConfig::default();
        assert_eq!(config.minimum_dimension, 50.0);
        assert_eq!(config.separator_thickness, 1.0);
        assert_eq!(config.resize_handle, 4.0);
        assert_eq!(config.main_view_minimum_size, Size::new(100.0, 100.0));
        assert_eq!(config.button.padding, Size::new(8.0, 2.0));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: WorkspaceConfig = serde_yaml::from_str("minimum_dimension: 80\n").unwrap();
        assert_eq!(config.minimum_dimension, 80.0);
        assert_eq!(config.theme, "default-light");
        assert_eq!(config.button.font_size, 11.0);
    }

    #[test]
    fn test_nested_button_config() {
        let yaml = "button:\n  font_size: 13\n  padding:\n    width: 10\n    height: 3\n";
        let config: WorkspaceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.button.font_size, 13.0);
        assert_eq!(config.button.padding, Size::new(10.0, 3.0));
    }
}
