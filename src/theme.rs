//! Theme system for the workspace chrome
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/dockspace/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};

// Embed theme YAML files at compile time
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/dockspace/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    /// Display name from YAML (e.g., "Default Light")
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<WorkspaceTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    WorkspaceTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<WorkspaceTheme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    WorkspaceTheme::from_builtin(id)
}

/// List all available themes, user themes overriding builtins with the same id
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let name = from_file(&path)
                        .map(|t| t.name)
                        .unwrap_or_else(|_| id.to_string());
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = WorkspaceTheme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// "#RRGGBB", or "#RRGGBBAA" when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub workspace: WorkspaceThemeData,
    pub bar: BarThemeData,
    #[serde(default)]
    pub button: ButtonThemeData,
    #[serde(default)]
    pub toolbar: ToolbarThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceThemeData {
    pub foreground: String,
    pub background: String,
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BarThemeData {
    pub background: String,
    #[serde(default)]
    pub focus_ring: Option<String>,
}

/// Button colors (optional, default to transparent / separator)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ButtonThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ToolbarThemeData {
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

/// Resolved workspace colors
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceTheme {
    pub name: String,
    /// Button titles
    pub foreground: Color,
    /// Main area fill when no tool covers it
    pub background: Color,
    /// Inner and outer bar separators
    pub separator: Color,
    pub bar_background: Color,
    /// Outline of the docking preview bar
    pub bar_focus_ring: Color,
    pub button_background: Color,
    /// Selected or hovered buttons
    pub button_highlight: Color,
    /// Tool-provided toolbars inside open panels
    pub toolbar_foreground: Color,
    pub toolbar_background: Color,
}

fn optional_color(value: Option<&String>, fallback: Color) -> Result<Color, String> {
    Ok(value
        .map(|s| Color::from_hex(s))
        .transpose()?
        .unwrap_or(fallback))
}

impl WorkspaceTheme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        WorkspaceTheme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let defaults = Self::fallback();
        let separator = Color::from_hex(&data.workspace.separator)?;

        Ok(WorkspaceTheme {
            name: data.name,
            foreground: Color::from_hex(&data.workspace.foreground)?,
            background: Color::from_hex(&data.workspace.background)?,
            separator,
            bar_background: Color::from_hex(&data.bar.background)?,
            bar_focus_ring: optional_color(data.bar.focus_ring.as_ref(), defaults.bar_focus_ring)?,
            button_background: optional_color(
                data.button.background.as_ref(),
                Color::TRANSPARENT,
            )?,
            button_highlight: optional_color(data.button.highlight.as_ref(), separator)?,
            toolbar_foreground: optional_color(
                data.toolbar.foreground.as_ref(),
                defaults.toolbar_foreground,
            )?,
            toolbar_background: optional_color(
                data.toolbar.background.as_ref(),
                defaults.toolbar_background,
            )?,
        })
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        match WorkspaceTheme::from_yaml(DEFAULT_LIGHT_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Builtin light theme failed to parse: {}", e);
                Self::fallback()
            }
        }
    }

    /// Hardcoded colors used when the embedded YAML cannot be parsed
    fn fallback() -> Self {
        WorkspaceTheme {
            name: "Default Light".to_string(),
            foreground: Color::rgb(0x00, 0x00, 0x00),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            separator: Color::rgba(0x00, 0x00, 0x00, 0x1A),
            bar_background: Color::rgb(0xEC, 0xEC, 0xEC),
            bar_focus_ring: Color::rgb(0xB3, 0xD7, 0xFF),
            button_background: Color::TRANSPARENT,
            button_highlight: Color::rgba(0x00, 0x00, 0x00, 0x1A),
            toolbar_foreground: Color::rgb(0x40, 0x40, 0x40),
            toolbar_background: Color::rgb(0xE5, 0xEE, 0xFE),
        }
    }
}

impl Default for WorkspaceTheme {
    fn default() -> Self {
        Self::default_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF8000"), Ok(Color::rgb(0xFF, 0x80, 0x00)));
        assert_eq!(
            Color::from_hex("#0000001A"),
            Ok(Color::rgba(0x00, 0x00, 0x00, 0x1A))
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_color_hex_roundtrip_keeps_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = WorkspaceTheme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_default_light_matches_fallback() {
        assert_eq!(WorkspaceTheme::default_light(), WorkspaceTheme::fallback());
    }

    #[test]
    fn test_optional_sections_default() {
        let yaml = r##"
version: 1
name: "Minimal"
workspace:
  foreground: "#111111"
  background: "#222222"
  separator: "#333333"
bar:
  background: "#444444"
"##;
        let theme = WorkspaceTheme::from_yaml(yaml).unwrap();
        assert_eq!(theme.button_background, Color::TRANSPARENT);
        assert_eq!(theme.button_highlight, Color::rgb(0x33, 0x33, 0x33));
        assert_eq!(theme.bar_focus_ring, Color::rgb(0xB3, 0xD7, 0xFF));
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(WorkspaceTheme::from_builtin("nope").is_err());
    }
}
