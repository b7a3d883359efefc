//! Tests for theme loading

use dockspace::theme::{self, Color, ThemeSource, WorkspaceTheme};
use tempfile::TempDir;

const CUSTOM: &str = r##"
version: 1
name: "Custom"
workspace:
  foreground: "#101010"
  background: "#FAFAFA"
  separator: "#CCCCCC"
bar:
  background: "#EEEEEE"
"##;

#[test]
fn test_from_file_fills_optional_colors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, CUSTOM).unwrap();

    let theme = theme::from_file(&path).unwrap();
    assert_eq!(theme.name, "Custom");
    assert_eq!(theme.bar_background, Color::rgb(0xEE, 0xEE, 0xEE));
    assert!(theme.button_background.is_transparent());
    // Highlight falls back to the separator colour
    assert_eq!(theme.button_highlight, theme.separator);
    assert_eq!(theme.bar_focus_ring, WorkspaceTheme::default().bar_focus_ring);
}

#[test]
fn test_invalid_color_is_an_error() {
    let yaml = CUSTOM.replace("#EEEEEE", "#EEE");
    assert!(WorkspaceTheme::from_yaml(&yaml).is_err());
    assert!(WorkspaceTheme::from_yaml("name: [").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = theme::from_file(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.contains("Failed to read theme file"));
}

#[test]
fn test_builtins_are_listed_and_load() {
    let themes = theme::list_available_themes();
    for id in ["default-light", "default-dark"] {
        assert!(themes.iter().any(|info| info.id == id));
        assert!(WorkspaceTheme::from_builtin(id).is_ok());
    }
    assert!(themes
        .iter()
        .any(|info| info.source == ThemeSource::Builtin));
    assert!(WorkspaceTheme::from_builtin("solarized").is_err());
}

#[test]
fn test_dark_theme_differs_from_default() {
    let dark = WorkspaceTheme::from_builtin("default-dark").unwrap();
    assert_eq!(dark.name, "Default Dark");
    assert_ne!(dark.background, WorkspaceTheme::default().background);
}
