//! Where dockspace keeps its files
//!
//! Everything sits in one directory, `$XDG_CONFIG_HOME/dockspace` when that
//! variable is set and `~/.config/dockspace` otherwise:
//!
//! ```text
//! config.yaml    workspace settings
//! layout.json    saved layout snapshot
//! themes/        user themes
//! logs/          daily log files
//! ```

use std::{
    env,
    ffi::OsString,
    fs,
    path::PathBuf,
};

const APP_DIR: &str = "dockspace";

/// The dockspace directory, `None` when neither variable nor home is known
pub fn config_dir() -> Option<PathBuf> {
    resolve(env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
}

fn resolve(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|base| base.join(APP_DIR))
}

fn entry(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn themes_dir() -> Option<PathBuf> {
    entry("themes")
}

pub fn config_file() -> Option<PathBuf> {
    entry("config.yaml")
}

pub fn layout_file() -> Option<PathBuf> {
    entry("layout.json")
}

pub fn logs_dir() -> Option<PathBuf> {
    entry("logs")
}

fn create(path: PathBuf) -> Result<PathBuf, String> {
    fs::create_dir_all(&path)
        .map_err(|e| format!("Cannot create {}: {}", path.display(), e))?;
    Ok(path)
}

fn ensure(dir: Option<PathBuf>) -> Result<PathBuf, String> {
    create(dir.ok_or_else(|| "No config directory available".to_string())?)
}

pub fn ensure_config_dir() -> Result<PathBuf, String> {
    ensure(config_dir())
}

pub fn ensure_themes_dir() -> Result<PathBuf, String> {
    ensure(themes_dir())
}

/// Log directory for the daily file appender, created on demand
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure(logs_dir())
}
