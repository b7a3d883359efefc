//! dockspace - print the layout of a dockable workspace

use anyhow::{Context, Result};
use clap::Parser;

use dockspace::cli::{CliArgs, Output};
use dockspace::panel::{FixedAdvance, FontMeasure, TextMeasure};
use dockspace::theme::{self, ThemeSource};
use dockspace::{LayoutSnapshot, Store, Workspace, WorkspaceConfig};

fn list_themes() {
    for info in theme::list_available_themes() {
        let source = match info.source {
            ThemeSource::User => "user",
            ThemeSource::Builtin => "builtin",
        };
        println!("{:<20} {:<24} ({})", info.id, info.name, source);
    }
}

fn init_config() -> Result<()> {
    let config = WorkspaceConfig::default();
    config.save().map_err(anyhow::Error::msg)?;
    let themes = dockspace::config_paths::ensure_themes_dir().map_err(anyhow::Error::msg)?;
    println!("Wrote default config; user themes go in {}", themes.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    dockspace::tracing::init();

    if args.list_themes {
        list_themes();
        return Ok(());
    }
    if args.init {
        return init_config();
    }

    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let config = WorkspaceConfig::load();

    let measure: Box<dyn TextMeasure> = match &startup.font {
        Some(path) => Box::new(FontMeasure::from_file(path, config.button.font_size)?),
        None => Box::new(FixedAdvance::for_font_size(config.button.font_size)),
    };
    let mut workspace = Workspace::new(&config, measure);
    workspace.set_bounds(startup.bounds);

    let theme_id = startup.theme.as_deref().unwrap_or(&config.theme);
    match theme::load_theme(theme_id) {
        Ok(theme) => workspace.set_theme(theme),
        Err(e) => tracing::warn!("Failed to load theme '{}': {}", theme_id, e),
    }

    let snapshot = match &startup.layout {
        Some(path) => Some(LayoutSnapshot::load(path)?),
        None => LayoutSnapshot::load_default()?,
    };
    if let Some(snapshot) = snapshot {
        snapshot.restore(&mut workspace);
    }

    let mut store = Store::new(workspace);
    let mut persist = false;
    for msg in startup.messages {
        if let Some(cmd) = store.dispatch(msg) {
            persist |= cmd.needs_persist();
        }
    }

    if startup.save && persist {
        store.snapshot().save_default()?;
    }

    let workspace = store.workspace();
    let output = match startup.output {
        Output::Layout => serde_yaml::to_string(&workspace.layout()),
        Output::DisplayList => serde_yaml::to_string(&workspace.display_list()),
    }
    .context("Failed to serialize output")?;
    print!("{}", output);

    Ok(())
}
