//! Command-line argument parsing for the layout tool
//!
//! Supports:
//! - Docking tools on the command line (`--tool left:files:Files`)
//! - Toggling and moving tools after loading a layout
//! - Printing geometry or the display list for a window size

use clap::Parser;
use std::path::PathBuf;

use crate::geometry::{Edge, Rect};
use crate::messages::{Msg, ToolMsg, VisibilityMsg};
use crate::panel::ToolId;

/// Minimum dimension given to tools docked from the command line
const CLI_TOOL_MINIMUM: f32 = 50.0;

/// Compute dockable workspace layouts
#[derive(Parser, Debug, Default)]
#[command(name = "dockspace", version, about = "Compute dockable workspace layouts")]
pub struct CliArgs {
    /// Workspace width
    #[arg(long, default_value_t = 1024.0)]
    pub width: f32,

    /// Workspace height
    #[arg(long, default_value_t = 768.0)]
    pub height: f32,

    /// Layout snapshot (JSON) to start from instead of the saved layout
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Dock a tool (repeatable)
    #[arg(long = "tool", value_name = "EDGE:ID[:TITLE]")]
    pub tools: Vec<String>,

    /// Toggle a tool after docking (repeatable)
    #[arg(long, value_name = "ID")]
    pub toggle: Vec<String>,

    /// Move a tool to another edge (repeatable)
    #[arg(long = "move", value_name = "ID:EDGE")]
    pub moves: Vec<String>,

    /// Hide the tool buttons of every bar
    #[arg(long)]
    pub hide_buttons: bool,

    /// Hide all tools, leaving only the main area
    #[arg(long)]
    pub hide_tools: bool,

    /// Measure button titles with this TTF/OTF font
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Theme id, overriding the configured one
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the display list instead of the geometry
    #[arg(long)]
    pub paint: bool,

    /// Save the resulting layout as the default layout
    #[arg(long)]
    pub save: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

/// What the invocation should print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Layout,
    DisplayList,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub bounds: Rect,
    pub layout: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub theme: Option<String>,
    /// Messages applied after the layout is restored, in order
    pub messages: Vec<Msg>,
    pub output: Output,
    pub save: bool,
}

/// Parse `EDGE:ID[:TITLE]`; the title defaults to the id
fn parse_tool(spec: &str) -> Result<Msg, String> {
    let mut parts = spec.splitn(3, ':');
    let edge: Edge = parts.next().unwrap_or_default().parse()?;
    let id = parts
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("Missing tool id in '{}'", spec))?;
    let title = parts.next().unwrap_or(id);

    Ok(Msg::Tool(ToolMsg::Append {
        id: ToolId::from(id),
        title: title.to_string(),
        minimum_dimension: CLI_TOOL_MINIMUM,
        edge,
    }))
}

/// Parse `ID:EDGE`
fn parse_move(spec: &str) -> Result<Msg, String> {
    let (id, edge) = spec
        .rsplit_once(':')
        .ok_or_else(|| format!("Expected ID:EDGE, got '{}'", spec))?;
    Ok(Msg::Tool(ToolMsg::Move {
        id: ToolId::from(id),
        edge: edge.parse()?,
    }))
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "Workspace size must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        let mut messages = Vec::new();
        for spec in &self.tools {
            messages.push(parse_tool(spec)?);
        }
        for spec in &self.moves {
            messages.push(parse_move(spec)?);
        }
        for id in &self.toggle {
            messages.push(Msg::Tool(ToolMsg::Toggle(ToolId::from(id.as_str()))));
        }
        if self.hide_buttons {
            messages.push(Msg::Visibility(VisibilityMsg::HideToolButtons));
        }
        if self.hide_tools {
            messages.push(Msg::Visibility(VisibilityMsg::HideAllTools));
        }

        Ok(StartupConfig {
            bounds: Rect::new(0.0, 0.0, self.width, self.height),
            layout: self.layout,
            font: self.font,
            theme: self.theme,
            messages,
            output: if self.paint {
                Output::DisplayList
            } else {
                Output::Layout
            },
            save: self.save,
        })
    }
}
