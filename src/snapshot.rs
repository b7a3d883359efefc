//! Layout snapshots: which tool sits where, open or closed, at what size
//!
//! A snapshot is plain data; restoring it replays the public workspace
//! operations so every bar invariant holds afterwards. Persisted as JSON in
//! `~/.config/dockspace/layout.json`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::Edge;
use crate::panel::{ToolId, ToolPanel};
use crate::workspace::Workspace;

/// Persisted state of one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    pub id: ToolId,
    pub title: String,
    pub minimum_dimension: f32,
    pub dimension: f32,
    #[serde(default)]
    pub selected: bool,
}

impl ToolState {
    fn capture(tool: &ToolPanel) -> Self {
        Self {
            id: tool.id().clone(),
            title: tool.title().to_string(),
            minimum_dimension: tool.minimum_dimension,
            dimension: tool.dimension,
            selected: tool.is_selected(),
        }
    }

    /// Closed panel; the selection is replayed once the bar is filled
    fn to_panel(&self) -> ToolPanel {
        ToolPanel::new(self.id.clone(), self.title.clone(), self.minimum_dimension)
            .with_dimension(self.dimension)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub edge: Edge,
    #[serde(default)]
    pub tools: Vec<ToolState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    #[serde(default = "default_true")]
    pub all_tools_visible: bool,
    #[serde(default = "default_true")]
    pub tool_buttons_visible: bool,
    #[serde(default)]
    pub bars: Vec<BarSnapshot>,
}

fn default_true() -> bool {
    true
}

impl LayoutSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn capture(workspace: &Workspace) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            all_tools_visible: workspace.is_all_tools_visible(),
            tool_buttons_visible: workspace.is_tool_buttons_visible(),
            bars: workspace
                .bars()
                .map(|bar| BarSnapshot {
                    edge: bar.edge(),
                    tools: bar.tools().iter().map(ToolState::capture).collect(),
                })
                .collect(),
        }
    }

    /// Replace the workspace's tools and visibility with this snapshot
    ///
    /// The delegate is detached while replaying, so it sees no notifications
    /// for the intermediate states.
    pub fn restore(&self, workspace: &mut Workspace) {
        let delegate = workspace.take_delegate();

        let docked: Vec<ToolId> = workspace.ordered_tools().into_iter().cloned().collect();
        for id in &docked {
            workspace.remove(id);
        }

        // Appending to an open bar would open the appended tool, so bars are
        // filled closed and opened afterwards
        for bar in &self.bars {
            let mut open = None;
            for tool in &bar.tools {
                if workspace.append(tool.to_panel(), bar.edge) && tool.selected {
                    open = Some(&tool.id);
                }
            }
            if let Some(id) = open {
                workspace.toggle(id);
            }
        }

        if self.tool_buttons_visible {
            workspace.show_tool_buttons();
        } else {
            workspace.hide_tool_buttons();
        }
        if self.all_tools_visible {
            workspace.show_all_tools();
        } else {
            workspace.hide_all_tools();
        }

        if let Some(delegate) = delegate {
            workspace.set_delegate(delegate);
        }

        tracing::debug!(
            tools = workspace.ordered_tools().len(),
            "layout snapshot restored"
        );
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse layout {}", path.display()))?;
        tracing::info!("Loaded layout from {}", path.display());
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write layout {}", path.display()))?;
        tracing::info!("Saved layout to {}", path.display());
        Ok(())
    }

    /// Load from the default location; `None` when nothing was saved yet
    pub fn load_default() -> Result<Option<Self>> {
        let Some(path) = crate::config_paths::layout_file() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    pub fn save_default(&self) -> Result<()> {
        let path = crate::config_paths::layout_file()
            .context("No config directory available")?;
        self.save(&path)
    }
}
