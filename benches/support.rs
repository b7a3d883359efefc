//! Shared helpers for benchmarks

use dockspace::geometry::{Edge, Rect};
use dockspace::panel::ToolPanel;
use dockspace::{Workspace, WorkspaceConfig};

/// Workspace with `per_bar` tools docked on every edge, the first of each
/// left and bottom bar open
#[allow(dead_code)]
pub fn make_workspace(per_bar: usize) -> Workspace {
    let mut workspace = Workspace::from_config(&WorkspaceConfig::default());
    workspace.set_bounds(Rect::new(0.0, 0.0, 1920.0, 1080.0));

    for edge in Edge::ALL {
        for i in 0..per_bar {
            let id = format!("{}-{}", edge, i);
            let title = format!("Tool {} {}", edge, i);
            let panel = ToolPanel::new(id, title, 50.0).with_dimension(200.0);
            let panel = if i == 0 && matches!(edge, Edge::Left | Edge::Bottom) {
                panel.selected()
            } else {
                panel
            };
            workspace.append(panel, edge);
        }
    }

    workspace
}
