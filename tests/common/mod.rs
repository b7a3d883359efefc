//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver};

use dockspace::geometry::{Edge, Point, Rect};
use dockspace::panel::{FixedAdvance, ToolId, ToolPanel};
use dockspace::workspace::{Workspace, WorkspaceEvent};
use dockspace::WorkspaceConfig;

pub const BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

/// Workspace with a 24px button row (20px line + 2 * 2 padding) and 1px separators
pub fn test_workspace() -> Workspace {
    let mut workspace = Workspace::new(
        &WorkspaceConfig::default(),
        Box::new(FixedAdvance::new(6.0, 20.0)),
    );
    workspace.set_bounds(BOUNDS);
    workspace
}

/// Closed panel with minimum 50 and content dimension 150
pub fn panel(id: &str) -> ToolPanel {
    ToolPanel::new(id, id, 50.0).with_dimension(150.0)
}

pub fn id(id: &str) -> ToolId {
    ToolId::from(id)
}

/// Tool ids of one bar, in button order
pub fn ids(workspace: &Workspace, edge: Edge) -> Vec<String> {
    workspace
        .bar(edge)
        .tool_ids()
        .map(|id| id.as_str().to_string())
        .collect()
}

/// Attach a channel delegate and return its receiving end
pub fn record_events(workspace: &mut Workspace) -> Receiver<WorkspaceEvent> {
    let (tx, rx) = mpsc::channel();
    workspace.set_delegate(Box::new(tx));
    rx
}

pub fn drain(rx: &Receiver<WorkspaceEvent>) -> Vec<WorkspaceEvent> {
    rx.try_iter().collect()
}

/// Every tool id is docked in at most one bar
pub fn assert_unique_membership(workspace: &Workspace) {
    let mut seen = HashSet::new();
    for bar in workspace.bars() {
        for id in bar.tool_ids() {
            assert!(seen.insert(id.clone()), "{} docked twice", id);
        }
    }
}

pub fn center(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

/// Center of the button of `tool` in the current layout
pub fn button_center(workspace: &Workspace, edge: Edge, tool: &str) -> Point {
    let layout = workspace.layout();
    let bar = layout.bar(edge).expect("bar laid out");
    let button = bar
        .buttons
        .iter()
        .find(|button| button.tool.as_str() == tool)
        .expect("button laid out");
    center(button.rect)
}
