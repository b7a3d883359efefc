//! Message types for the Elm-style architecture
//!
//! All workspace changes driven by a host can flow through these messages.
//! The modal resize loop is the exception: it needs a live pointer source
//! and runs through [`Store::modify`](crate::store::Store::modify).

use crate::geometry::{Edge, Point, Rect};
use crate::panel::ToolId;
use crate::theme::WorkspaceTheme;

/// Tool membership and state
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMsg {
    /// Dock a new tool at the end of a bar
    Append {
        id: ToolId,
        title: String,
        minimum_dimension: f32,
        edge: Edge,
    },
    /// Dock a new tool at an index of a bar
    Insert {
        id: ToolId,
        title: String,
        minimum_dimension: f32,
        edge: Edge,
        index: usize,
    },
    Remove(ToolId),
    /// Re-dock at the end of another bar
    Move { id: ToolId, edge: Edge },
    /// Open the tool, or close its bar if it is open
    Toggle(ToolId),
    SetDimension { id: ToolId, dimension: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMsg {
    ShowAllTools,
    HideAllTools,
    ToggleAllTools,
    ShowToolButtons,
    HideToolButtons,
    ToggleToolButtons,
}

/// Drag of a tool button, routed between edge docking and bar reordering
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// A tool button started a drag
    Begin(ToolId),
    /// Pointer moved during the drag
    Update(Point),
    /// Released at a point
    Drop(Point),
    /// Drag left the workspace or was cancelled
    Cancel,
}

/// Pointer moves outside a drag (button hover)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Moved(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMsg {
    /// Host window resized
    SetBounds(Rect),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Tool(ToolMsg),
    Visibility(VisibilityMsg),
    Drag(DragMsg),
    Pointer(PointerMsg),
    Layout(LayoutMsg),
    /// Replace the workspace colours
    Theme(Box<WorkspaceTheme>),
}
