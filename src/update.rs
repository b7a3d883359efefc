//! Update functions for the Elm-style architecture
//!
//! All host-driven state transformations flow through these functions.

use crate::commands::Cmd;
use crate::geometry::{Edge, Point};
use crate::messages::{DragMsg, LayoutMsg, Msg, PointerMsg, ToolMsg, VisibilityMsg};
use crate::panel::{ToolId, ToolPanel};
use crate::workspace::Workspace;

/// Main update function - dispatches to sub-handlers
pub fn update(workspace: &mut Workspace, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Tool(m) => update_tool(workspace, m),
        Msg::Visibility(m) => update_visibility(workspace, m),
        Msg::Drag(m) => update_drag(workspace, m),
        Msg::Pointer(m) => update_pointer(workspace, m),
        Msg::Layout(m) => update_layout(workspace, m),
        Msg::Theme(theme) => {
            workspace.set_theme(*theme);
            Some(Cmd::Redraw)
        }
    }
}

/// Redraw and persist when the placement of tools changed
fn placement_changed(changed: bool) -> Option<Cmd> {
    changed.then(Cmd::redraw_and_persist)
}

pub fn update_tool(workspace: &mut Workspace, msg: ToolMsg) -> Option<Cmd> {
    match msg {
        ToolMsg::Append {
            id,
            title,
            minimum_dimension,
            edge,
        } => placement_changed(workspace.append(ToolPanel::new(id, title, minimum_dimension), edge)),

        ToolMsg::Insert {
            id,
            title,
            minimum_dimension,
            edge,
            index,
        } => placement_changed(workspace.insert(
            ToolPanel::new(id, title, minimum_dimension),
            edge,
            index,
        )),

        ToolMsg::Remove(id) => placement_changed(workspace.remove(&id).is_some()),

        ToolMsg::Move { id, edge } => placement_changed(workspace.move_tool(&id, edge)),

        ToolMsg::Toggle(id) => placement_changed(workspace.toggle(&id)),

        ToolMsg::SetDimension { id, dimension } => {
            placement_changed(workspace.set_tool_dimension(&id, dimension))
        }
    }
}

pub fn update_visibility(workspace: &mut Workspace, msg: VisibilityMsg) -> Option<Cmd> {
    let changed = match msg {
        VisibilityMsg::ShowAllTools => workspace.show_all_tools(),
        VisibilityMsg::HideAllTools => workspace.hide_all_tools(),
        VisibilityMsg::ToggleAllTools => workspace.toggle_all_tools(),
        VisibilityMsg::ShowToolButtons => workspace.show_tool_buttons(),
        VisibilityMsg::HideToolButtons => workspace.hide_tool_buttons(),
        VisibilityMsg::ToggleToolButtons => workspace.toggle_tool_buttons(),
    };
    placement_changed(changed)
}

/// Route drags: over a bar's buttons they reorder, elsewhere they dock
pub fn update_drag(workspace: &mut Workspace, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Begin(id) => {
            workspace.drag_entered(id);
            None
        }

        DragMsg::Update(point) => {
            let source = workspace.drag_session().source.clone()?;
            drag_to(workspace, point, &source).then_some(Cmd::Redraw)
        }

        DragMsg::Drop(point) => {
            let moved = match workspace.drag_session().source.clone() {
                Some(source) => match workspace.strip_at(point) {
                    Some(edge) => workspace.perform_bar_drop(edge, point, &source),
                    None => workspace.perform_drop(point, &source),
                },
                None => false,
            };
            end_drag(workspace);

            if moved {
                Some(Cmd::redraw_and_persist())
            } else {
                Some(Cmd::Redraw)
            }
        }

        DragMsg::Cancel => {
            end_drag(workspace);
            Some(Cmd::Redraw)
        }
    }
}

fn drag_to(workspace: &mut Workspace, point: Point, source: &ToolId) -> bool {
    let over_bar = workspace.strip_at(point);
    let mut changed = false;

    for edge in Edge::ALL {
        if Some(edge) != over_bar && workspace.bar(edge).reorder_drag().is_some() {
            workspace.bar_drag_exited(edge);
            changed = true;
        }
    }

    match over_bar {
        Some(edge) => {
            if workspace.bar(edge).reorder_drag().is_none() {
                workspace.bar_drag_entered(edge, source);
            }
            changed |= workspace.clear_drag_candidate();
            changed |= workspace.bar_drag_updated(edge, point, source);
        }
        None => changed |= workspace.drag_updated(point),
    }

    changed
}

fn end_drag(workspace: &mut Workspace) {
    for edge in Edge::ALL {
        workspace.bar_drag_ended(edge);
    }
    workspace.drag_ended();
}

pub fn update_pointer(workspace: &mut Workspace, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Moved(point) => workspace.pointer_moved(point).then_some(Cmd::Redraw),
    }
}

pub fn update_layout(workspace: &mut Workspace, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SetBounds(bounds) => {
            workspace.set_bounds(bounds);
            Some(Cmd::Redraw)
        }
    }
}
