//! Outbound notifications from the workspace

use std::sync::mpsc::Sender;

use crate::panel::ToolId;

/// Receives workspace notifications; every method defaults to a no-op
///
/// Calls are fire-and-forget and happen synchronously on the thread that
/// drives the workspace.
pub trait WorkspaceDelegate {
    /// A bar is about to change size; `tool` is the panel open before it
    fn resize_will_start(&mut self, _tool: Option<&ToolId>) {}

    /// A bar finished changing size; `tool` is the panel open after it
    fn resize_did_end(&mut self, _tool: Option<&ToolId>) {}

    fn toggled(&mut self, _tool: &ToolId) {}

    /// A tool changed bar or position
    fn moved(&mut self, _tool: &ToolId) {}
}

/// Owned copy of a delegate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    ResizeWillStart(Option<ToolId>),
    ResizeDidEnd(Option<ToolId>),
    Toggled(ToolId),
    Moved(ToolId),
}

/// Forward notifications over a channel; a hung-up receiver drops them
impl WorkspaceDelegate for Sender<WorkspaceEvent> {
    fn resize_will_start(&mut self, tool: Option<&ToolId>) {
        let _ = self.send(WorkspaceEvent::ResizeWillStart(tool.cloned()));
    }

    fn resize_did_end(&mut self, tool: Option<&ToolId>) {
        let _ = self.send(WorkspaceEvent::ResizeDidEnd(tool.cloned()));
    }

    fn toggled(&mut self, tool: &ToolId) {
        let _ = self.send(WorkspaceEvent::Toggled(tool.clone()));
    }

    fn moved(&mut self, tool: &ToolId) {
        let _ = self.send(WorkspaceEvent::Moved(tool.clone()));
    }
}
