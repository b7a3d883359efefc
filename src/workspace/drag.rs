//! Drag and drop of tools
//!
//! Two protocols share a drag: the workspace-level one docks a tool onto the
//! edge under the pointer (the strip a closed bar would occupy along each
//! edge of the bounds), the bar-level one reorders within a bar's button
//! strip. Hosts route positions inside a laid out button strip (see
//! [`Workspace::strip_at`]) to the bar-level calls and everything else to
//! the workspace-level calls.

use crate::geometry::{Edge, Point, Rect};
use crate::panel::reorder::{hovered_slot, plan_drop, DropPlan, ReorderDrag};
use crate::panel::{ToolButton, ToolId};

use super::{slot, Workspace};

/// Cross-bar drag state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    pub in_progress: bool,
    /// Edge whose docking preview is shown
    pub candidate_edge: Option<Edge>,
    pub source: Option<ToolId>,
}

/// What a press on a tool button turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonGesture {
    Toggled,
    DragStarted,
    /// Press on an unknown tool, or the event stream ended
    Ignored,
}

impl Workspace {
    /// Edge whose hit strip contains `point`, tested top, right, bottom, left
    pub fn edge_at(&self, point: Point) -> Option<Edge> {
        let thickness = self.metrics.closed_dimension();
        Edge::ALL.into_iter().find(|edge| {
            edge.frame()
                .slice(self.bounds, 0.0, thickness)
                .contains_point(point)
        })
    }

    /// Edge of the non-empty bar whose laid out button strip contains `point`
    pub fn strip_at(&self, point: Point) -> Option<Edge> {
        if !self.tool_buttons_visible {
            return None;
        }
        let rects = self.bar_rects()?;
        Edge::ALL.into_iter().find(|&edge| {
            let bar = self.bar(edge);
            !bar.is_empty() && bar.button_strip(rects[slot(edge)]).contains_point(point)
        })
    }

    // ------------------------------------------------------------------
    // Workspace level: dock onto an edge
    // ------------------------------------------------------------------

    pub fn drag_entered(&mut self, source: ToolId) {
        tracing::trace!(tool = %source, "drag entered workspace");
        self.drag = DragSession {
            in_progress: true,
            candidate_edge: None,
            source: Some(source),
        };
    }

    /// Track the pointer; returns `true` when the hovered edge changed and
    /// the docking preview must be laid out again
    pub fn drag_updated(&mut self, point: Point) -> bool {
        let edge = self.edge_at(point);
        if edge == self.drag.candidate_edge {
            return false;
        }

        tracing::trace!(?edge, "drag candidate edge changed");
        self.drag.candidate_edge = edge;
        true
    }

    /// Hide the docking preview while the drag is over a bar's buttons;
    /// returns whether one was shown
    pub fn clear_drag_candidate(&mut self) -> bool {
        self.drag.candidate_edge.take().is_some()
    }

    pub fn drag_exited(&mut self) {
        self.end_drag();
    }

    pub fn drag_ended(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.drag = DragSession::default();
    }

    /// Dock `source` onto the edge under `point`
    ///
    /// Rejected (nothing changes) when no edge is hit or the source is not a
    /// tool of this workspace.
    pub fn perform_drop(&mut self, point: Point, source: &ToolId) -> bool {
        let Some(edge) = self.edge_at(point) else {
            tracing::debug!(x = point.x, y = point.y, "drop outside any edge rejected");
            return false;
        };

        if !self.contains(source) {
            tracing::debug!(tool = %source, "drop of unknown tool rejected");
            return false;
        }

        self.move_tool(source, edge)
    }

    // ------------------------------------------------------------------
    // Bar level: reorder within a button strip
    // ------------------------------------------------------------------

    /// Cache the `edge` bar's button frames for a drag of `source`
    pub fn bar_drag_entered(&mut self, edge: Edge, source: &ToolId) {
        // Frames are taken without any stale preview gap
        self.bar_mut(edge).reorder = None;
        let frames = self.button_frames(edge);
        let padding = self.metrics.title_padding;
        let gap = self
            .tool(source)
            .map(|tool| ToolButton::new(tool, edge, padding).length())
            .unwrap_or(0.0);

        tracing::trace!(%edge, tool = %source, "drag entered bar");
        self.bar_mut(edge).reorder = Some(ReorderDrag {
            source: source.clone(),
            gap,
            frames,
            hovered: None,
        });
    }

    /// Resolve the hovered slot; returns `true` when it changed and the
    /// drop preview must be laid out again
    pub fn bar_drag_updated(&mut self, edge: Edge, point: Point, source: &ToolId) -> bool {
        let bar = self.bar_mut(edge);
        let source_index = bar.position(source);
        let Some(drag) = bar.reorder.as_mut() else {
            tracing::debug!(%edge, "bar drag update without entry ignored");
            return false;
        };

        let hovered = hovered_slot(&drag.frames, point, source_index);
        if hovered == drag.hovered {
            return false;
        }

        tracing::trace!(%edge, ?hovered, "drag hovered slot changed");
        drag.hovered = hovered;
        true
    }

    pub fn bar_drag_exited(&mut self, edge: Edge) {
        self.bar_mut(edge).reorder = None;
    }

    pub fn bar_drag_ended(&mut self, edge: Edge) {
        self.bar_mut(edge).reorder = None;
    }

    /// Drop `source` onto the `edge` bar's button strip
    ///
    /// Dropping on its own button or its current spot changes nothing and
    /// returns `false`. Past the last button it moves to the end, on another
    /// button it takes that button's slot. A tool from another bar is taken
    /// out of it first.
    pub fn perform_bar_drop(&mut self, edge: Edge, point: Point, source: &ToolId) -> bool {
        let Some(from_edge) = self.tool_edge(source) else {
            tracing::debug!(tool = %source, "bar drop of unknown tool rejected");
            return false;
        };

        let frames = match self.bar(edge).reorder_drag() {
            Some(drag) => drag.frames.clone(),
            None => self.button_frames(edge),
        };
        let strip = self
            .bar_rect(edge)
            .map(|rect| self.bar(edge).button_strip(rect))
            .unwrap_or_default();
        let source_index = self.bar(edge).position(source);
        let plan = plan_drop(&frames, strip, point, source_index);

        self.bar_mut(edge).reorder = None;

        let moved = match (plan, source_index) {
            (DropPlan::Unchanged, _) => false,
            (DropPlan::Append, Some(from)) => {
                let bar = self.bar_mut(edge);
                let last = bar.len() - 1;
                if from == last {
                    false
                } else {
                    bar.move_within(from, last);
                    true
                }
            }
            (DropPlan::Insert(to), Some(from)) => {
                if from == to {
                    false
                } else {
                    self.bar_mut(edge).move_within(from, to);
                    true
                }
            }
            (DropPlan::Append, None) => match self.bar_mut(from_edge).remove(source) {
                Some(panel) => self.bar_mut(edge).append(panel),
                None => false,
            },
            (DropPlan::Insert(to), None) => match self.bar_mut(from_edge).remove(source) {
                Some(panel) => self.bar_mut(edge).insert(panel, to),
                None => false,
            },
        };

        if moved {
            tracing::debug!(tool = %source, %edge, ?plan, "tool dropped on bar");
            self.notify(|delegate| delegate.moved(source));
        }
        moved
    }

    /// Current button rectangles of the `edge` bar, in bar order
    fn button_frames(&self, edge: Edge) -> Vec<Rect> {
        self.bar_rect(edge)
            .map(|rect| {
                self.bar(edge)
                    .layout(rect)
                    .buttons
                    .into_iter()
                    .map(|button| button.rect)
                    .collect()
            })
            .unwrap_or_default()
    }
}
