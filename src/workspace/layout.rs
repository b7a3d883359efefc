//! Workspace arrangement
//!
//! Top and bottom bars span the full width, left and right bars sit between
//! them, and the main area takes what remains. With all tools hidden the
//! main area fills the bounds and no bar is laid out.

use serde::Serialize;

use crate::geometry::{Edge, Rect};
use crate::panel::BarLayout;

use super::{slot, Workspace};

/// Docking preview shown while a tool is dragged over an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropPreview {
    pub edge: Edge,
    pub rect: Rect,
}

/// Computed geometry of the whole workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceLayout {
    pub bounds: Rect,
    pub main: Rect,
    /// Laid out bars in edge order; empty when all tools are hidden
    pub bars: Vec<BarLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_preview: Option<DropPreview>,
}

impl WorkspaceLayout {
    pub fn bar(&self, edge: Edge) -> Option<&BarLayout> {
        self.bars.iter().find(|bar| bar.edge == edge)
    }
}

impl Workspace {
    /// Bounds minus the top and bottom bars
    fn middle(&self) -> Rect {
        let top = Edge::Top.frame();
        let bottom = Edge::Bottom.frame();
        bottom.inset(
            top.inset(self.bounds, self.bar(Edge::Top).dimension()),
            self.bar(Edge::Bottom).dimension(),
        )
    }

    /// Rectangle an edge's bar is sliced from: the full bounds for top and
    /// bottom, the band between them for left and right
    fn outer_rect(&self, edge: Edge) -> Rect {
        match edge {
            Edge::Top | Edge::Bottom => self.bounds,
            Edge::Left | Edge::Right => self.middle(),
        }
    }

    /// Rectangles of the four bars in [`Edge::ALL`] order
    pub(crate) fn bar_rects(&self) -> Option<[Rect; 4]> {
        if !self.all_tools_visible {
            return None;
        }

        Some(Edge::ALL.map(|edge| {
            edge.frame()
                .slice(self.outer_rect(edge), 0.0, self.bar(edge).dimension())
        }))
    }

    /// Rectangle the `edge` bar occupies, `None` when tools are hidden
    pub fn bar_rect(&self, edge: Edge) -> Option<Rect> {
        self.bar_rects().map(|rects| rects[slot(edge)])
    }

    /// Rectangle left for the main view
    pub fn main_area(&self) -> Rect {
        if !self.all_tools_visible {
            return self.bounds;
        }

        let left = Edge::Left.frame();
        let right = Edge::Right.frame();
        right.inset(
            left.inset(self.middle(), self.bar(Edge::Left).dimension()),
            self.bar(Edge::Right).dimension(),
        )
    }

    /// Docking preview bar for the drag candidate edge
    fn drop_preview(&self) -> Option<DropPreview> {
        let edge = self.drag.candidate_edge?;
        if !self.all_tools_visible {
            return None;
        }

        Some(DropPreview {
            edge,
            rect: edge.frame().slice(
                self.outer_rect(edge),
                0.0,
                self.metrics.closed_dimension(),
            ),
        })
    }

    pub fn layout(&self) -> WorkspaceLayout {
        let bars = match self.bar_rects() {
            Some(rects) => self
                .bars
                .iter()
                .zip(rects)
                .map(|(bar, rect)| bar.layout(rect))
                .collect(),
            None => Vec::new(),
        };

        WorkspaceLayout {
            bounds: self.bounds,
            main: self.main_area(),
            bars,
            drop_preview: self.drop_preview(),
        }
    }
}
