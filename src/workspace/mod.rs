//! The workspace: a main area framed by four dock bars
//!
//! The workspace owns the bars and is the only place that moves panels
//! between them, so a tool id is docked in at most one bar at any time.
//! Geometry is derived on demand from the bar dimensions and the bounds set
//! by the host; nothing here touches a window.

mod delegate;
mod drag;
mod layout;

use std::fmt;

use crate::config::WorkspaceConfig;
use crate::geometry::{Edge, Point, Rect, Size};
use crate::panel::resize;
use crate::panel::{
    BarMetrics, DockBar, FixedAdvance, PointerKind, PointerSource, ResizeOutcome, TextMeasure,
    ToolId, ToolPanel,
};
use crate::theme::WorkspaceTheme;

pub use delegate::{WorkspaceDelegate, WorkspaceEvent};
pub use drag::{ButtonGesture, DragSession};
pub use layout::{DropPreview, WorkspaceLayout};

/// Index of an edge's bar in [`Workspace::bars`], matching [`Edge::ALL`]
const fn slot(edge: Edge) -> usize {
    match edge {
        Edge::Top => 0,
        Edge::Right => 1,
        Edge::Bottom => 2,
        Edge::Left => 3,
    }
}

pub struct Workspace {
    bounds: Rect,
    main_minimum: Size,
    bars: [DockBar; 4],
    metrics: BarMetrics,
    measure: Box<dyn TextMeasure>,
    theme: WorkspaceTheme,
    all_tools_visible: bool,
    tool_buttons_visible: bool,
    drag: DragSession,
    delegate: Option<Box<dyn WorkspaceDelegate>>,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("bounds", &self.bounds)
            .field("main_minimum", &self.main_minimum)
            .field("bars", &self.bars)
            .field("all_tools_visible", &self.all_tools_visible)
            .field("tool_buttons_visible", &self.tool_buttons_visible)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::from_config(&WorkspaceConfig::default())
    }
}

impl Workspace {
    /// Create an empty workspace measuring titles with `measure`
    pub fn new(config: &WorkspaceConfig, measure: Box<dyn TextMeasure>) -> Self {
        let metrics = BarMetrics::from_config(config, measure.as_ref());
        tracing::debug!(
            button_row = metrics.button_row,
            separator = metrics.separator,
            "workspace created"
        );

        Self {
            bounds: Rect::new(0.0, 0.0, 640.0, 480.0),
            main_minimum: config.main_view_minimum_size,
            bars: Edge::ALL.map(|edge| DockBar::new(edge, metrics)),
            metrics,
            measure,
            theme: WorkspaceTheme::default(),
            all_tools_visible: true,
            tool_buttons_visible: true,
            drag: DragSession::default(),
            delegate: None,
        }
    }

    /// Workspace with monospace title metrics for the configured font size
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self::new(
            config,
            Box::new(FixedAdvance::for_font_size(config.button.font_size)),
        )
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the rectangle the workspace fills, in host coordinates
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn main_minimum_size(&self) -> Size {
        self.main_minimum
    }

    pub fn metrics(&self) -> &BarMetrics {
        &self.metrics
    }

    pub fn theme(&self) -> &WorkspaceTheme {
        &self.theme
    }

    /// Replace the colours; every bar and button repaints with them
    pub fn set_theme(&mut self, theme: WorkspaceTheme) {
        tracing::debug!(theme = %theme.name, "workspace theme changed");
        self.theme = theme;
    }

    pub fn bar(&self, edge: Edge) -> &DockBar {
        &self.bars[slot(edge)]
    }

    pub(crate) fn bar_mut(&mut self, edge: Edge) -> &mut DockBar {
        &mut self.bars[slot(edge)]
    }

    /// Bars in [`Edge::ALL`] order
    pub fn bars(&self) -> impl Iterator<Item = &DockBar> {
        self.bars.iter()
    }

    pub fn is_all_tools_visible(&self) -> bool {
        self.all_tools_visible
    }

    pub fn is_tool_buttons_visible(&self) -> bool {
        self.tool_buttons_visible
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn WorkspaceDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn take_delegate(&mut self) -> Option<Box<dyn WorkspaceDelegate>> {
        self.delegate.take()
    }

    fn notify(&mut self, call: impl FnOnce(&mut dyn WorkspaceDelegate)) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            call(delegate);
        }
    }

    // ------------------------------------------------------------------
    // Tools
    // ------------------------------------------------------------------

    /// Edge of the bar holding `id`
    pub fn tool_edge(&self, id: &ToolId) -> Option<Edge> {
        self.bars.iter().find(|bar| bar.contains(id)).map(|bar| bar.edge())
    }

    pub fn contains(&self, id: &ToolId) -> bool {
        self.tool_edge(id).is_some()
    }

    pub fn tool(&self, id: &ToolId) -> Option<&ToolPanel> {
        self.bars.iter().find_map(|bar| bar.tool(id))
    }

    /// Every docked tool, bar by bar in edge order
    pub fn ordered_tools(&self) -> Vec<&ToolId> {
        self.bars.iter().flat_map(|bar| bar.tool_ids()).collect()
    }

    /// Dock `panel` at the end of the `edge` bar
    ///
    /// Ignored when a tool with the same id is already docked anywhere.
    pub fn append(&mut self, panel: ToolPanel, edge: Edge) -> bool {
        let index = self.bar(edge).len();
        self.insert(panel, edge, index)
    }

    /// Dock `panel` at `index` of the `edge` bar
    pub fn insert(&mut self, mut panel: ToolPanel, edge: Edge, index: usize) -> bool {
        if let Some(docked) = self.tool_edge(panel.id()) {
            tracing::debug!(tool = %panel.id(), %docked, "tool already in workspace, ignoring");
            return false;
        }

        panel.measure_title(self.measure.as_ref());
        self.bar_mut(edge).insert(panel, index)
    }

    /// Take a tool out of the workspace
    pub fn remove(&mut self, id: &ToolId) -> Option<ToolPanel> {
        let Some(edge) = self.tool_edge(id) else {
            tracing::debug!(tool = %id, "remove of unknown tool ignored");
            return None;
        };
        self.bar_mut(edge).remove(id)
    }

    /// Re-dock a tool at the end of the `edge` bar
    ///
    /// An open tool stays open in its new bar.
    pub fn move_tool(&mut self, id: &ToolId, edge: Edge) -> bool {
        let Some(panel) = self.remove(id) else {
            return false;
        };

        self.bar_mut(edge).append(panel);
        tracing::debug!(tool = %id, to = %edge, "tool moved");
        self.notify(|delegate| delegate.moved(id));
        true
    }

    /// Open the tool, or close its bar when the tool is already open
    pub fn toggle(&mut self, id: &ToolId) -> bool {
        let Some(edge) = self.tool_edge(id) else {
            tracing::debug!(tool = %id, "toggle of unknown tool ignored");
            return false;
        };

        let before = self.bar(edge).selected().cloned();
        self.notify(|delegate| delegate.resize_will_start(before.as_ref()));

        self.bar_mut(edge).toggle(id);

        let after = self.bar(edge).selected().cloned();
        self.notify(|delegate| delegate.resize_did_end(after.as_ref()));
        self.notify(|delegate| delegate.toggled(id));
        true
    }

    /// Change a tool's content dimension; the bar relayouts and clamps it
    pub fn set_tool_dimension(&mut self, id: &ToolId, dimension: f32) -> bool {
        let Some(edge) = self.tool_edge(id) else {
            return false;
        };
        let bar = self.bar_mut(edge);
        if let Some(tool) = bar.tool_mut(id) {
            tool.dimension = dimension;
        }
        bar.relayout();
        true
    }

    /// Set a bar's thickness directly, leaving the main area its minimum
    pub fn set_bar_dimension(&mut self, edge: Edge, dimension: f32) -> f32 {
        let max = self.max_dimension(edge);
        self.bar_mut(edge).set_dimension(dimension.min(max))
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    pub fn show_all_tools(&mut self) -> bool {
        self.set_all_tools_visible(true)
    }

    pub fn hide_all_tools(&mut self) -> bool {
        self.set_all_tools_visible(false)
    }

    pub fn toggle_all_tools(&mut self) -> bool {
        self.set_all_tools_visible(!self.all_tools_visible)
    }

    fn set_all_tools_visible(&mut self, visible: bool) -> bool {
        if self.all_tools_visible == visible {
            return false;
        }
        self.all_tools_visible = visible;
        tracing::debug!(visible, "all tools visibility changed");
        true
    }

    pub fn show_tool_buttons(&mut self) -> bool {
        self.set_tool_buttons_visible(true)
    }

    pub fn hide_tool_buttons(&mut self) -> bool {
        self.set_tool_buttons_visible(false)
    }

    pub fn toggle_tool_buttons(&mut self) -> bool {
        self.set_tool_buttons_visible(!self.tool_buttons_visible)
    }

    fn set_tool_buttons_visible(&mut self, visible: bool) -> bool {
        if self.tool_buttons_visible == visible {
            return false;
        }
        self.tool_buttons_visible = visible;
        for bar in &mut self.bars {
            bar.set_buttons_visible(visible);
        }
        tracing::debug!(visible, "tool buttons visibility changed");
        true
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Room a bar may take before the main area drops below its minimum
    pub fn max_dimension(&self, edge: Edge) -> f32 {
        let frame = edge.frame();
        let total = frame.thickness_of(self.bounds.size());
        let opposite = self.bar(edge.opposite()).dimension();
        (total - opposite - frame.thickness_of(self.main_minimum)).max(0.0)
    }

    /// Edge of the open bar whose resize handle contains `point`
    pub fn resize_handle_at(&self, point: Point) -> Option<Edge> {
        let rects = self.bar_rects()?;
        Edge::ALL.into_iter().find(|&edge| {
            self.bar(edge)
                .resize_handle(rects[slot(edge)])
                .is_some_and(|handle| handle.contains_point(point))
        })
    }

    /// Primary button pressed at `point` outside any tool button
    ///
    /// Inside a resize handle this runs the modal resize loop, pulling events
    /// from `source` until release. Returns `None` when the press started no
    /// resize.
    pub fn mouse_down(
        &mut self,
        point: Point,
        source: &mut dyn PointerSource,
    ) -> Option<ResizeOutcome> {
        let edge = self.resize_handle_at(point)?;
        let max = self.max_dimension(edge);
        let bounds = self.bounds;

        let open = self.bar(edge).selected().cloned();
        self.notify(|delegate| delegate.resize_will_start(open.as_ref()));

        let outcome = resize::track(self.bar_mut(edge), point, bounds, max, source);

        let open = self.bar(edge).selected().cloned();
        self.notify(|delegate| delegate.resize_did_end(open.as_ref()));

        tracing::debug!(
            %edge,
            dimension = outcome.dimension,
            dragged = outcome.dragged,
            "resize finished"
        );
        Some(outcome)
    }

    /// Tool whose button contains `point`
    pub fn tool_at(&self, point: Point) -> Option<ToolId> {
        self.layout()
            .bars
            .into_iter()
            .flat_map(|bar| bar.buttons)
            .find(|button| button.rect.contains_point(point))
            .map(|button| button.tool)
    }

    /// Update button hover highlights; returns whether any changed
    pub fn pointer_moved(&mut self, point: Point) -> bool {
        let layout = self.layout();
        let mut changed = false;

        for bar_layout in &layout.bars {
            let bar = self.bar_mut(bar_layout.edge);
            for button in &bar_layout.buttons {
                if let Some(tool) = bar.tool_mut(&button.tool) {
                    changed |= tool.hover(button.rect.contains_point(point));
                }
            }
        }

        changed
    }

    /// Primary button pressed on the button of `id`
    ///
    /// The next event decides the gesture: a release toggles the tool, a drag
    /// starts a drag session with the tool as its source.
    pub fn button_pressed(&mut self, id: &ToolId, source: &mut dyn PointerSource) -> ButtonGesture {
        if !self.contains(id) {
            tracing::debug!(tool = %id, "press on unknown tool ignored");
            return ButtonGesture::Ignored;
        }

        match source.next_event().map(|event| event.kind) {
            Some(PointerKind::Up) => {
                self.toggle(id);
                ButtonGesture::Toggled
            }
            Some(PointerKind::Dragged) => {
                self.drag_entered(id.clone());
                ButtonGesture::DragStarted
            }
            _ => ButtonGesture::Ignored,
        }
    }
}
