//! Dock bars: one edge's ordered panels and their geometry
//!
//! A bar holds its panels by value, in button order, with at most one of
//! them open. Every mutation ends in [`DockBar::relayout`], which recomputes
//! the bar's thickness from the four-way sizing table and writes the
//! resulting content dimension back into the open panel.

use serde::Serialize;

use crate::config::WorkspaceConfig;
use crate::geometry::{Edge, Point, Rect, Size, TitleRotation};

use super::button::{button_row_dimension, TextMeasure, ToolButton, DEFAULT_TITLE_PADDING};
use super::reorder::{insertion_point, ReorderDrag};
use super::resize::ResizeState;
use super::tool::{ToolId, ToolPanel};

/// Size constants shared by all bars of a workspace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Thickness of the button row
    pub button_row: f32,
    /// Thickness of the inner and outer separator lines
    pub separator: f32,
    /// Smallest thickness of an open bar, whatever its panel allows
    pub minimum_dimension: f32,
    /// Width of the grab band next to the outer separator
    pub resize_handle: f32,
    /// Resize drags snap down to multiples of this
    pub drag_increment: f32,
    /// Padding around button titles
    pub title_padding: Size,
}

impl Default for BarMetrics {
    fn default() -> Self {
        Self {
            button_row: 18.0,
            separator: 1.0,
            minimum_dimension: 50.0,
            resize_handle: 4.0,
            drag_increment: 1.0,
            title_padding: DEFAULT_TITLE_PADDING,
        }
    }
}

impl BarMetrics {
    pub fn from_config(config: &WorkspaceConfig, measure: &dyn TextMeasure) -> Self {
        let title_padding = config.button.padding;
        Self {
            button_row: button_row_dimension(measure, title_padding),
            separator: config.separator_thickness,
            minimum_dimension: config.minimum_dimension,
            resize_handle: config.resize_handle,
            drag_increment: config.drag_increment,
            title_padding,
        }
    }

    /// Thickness of a closed bar showing its buttons
    pub fn closed_dimension(&self) -> f32 {
        self.button_row + self.separator
    }
}

/// Lifecycle state of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Empty,
    Closed,
    Open,
    /// Open, inside the modal resize loop
    Resizing,
}

/// A button placed in a bar layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonSlot {
    pub tool: ToolId,
    pub rect: Rect,
    pub title_origin: Point,
    pub rotation: TitleRotation,
    pub highlighted: bool,
}

/// The open panel's content area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSlot {
    pub tool: ToolId,
    pub rect: Rect,
}

/// Computed geometry of one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLayout {
    pub edge: Edge,
    pub bounds: Rect,
    pub buttons: Vec<ButtonSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_separator: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_separator: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_handle: Option<Rect>,
    /// Drop preview gap during a reorder drag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_gap: Option<Rect>,
}

/// Container for the panels docked at one edge
#[derive(Debug)]
pub struct DockBar {
    edge: Edge,
    tools: Vec<ToolPanel>,
    selected: Option<ToolId>,
    buttons_visible: bool,
    /// Applied thickness after the last relayout or resize
    dimension: f32,
    metrics: BarMetrics,
    pub(crate) resize: ResizeState,
    pub(crate) reorder: Option<ReorderDrag>,
}

impl DockBar {
    pub fn new(edge: Edge, metrics: BarMetrics) -> Self {
        Self {
            edge,
            tools: Vec::new(),
            selected: None,
            buttons_visible: true,
            dimension: 0.0,
            metrics,
            resize: ResizeState::Idle,
            reorder: None,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn metrics(&self) -> &BarMetrics {
        &self.metrics
    }

    pub fn tools(&self) -> &[ToolPanel] {
        &self.tools
    }

    pub fn tool_ids(&self) -> impl Iterator<Item = &ToolId> {
        self.tools.iter().map(|tool| tool.id())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn position(&self, id: &ToolId) -> Option<usize> {
        self.tools.iter().position(|tool| tool.id() == id)
    }

    pub fn contains(&self, id: &ToolId) -> bool {
        self.position(id).is_some()
    }

    pub fn tool(&self, id: &ToolId) -> Option<&ToolPanel> {
        self.tools.iter().find(|tool| tool.id() == id)
    }

    pub fn tool_mut(&mut self, id: &ToolId) -> Option<&mut ToolPanel> {
        self.tools.iter_mut().find(|tool| tool.id() == id)
    }

    /// Id of the open panel
    pub fn selected(&self) -> Option<&ToolId> {
        self.selected.as_ref()
    }

    pub fn selected_tool(&self) -> Option<&ToolPanel> {
        self.selected.as_ref().and_then(|id| self.tool(id))
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_buttons_visible(&self) -> bool {
        self.buttons_visible
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    pub fn reorder_drag(&self) -> Option<&ReorderDrag> {
        self.reorder.as_ref()
    }

    /// Applied bar thickness
    pub fn dimension(&self) -> f32 {
        self.dimension
    }

    pub fn state(&self) -> BarState {
        if self.tools.is_empty() {
            BarState::Empty
        } else if self.resize.is_active() {
            BarState::Resizing
        } else if self.is_open() {
            BarState::Open
        } else {
            BarState::Closed
        }
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    /// Add a panel after the last one. Returns `false` (and drops the panel)
    /// when a panel with the same id is already docked here.
    pub fn append(&mut self, panel: ToolPanel) -> bool {
        let index = self.tools.len();
        self.adopt(panel, index)
    }

    /// Add a panel at `index` (`0..=len`, larger indices are clamped)
    pub fn insert(&mut self, panel: ToolPanel, index: usize) -> bool {
        self.adopt(panel, index)
    }

    fn adopt(&mut self, mut panel: ToolPanel, index: usize) -> bool {
        if self.contains(panel.id()) {
            tracing::debug!(edge = %self.edge, tool = %panel.id(), "tool already docked, ignoring");
            return false;
        }

        let index = if index > self.tools.len() {
            tracing::debug!(
                edge = %self.edge,
                index,
                len = self.tools.len(),
                "insert index out of bounds, clamping"
            );
            self.tools.len()
        } else {
            index
        };

        panel.edge = Some(self.edge);
        let takes_selection = self.is_open() || panel.is_selected;
        let id = panel.id().clone();
        self.tools.insert(index, panel);

        if takes_selection {
            self.select(Some(id));
        }

        self.relayout();
        true
    }

    /// Take a panel out of this bar
    ///
    /// When the open panel is removed, the first remaining panel opens.
    pub fn remove(&mut self, id: &ToolId) -> Option<ToolPanel> {
        let Some(index) = self.position(id) else {
            tracing::debug!(edge = %self.edge, tool = %id, "remove of undocked tool ignored");
            return None;
        };

        let mut panel = self.tools.remove(index);
        panel.edge = None;
        panel.is_highlighted = false;

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            let first = self.tools.first().map(|tool| tool.id().clone());
            self.select(first);
        }

        self.relayout();
        Some(panel)
    }

    /// Move a docked panel to `to` (index in the list without it), keeping
    /// the selection
    pub fn move_within(&mut self, from: usize, to: usize) {
        if from >= self.tools.len() {
            return;
        }
        let panel = self.tools.remove(from);
        let to = to.min(self.tools.len());
        self.tools.insert(to, panel);
        self.relayout();
    }

    /// Open `id`, or close the bar when `id` is already open
    pub fn toggle(&mut self, id: &ToolId) -> bool {
        if !self.contains(id) {
            tracing::debug!(edge = %self.edge, tool = %id, "toggle of undocked tool ignored");
            return false;
        }

        if self.selected.as_ref() == Some(id) {
            self.select(None);
        } else {
            self.select(Some(id.clone()));
        }

        self.relayout();
        true
    }

    /// Switch the open panel, keeping the panels' selection flags in step
    fn select(&mut self, id: Option<ToolId>) {
        if let Some(previous) = self.selected.take() {
            if let Some(tool) = self.tool_mut(&previous) {
                tool.is_selected = false;
            }
        }

        if let Some(id) = id {
            if let Some(tool) = self.tool_mut(&id) {
                tool.is_selected = true;
                tool.is_highlighted = false;
                self.selected = Some(id);
            }
        }
    }

    pub fn set_buttons_visible(&mut self, visible: bool) {
        if self.buttons_visible != visible {
            self.buttons_visible = visible;
            self.relayout();
        }
    }

    // ------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------

    /// Bar thickness for the current state
    ///
    /// | state                   | thickness                 |
    /// |-------------------------|---------------------------|
    /// | empty                   | 0                         |
    /// | buttons hidden, closed  | 0                         |
    /// | buttons hidden, open    | panel + separator         |
    /// | buttons shown, closed   | row + separator           |
    /// | buttons shown, open     | row + panel + 2 separator |
    pub fn compute_dimension(&self) -> f32 {
        if self.tools.is_empty() {
            return 0.0;
        }

        let sep = self.metrics.separator;
        match (self.buttons_visible, self.selected_tool()) {
            (false, None) => 0.0,
            (false, Some(tool)) => tool.dimension + sep,
            (true, None) => self.metrics.button_row + sep,
            (true, Some(tool)) => self.metrics.button_row + tool.dimension + 2.0 * sep,
        }
    }

    /// Recompute and apply the thickness after a state change
    pub fn relayout(&mut self) {
        let dimension = self.compute_dimension();
        self.set_dimension(dimension);
    }

    /// Apply a requested thickness, clamped to what the state allows
    ///
    /// Open bars never go below the open panel's minimum or the global
    /// minimum; closed bars never hide their buttons. The open panel's content
    /// dimension follows. Returns the applied thickness.
    pub fn set_dimension(&mut self, requested: f32) -> f32 {
        let sane = self.sane_dimension(requested);
        self.dimension = sane;

        let content = self.content_dimension(sane);
        if let Some(id) = self.selected.clone() {
            if let Some(tool) = self.tool_mut(&id) {
                tool.dimension = content;
            }
        }

        sane
    }

    /// An open bar never collapses, whatever is requested; closed bars keep
    /// 0 as "nothing shown"
    fn sane_dimension(&self, requested: f32) -> f32 {
        match self.selected_tool() {
            Some(tool) => requested
                .max(tool.minimum_dimension)
                .max(self.metrics.minimum_dimension),
            None if requested == 0.0 => 0.0,
            None => requested.max(self.metrics.closed_dimension()),
        }
    }

    /// Panel content extent inside a bar of thickness `bar`
    fn content_dimension(&self, bar: f32) -> f32 {
        let chrome = if self.buttons_visible {
            self.metrics.closed_dimension()
        } else {
            0.0
        };
        bar - self.metrics.separator - chrome
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Drop target strip: the button row plus the inner separator
    pub fn button_strip(&self, bounds: Rect) -> Rect {
        self.edge
            .frame()
            .slice(bounds, 0.0, self.metrics.closed_dimension())
    }

    /// Grab band of an open bar: the outer separator and the band inside it
    pub fn resize_handle(&self, bounds: Rect) -> Option<Rect> {
        if !self.is_open() {
            return None;
        }
        let band = self.metrics.separator + self.metrics.resize_handle;
        Some(
            self.edge
                .frame()
                .slice(bounds, self.dimension - band, band),
        )
    }

    /// Lay the bar out inside `bounds` (thickness equal to [`Self::dimension`])
    pub fn layout(&self, bounds: Rect) -> BarLayout {
        let frame = self.edge.frame();
        let metrics = &self.metrics;
        let mut layout = BarLayout {
            edge: self.edge,
            bounds,
            buttons: Vec::new(),
            inner_separator: None,
            panel: None,
            outer_separator: None,
            resize_handle: None,
            drop_gap: None,
        };

        if self.tools.is_empty() {
            return layout;
        }

        if self.buttons_visible {
            let row = frame.slice(bounds, 0.0, metrics.button_row);
            let gap = self.preview_gap();
            let mut offset = 0.0;

            for (index, tool) in self.tools.iter().enumerate() {
                if let Some((at, length)) = gap {
                    if at == index {
                        layout.drop_gap = Some(frame.segment(row, offset, length));
                        offset += length;
                    }
                }

                let button = ToolButton::new(tool, self.edge, metrics.title_padding);
                let length = button.length();
                let rect = frame.segment(row, offset, length);
                layout.buttons.push(ButtonSlot {
                    tool: tool.id().clone(),
                    rect,
                    title_origin: button.title_origin(rect),
                    rotation: button.rotation(),
                    highlighted: button.is_highlighted(),
                });
                offset += length;
            }

            if let Some((at, length)) = gap {
                if at >= self.tools.len() {
                    layout.drop_gap = Some(frame.segment(row, offset, length));
                }
            }

            layout.inner_separator =
                Some(frame.slice(bounds, metrics.button_row, metrics.separator));
        }

        if let Some(tool) = self.selected_tool() {
            let offset = if self.buttons_visible {
                metrics.closed_dimension()
            } else {
                0.0
            };
            let content = (self.dimension - offset - metrics.separator).max(0.0);
            layout.panel = Some(PanelSlot {
                tool: tool.id().clone(),
                rect: frame.slice(bounds, offset, content),
            });
            layout.outer_separator = Some(frame.slice(
                bounds,
                self.dimension - metrics.separator,
                metrics.separator,
            ));
            layout.resize_handle = self.resize_handle(bounds);
        }

        layout
    }

    /// Insertion point and length of the reorder preview gap
    fn preview_gap(&self) -> Option<(usize, f32)> {
        let drag = self.reorder.as_ref()?;
        let hovered = drag.hovered?;
        let source = self.position(&drag.source);
        Some((insertion_point(source, hovered), drag.gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> BarMetrics {
        BarMetrics {
            button_row: 24.0,
            separator: 1.0,
            ..BarMetrics::default()
        }
    }

    fn panel(id: &str) -> ToolPanel {
        ToolPanel::new(id, id, 50.0).with_dimension(150.0)
    }

    fn ids(bar: &DockBar) -> Vec<&str> {
        bar.tool_ids().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_empty_bar_has_zero_dimension() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        assert_eq!(bar.compute_dimension(), 0.0);
        bar.set_buttons_visible(false);
        assert_eq!(bar.compute_dimension(), 0.0);
        assert_eq!(bar.state(), BarState::Empty);
    }

    #[test]
    fn test_dimension_table() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        bar.append(panel("files"));

        // Closed, buttons visible
        assert_eq!(bar.dimension(), 25.0);

        // Open, buttons visible
        bar.toggle(&ToolId::from("files"));
        assert_eq!(bar.dimension(), 176.0);

        // Open, buttons hidden
        bar.set_buttons_visible(false);
        assert_eq!(bar.dimension(), 151.0);

        // Closed, buttons hidden
        bar.toggle(&ToolId::from("files"));
        assert_eq!(bar.dimension(), 0.0);
    }

    #[test]
    fn test_append_ignores_duplicates() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        assert!(bar.append(panel("a")));
        assert!(!bar.append(panel("a")));
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_append_to_open_bar_selects_new_tool() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        bar.append(panel("a"));
        bar.toggle(&ToolId::from("a"));
        bar.append(panel("b"));

        assert_eq!(bar.selected(), Some(&ToolId::from("b")));
        assert!(!bar.tool(&ToolId::from("a")).unwrap().is_selected());
        assert!(bar.tool(&ToolId::from("b")).unwrap().is_selected());
    }

    #[test]
    fn test_append_selected_tool_opens_bar() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        bar.append(panel("a"));
        assert!(!bar.is_open());
        bar.append(panel("b").selected());
        assert_eq!(bar.selected(), Some(&ToolId::from("b")));
        assert_eq!(bar.state(), BarState::Open);
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        bar.append(panel("a"));
        bar.insert(panel("b"), 0);
        bar.insert(panel("c"), 99);
        assert_eq!(ids(&bar), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_selected_falls_back_to_first() {
        let mut bar = DockBar::new(Edge::Right, metrics());
        bar.append(panel("a"));
        bar.append(panel("b"));
        bar.toggle(&ToolId::from("b"));

        let removed = bar.remove(&ToolId::from("b")).unwrap();
        assert_eq!(removed.edge(), None);
        assert_eq!(bar.selected(), Some(&ToolId::from("a")));
        assert!(bar.tool(&ToolId::from("a")).unwrap().is_selected());

        bar.remove(&ToolId::from("a"));
        assert_eq!(bar.selected(), None);
        assert_eq!(bar.dimension(), 0.0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut bar = DockBar::new(Edge::Right, metrics());
        bar.append(panel("a"));
        assert!(bar.remove(&ToolId::from("zzz")).is_none());
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_toggle_switches_between_tools() {
        let mut bar = DockBar::new(Edge::Bottom, metrics());
        bar.append(panel("a"));
        bar.append(panel("b"));

        bar.toggle(&ToolId::from("a"));
        bar.toggle(&ToolId::from("b"));
        assert_eq!(bar.selected(), Some(&ToolId::from("b")));
        assert!(!bar.tool(&ToolId::from("a")).unwrap().is_selected());

        bar.toggle(&ToolId::from("b"));
        assert!(!bar.is_open());
        assert_eq!(bar.state(), BarState::Closed);
    }

    #[test]
    fn test_dimension_clamped_to_minimums() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        bar.append(ToolPanel::new("a", "a", 80.0).with_dimension(10.0));
        bar.toggle(&ToolId::from("a"));

        // 24 + 10 + 2 = 36 is below the tool minimum of 80
        assert_eq!(bar.dimension(), 80.0);
        assert_eq!(bar.selected_tool().unwrap().dimension, 54.0);

        assert_eq!(bar.set_dimension(10.0), 80.0);
        assert_eq!(bar.set_dimension(300.0), 300.0);
        assert_eq!(bar.selected_tool().unwrap().dimension, 274.0);
    }

    #[test]
    fn test_open_bar_never_collapses_to_zero() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        bar.append(panel("a"));
        bar.toggle(&ToolId::from("a"));

        assert_eq!(bar.set_dimension(0.0), 50.0);
        assert_eq!(bar.selected_tool().unwrap().dimension, 24.0);

        // Close and reopen keeps the clamped size
        bar.toggle(&ToolId::from("a"));
        assert_eq!(bar.dimension(), 25.0);
        bar.toggle(&ToolId::from("a"));
        assert_eq!(bar.dimension(), 50.0);

        bar.set_buttons_visible(false);
        assert_eq!(bar.set_dimension(0.0), 50.0);
        assert_eq!(bar.selected_tool().unwrap().dimension, 49.0);
    }

    #[test]
    fn test_closed_bar_keeps_zero_request() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        bar.append(panel("a"));
        assert_eq!(bar.set_dimension(0.0), 0.0);
        assert_eq!(bar.set_dimension(5.0), 25.0);
    }

    #[test]
    fn test_move_within_keeps_selection() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        bar.append(panel("a"));
        bar.append(panel("b"));
        bar.append(panel("c"));
        bar.toggle(&ToolId::from("b"));

        bar.move_within(0, 2);
        assert_eq!(ids(&bar), vec!["b", "c", "a"]);
        assert_eq!(bar.selected(), Some(&ToolId::from("b")));
    }

    #[test]
    fn test_layout_of_open_left_bar() {
        let mut bar = DockBar::new(Edge::Left, metrics());
        bar.append(panel("a"));
        bar.toggle(&ToolId::from("a"));

        let bounds = Rect::new(0.0, 0.0, bar.dimension(), 400.0);
        let layout = bar.layout(bounds);

        assert_eq!(layout.buttons.len(), 1);
        assert_eq!(layout.buttons[0].rect.x, 0.0);
        assert_eq!(layout.buttons[0].rect.width, 24.0);
        assert_eq!(layout.inner_separator, Some(Rect::new(24.0, 0.0, 1.0, 400.0)));
        assert_eq!(
            layout.panel.as_ref().map(|p| p.rect),
            Some(Rect::new(25.0, 0.0, 150.0, 400.0))
        );
        assert_eq!(layout.outer_separator, Some(Rect::new(175.0, 0.0, 1.0, 400.0)));
        assert_eq!(layout.resize_handle, Some(Rect::new(171.0, 0.0, 5.0, 400.0)));
    }

    #[test]
    fn test_layout_of_right_bar_puts_buttons_at_screen_edge() {
        let mut bar = DockBar::new(Edge::Right, metrics());
        bar.append(panel("a"));
        bar.toggle(&ToolId::from("a"));

        let bounds = Rect::new(600.0, 0.0, bar.dimension(), 400.0);
        let layout = bar.layout(bounds);

        assert_eq!(layout.buttons[0].rect.x, 752.0);
        assert_eq!(layout.outer_separator, Some(Rect::new(600.0, 0.0, 1.0, 400.0)));
        assert_eq!(layout.resize_handle, Some(Rect::new(600.0, 0.0, 5.0, 400.0)));
    }

    #[test]
    fn test_closed_bar_layout_has_no_panel() {
        let mut bar = DockBar::new(Edge::Top, metrics());
        bar.append(panel("a"));
        bar.append(panel("b"));
        let layout = bar.layout(Rect::new(0.0, 0.0, 800.0, bar.dimension()));

        assert_eq!(layout.buttons.len(), 2);
        assert!(layout.panel.is_none());
        assert!(layout.resize_handle.is_none());
        // Buttons flow left to right without overlap
        assert_eq!(layout.buttons[1].rect.x, layout.buttons[0].rect.right());
    }
}
