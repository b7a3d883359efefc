//! Tool panels: the dockable units that bars hold

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Edge, Size};

use super::button::TextMeasure;

/// Opaque, host-chosen identifier of a tool panel
///
/// Used for persistence, drag sources and delegate notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A dockable panel
///
/// Panels are owned by exactly one [`DockBar`](super::DockBar) while docked
/// and are moved by value between bars, so a panel can never be a member of
/// two bars at once. `edge` is the non-owning back-handle to the owning bar.
#[derive(Debug)]
pub struct ToolPanel {
    id: ToolId,
    title: String,
    /// Measured title extent, horizontal layout
    title_size: Size,
    /// Smallest content dimension the panel accepts
    pub minimum_dimension: f32,
    /// Current content dimension (width on left/right, height on top/bottom)
    pub dimension: f32,
    pub(crate) is_selected: bool,
    pub(crate) edge: Option<Edge>,
    pub(crate) is_highlighted: bool,
}

impl ToolPanel {
    /// Create an undocked panel whose dimension starts at its minimum
    pub fn new(id: impl Into<ToolId>, title: impl Into<String>, minimum_dimension: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            title_size: Size::ZERO,
            minimum_dimension,
            dimension: minimum_dimension,
            is_selected: false,
            edge: None,
            is_highlighted: false,
        }
    }

    /// Builder: initial content dimension
    pub fn with_dimension(mut self, dimension: f32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Builder: dock the panel opened
    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    pub fn id(&self) -> &ToolId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_size(&self) -> Size {
        self.title_size
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Edge of the owning bar, `None` when not docked
    pub fn edge(&self) -> Option<Edge> {
        self.edge
    }

    /// Measure the title once, when the panel enters a workspace
    pub fn measure_title(&mut self, measure: &dyn TextMeasure) {
        self.title_size = measure.measure(&self.title);
    }
}

// Identity comparison, panels with the same id are the same panel
impl PartialEq for ToolPanel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ToolPanel {}
