//! Panel system - dock bars, tool panels and their buttons
//!
//! ## Architecture
//!
//! - `ToolPanel`: a dockable panel, owned by value by the bar it is docked in
//! - `ToolButton`: header button view of a panel (sizing, orientation)
//! - `DockBar`: ordered panels of one edge, at most one open, sizing table
//! - `reorder`: same-bar drag slot resolution
//! - `resize`: modal resize loop driven by a `PointerSource`
//!
//! Bars are owned by the [`Workspace`](crate::workspace::Workspace), which
//! coordinates moves between them.

mod bar;
mod button;
pub mod reorder;
pub mod resize;
mod tool;

pub use bar::{BarLayout, BarMetrics, BarState, ButtonSlot, DockBar, PanelSlot};
pub use button::{
    button_row_dimension, FixedAdvance, FontMeasure, TextMeasure, ToolButton,
    DEFAULT_TITLE_PADDING,
};
pub use reorder::{DropPlan, ReorderDrag};
pub use resize::{PointerEvent, PointerKind, PointerSource, ResizeOutcome, ResizeState};
pub use tool::{ToolId, ToolPanel};
