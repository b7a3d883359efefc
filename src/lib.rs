//! dockspace - dockable workspace layout engine
//!
//! Four edge bars (top, right, bottom, left) frame a main area. Each bar holds
//! an ordered set of tool panels, at most one of them open. The engine owns no
//! window: hosts feed it bounds and pointer events and get back geometry, a
//! display list and delegate notifications.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod messages;
pub mod paint;
pub mod panel;
pub mod snapshot;
pub mod store;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod workspace;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkspaceConfig;
pub use geometry::{Edge, Point, Rect, Size};
pub use messages::Msg;
pub use panel::{DockBar, ToolId, ToolPanel};
pub use snapshot::LayoutSnapshot;
pub use store::Store;
pub use theme::WorkspaceTheme;
pub use workspace::{Workspace, WorkspaceDelegate};
