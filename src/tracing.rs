//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging bar
//! sizing, drag routing and layout transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=dockspace::workspace=trace` - drag routing and resize steps
//! - `RUST_LOG=dockspace::panel=debug` - bar membership no-ops
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockspace/logs/dockspace.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::snapshot::{BarSnapshot, LayoutSnapshot};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/dockspace/logs/dockspace.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockspace.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

fn open_tool(bar: &BarSnapshot) -> Option<&str> {
    bar.tools
        .iter()
        .find(|tool| tool.selected)
        .map(|tool| tool.id.as_str())
}

fn tool_list(bar: &BarSnapshot) -> String {
    bar.tools
        .iter()
        .map(|tool| tool.id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Describe what changed between two layout snapshots
///
/// Returns `None` when nothing differs.
pub fn describe_change(before: &LayoutSnapshot, after: &LayoutSnapshot) -> Option<String> {
    let mut changes = Vec::new();

    if before.all_tools_visible != after.all_tools_visible {
        changes.push(format!("all tools visible → {}", after.all_tools_visible));
    }
    if before.tool_buttons_visible != after.tool_buttons_visible {
        changes.push(format!("tool buttons visible → {}", after.tool_buttons_visible));
    }

    for bar in &after.bars {
        let previous = before.bars.iter().find(|b| b.edge == bar.edge);
        let (old_tools, old_open) = match previous {
            Some(prev) => (tool_list(prev), open_tool(prev)),
            None => (String::new(), None),
        };

        let new_tools = tool_list(bar);
        if old_tools != new_tools {
            changes.push(format!("{}: [{}] → [{}]", bar.edge, old_tools, new_tools));
        }

        let new_open = open_tool(bar);
        if old_open != new_open {
            changes.push(format!(
                "{}: open {} → {}",
                bar.edge,
                old_open.unwrap_or("none"),
                new_open.unwrap_or("none")
            ));
        }
    }

    if changes.is_empty() && before != after {
        changes.push("dimensions".to_string());
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join("; "))
    }
}
