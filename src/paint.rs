//! Display list for the workspace chrome
//!
//! Hosts draw the ops in order: later ops paint over earlier ones. Only the
//! chrome is described; panel contents and the main view are the host's.

use serde::Serialize;

use crate::geometry::{Point, Rect, TitleRotation};
use crate::panel::{BarLayout, ToolId};
use crate::theme::{Color, WorkspaceTheme};
use crate::workspace::Workspace;

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    Fill {
        rect: Rect,
        color: Color,
    },
    /// Outline drawn inside `rect`
    Stroke {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Title {
        tool: ToolId,
        text: String,
        origin: Point,
        rotation: TitleRotation,
        color: Color,
    },
}

/// Push a fill unless it would be invisible
fn fill(ops: &mut Vec<PaintOp>, rect: Rect, color: Color) {
    if !rect.is_empty() && !color.is_transparent() {
        ops.push(PaintOp::Fill { rect, color });
    }
}

fn paint_bar(ops: &mut Vec<PaintOp>, workspace: &Workspace, bar: &BarLayout) {
    let theme = workspace.theme();
    fill(ops, bar.bounds, theme.bar_background);

    for button in &bar.buttons {
        let color = if button.highlighted {
            theme.button_highlight
        } else {
            theme.button_background
        };
        fill(ops, button.rect, color);

        if let Some(tool) = workspace.tool(&button.tool) {
            ops.push(PaintOp::Title {
                tool: button.tool.clone(),
                text: tool.title().to_string(),
                origin: button.title_origin,
                rotation: button.rotation,
                color: theme.foreground,
            });
        }
    }

    for separator in [bar.inner_separator, bar.outer_separator].into_iter().flatten() {
        fill(ops, separator, theme.separator);
    }
}

impl Workspace {
    /// Drawing instructions for the current layout and theme
    pub fn display_list(&self) -> Vec<PaintOp> {
        let layout = self.layout();
        let theme: &WorkspaceTheme = self.theme();
        let mut ops = Vec::new();

        fill(&mut ops, layout.main, theme.background);

        for bar in &layout.bars {
            paint_bar(&mut ops, self, bar);
        }

        if let Some(preview) = layout.drop_preview {
            fill(&mut ops, preview.rect, theme.bar_background);
            ops.push(PaintOp::Stroke {
                rect: preview.rect,
                color: theme.bar_focus_ring,
                width: self.metrics().separator.max(1.0),
            });
        }

        ops
    }
}
