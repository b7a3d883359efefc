//! Tool buttons: sizing, orientation and title measurement
//!
//! A button is a view of a [`ToolPanel`]. Its size is the measured title plus
//! padding, rotated a quarter turn on left/right bars. Every bar shares one
//! button row thickness, derived from a reference title so that bars on all
//! four edges line up regardless of their tools' titles.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};

use crate::geometry::{Edge, EdgeFrame, Point, Rect, Size, TitleRotation};

use super::tool::ToolPanel;

/// Padding around a button title (horizontal, vertical)
pub const DEFAULT_TITLE_PADDING: Size = Size::new(8.0, 2.0);

/// Title used to size the shared button row
const REFERENCE_TITLE: &str = "Dummy";

/// Measures single-line text
pub trait TextMeasure {
    /// Extent of `text` laid out horizontally on one line
    fn measure(&self, text: &str) -> Size;
}

/// Monospace cell metrics, no font file needed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedAdvance {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// Approximate cell metrics for a font size in pixels
    pub fn for_font_size(px: f32) -> Self {
        Self::new(px * 0.6, (px * 1.2).ceil())
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}

/// Metrics from a real font via fontdue
pub struct FontMeasure {
    font: Font,
    px: f32,
}

impl FontMeasure {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow!("Failed to parse font: {}", e))?;
        Ok(Self { font, px })
    }

    pub fn from_file(path: &Path, px: f32) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        Self::from_bytes(&bytes, px)
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&self, text: &str) -> Size {
        let width = text
            .chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum();
        let height = self
            .font
            .horizontal_line_metrics(self.px)
            .map(|m| m.new_line_size)
            .unwrap_or(self.px * 1.2);
        Size::new(width, height.ceil())
    }
}

/// Thickness of the button row shared by all bars
pub fn button_row_dimension(measure: &dyn TextMeasure, padding: Size) -> f32 {
    measure.measure(REFERENCE_TITLE).padded(padding).height
}

/// Header button of a tool panel, oriented for the bar it sits in
#[derive(Debug, Clone, Copy)]
pub struct ToolButton<'a> {
    panel: &'a ToolPanel,
    frame: EdgeFrame,
    padding: Size,
}

impl<'a> ToolButton<'a> {
    pub fn new(panel: &'a ToolPanel, edge: Edge, padding: Size) -> Self {
        Self {
            panel,
            frame: edge.frame(),
            padding,
        }
    }

    pub fn panel(&self) -> &'a ToolPanel {
        self.panel
    }

    /// Title extent plus padding, transposed on left/right bars
    pub fn intrinsic_size(&self) -> Size {
        self.frame.orient(self.panel.title_size().padded(self.padding))
    }

    /// Extent along the bar
    pub fn length(&self) -> f32 {
        self.frame.length_of(self.intrinsic_size())
    }

    pub fn rotation(&self) -> TitleRotation {
        self.frame.title_rotation()
    }

    /// Where the title is anchored when the button occupies `rect`
    pub fn title_origin(&self, rect: Rect) -> Point {
        self.frame.title_origin(rect, self.padding)
    }

    /// Selected buttons are drawn highlighted, others only while hovered
    pub fn is_highlighted(&self) -> bool {
        self.panel.is_selected() || self.panel.is_highlighted()
    }
}

impl ToolPanel {
    /// Pointer entered (`true`) or left the button; selected tools keep their
    /// highlight. Returns whether a repaint is needed.
    pub fn hover(&mut self, inside: bool) -> bool {
        if self.is_selected || self.is_highlighted == inside {
            return false;
        }
        self.is_highlighted = inside;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(title: &str) -> ToolPanel {
        let mut panel = ToolPanel::new(title, title, 50.0);
        panel.measure_title(&FixedAdvance::new(6.0, 14.0));
        panel
    }

    #[test]
    fn test_fixed_advance_measure() {
        let measure = FixedAdvance::new(6.0, 14.0);
        assert_eq!(measure.measure("Files"), Size::new(30.0, 14.0));
        assert_eq!(measure.measure(""), Size::new(0.0, 14.0));
    }

    #[test]
    fn test_button_row_dimension_uses_padding() {
        let measure = FixedAdvance::new(6.0, 14.0);
        assert_eq!(button_row_dimension(&measure, DEFAULT_TITLE_PADDING), 18.0);
    }

    #[test]
    fn test_horizontal_button_size() {
        let panel = measured("Files");
        let button = ToolButton::new(&panel, Edge::Top, DEFAULT_TITLE_PADDING);
        assert_eq!(button.intrinsic_size(), Size::new(46.0, 18.0));
        assert_eq!(button.length(), 46.0);
        assert_eq!(button.rotation(), TitleRotation::None);
    }

    #[test]
    fn test_vertical_button_is_rotated() {
        let panel = measured("Files");
        let left = ToolButton::new(&panel, Edge::Left, DEFAULT_TITLE_PADDING);
        assert_eq!(left.intrinsic_size(), Size::new(18.0, 46.0));
        assert_eq!(left.length(), 46.0);
        assert_eq!(left.rotation(), TitleRotation::CounterClockwise);

        let right = ToolButton::new(&panel, Edge::Right, DEFAULT_TITLE_PADDING);
        assert_eq!(right.rotation(), TitleRotation::Clockwise);
    }

    #[test]
    fn test_title_origin_respects_rotation() {
        let panel = measured("Files");
        let rect = Rect::new(0.0, 100.0, 18.0, 46.0);

        let right = ToolButton::new(&panel, Edge::Right, DEFAULT_TITLE_PADDING);
        assert_eq!(right.title_origin(rect), Point::new(16.0, 108.0));

        let left = ToolButton::new(&panel, Edge::Left, DEFAULT_TITLE_PADDING);
        assert_eq!(left.title_origin(rect), Point::new(2.0, 138.0));
    }

    #[test]
    fn test_hover_ignored_for_selected_tool() {
        let mut panel = measured("Files");
        assert!(panel.hover(true));
        assert!(!panel.hover(true));
        assert!(panel.hover(false));

        panel.is_selected = true;
        assert!(!panel.hover(true));
        assert!(!panel.is_highlighted());
        assert!(ToolButton::new(&panel, Edge::Top, DEFAULT_TITLE_PADDING).is_highlighted());
    }
}
