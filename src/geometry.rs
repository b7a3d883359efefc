//! Edge geometry shared by bars, buttons, hit-testing and painting
//!
//! Every edge-dependent computation goes through [`EdgeFrame`]: the edge is
//! resolved into an axis and a polarity exactly once (in [`Edge::frame`]), and
//! all slicing, projection and flow math is written against that pair.
//!
//! Coordinates use a top-left origin with y growing downward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point in workspace coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, used for the drag threshold
    pub fn distance_sq(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Same size with width and height exchanged (rotated by a quarter turn)
    pub const fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Grow by `padding` on every side
    pub fn padded(&self, padding: Size) -> Self {
        Self {
            width: self.width + 2.0 * padding.width,
            height: self.height + 2.0 * padding.height,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }
}

/// One of the four workspace edges a bar can be docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in hit-test and iteration order
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Resolve the axis and polarity for this edge
    pub const fn frame(self) -> EdgeFrame {
        let (axis, polarity) = match self {
            Edge::Top => (Axis::Vertical, Polarity::Near),
            Edge::Bottom => (Axis::Vertical, Polarity::Far),
            Edge::Left => (Axis::Horizontal, Polarity::Near),
            Edge::Right => (Axis::Horizontal, Polarity::Far),
        };
        EdgeFrame {
            edge: self,
            axis,
            polarity,
        }
    }

    /// The edge across the main area
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Edge::ALL
            .into_iter()
            .find(|edge| edge.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown edge '{}' (expected top, right, bottom or left)", s))
    }
}

/// Axis a bar's dimension (thickness) is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Thickness is a width (left/right bars)
    Horizontal,
    /// Thickness is a height (top/bottom bars)
    Vertical,
}

/// Which side of a rectangle the edge sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Measured from the origin side (top, left)
    Near,
    /// Measured from the far side (bottom, right)
    Far,
}

/// Rotation applied to button titles on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleRotation {
    None,
    /// Quarter turn clockwise, reads top to bottom
    Clockwise,
    /// Quarter turn counter-clockwise, reads bottom to top
    CounterClockwise,
}

/// Axis + polarity resolved from an [`Edge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFrame {
    pub edge: Edge,
    pub axis: Axis,
    pub polarity: Polarity,
}

impl EdgeFrame {
    /// Extent of `size` along the thickness axis
    pub fn thickness_of(&self, size: Size) -> f32 {
        match self.axis {
            Axis::Vertical => size.height,
            Axis::Horizontal => size.width,
        }
    }

    /// Extent of `size` along the bar's length (the axis buttons flow on)
    pub fn length_of(&self, size: Size) -> f32 {
        match self.axis {
            Axis::Vertical => size.width,
            Axis::Horizontal => size.height,
        }
    }

    /// Start and extent of `rect` along the thickness axis
    fn span(&self, rect: Rect) -> (f32, f32) {
        match self.axis {
            Axis::Vertical => (rect.y, rect.height),
            Axis::Horizontal => (rect.x, rect.width),
        }
    }

    /// Start and extent of `rect` along the length axis
    fn cross_span(&self, rect: Rect) -> (f32, f32) {
        match self.axis {
            Axis::Vertical => (rect.x, rect.width),
            Axis::Horizontal => (rect.y, rect.height),
        }
    }

    /// Replace the thickness-axis span of `rect`
    fn with_span(&self, rect: Rect, start: f32, extent: f32) -> Rect {
        match self.axis {
            Axis::Vertical => Rect::new(rect.x, start, rect.width, extent),
            Axis::Horizontal => Rect::new(start, rect.y, extent, rect.height),
        }
    }

    /// Replace the length-axis span of `rect`
    fn with_cross_span(&self, rect: Rect, start: f32, extent: f32) -> Rect {
        match self.axis {
            Axis::Vertical => Rect::new(start, rect.y, extent, rect.height),
            Axis::Horizontal => Rect::new(rect.x, start, rect.width, extent),
        }
    }

    /// Band of `thickness` parallel to this edge, `offset` inward from it
    pub fn slice(&self, rect: Rect, offset: f32, thickness: f32) -> Rect {
        let (start, extent) = self.span(rect);
        let band_start = match self.polarity {
            Polarity::Near => start + offset,
            Polarity::Far => start + extent - offset - thickness,
        };
        self.with_span(rect, band_start, thickness)
    }

    /// What is left of `rect` after removing a band of `thickness` at this edge
    pub fn inset(&self, rect: Rect, thickness: f32) -> Rect {
        let (start, extent) = self.span(rect);
        let remaining = (extent - thickness).max(0.0);
        match self.polarity {
            Polarity::Near => self.with_span(rect, start + thickness.min(extent), remaining),
            Polarity::Far => self.with_span(rect, start, remaining),
        }
    }

    /// Distance of `point` from this edge of `rect`, measured inward
    pub fn depth(&self, rect: Rect, point: Point) -> f32 {
        let (start, extent) = self.span(rect);
        let coord = match self.axis {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        };
        match self.polarity {
            Polarity::Near => coord - start,
            Polarity::Far => start + extent - coord,
        }
    }

    /// Sub-rectangle of `rect` starting `offset` along its length, `length` long
    pub fn segment(&self, rect: Rect, offset: f32, length: f32) -> Rect {
        let (start, _) = self.cross_span(rect);
        self.with_cross_span(rect, start + offset, length)
    }

    /// Total length of `rect` along the bar
    pub fn length(&self, rect: Rect) -> f32 {
        self.cross_span(rect).1
    }

    /// Orient a horizontally laid out size for this edge
    pub fn orient(&self, size: Size) -> Size {
        match self.axis {
            Axis::Vertical => size,
            Axis::Horizontal => size.transposed(),
        }
    }

    /// Rotation of titles drawn on this edge
    pub fn title_rotation(&self) -> TitleRotation {
        match (self.axis, self.polarity) {
            (Axis::Vertical, _) => TitleRotation::None,
            (Axis::Horizontal, Polarity::Far) => TitleRotation::Clockwise,
            (Axis::Horizontal, Polarity::Near) => TitleRotation::CounterClockwise,
        }
    }

    /// Anchor point of a title inside a button rectangle
    pub fn title_origin(&self, button: Rect, padding: Size) -> Point {
        match self.title_rotation() {
            TitleRotation::None => Point::new(button.x + padding.width, button.y + padding.height),
            TitleRotation::Clockwise => {
                Point::new(button.right() - padding.height, button.y + padding.width)
            }
            TitleRotation::CounterClockwise => {
                Point::new(button.x + padding.height, button.bottom() - padding.width)
            }
        }
    }
}
