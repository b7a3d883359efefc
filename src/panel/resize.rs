//! Interactive resize of an open bar
//!
//! The resize runs as a blocking modal loop: it pulls pointer events from the
//! host until the button is released and applies every drag synchronously, so
//! no intermediate layout is ever observable. The bar's resize state lives in
//! a scope guard and is reset on every exit path, including a lost pointer-up
//! (source exhausted) and unwinding.

use std::ops::{Deref, DerefMut};

use crate::geometry::{Point, Rect};

use super::bar::DockBar;

/// Kind of pointer event delivered during a modal drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Dragged,
    Up,
}

/// A primary-button pointer event in workspace coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
        }
    }

    pub fn dragged(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Dragged,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
        }
    }
}

/// Host capability: block until the next pointer event of the drag
///
/// Returning `None` means the event stream ended (window deactivated,
/// pointer-up lost) and cancels the drag.
pub trait PointerSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl<I> PointerSource for I
where
    I: Iterator<Item = PointerEvent>,
{
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.next()
    }
}

/// Resize sub-state of an open bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Active {
        dimension: f32,
    },
}

impl ResizeState {
    pub fn is_active(&self) -> bool {
        matches!(self, ResizeState::Active { .. })
    }
}

/// Result of a finished resize loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    /// Whether the pointer moved far enough to count as a drag
    pub dragged: bool,
    /// Bar dimension after the loop
    pub dimension: f32,
}

/// Holds a bar in the resizing state for the guard's lifetime
struct ResizeGuard<'a> {
    bar: &'a mut DockBar,
}

impl<'a> ResizeGuard<'a> {
    fn engage(bar: &'a mut DockBar) -> Self {
        bar.resize = ResizeState::Active {
            dimension: bar.dimension(),
        };
        Self { bar }
    }
}

impl Deref for ResizeGuard<'_> {
    type Target = DockBar;

    fn deref(&self) -> &DockBar {
        self.bar
    }
}

impl DerefMut for ResizeGuard<'_> {
    fn deref_mut(&mut self) -> &mut DockBar {
        self.bar
    }
}

impl Drop for ResizeGuard<'_> {
    fn drop(&mut self) {
        self.bar.resize = ResizeState::Idle;
        tracing::trace!(edge = %self.bar.edge(), "resize state released");
    }
}

/// Snap down to a multiple of `increment`
fn snap(dimension: f32, increment: f32) -> f32 {
    if increment <= 0.0 {
        return dimension;
    }
    increment * (dimension / increment).floor()
}

/// Run the modal resize loop for `bar`
///
/// `start` is the pointer-down location, `bounds` the rectangle the bar is
/// docked into (the pointer is projected onto its thickness axis) and
/// `max_dimension` the room left once the main area keeps its minimum size.
pub(crate) fn track(
    bar: &mut DockBar,
    start: Point,
    bounds: Rect,
    max_dimension: f32,
    source: &mut dyn PointerSource,
) -> ResizeOutcome {
    let frame = bar.edge().frame();
    let increment = bar.metrics().drag_increment;
    let mut guard = ResizeGuard::engage(bar);
    let mut dragged = false;

    while let Some(event) = source.next_event() {
        if event.kind != PointerKind::Dragged {
            break;
        }

        if !dragged && start.distance_sq(event.position) < 1.0 {
            continue;
        }

        let candidate = snap(frame.depth(bounds, event.position), increment);
        let applied = guard.set_dimension(candidate.min(max_dimension));
        guard.resize = ResizeState::Active { dimension: applied };
        dragged = true;

        tracing::trace!(
            edge = %guard.edge(),
            candidate,
            applied,
            "resize drag"
        );
    }

    ResizeOutcome {
        dragged,
        dimension: guard.dimension(),
    }
}
