//! Drag-to-reorder slot resolution for a single bar
//!
//! Button frames are cached when a drag enters the bar so that the preview
//! gap opening up under the pointer does not shift the hit-test targets.
//!
//! Index math works on an *insertion point*: a position in the bar's list
//! before the dragged tool is removed. Hovering a button inserts before it,
//! or after it when the dragged tool comes from an earlier slot. Removing the
//! dragged tool from before the insertion point shifts that point down by
//! exactly one.

use crate::geometry::{Point, Rect};

use super::tool::ToolId;

/// Same-bar drag state, alive between drag entry and drag end
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderDrag {
    /// Tool being dragged (may live in another bar)
    pub source: ToolId,
    /// Length of the dragged button along this bar, used for the preview gap
    pub gap: f32,
    /// Button frames at drag entry, in bar order
    pub frames: Vec<Rect>,
    /// Slot currently under the pointer
    pub hovered: Option<usize>,
}

/// Outcome of dropping onto a bar's button strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlan {
    /// Dropped onto itself or outside any slot
    Unchanged,
    /// Dropped past the last button
    Append,
    /// Insert at this index of the list without the dragged tool
    Insert(usize),
}

/// Slot whose cached frame contains `point`, ignoring the dragged tool's own
pub fn hovered_slot(frames: &[Rect], point: Point, source_index: Option<usize>) -> Option<usize> {
    frames
        .iter()
        .position(|frame| frame.contains_point(point))
        .filter(|&idx| Some(idx) != source_index)
}

/// Insertion point (pre-removal) for a drop on slot `hovered`
pub fn insertion_point(source_index: Option<usize>, hovered: usize) -> usize {
    match source_index {
        Some(source) if source < hovered => hovered + 1,
        _ => hovered,
    }
}

/// Index to insert at once the dragged tool has been removed
pub fn index_after_removal(source_index: usize, insertion_point: usize) -> usize {
    if source_index < insertion_point {
        insertion_point - 1
    } else {
        insertion_point
    }
}

/// Resolve a drop at `point`
///
/// `strip` is the bar's button strip; `source_index` is the dragged tool's
/// position when it belongs to this bar. A tool from another bar that is not
/// over a button is appended wherever it is dropped.
pub fn plan_drop(
    frames: &[Rect],
    strip: Rect,
    point: Point,
    source_index: Option<usize>,
) -> DropPlan {
    if let Some(hovered) = hovered_slot(frames, point, source_index) {
        let at = insertion_point(source_index, hovered);
        return match source_index {
            Some(source) => DropPlan::Insert(index_after_removal(source, at)),
            None => DropPlan::Insert(at),
        };
    }

    if source_index.is_none() {
        return DropPlan::Append;
    }

    let on_button = frames.iter().any(|frame| frame.contains_point(point));
    if !on_button && strip.contains_point(point) {
        DropPlan::Append
    } else {
        DropPlan::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three 40px buttons in a top bar strip
    fn frames() -> Vec<Rect> {
        (0..3)
            .map(|i| Rect::new(i as f32 * 40.0, 0.0, 40.0, 24.0))
            .collect()
    }

    fn strip() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 25.0)
    }

    fn center_of(slot: usize) -> Point {
        Point::new(slot as f32 * 40.0 + 20.0, 12.0)
    }

    #[test]
    fn test_hovered_slot_skips_source() {
        assert_eq!(hovered_slot(&frames(), center_of(1), None), Some(1));
        assert_eq!(hovered_slot(&frames(), center_of(1), Some(1)), None);
        assert_eq!(hovered_slot(&frames(), Point::new(300.0, 5.0), None), None);
    }

    #[test]
    fn test_forward_drag_lands_in_hovered_slot() {
        // [A, B, C]: A onto C → [B, C, A]
        assert_eq!(insertion_point(Some(0), 2), 3);
        assert_eq!(index_after_removal(0, 3), 2);
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(2), Some(0)),
            DropPlan::Insert(2)
        );
    }

    #[test]
    fn test_backward_drag_to_first_slot() {
        // [A, B, C]: C onto A → [C, A, B]
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(0), Some(2)),
            DropPlan::Insert(0)
        );
    }

    #[test]
    fn test_adjacent_swaps() {
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(1), Some(0)),
            DropPlan::Insert(1)
        );
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(0), Some(1)),
            DropPlan::Insert(0)
        );
    }

    #[test]
    fn test_drop_on_self_is_unchanged() {
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(1), Some(1)),
            DropPlan::Unchanged
        );
    }

    #[test]
    fn test_drop_past_last_button_appends() {
        let past_end = Point::new(200.0, 10.0);
        assert_eq!(plan_drop(&frames(), strip(), past_end, Some(0)), DropPlan::Append);
        assert_eq!(plan_drop(&frames(), strip(), past_end, None), DropPlan::Append);
    }

    #[test]
    fn test_drop_outside_strip_is_unchanged() {
        let below = Point::new(200.0, 100.0);
        assert_eq!(plan_drop(&frames(), strip(), below, Some(0)), DropPlan::Unchanged);
    }

    #[test]
    fn test_foreign_tool_outside_buttons_appends() {
        let below = Point::new(200.0, 100.0);
        assert_eq!(plan_drop(&frames(), strip(), below, None), DropPlan::Append);
    }

    #[test]
    fn test_foreign_tool_inserts_before_hovered() {
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(1), None),
            DropPlan::Insert(1)
        );
        assert_eq!(
            plan_drop(&frames(), strip(), center_of(0), None),
            DropPlan::Insert(0)
        );
    }
}
