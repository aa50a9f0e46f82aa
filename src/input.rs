//! Interaction state: the active drag and the hovered label.
//!
//! Both are plain values. Handlers take the current state and return the next
//! one together with any notification, so the state machines can be driven
//! without a UI harness. Neither state is ever persisted.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::HOVER_EPSILON;
use crate::coords::Point;

/// The drag gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging slice `.0`. The index is locked for the whole gesture, even if
    /// the pointer wanders into another slice's wedge.
    Active(usize),
}

impl DragState {
    /// The locked slice, if a drag is in progress.
    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Active(index) => Some(index),
        }
    }
}

/// A proposed new value for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub id: String,
    pub value: u8,
}

/// Which label, if any, the pointer is over.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    None,
    Hovering {
        category_id: String,
        /// Last reported anchor, in client pixels.
        anchor: Point,
    },
}

/// What the hover sink is told.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverReport {
    pub category_id: String,
    /// Popover anchor in client pixels.
    pub anchor: Point,
}

/// A notification for the hover sink.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverChange {
    Show(HoverReport),
    Clear,
}

/// Advance the hover state given the label found under the pointer.
///
/// A report for the same category whose anchor moved less than
/// `HOVER_EPSILON` on both axes is swallowed, as is clearing an already
/// empty hover.
#[must_use]
pub fn next_hover(prev: &HoverState, found: Option<HoverReport>) -> (HoverState, Option<HoverChange>) {
    let Some(report) = found else {
        return match prev {
            HoverState::None => (HoverState::None, None),
            HoverState::Hovering { .. } => (HoverState::None, Some(HoverChange::Clear)),
        };
    };

    if let HoverState::Hovering { category_id, anchor } = prev {
        if *category_id == report.category_id
            && (anchor.x - report.anchor.x).abs() < HOVER_EPSILON
            && (anchor.y - report.anchor.y).abs() < HOVER_EPSILON
        {
            return (prev.clone(), None);
        }
    }

    let next = HoverState::Hovering {
        category_id: report.category_id.clone(),
        anchor: report.anchor,
    };
    (next, Some(HoverChange::Show(report)))
}
