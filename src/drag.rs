//! The drag controller: turns pointer positions into slice values.
//!
//! Dragging models pulling outward along a slice's central axis. The pointer
//! vector from the center is projected onto the slice's unit axis and the
//! projection, never negative, is scaled to `1..=MAX_VALUE`.
//!
//! Transitions are pure: each takes the current [`DragState`] and returns a
//! [`Transition`]. A step that cannot proceed (no point, no slice, stale index)
//! leaves the state untouched and proposes nothing.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::MAX_VALUE;
use crate::coords::Point;
use crate::data::Category;
use crate::error::ChartError;
use crate::geometry::ChartGeometry;
use crate::hit::slice_index_at_point;
use crate::input::{DragState, ValueChange};

/// Everything a drag step reads besides the pointer.
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    pub categories: &'a [Category],
    pub geometry: &'a ChartGeometry,
    pub read_only: bool,
}

/// Result of one drag step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DragState,
    /// Set only when the derived value differs from the category's current one.
    pub change: Option<ValueChange>,
}

impl Transition {
    fn unchanged(state: DragState) -> Self {
        Self { state, change: None }
    }
}

/// Value for slice `index` when the pointer is at `point`.
///
/// Always in `1..=MAX_VALUE` for finite input.
#[must_use]
pub fn value_for_slice(point: Point, index: usize, geometry: &ChartGeometry) -> u8 {
    let dx = point.x - geometry.center;
    let dy = point.y - geometry.center;
    let axis = geometry.slice_mid(index);
    let projected = (dx * axis.cos() + dy * axis.sin()).max(0.0);

    let raw = (projected / geometry.radius * f64::from(MAX_VALUE)).ceil();
    if raw.is_nan() || raw < 1.0 {
        return 1;
    }
    if raw >= f64::from(MAX_VALUE) {
        return MAX_VALUE;
    }
    raw as u8
}

/// Pointer-down or touch-start.
#[must_use]
pub fn press(state: DragState, point: Option<Point>, ctx: &DragContext<'_>) -> Transition {
    if ctx.read_only {
        return Transition::unchanged(state);
    }
    match try_press(point, ctx) {
        Ok((index, change)) => {
            tracing::debug!(index, id = %ctx.categories[index].id, "drag started");
            Transition { state: DragState::Active(index), change }
        }
        Err(e) => {
            tracing::trace!(code = e.error_code(), error = %e, "press ignored");
            Transition::unchanged(state)
        }
    }
}

/// Pointer-move or touch-move. Only meaningful while a drag is active.
#[must_use]
pub fn drag(state: DragState, point: Option<Point>, ctx: &DragContext<'_>) -> Transition {
    let Some(index) = state.active_index() else {
        return Transition::unchanged(state);
    };
    match try_drag(index, point, ctx) {
        Ok(change) => Transition { state, change },
        Err(e) => {
            tracing::trace!(code = e.error_code(), error = %e, "drag step ignored");
            Transition::unchanged(state)
        }
    }
}

/// Pointer-up, pointer-leave, or touch-end. The last proposed value stands.
#[must_use]
pub fn release(state: DragState) -> DragState {
    if let DragState::Active(index) = state {
        tracing::debug!(index, "drag ended");
    }
    DragState::Idle
}

fn try_press(point: Option<Point>, ctx: &DragContext<'_>) -> Result<(usize, Option<ValueChange>), ChartError> {
    let point = point.ok_or(ChartError::GeometryUnavailable("no pointer position"))?;
    let count = ctx.categories.len();
    let index = slice_index_at_point(point, ctx.geometry)
        .ok_or(ChartError::GeometryUnavailable("no slice under pointer"))?;
    if index >= count {
        return Err(ChartError::IndexOutOfRange { index, count });
    }
    Ok((index, propose(point, index, ctx)))
}

fn try_drag(index: usize, point: Option<Point>, ctx: &DragContext<'_>) -> Result<Option<ValueChange>, ChartError> {
    let point = point.ok_or(ChartError::GeometryUnavailable("no pointer position"))?;
    let count = ctx.categories.len();
    if index >= count {
        return Err(ChartError::IndexOutOfRange { index, count });
    }
    Ok(propose(point, index, ctx))
}

fn propose(point: Point, index: usize, ctx: &DragContext<'_>) -> Option<ValueChange> {
    let category = &ctx.categories[index];
    let value = value_for_slice(point, index, ctx.geometry);
    if value == category.value {
        return None;
    }
    tracing::trace!(id = %category.id, from = category.value, to = value, "value proposed");
    Some(ValueChange { id: category.id.clone(), value })
}
