//! Chart geometry and slice angle math.
//!
//! Slice 0's leading edge sits at 12 o'clock (math angle `-π/2`) and slices
//! proceed clockwise in screen space. Everything here is a pure function of
//! `(chart_size, slice_count)`; geometry is recomputed on every pass, never cached.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::consts::{BASE_CHART_SIZE, BASE_LABEL_OFFSET, BASE_MARGIN, MAX_VALUE, MIN_LABEL_OFFSET};
use crate::coords::Point;

/// Angle of slice 0's leading edge.
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Derived layout of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Side of the square canvas, in logical pixels.
    pub chart_size: f64,
    /// Center coordinate on both axes.
    pub center: f64,
    /// Outer ring radius; a slice at `MAX_VALUE` reaches it.
    pub radius: f64,
    /// Base distance of labels beyond the outer ring.
    pub label_offset: f64,
    pub slice_count: usize,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(chart_size: f64, slice_count: usize) -> Self {
        let scale = chart_size / BASE_CHART_SIZE;
        let margin = BASE_MARGIN * scale;
        let center = chart_size / 2.0;
        Self {
            chart_size,
            center,
            radius: center - margin,
            label_offset: (BASE_LABEL_OFFSET * scale).max(MIN_LABEL_OFFSET),
            slice_count,
        }
    }

    #[must_use]
    pub fn center_point(&self) -> Point {
        Point::new(self.center, self.center)
    }

    #[must_use]
    pub fn slice_angle(&self) -> f64 {
        slice_angle(self.slice_count)
    }

    /// Leading-edge angle of slice `index`.
    #[must_use]
    pub fn slice_start(&self, index: usize) -> f64 {
        START_ANGLE + index as f64 * self.slice_angle()
    }

    /// Central-axis angle of slice `index`.
    #[must_use]
    pub fn slice_mid(&self, index: usize) -> f64 {
        self.slice_start(index) + self.slice_angle() / 2.0
    }

    /// Filled radius for a slice holding `value`.
    #[must_use]
    pub fn value_radius(&self, value: u8) -> f64 {
        self.radius / f64::from(MAX_VALUE) * f64::from(value)
    }

    /// The point at `distance` from the center along `angle`.
    #[must_use]
    pub fn polar(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.center + angle.cos() * distance,
            self.center + angle.sin() * distance,
        )
    }
}

/// Angular width of one slice.
#[must_use]
pub fn slice_angle(slice_count: usize) -> f64 {
    TAU / slice_count as f64
}

/// Map any finite angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Index of the slice containing the math angle `angle` (`atan2(dy, dx)`).
///
/// A point exactly on a boundary belongs to the slice whose leading edge it is.
#[must_use]
pub fn angle_to_slice_index(angle: f64, slice_count: usize) -> Option<usize> {
    if slice_count == 0 || !angle.is_finite() {
        return None;
    }
    let rotated = normalize_angle(normalize_angle(angle) + FRAC_PI_2);
    let index = (rotated / slice_angle(slice_count)).floor();
    if index < 0.0 {
        return None;
    }
    // Angles a hair short of 2π can divide out to exactly `slice_count`.
    Some((index as usize).min(slice_count - 1))
}
