//! Hit-testing: which slice is under a point, and which label.
//!
//! Slice hits are pure angle math. Label hits depend on the rendered width of
//! the label text, so they take a [`TextMeasurer`] supplied by the drawing
//! surface.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{LABEL_HALF_HEIGHT, LABEL_HIT_EXTRA, LABEL_WIDTH_PUSH};
use crate::coords::Point;
use crate::data::Category;
use crate::geometry::{ChartGeometry, angle_to_slice_index};

/// Width of a string under a CSS font, as the rendering surface would draw it.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font: &str) -> f64;
}

/// Forgiving hit box around a label, plus the label's draw anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    /// Horizontal center / vertical middle of the drawn text.
    pub anchor: Point,
}

impl LabelBox {
    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Index of the slice under a logical point.
#[must_use]
pub fn slice_index_at_point(point: Point, geometry: &ChartGeometry) -> Option<usize> {
    let dx = point.x - geometry.center;
    let dy = point.y - geometry.center;
    let index = angle_to_slice_index(dy.atan2(dx), geometry.slice_count)?;
    (index < geometry.slice_count).then_some(index)
}

/// Draw anchor of label `index` whose text is `text_width` wide.
///
/// Wider labels are pushed further out; the anchor is then shifted
/// horizontally so the whole text stays inside `[padding, size - padding]`.
#[must_use]
pub fn label_anchor(index: usize, text_width: f64, geometry: &ChartGeometry, padding: f64) -> Point {
    let label_radius = geometry.radius + geometry.label_offset + text_width * LABEL_WIDTH_PUSH;
    let natural = geometry.polar(geometry.slice_mid(index), label_radius);
    let half = text_width / 2.0;

    let mut x = natural.x;
    if x - half < padding {
        x = padding + half;
    }
    if x + half > geometry.chart_size - padding {
        x = geometry.chart_size - padding - half;
    }
    Point::new(x, natural.y)
}

/// Hit box of label `index`, measured under `font`.
#[must_use]
pub fn label_hit_box<M: TextMeasurer + ?Sized>(
    index: usize,
    label: &str,
    geometry: &ChartGeometry,
    padding: f64,
    measurer: &M,
    font: &str,
) -> LabelBox {
    let width = measurer.text_width(label, font);
    let anchor = label_anchor(index, width, geometry, padding);
    let half = width / 2.0;
    LabelBox {
        left: anchor.x - half - LABEL_HIT_EXTRA,
        right: anchor.x + half + LABEL_HIT_EXTRA,
        top: anchor.y - LABEL_HALF_HEIGHT - LABEL_HIT_EXTRA,
        bottom: anchor.y + LABEL_HALF_HEIGHT + LABEL_HIT_EXTRA,
        anchor,
    }
}

/// First label, in slice order, whose hit box contains `point`.
#[must_use]
pub fn label_at_point<M: TextMeasurer + ?Sized>(
    point: Point,
    categories: &[Category],
    geometry: &ChartGeometry,
    padding: f64,
    measurer: &M,
    font: &str,
) -> Option<(usize, LabelBox)> {
    categories.iter().enumerate().find_map(|(index, category)| {
        let hit_box = label_hit_box(index, &category.label, geometry, padding, measurer, font);
        hit_box.contains(point).then_some((index, hit_box))
    })
}
