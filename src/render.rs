//! Rendering: paints the full wheel through a [`Surface`].
//!
//! A pass runs in two steps. [`layout`] derives every non-random quantity
//! (ring radii, axis ends, wedge angles, text anchors and fonts) as a pure
//! function of the inputs. [`draw`] then paints that layout, adding only the
//! hand-drawn jitter. Passes are full redraws; nothing is retained between them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    AXIS_COLOR, BACKGROUND_COLOR, BOUNDARY_COLOR, LABEL_TEXT_COLOR, MAX_VALUE, RING_COLOR, RING_STEP, SMALL_VALUE,
    VALUE_TEXT_COLOR, VALUE_TEXT_INSET, VALUE_TEXT_OVERSHOOT,
};
use crate::coords::Point;
use crate::data::Category;
use crate::error::ChartError;
use crate::geometry::ChartGeometry;
use crate::hit::{TextMeasurer, label_anchor};
use crate::sketch::{Jitter, scribble_slice, sketchy_circle, sketchy_line};
use crate::surface::Surface;

/// Fonts for one pass, built from the configured family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts {
    pub value: String,
    pub value_active: String,
    pub label: String,
    pub label_active: String,
}

impl Fonts {
    #[must_use]
    pub fn new(family: &str) -> Self {
        Self {
            value: format!("bold 16px {family}"),
            value_active: format!("bold 22px {family}"),
            label: format!("20px {family}"),
            label_active: format!("bold 22px {family}"),
        }
    }
}

/// Placement of one category's wedge and value number.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceLayout {
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_radius: f64,
    pub color: String,
    pub value: u8,
    pub value_anchor: Point,
    pub value_font: String,
}

/// Placement of one category's name label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    pub anchor: Point,
    pub font: String,
}

/// Every deterministic quantity of one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub geometry: ChartGeometry,
    pub ring_radii: Vec<f64>,
    pub axis_ends: Vec<Point>,
    pub slices: Vec<SliceLayout>,
    pub labels: Vec<LabelLayout>,
}

/// Inputs of one pass.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub categories: &'a [Category],
    pub active: Option<usize>,
    pub geometry: &'a ChartGeometry,
    pub label_padding: f64,
    pub fonts: &'a Fonts,
}

/// Radial distance of a value number from the center.
///
/// Numbers sit just inside the fill edge, or just outside it for small
/// values, and never more than `VALUE_TEXT_OVERSHOOT` past the outer ring.
#[must_use]
pub fn value_text_distance(value: u8, fill_radius: f64, radius: f64) -> f64 {
    let distance = if value < SMALL_VALUE {
        fill_radius + VALUE_TEXT_INSET
    } else {
        fill_radius - VALUE_TEXT_INSET
    };
    if distance > radius {
        radius + VALUE_TEXT_OVERSHOOT
    } else {
        distance
    }
}

/// Compute the deterministic layout of a pass.
#[must_use]
pub fn layout<M: TextMeasurer + ?Sized>(scene: &Scene<'_>, measurer: &M) -> SceneLayout {
    let geometry = *scene.geometry;
    let center = geometry.center_point();

    let ring_radii = (1..=MAX_VALUE / RING_STEP)
        .map(|step| geometry.value_radius(step * RING_STEP))
        .collect();

    let axis_ends = (0..geometry.slice_count)
        .map(|i| geometry.polar(geometry.slice_start(i), geometry.radius))
        .collect();

    let slices = scene
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let value = category.display_value();
            let start_angle = geometry.slice_start(i);
            let fill_radius = geometry.value_radius(value);
            let distance = value_text_distance(value, fill_radius, geometry.radius);
            let mid = geometry.slice_mid(i);
            SliceLayout {
                start_angle,
                end_angle: start_angle + geometry.slice_angle(),
                fill_radius,
                color: category.color.clone(),
                value,
                value_anchor: Point::new(center.x + mid.cos() * distance, center.y + mid.sin() * distance),
                value_font: if scene.active == Some(i) {
                    scene.fonts.value_active.clone()
                } else {
                    scene.fonts.value.clone()
                },
            }
        })
        .collect();

    let labels = scene
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            // The active label is placed with its bold width; hover hit boxes
            // always measure the regular font, so the two differ slightly.
            let font = if scene.active == Some(i) {
                &scene.fonts.label_active
            } else {
                &scene.fonts.label
            };
            let width = measurer.text_width(&category.label, font);
            LabelLayout {
                text: category.label.clone(),
                anchor: label_anchor(i, width, &geometry, scene.label_padding),
                font: font.clone(),
            }
        })
        .collect();

    SceneLayout { geometry, ring_radii, axis_ends, slices, labels }
}

/// Paint one full pass.
///
/// `dpr` is the device pixel ratio the backing store was sized with.
///
/// # Errors
///
/// Returns `Err` if any fallible surface call fails.
pub fn draw<S, J>(surface: &mut S, jitter: &mut J, scene: &Scene<'_>, dpr: f64) -> Result<(), ChartError>
where
    S: Surface + ?Sized,
    J: Jitter + ?Sized,
{
    let plan = layout(scene, &*surface);
    let geometry = plan.geometry;
    let center = geometry.center_point();
    let size = geometry.chart_size;

    // Layer 1: background.
    surface.reset_transform(dpr)?;
    surface.clear_rect(0.0, 0.0, size, size);
    surface.set_fill_color(BACKGROUND_COLOR);
    surface.fill_rect(0.0, 0.0, size, size);

    // Layer 2: grid rings and the outer boundary.
    for r in &plan.ring_radii {
        sketchy_circle(surface, jitter, center, *r, RING_COLOR, true)?;
    }
    sketchy_circle(surface, jitter, center, geometry.radius, BOUNDARY_COLOR, false)?;

    // Layer 3: axes.
    for end in &plan.axis_ends {
        sketchy_line(surface, jitter, center, *end, AXIS_COLOR, 1.0);
    }

    // Layer 4: wedges and their values.
    for slice in &plan.slices {
        scribble_slice(
            surface,
            jitter,
            center,
            slice.fill_radius,
            slice.start_angle,
            slice.end_angle,
            &slice.color,
        )?;
        surface.set_fill_color(VALUE_TEXT_COLOR);
        surface.set_font(&slice.value_font);
        surface.set_text_centered();
        surface.fill_text(&slice.value.to_string(), slice.value_anchor)?;
    }

    // Layer 5: labels.
    surface.set_fill_color(LABEL_TEXT_COLOR);
    surface.set_text_centered();
    for label in &plan.labels {
        surface.set_font(&label.font);
        surface.fill_text(&label.text, label.anchor)?;
    }

    Ok(())
}
