//! Hand-drawn primitives: pencil lines, wobbly circles, scribble-filled wedges.
//!
//! Every primitive draws from a [`Jitter`] source, so each pass gets fresh
//! wobble while tests can pin it with [`NoJitter`] or a seeded source.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    CIRCLE_JITTER, CIRCLE_SEGMENTS, LINE_ECHO_ALPHA, LINE_ECHO_JITTER, LINE_ECHO_WIDTH, LINE_JITTER, OUTLINE_COLOR,
    RING_DASH, SCRIBBLE_ALPHA, SCRIBBLE_DENSITY, SCRIBBLE_SLANT, SCRIBBLE_WIDTH, SCRIBBLE_WOBBLE, WEDGE_ARC_JITTER,
    WEDGE_ARC_SEGMENTS,
};
use crate::coords::Point;
use crate::error::ChartError;
use crate::surface::Surface;

/// Uniform random source in `[0, 1)`.
pub trait Jitter {
    fn unit(&mut self) -> f64;

    /// `value` shaken by up to `±amplitude / 2`.
    fn rough(&mut self, value: f64, amplitude: f64) -> f64 {
        value + (self.unit() - 0.5) * amplitude
    }

    fn rough_point(&mut self, p: Point, amplitude: f64) -> Point {
        let x = self.rough(p.x, amplitude);
        let y = self.rough(p.y, amplitude);
        Point::new(x, y)
    }
}

/// Seeded pseudo-random jitter.
#[derive(Debug, Clone)]
pub struct SeededJitter(SmallRng);

impl SeededJitter {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Jitter for SeededJitter {
    fn unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Always the midpoint: every `rough` call returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn unit(&mut self) -> f64 {
        0.5
    }
}

/// Pencil line: a primary stroke plus a thinner, fainter, shakier echo.
pub fn sketchy_line<S, J>(surface: &mut S, jitter: &mut J, p1: Point, p2: Point, color: &str, width: f64)
where
    S: Surface + ?Sized,
    J: Jitter + ?Sized,
{
    surface.begin_path();
    surface.set_stroke_color(color);
    surface.set_line_width(width);
    surface.set_round_caps();
    surface.move_to(jitter.rough_point(p1, LINE_JITTER));
    surface.line_to(jitter.rough_point(p2, LINE_JITTER));
    surface.stroke();

    surface.begin_path();
    surface.set_line_width(width * LINE_ECHO_WIDTH);
    surface.set_alpha(LINE_ECHO_ALPHA);
    surface.move_to(jitter.rough_point(p1, LINE_ECHO_JITTER));
    surface.line_to(jitter.rough_point(p2, LINE_ECHO_JITTER));
    surface.stroke();
    surface.set_alpha(1.0);
}

/// Circle approximated by `CIRCLE_SEGMENTS` segments with per-vertex radial wobble.
///
/// # Errors
///
/// Propagates dash pattern failures.
pub fn sketchy_circle<S, J>(
    surface: &mut S,
    jitter: &mut J,
    center: Point,
    radius: f64,
    color: &str,
    dashed: bool,
) -> Result<(), ChartError>
where
    S: Surface + ?Sized,
    J: Jitter + ?Sized,
{
    surface.begin_path();
    surface.set_stroke_color(color);
    surface.set_line_width(if dashed { 1.5 } else { 2.0 });
    if dashed {
        surface.set_line_dash(&RING_DASH)?;
    }

    let step = TAU / f64::from(CIRCLE_SEGMENTS);
    for i in 0..=CIRCLE_SEGMENTS {
        let angle = f64::from(i) * step;
        let r = jitter.rough(radius, CIRCLE_JITTER);
        let p = Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r);
        if i == 0 {
            surface.move_to(p);
        } else {
            surface.line_to(p);
        }
    }

    surface.stroke();
    surface.set_line_dash(&[])
}

/// Wedge filled with slanted scribbles, then outlined with a rough edge.
///
/// # Errors
///
/// Propagates clip-path construction failures.
pub fn scribble_slice<S, J>(
    surface: &mut S,
    jitter: &mut J,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    color: &str,
) -> Result<(), ChartError>
where
    S: Surface + ?Sized,
    J: Jitter + ?Sized,
{
    if radius.is_nan() || radius <= 0.0 {
        return Ok(());
    }

    // Fill, clipped to the wedge.
    surface.save();
    surface.begin_path();
    surface.move_to(center);
    if let Err(e) = surface.arc(center, radius, start_angle, end_angle) {
        surface.restore();
        return Err(e);
    }
    surface.close_path();
    surface.clip();

    surface.set_stroke_color(color);
    surface.set_line_width(SCRIBBLE_WIDTH);
    surface.set_alpha(SCRIBBLE_ALPHA);

    let bounds = radius * 2.0;
    surface.begin_path();
    let mut i = -bounds;
    while i < bounds {
        let offset = jitter.unit() * SCRIBBLE_WOBBLE;
        let from = Point::new(
            center.x - radius + offset,
            center.y - radius + i + jitter.unit() * SCRIBBLE_WOBBLE,
        );
        let to = Point::new(
            center.x + radius + offset,
            center.y - radius + i + jitter.unit() * SCRIBBLE_WOBBLE - SCRIBBLE_SLANT,
        );
        surface.move_to(from);
        surface.line_to(to);
        i += SCRIBBLE_DENSITY;
    }
    surface.stroke();
    surface.restore();

    // Outline.
    surface.begin_path();
    surface.set_stroke_color(OUTLINE_COLOR);
    surface.set_line_width(2.0);
    surface.move_to(center);
    surface.line_to(Point::new(
        center.x + start_angle.cos() * radius,
        center.y + start_angle.sin() * radius,
    ));
    for step in 0..=WEDGE_ARC_SEGMENTS {
        let a = start_angle + (end_angle - start_angle) * (f64::from(step) / f64::from(WEDGE_ARC_SEGMENTS));
        let r = jitter.rough(radius, WEDGE_ARC_JITTER);
        surface.line_to(Point::new(center.x + a.cos() * r, center.y + a.sin() * r));
    }
    surface.line_to(center);
    surface.stroke();
    Ok(())
}
