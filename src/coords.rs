//! Points and the mapping between client (CSS) pixels and logical chart space.
//!
//! The canvas is laid out as a `chart_size × chart_size` logical square, but the
//! browser may stretch it with CSS and back it with a DPR-scaled store. All
//! geometry runs in logical space; [`CoordinateMapper`] is the only bridge.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// A point in logical chart space or in client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding rectangle of the drawing surface, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether the rectangle can be used to rescale coordinates.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Raw pointer position as delivered by the host, in client pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    /// A mouse or pen pointer.
    Mouse(Point),
    /// The active touch points of a touch event; only the first is used.
    Touches(Vec<Point>),
}

impl PointerSample {
    /// The client position that drives the chart, if any.
    #[must_use]
    pub fn client_point(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) => Some(*p),
            Self::Touches(points) => points.first().copied(),
        }
    }
}

/// Converts between client pixels and the logical chart square.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    pub chart_size: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(chart_size: f64) -> Self {
        Self { chart_size }
    }

    /// Map a pointer sample into logical chart space.
    ///
    /// Returns `None` for an unusable rect or a touch event without touches.
    #[must_use]
    pub fn to_logical(&self, sample: &PointerSample, rect: &ClientRect) -> Option<Point> {
        if !rect.is_usable() {
            return None;
        }
        let client = sample.client_point()?;
        Some(Point {
            x: (client.x - rect.left) * (self.chart_size / rect.width),
            y: (client.y - rect.top) * (self.chart_size / rect.height),
        })
    }

    /// Map a logical point back to client pixels.
    #[must_use]
    pub fn to_client(&self, logical: Point, rect: &ClientRect) -> Point {
        Point {
            x: rect.left + logical.x * (rect.width / self.chart_size),
            y: rect.top + logical.y * (rect.height / self.chart_size),
        }
    }
}
