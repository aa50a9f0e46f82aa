//! The 2D drawing capability the renderer paints through.
//!
//! [`Surface`] is the narrow slice of the Canvas 2D API the wheel needs. The
//! browser implementation wraps [`web_sys::CanvasRenderingContext2d`]; tests
//! use a recording surface instead. Fallible canvas calls map their JS
//! exception into [`ChartError::Surface`].

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::coords::Point;
use crate::error::ChartError;
use crate::hit::TextMeasurer;

/// Write-only drawing target for one render pass.
pub trait Surface: TextMeasurer {
    /// Reset the transform to `dpr` scaling so callers draw in logical pixels.
    ///
    /// # Errors
    ///
    /// Returns `Surface` if the transform cannot be applied.
    fn reset_transform(&mut self, dpr: f64) -> Result<(), ChartError>;
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn close_path(&mut self);
    /// Add a clockwise arc around `center` from `start` to `end` radians.
    ///
    /// # Errors
    ///
    /// Returns `Surface` for a negative radius.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), ChartError>;
    fn clip(&mut self);
    fn stroke(&mut self);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_round_caps(&mut self);
    fn set_alpha(&mut self, alpha: f64);
    /// Set the dash pattern; an empty slice means solid.
    ///
    /// # Errors
    ///
    /// Returns `Surface` if the pattern is rejected.
    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), ChartError>;
    fn set_font(&mut self, font: &str);
    /// Center subsequent text horizontally and vertically on its fill point.
    fn set_text_centered(&mut self);
    /// Fill `text` vertically centered on `at`.
    ///
    /// # Errors
    ///
    /// Returns `Surface` if the text cannot be drawn.
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), ChartError>;
}

fn js_error(err: &JsValue) -> ChartError {
    ChartError::Surface(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl TextMeasurer for CanvasRenderingContext2d {
    fn text_width(&self, text: &str, font: &str) -> f64 {
        let previous = self.font();
        self.set_font(font);
        let width = match self.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(err) => {
                tracing::warn!(error = %js_error(&err), "measure_text failed");
                0.0
            }
        };
        self.set_font(&previous);
        width
    }
}

impl Surface for CanvasRenderingContext2d {
    fn reset_transform(&mut self, dpr: f64) -> Result<(), ChartError> {
        self.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| js_error(&e))
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, p: Point) {
        CanvasRenderingContext2d::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        CanvasRenderingContext2d::line_to(self, p.x, p.y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), ChartError> {
        CanvasRenderingContext2d::arc(self, center.x, center.y, radius, start, end).map_err(|e| js_error(&e))
    }

    fn clip(&mut self) {
        CanvasRenderingContext2d::clip(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_round_caps(&mut self) {
        self.set_line_cap("round");
        self.set_line_join("round");
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), ChartError> {
        let dash = js_sys::Array::new();
        for segment in pattern {
            dash.push(&JsValue::from_f64(*segment));
        }
        CanvasRenderingContext2d::set_line_dash(self, &dash).map_err(|e| js_error(&e))
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_centered(&mut self) {
        self.set_text_align("center");
        self.set_text_baseline("middle");
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), ChartError> {
        CanvasRenderingContext2d::fill_text(self, text, at.x, at.y).map_err(|e| js_error(&e))
    }
}
