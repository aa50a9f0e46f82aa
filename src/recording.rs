//! Test double for [`Surface`]: records every call instead of drawing.

use crate::coords::Point;
use crate::error::ChartError;
use crate::hit::TextMeasurer;
use crate::surface::Surface;

/// Width of every character under every font.
pub const CHAR_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ResetTransform(f64),
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    Save,
    Restore,
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    Clip,
    Stroke,
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
    RoundCaps,
    Alpha(f64),
    LineDash(Vec<f64>),
    Font(String),
    TextCentered,
    FillText { text: String, at: Point },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
    /// Makes `fill_text` fail, to exercise error propagation.
    pub fail_text: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<(String, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::FillText { text, at } => Some((text.clone(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl TextMeasurer for RecordingSurface {
    fn text_width(&self, text: &str, _font: &str) -> f64 {
        text.chars().count() as f64 * CHAR_WIDTH
    }
}

/// Measures like [`RecordingSurface`] without recording.
pub struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn text_width(&self, text: &str, _font: &str) -> f64 {
        text.chars().count() as f64 * CHAR_WIDTH
    }
}

impl Surface for RecordingSurface {
    fn reset_transform(&mut self, dpr: f64) -> Result<(), ChartError> {
        self.commands.push(Command::ResetTransform(dpr));
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::ClearRect(x, y, w, h));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::FillRect(x, y, w, h));
    }

    fn save(&mut self) {
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        self.commands.push(Command::Restore);
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(Command::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), ChartError> {
        if radius < 0.0 {
            return Err(ChartError::Surface("negative radius".to_owned()));
        }
        self.commands.push(Command::Arc { center, radius, start, end });
        Ok(())
    }

    fn clip(&mut self) {
        self.commands.push(Command::Clip);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(Command::StrokeColor(color.to_owned()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(Command::FillColor(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::LineWidth(width));
    }

    fn set_round_caps(&mut self) {
        self.commands.push(Command::RoundCaps);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.commands.push(Command::Alpha(alpha));
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> Result<(), ChartError> {
        self.commands.push(Command::LineDash(pattern.to_vec()));
        Ok(())
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(Command::Font(font.to_owned()));
    }

    fn set_text_centered(&mut self) {
        self.commands.push(Command::TextCentered);
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), ChartError> {
        if self.fail_text {
            return Err(ChartError::Surface("fillText failed".to_owned()));
        }
        self.commands.push(Command::FillText { text: text.to_owned(), at });
        Ok(())
    }
}
