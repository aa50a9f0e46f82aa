//! Host configuration for a chart instance.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_CHART_SIZE, DEFAULT_FONT_FAMILY, LABEL_PADDING, MIN_CHART_SIZE};
use crate::error::ChartError;

/// Chart configuration, read from a camelCase JSON object.
///
/// Every field is optional on the wire and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    /// Side of the square chart in logical (CSS) pixels.
    pub size: f64,
    /// Suppresses every drag-start.
    pub read_only: bool,
    /// Backing-store pixels per CSS pixel. `None` follows the display's
    /// current ratio, read on every render.
    pub device_pixel_ratio: Option<f64>,
    /// Keep-out band for labels at the left and right canvas edges.
    pub label_padding: f64,
    /// CSS font family for numbers and labels.
    pub font_family: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: BASE_CHART_SIZE,
            read_only: false,
            device_pixel_ratio: None,
            label_padding: LABEL_PADDING,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl ChartOptions {
    /// Parse and validate options from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed input and `InvalidSize` for unusable sizes.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that size and any DPR override are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` carrying the offending value.
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_size(self.size)?;
        if let Some(dpr) = self.device_pixel_ratio {
            validate_size(dpr)?;
        }
        if !self.label_padding.is_finite() || self.label_padding < 0.0 {
            return Err(ChartError::InvalidSize(self.label_padding));
        }
        Ok(())
    }
}

/// Reject non-finite or non-positive lengths and scale factors.
///
/// # Errors
///
/// Returns `InvalidSize` carrying `value`.
pub fn validate_size(value: f64) -> Result<(), ChartError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidSize(value))
    }
}

/// Ratio to render with: the override if set, else the detected ratio, else 1.
#[must_use]
pub fn resolve_device_pixel_ratio(override_ratio: Option<f64>, detected: f64) -> f64 {
    match override_ratio {
        Some(dpr) => dpr,
        None if detected.is_finite() && detected > 0.0 => detected,
        None => 1.0,
    }
}

/// Largest square chart that fits the available area, within the size limits.
#[must_use]
pub fn fit_chart_size(available_width: f64, available_height: f64) -> f64 {
    let square = available_width.min(available_height);
    if square.is_nan() {
        return MIN_CHART_SIZE;
    }
    square.clamp(MIN_CHART_SIZE, BASE_CHART_SIZE)
}
