//! Error taxonomy for the wheel.
//!
//! Interaction handlers never surface these to the host: they compute a
//! `Result` internally and turn every error into a logged no-op. Only the
//! configuration/data boundary and the render pass hand errors back.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("geometry unavailable: {0}")]
    GeometryUnavailable(&'static str),
    #[error("slice index {index} out of range for {count} slices")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("rendering surface unavailable")]
    SurfaceUnavailable,
    #[error("surface call failed: {0}")]
    Surface(String),
    #[error("category {id} has value {value}, expected 1..={max}", max = crate::consts::MAX_VALUE)]
    ValueOutOfRange { id: String, value: u8 },
    #[error("duplicate category id: {0}")]
    DuplicateId(String),
    #[error("invalid size: {0}")]
    InvalidSize(f64),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// Stable machine-readable code for logs and the JS boundary.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::GeometryUnavailable(_) => "E_GEOMETRY_UNAVAILABLE",
            Self::IndexOutOfRange { .. } => "E_INDEX_OUT_OF_RANGE",
            Self::SurfaceUnavailable => "E_SURFACE_UNAVAILABLE",
            Self::Surface(_) => "E_SURFACE",
            Self::ValueOutOfRange { .. } => "E_VALUE_OUT_OF_RANGE",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
            Self::InvalidSize(_) => "E_INVALID_SIZE",
            Self::Json(_) => "E_JSON",
        }
    }
}
