//! Category records: the ordered data the wheel renders.
//!
//! The list itself is owned by the host. The engine holds a read-only snapshot
//! that the host replaces whenever its store changes; order is significant and
//! defines which slice each category occupies.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_VALUE;
use crate::error::ChartError;

/// One slice of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key reported back through value changes.
    pub id: String,
    /// Already-localized display label.
    #[serde(default)]
    pub label: String,
    /// Current value in `1..=MAX_VALUE`.
    pub value: u8,
    /// CSS color of the slice fill.
    pub color: String,
    /// Opaque classification tag.
    #[serde(default)]
    pub group: String,
}

impl Category {
    #[must_use]
    pub fn new(id: &str, label: &str, value: u8, color: &str, group: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            value,
            color: color.to_owned(),
            group: group.to_owned(),
        }
    }

    /// The value clamped into `1..=MAX_VALUE`, for rendering a snapshot that
    /// skipped validation.
    #[must_use]
    pub fn display_value(&self) -> u8 {
        self.value.clamp(1, MAX_VALUE)
    }
}

/// Check value ranges and id uniqueness of an ordered category list.
///
/// # Errors
///
/// Returns `ValueOutOfRange` or `DuplicateId` for the first offending entry.
pub fn validate_categories(categories: &[Category]) -> Result<(), ChartError> {
    let mut seen = HashSet::with_capacity(categories.len());
    for category in categories {
        if !(1..=MAX_VALUE).contains(&category.value) {
            return Err(ChartError::ValueOutOfRange {
                id: category.id.clone(),
                value: category.value,
            });
        }
        if !seen.insert(category.id.as_str()) {
            return Err(ChartError::DuplicateId(category.id.clone()));
        }
    }
    Ok(())
}

/// Parse an ordered JSON array of categories and validate it.
///
/// # Errors
///
/// Returns `Json` for malformed input, otherwise as [`validate_categories`].
pub fn parse_categories(json: &str) -> Result<Vec<Category>, ChartError> {
    let categories: Vec<Category> = serde_json::from_str(json)?;
    validate_categories(&categories)?;
    Ok(categories)
}

/// The ten-slice life-balance wheel shown before the host loads its own data.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("body", "Body", 5, "#86efac", "Health"),
        Category::new("mind", "Mind", 6, "#4ade80", "Health"),
        Category::new("soul", "Soul", 4, "#22c55e", "Health"),
        Category::new("fun", "Fun", 7, "#facc15", "Fun"),
        Category::new("romance", "Romance", 5, "#fdba74", "Rel"),
        Category::new("family", "Family", 8, "#ea580c", "Rel"),
        Category::new("friends", "Friends", 6, "#94a3b8", "Rel"),
        Category::new("growth", "Growth", 4, "#60a5fa", "Work"),
        Category::new("money", "Money", 5, "#3b82f6", "Work"),
        Category::new("mission", "Mission", 6, "#2563eb", "Work"),
    ]
}
