use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const ROSTER_FILE: &str = "data/courses.csv";

/// One row of the course list. Column headers are fixed; anything the
/// sheet leaves blank deserializes to an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    #[serde(rename = "Faculty", default)]
    pub faculty: String,
    #[serde(rename = "School", default)]
    pub school: String,
    #[serde(rename = "Course title", default)]
    pub title: String,
    #[serde(rename = "Award", default)]
    pub award: String,
    #[serde(rename = "Course URL", default)]
    pub url: String,
}

/// Load the course list in file order, dropping rows without a URL.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<CourseRow>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open course list {}", path.display()))?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.deserialize() {
        let mut row: CourseRow = record.context("Malformed row in course list")?;
        row.url = row.url.trim().to_string();
        if row.url.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    info!("Course list: {} rows ({} without URL skipped)", rows.len(), skipped);
    Ok(rows)
}

// ── Tests ──
