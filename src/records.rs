use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snapshot file shared by both pipeline stages. Stage 1 overwrites it
/// wholesale; stage 2 reads it and derives nothing else from the web.
pub const SNAPSHOT_FILE: &str = "extracted.json";

pub const OVERVIEW_PLACEHOLDER: &str =
    "Course overview details are being finalised and will be updated soon.";
pub const HIGHLIGHTS_PLACEHOLDER: &str =
    "Details are being finalised and will be updated soon.";
pub const MODULE_PLACEHOLDER: &str =
    "Details for this module are being finalised and will be updated soon.";
pub const CREDIT_PLACEHOLDER: &str = "Credit value to be confirmed.";

/// One extracted course page. Field order is the JSON contract between
/// the extractor and the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub faculty: String,
    pub school: String,
    pub title: String,
    pub award: String,
    pub url: String,
    pub overview: String,
    pub highlights: Vec<String>,
    /// Year label -> modules, in document order. Always serialized, even
    /// when empty; years with no modules are never inserted.
    pub modules: IndexMap<String, Vec<ModuleRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub module_name: String,
    pub credits: String,
    pub core_optional: String,
    pub description: String,
}

pub fn write_snapshot(path: impl AsRef<Path>, courses: &[CourseRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(courses)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}. Run 'extract' first.", path.display()))?;
    let courses = serde_json::from_str(&json)
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    Ok(courses)
}

// ── Tests ──
