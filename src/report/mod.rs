pub mod pdf;
pub mod story;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;

use crate::records::CourseRecord;

pub const OUTPUT_DIR: &str = "output/pdfs";

/// Faculty code -> display name. Codes outside the table render as-is.
const FACULTY_MAP: &[(&str, &str)] = &[
    ("BAL", "Faculty of Business and Law"),
    ("CCI", "Faculty of Creative and Cultural Industries"),
    ("HSS", "Faculty of Humanities and Social Sciences"),
    ("SAH", "Faculty of Science and Health"),
    ("TEC", "Faculty of Technology"),
];

pub fn faculty_name(code: &str) -> &str {
    FACULTY_MAP
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| *name)
}

/// Group courses by school, first-seen order, course order preserved.
pub fn group_by_school(courses: &[CourseRecord]) -> IndexMap<String, Vec<&CourseRecord>> {
    let mut schools: IndexMap<String, Vec<&CourseRecord>> = IndexMap::new();
    for course in courses {
        schools.entry(course.school.clone()).or_default().push(course);
    }
    schools
}

pub fn output_file_name(school_name: &str) -> String {
    format!("{}_Course_Snapshot.pdf", school_name.replace(' ', "_"))
}

/// Build and write one school's snapshot document. Returns the path of
/// the written PDF.
pub fn build_school_pdf(
    school_name: &str,
    courses: &[&CourseRecord],
    output_dir: &Path,
) -> Result<PathBuf> {
    let faculty_code = courses[0].faculty.trim();
    let html = story::build(faculty_name(faculty_code), school_name, courses);
    let bytes = pdf::render(&html)
        .with_context(|| format!("Failed to render document for {school_name}"))?;

    let path = output_dir.join(output_file_name(school_name));
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

// ── Tests ──
