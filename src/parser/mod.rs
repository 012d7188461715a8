pub mod dom;
pub mod highlights;
pub mod modules;
pub mod overview;

use scraper::Html;

use crate::records::CourseRecord;
use crate::roster::CourseRow;

/// One fetched page -> one CourseRecord: the row's fields carried over
/// verbatim, plus the three extracted sub-structures.
pub fn extract_course(row: &CourseRow, html: &str) -> CourseRecord {
    let doc = Html::parse_document(html);

    CourseRecord {
        faculty: row.faculty.clone(),
        school: row.school.clone(),
        title: row.title.clone(),
        award: row.award.clone(),
        url: row.url.clone(),
        overview: overview::extract(&doc),
        highlights: highlights::extract(&doc),
        modules: modules::extract(&doc),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{HIGHLIGHTS_PLACEHOLDER, OVERVIEW_PLACEHOLDER};

    fn row() -> CourseRow {
        CourseRow {
            faculty: "TEC".to_string(),
            school: "School of Computing".to_string(),
            title: "BSc (Hons) Data Science".to_string(),
            award: "BSc (Hons)".to_string(),
            url: "https://example.ac.uk/courses/data-science".to_string(),
        }
    }

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}.html")).unwrap()
    }

    #[test]
    fn full_page_populates_all_fields() {
        let course = extract_course(&row(), &fixture("course_full"));

        assert_eq!(course.faculty, "TEC");
        assert_eq!(course.school, "School of Computing");
        assert_eq!(course.title, "BSc (Hons) Data Science");
        assert_eq!(course.award, "BSc (Hons)");
        assert_eq!(course.url, "https://example.ac.uk/courses/data-science");

        assert_eq!(
            course.overview,
            "A hands-on data science degree taught through real projects."
        );
        assert_eq!(course.highlights, ["Placement year", "Small cohorts"]);
        assert_eq!(course.modules.len(), 2);
    }

    #[test]
    fn sparse_page_resolves_to_placeholders() {
        let course = extract_course(&row(), &fixture("course_sparse"));

        assert_eq!(course.overview, OVERVIEW_PLACEHOLDER);
        assert_eq!(course.highlights, [HIGHLIGHTS_PLACEHOLDER]);
        assert!(course.modules.is_empty());
    }
}
