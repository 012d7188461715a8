//! Builds the per-school "story": one simple HTML document the layout
//! engine paginates. Plain headings, paragraphs and tables only, so the
//! engine never sees CSS it cannot handle.

use crate::records::CourseRecord;

const INTRO_LINES: &[&str] = &[
    "Course and module updates \u{2013} Course snapshot for September 2026 entry",
    "We\u{2019}re pleased to share these updates to your chosen course(s).",
    "Some modules have been refined into 15-credit increments (15, 30, 45, 60, or 120 credits) \
     to provide a more flexible and enriching learning experience.",
    "This document provides a clear snapshot of course information at the time of publication \
     for your reference.",
    "Publication date: February 2026",
];

const TABLE_HEADER: &[&str] = &["Module name", "Credits", "Core / Optional", "Description"];

// Fixed widths for the first three columns; the description column
// takes the remaining page width.
const COLUMN_WIDTHS: &[&str] = &["100", "50", "90"];

const PAGE_BREAK: &str = r#"<div style="page-break-after: always;"></div>"#;

pub fn build(faculty_name: &str, school_name: &str, courses: &[&CourseRecord]) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html><html><head><style>\
         body { font-family: sans-serif; } \
         h1, h2, h3, h4 { color: #621360; } \
         table { border-collapse: collapse; width: 100%; } \
         th, td { border: 0.25pt solid grey; vertical-align: top; text-align: left; } \
         th { background-color: whitesmoke; }\
         </style></head><body>",
    );

    // Title page.
    html.push_str(&format!("<h1>{}</h1>", escape(faculty_name)));
    html.push_str(&format!("<h2>{}</h2>", escape(school_name)));
    for line in INTRO_LINES {
        html.push_str(&format!("<p>{}</p>", escape(line)));
    }
    html.push_str(PAGE_BREAK);

    // Contents: one entry per course, in array order. The engine's HTML
    // component set has no anchor element, so entries are plain
    // paragraphs; the course headings still carry their id targets.
    html.push_str("<h4>Contents</h4>");
    for course in courses {
        html.push_str(&format!("<p>{}</p>", escape(&course.title)));
    }
    html.push_str(PAGE_BREAK);

    for (idx, course) in courses.iter().enumerate() {
        push_course(&mut html, idx, course);
        html.push_str(PAGE_BREAK);
    }

    html.push_str("</body></html>");
    html
}

fn push_course(html: &mut String, idx: usize, course: &CourseRecord) {
    html.push_str(&format!(
        r#"<h3 id="course_{}">{}</h3>"#,
        idx,
        escape(&course.title)
    ));

    html.push_str("<h4>Overview</h4>");
    html.push_str(&format!("<p>{}</p>", escape(&course.overview)));

    html.push_str("<h4>Course highlights</h4>");
    for item in &course.highlights {
        html.push_str(&format!("<p>\u{2022} {}</p>", escape(item)));
    }

    html.push_str("<h4>Modules</h4>");
    for (year, modules) in &course.modules {
        html.push_str(&format!("<h4>{}</h4>", escape(year)));

        html.push_str("<table><tr>");
        for (i, label) in TABLE_HEADER.iter().enumerate() {
            match COLUMN_WIDTHS.get(i) {
                Some(w) => html.push_str(&format!(r#"<th width="{w}">{label}</th>"#)),
                None => html.push_str(&format!("<th>{label}</th>")),
            }
        }
        html.push_str("</tr>");

        for module in modules {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&module.module_name),
                escape(&module.credits),
                escape(&module.core_optional),
                escape(&module.description),
            ));
        }
        html.push_str("</table>");
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ModuleRecord;
    use indexmap::IndexMap;

    fn course(title: &str) -> CourseRecord {
        let mut modules = IndexMap::new();
        modules.insert(
            "Year 1".to_string(),
            vec![ModuleRecord {
                module_name: "R&D Practice".to_string(),
                credits: "30".to_string(),
                core_optional: "Core".to_string(),
                description: "Working with <labs>.".to_string(),
            }],
        );
        CourseRecord {
            faculty: "TEC".to_string(),
            school: "School of Computing".to_string(),
            title: title.to_string(),
            award: "BSc (Hons)".to_string(),
            url: "https://example.ac.uk/c".to_string(),
            overview: "Overview text.".to_string(),
            highlights: vec!["One".to_string(), "Two".to_string()],
            modules,
        }
    }

    #[test]
    fn contents_entries_precede_course_anchors_in_order() {
        let a = course("BSc (Hons) Data Science");
        let b = course("MSc Cyber Security");
        let html = build("Faculty of Technology", "School of Computing", &[&a, &b]);

        let entry0 = html.find("<p>BSc (Hons) Data Science</p>").unwrap();
        let entry1 = html.find("<p>MSc Cyber Security</p>").unwrap();
        assert!(entry0 < entry1);
        let anchor0 = html.find(r#"<h3 id="course_0">"#).unwrap();
        let anchor1 = html.find(r#"<h3 id="course_1">"#).unwrap();
        assert!(entry1 < anchor0 && anchor0 < anchor1);
    }

    #[test]
    fn title_page_and_table_content() {
        let a = course("BSc (Hons) Data Science");
        let html = build("Faculty of Technology", "School of Computing", &[&a]);

        assert!(html.contains("<h1>Faculty of Technology</h1>"));
        assert!(html.contains("<h2>School of Computing</h2>"));
        assert!(html.contains("Publication date: February 2026"));
        assert!(html.contains("<th>Description</th>"));
        assert!(html.contains(r#"<th width="100">Module name</th>"#));
        assert!(html.contains("\u{2022} One"));
        // Module text is escaped, not injected as markup.
        assert!(html.contains("R&amp;D Practice"));
        assert!(html.contains("Working with &lt;labs&gt;."));
    }

    #[test]
    fn every_course_section_ends_with_a_page_break() {
        let a = course("A");
        let html = build("F", "S", &[&a]);
        assert!(html.ends_with(&format!("{PAGE_BREAK}</body></html>")));
    }
}
