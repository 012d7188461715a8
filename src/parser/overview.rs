use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom;
use crate::records::OVERVIEW_PLACEHOLDER;

static OVERVIEW_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2#overview").unwrap());
static HIGHLIGHTED_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.text-highlighted__content").unwrap());

/// Overview text: the highlighted-content block nearest after the
/// `#overview` heading. A missing or empty section is normal and
/// resolves to the placeholder, never an error.
pub fn extract(doc: &Html) -> String {
    let Some(heading) = dom::first(doc, &OVERVIEW_HEADING) else {
        return OVERVIEW_PLACEHOLDER.to_string();
    };

    let text = dom::next_matching(doc, heading, &HIGHLIGHTED_CONTENT)
        .map(|el| dom::clean_text(&el))
        .unwrap_or_default();

    if text.is_empty() {
        OVERVIEW_PLACEHOLDER.to_string()
    } else {
        text
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_collapsed_overview_text() {
        let doc = Html::parse_document(
            r#"<h2 id="overview">Overview</h2>
               <div class="text-highlighted__content"><p>Learn  by
               doing.</p><p>Real projects.</p></div>"#,
        );
        assert_eq!(extract(&doc), "Learn by doing. Real projects.");
    }

    #[test]
    fn missing_heading_yields_placeholder() {
        let doc = Html::parse_document(
            r#"<div class="text-highlighted__content">orphan text</div>"#,
        );
        assert_eq!(extract(&doc), OVERVIEW_PLACEHOLDER);
    }

    #[test]
    fn empty_container_yields_placeholder() {
        let doc = Html::parse_document(
            r#"<h2 id="overview">Overview</h2>
               <div class="text-highlighted__content">   </div>"#,
        );
        assert_eq!(extract(&doc), OVERVIEW_PLACEHOLDER);
    }
}
