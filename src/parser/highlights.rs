use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom;
use crate::records::HIGHLIGHTS_PLACEHOLDER;

static HIGHLIGHTED_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.text-highlighted__content").unwrap());
static H3: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static LI: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// Highlight bullets from the first highlighted-content block whose
/// sub-heading mentions "Course highlights" (substring, case as
/// authored). That first match decides the result: even if it holds no
/// usable items, later blocks are not consulted.
pub fn extract(doc: &Html) -> Vec<String> {
    for block in doc.select(&HIGHLIGHTED_CONTENT) {
        let heading = block.select(&H3).next().map(|h| dom::clean_text(&h));
        let Some(heading) = heading else { continue };
        if !heading.contains("Course highlights") {
            continue;
        }

        let items: Vec<String> = block
            .select(&LI)
            .map(|li| dom::clean_text(&li))
            .filter(|t| !t.is_empty())
            .collect();

        return if items.is_empty() { placeholder() } else { items };
    }
    placeholder()
}

fn placeholder() -> Vec<String> {
    vec![HIGHLIGHTS_PLACEHOLDER.to_string()]
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_items_from_matching_block() {
        let doc = Html::parse_document(
            r#"<div class="text-highlighted__content"><h3>About</h3><ul><li>ignore</li></ul></div>
               <div class="text-highlighted__content">
                 <h3>Course highlights</h3>
                 <ul><li>Placement  year</li><li>  </li><li>Small cohorts</li></ul>
               </div>"#,
        );
        assert_eq!(extract(&doc), ["Placement year", "Small cohorts"]);
    }

    #[test]
    fn no_matching_block_yields_placeholder() {
        let doc = Html::parse_document(
            r#"<div class="text-highlighted__content"><h3>About</h3><ul><li>x</li></ul></div>"#,
        );
        assert_eq!(extract(&doc), [HIGHLIGHTS_PLACEHOLDER]);
    }

    #[test]
    fn matching_block_without_items_yields_placeholder() {
        let doc = Html::parse_document(
            r#"<div class="text-highlighted__content"><h3>Course highlights</h3></div>
               <div class="text-highlighted__content">
                 <h3>Course highlights</h3><ul><li>never reached</li></ul>
               </div>"#,
        );
        assert_eq!(extract(&doc), [HIGHLIGHTS_PLACEHOLDER]);
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        let doc = Html::parse_document(
            r#"<div class="text-highlighted__content"><h3>COURSE HIGHLIGHTS</h3><ul><li>x</li></ul></div>"#,
        );
        assert_eq!(extract(&doc), [HIGHLIGHTS_PLACEHOLDER]);
    }
}
