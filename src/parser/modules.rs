use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use scraper::{Html, Selector};

use crate::parser::dom;
use crate::records::{ModuleRecord, CREDIT_PLACEHOLDER, MODULE_PLACEHOLDER};

static MODULES_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2#modules").unwrap());
static TABS_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.tabs__heading").unwrap());
static TABS_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tabs__content").unwrap());
static TAB_PANEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[role="tabpanel"]"#).unwrap());
static ACCORDION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.accordion").unwrap());
static ACCORDION_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.accordion__heading").unwrap());
static MODULE_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.accordion-item--module").unwrap());
static ITEM_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.accordion-item__button-title").unwrap());
static ITEM_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.accordion-item__content").unwrap());

static CREDITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*credits?").unwrap());
static CREDIT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*-\s*\d+\s*credits?").unwrap());

/// Credit figure from a raw module title. "0 credits" is authored for
/// modules that carry no credit weight, so it maps to "Not applicable".
pub fn parse_credits(title: &str) -> String {
    match CREDITS_RE.captures(title) {
        None => CREDIT_PLACEHOLDER.to_string(),
        Some(caps) if &caps[1] == "0" => "Not applicable".to_string(),
        Some(caps) => caps[1].to_string(),
    }
}

fn strip_credit_suffix(title: &str) -> String {
    CREDIT_SUFFIX_RE.replace_all(title, "").trim().to_string()
}

/// Year label -> modules for one course page. The modules section is a
/// tabbed region (one tab per academic year) of accordions (one per
/// Core/Optional grouping). Any missing layer resolves to an empty
/// mapping; absence is not an error.
pub fn extract(doc: &Html) -> IndexMap<String, Vec<ModuleRecord>> {
    let mut modules = IndexMap::new();

    let Some(heading) = dom::first(doc, &MODULES_HEADING) else {
        return modules;
    };
    let Some(tabs_heading) = dom::next_matching(doc, heading, &TABS_HEADING) else {
        return modules;
    };
    let Some(tabs_container) = dom::next_matching(doc, tabs_heading, &TABS_CONTENT) else {
        return modules;
    };

    for panel in tabs_container.select(&TAB_PANEL) {
        // The panel's labelling button lives elsewhere in the document.
        let year_label = panel
            .value()
            .attr("aria-labelledby")
            .and_then(|id| dom::element_by_id(doc, id))
            .map(|button| dom::clean_text(&button))
            .unwrap_or_else(|| "Year".to_string());

        let mut year_modules = Vec::new();

        for accordion in panel.select(&ACCORDION) {
            let section_title = accordion
                .select(&ACCORDION_HEADING)
                .next()
                .map(|h| dom::clean_text(&h).to_lowercase())
                .unwrap_or_default();
            let core_optional = if section_title.contains("optional") {
                "Optional"
            } else {
                "Core"
            };

            for item in accordion.select(&MODULE_ITEM) {
                let Some(title_span) = item.select(&ITEM_TITLE).next() else {
                    continue;
                };
                let title_text = dom::clean_text(&title_span);
                if title_text.is_empty() || title_text.eq_ignore_ascii_case("close all") {
                    continue;
                }

                let description = item
                    .select(&ITEM_CONTENT)
                    .next()
                    .map(|el| dom::clean_text(&el))
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| MODULE_PLACEHOLDER.to_string());

                year_modules.push(ModuleRecord {
                    module_name: strip_credit_suffix(&title_text),
                    credits: parse_credits(&title_text),
                    core_optional: core_optional.to_string(),
                    description,
                });
            }
        }

        if !year_modules.is_empty() {
            modules.insert(year_label, year_modules);
        }
    }

    modules
}

// ── Tests ──
