//! Lookup strategies over the selector engine. The course pages are
//! loosely structured, so extraction leans on heading ids, CSS classes
//! and "nearest following element" hops rather than a fixed DOM shape.

use scraper::{ElementRef, Html, Selector};

/// Collapse all text nodes under `el` into one string: consecutive
/// whitespace becomes a single space, leading/trailing is trimmed.
pub fn clean_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First element matching `selector`, in document order.
pub fn first<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// First element matching `selector` strictly after `after` in document
/// order. This is not a sibling lookup: the match may live anywhere in
/// the rest of the document.
pub fn next_matching<'a>(
    doc: &'a Html,
    after: ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    let mut seen = false;
    for node in doc.root_element().descendants() {
        if node.id() == after.id() {
            seen = true;
            continue;
        }
        if !seen {
            continue;
        }
        if let Some(el) = ElementRef::wrap(node) {
            if selector.matches(&el) {
                return Some(el);
            }
        }
    }
    None
}

/// First element whose `id` attribute equals `id` exactly.
pub fn element_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().attr("id") == Some(id))
}

// ── Tests ──
