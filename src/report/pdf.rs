use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use printpdf::{GeneratePdfOptions, PdfDocument};
use tracing::warn;

/// Render one HTML story to PDF bytes. The layout engine owns pagination,
/// wrapping and link resolution; its failures are fatal for this document.
pub fn render(html: &str) -> Result<Vec<u8>> {
    let mut warnings = Vec::new();

    // No custom images or fonts are embedded; the built-in fonts cover
    // everything the story emits.
    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| anyhow!("PDF layout failed: {e}"))?;

    let bytes = doc.save(&Default::default(), &mut warnings);

    if !warnings.is_empty() {
        warn!("PDF generation produced {} warnings", warnings.len());
    }

    Ok(bytes)
}
