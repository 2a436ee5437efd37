//! Bounded per-page text extraction.

use lopdf::Document;

/// Extract text from the first `max_pages` pages, in page order.
///
/// Returns `(page_number, text)` pairs for pages with non-empty text. Pages
/// whose content streams cannot be decoded are skipped, not fatal: a partly
/// unreadable document still yields an excerpt from its readable pages.
pub fn extract_page_texts(doc: &Document, max_pages: usize) -> Vec<(u32, String)> {
    let mut pages = Vec::new();

    for (page_number, _object_id) in doc.get_pages().into_iter().take(max_pages) {
        match doc.extract_text(&[page_number]) {
            Ok(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pages.push((page_number, trimmed.to_string()));
                }
            }
            Err(e) => {
                tracing::debug!(page = page_number, "page text extraction failed: {}", e);
            }
        }
    }

    pages
}

/// Join page texts with `--- Page N ---` markers.
pub fn join_page_texts(pages: &[(u32, String)]) -> String {
    pages
        .iter()
        .map(|(number, text)| format!("--- Page {} ---\n{}", number, text))
        .collect::<Vec<_>>()
        .join("\n\n")
}
