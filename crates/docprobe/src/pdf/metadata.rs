//! PDF metadata extraction via the document trailer and Info dictionary.

use lopdf::{Dictionary, Document, Object};
use serde::{Deserialize, Serialize};

/// Metadata read from a PDF document.
///
/// String fields come from the Info dictionary and are `None` when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfMetadata {
    /// Number of pages in the page tree.
    pub page_count: usize,

    /// Whether the document carries an `Encrypt` dictionary.
    pub encrypted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Application that produced the PDF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    /// Creation timestamp, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// PDF version from the file header (e.g. "1.7").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_version: Option<String>,
}

/// Extract metadata from a loaded document.
///
/// Absent Info entries are simply `None`; this function does not fail on
/// sparse documents.
pub fn extract_metadata(doc: &Document) -> PdfMetadata {
    let info = info_dict(doc);

    PdfMetadata {
        page_count: doc.get_pages().len(),
        encrypted: doc.trailer.get(b"Encrypt").is_ok(),
        title: info.and_then(|d| info_string(d, b"Title")),
        author: info.and_then(|d| info_string(d, b"Author")),
        subject: info.and_then(|d| info_string(d, b"Subject")),
        producer: info.and_then(|d| info_string(d, b"Producer")),
        created_at: info
            .and_then(|d| info_string(d, b"CreationDate"))
            .map(|date| parse_pdf_date(&date)),
        pdf_version: if doc.version.is_empty() {
            None
        } else {
            Some(doc.version.clone())
        },
    }
}

/// The Info dictionary, following an indirect reference if needed.
fn info_dict(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    match info {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => None,
    }
}

/// Decode a PDF text string.
///
/// PDF strings are either UTF-16BE with a BOM or PDFDocEncoding (treated as
/// windows-1252, which covers its printable range).
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    let decoded = if bytes.starts_with(&[0xFE, 0xFF]) {
        let (text, _, _) = encoding_rs::UTF_16BE.decode(&bytes[2..]);
        text.into_owned()
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                text.into_owned()
            }
        }
    };

    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Convert a PDF date string (`D:YYYYMMDDHHmmSS...`) to ISO 8601.
///
/// Strings that do not look like PDF dates are passed through unchanged.
fn parse_pdf_date(date_str: &str) -> String {
    let cleaned = date_str.trim();

    if cleaned.starts_with("D:") && cleaned.len() >= 10 {
        let year = &cleaned[2..6];
        let month = &cleaned[6..8];
        let day = &cleaned[8..10];

        if cleaned.len() >= 16 {
            let hour = &cleaned[10..12];
            let minute = &cleaned[12..14];
            let second = &cleaned[14..16];
            format!("{}-{}-{}T{}:{}:{}Z", year, month, day, hour, minute, second)
        } else if cleaned.len() >= 14 {
            let hour = &cleaned[10..12];
            let minute = &cleaned[12..14];
            format!("{}-{}-{}T{}:{}:00Z", year, month, day, hour, minute)
        } else {
            format!("{}-{}-{}T00:00:00Z", year, month, day)
        }
    } else if cleaned.len() >= 8 && cleaned[0..8].bytes().all(|b| b.is_ascii_digit()) {
        let year = &cleaned[0..4];
        let month = &cleaned[4..6];
        let day = &cleaned[6..8];
        format!("{}-{}-{}T00:00:00Z", year, month, day)
    } else {
        date_str.to_string()
    }
}
