//! Body statistics from word/document.xml.

use crate::{DocprobeError, Result};
use roxmltree::Node;
use std::io::Read;
use zip::ZipArchive;

const IMAGE_RELATIONSHIP_SUFFIX: &str = "/image";

/// Counts and sampled text from the document body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyStats {
    /// Number of body-level paragraphs. Paragraphs inside table cells are
    /// not counted, matching how word processors report the body outline.
    pub paragraphs: usize,
    /// Number of body-level tables.
    pub tables: usize,
    /// Text of the first non-empty paragraphs, at most `max_texts` entries,
    /// in document order.
    pub texts: Vec<String>,
}

/// Read body statistics from `word/document.xml`.
///
/// Unlike the metadata parts, the body is mandatory: a container without
/// `word/document.xml` is not a Word document.
pub fn read_document_body<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    max_texts: usize,
) -> Result<BodyStats> {
    let mut xml_content = String::new();

    archive
        .by_name("word/document.xml")
        .map_err(|e| DocprobeError::parsing(format!("Missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml_content)
        .map_err(|e| DocprobeError::parsing(format!("Failed to read word/document.xml: {}", e)))?;

    let doc = roxmltree::Document::parse(&xml_content)
        .map_err(|e| DocprobeError::parsing(format!("Failed to parse word/document.xml: {}", e)))?;

    let body = doc
        .descendants()
        .find(|n| n.tag_name().name() == "body")
        .ok_or_else(|| DocprobeError::parsing("word/document.xml has no body element"))?;

    let mut stats = BodyStats::default();

    for child in body.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "p" => {
                stats.paragraphs += 1;
                if stats.texts.len() < max_texts {
                    let text = paragraph_text(child);
                    if !text.is_empty() {
                        stats.texts.push(text);
                    }
                }
            }
            "tbl" => stats.tables += 1,
            _ => {}
        }
    }

    Ok(stats)
}

/// Concatenated run text of a paragraph node, trimmed.
fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        if node.tag_name().name() == "t" {
            if let Some(t) = node.text() {
                text.push_str(t);
            }
        }
    }
    text.trim().to_string()
}

/// Count image relationships in `word/_rels/document.xml.rels`.
///
/// Returns `None` when the relationships part is missing or unparsable - the
/// image count is then unknown, which callers must not render as zero.
pub fn count_image_relationships<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>) -> Option<usize> {
    let mut xml_content = String::new();

    archive
        .by_name("word/_rels/document.xml.rels")
        .ok()?
        .read_to_string(&mut xml_content)
        .ok()?;

    let doc = roxmltree::Document::parse(&xml_content).ok()?;

    let count = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "Relationship")
        .filter(|n| {
            n.attribute("Type")
                .map(|t| t.ends_with(IMAGE_RELATIONSHIP_SUFFIX))
                .unwrap_or(false)
        })
        .count();

    Some(count)
}
