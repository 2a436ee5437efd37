//! Office Open XML container parsing.
//!
//! Word documents store their content and metadata as XML parts inside a ZIP
//! container:
//!
//! - `word/document.xml` - the body (paragraphs, tables)
//! - `word/_rels/document.xml.rels` - part relationships (images, ...)
//! - `docProps/core.xml` - Dublin Core metadata (creator, dates, ...)
//! - `docProps/app.xml` - application statistics (page count, word count)
//!
//! Matching is by local tag name, so the `w:`/`dc:`/`cp:` namespace prefixes
//! used by different producers do not matter.

pub mod app_properties;
pub mod core_properties;
pub mod document;

pub use app_properties::{AppProperties, extract_app_properties};
pub use core_properties::{CoreProperties, extract_core_properties};
pub use document::{BodyStats, count_image_relationships, read_document_body};

use roxmltree::Node;

/// Text content of the first descendant element with the given local name.
///
/// Empty or whitespace-only content counts as absent.
pub(crate) fn parse_xml_text(node: Node, name: &str) -> Option<String> {
    node.descendants()
        .find(|n| n.tag_name().name() == name)
        .and_then(|n| n.text())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Integer content of the first descendant element with the given local name.
pub(crate) fn parse_xml_int(node: Node, name: &str) -> Option<i64> {
    node.descendants()
        .find(|n| n.tag_name().name() == name)
        .and_then(|n| n.text())
        .and_then(|s| s.trim().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xml_text() {
        let xml = r#"<root><title>Test Document</title></root>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(parse_xml_text(root, "title"), Some("Test Document".to_string()));
        assert_eq!(parse_xml_text(root, "missing"), None);
    }

    #[test]
    fn test_parse_xml_text_namespaced() {
        let xml = r#"<cp:root xmlns:cp="urn:x" xmlns:dc="urn:y"><dc:creator>Alice</dc:creator></cp:root>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(parse_xml_text(root, "creator"), Some("Alice".to_string()));
    }

    #[test]
    fn test_parse_xml_text_empty_is_none() {
        let xml = r#"<root><title></title><other>  </other></root>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(parse_xml_text(root, "title"), None);
        assert_eq!(parse_xml_text(root, "other"), None);
    }

    #[test]
    fn test_parse_xml_int() {
        let xml = r#"<root><Pages>42</Pages><Words>oops</Words></root>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(parse_xml_int(root, "Pages"), Some(42));
        assert_eq!(parse_xml_int(root, "Words"), None);
        assert_eq!(parse_xml_int(root, "missing"), None);
    }
}
