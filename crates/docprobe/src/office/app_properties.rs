//! Application properties extraction from docProps/app.xml.

use crate::{DocprobeError, Result};
use std::io::Read;
use zip::ZipArchive;

/// Word application statistics from `docProps/app.xml`.
///
/// These are the counts Word itself computed on last save, so they may lag
/// the actual body content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppProperties {
    /// Application name (e.g. "Microsoft Office Word")
    pub application: Option<String>,
    /// Number of pages
    pub pages: Option<i64>,
    /// Number of words
    pub words: Option<i64>,
    /// Number of characters (excluding spaces)
    pub characters: Option<i64>,
    /// Number of lines
    pub lines: Option<i64>,
    /// Number of paragraphs
    pub paragraphs: Option<i64>,
    /// Company name
    pub company: Option<String>,
}

/// Extract application properties from an Office Open XML container.
///
/// A missing `docProps/app.xml` part yields default (all-`None`) properties.
pub fn extract_app_properties<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>) -> Result<AppProperties> {
    let mut xml_content = String::new();

    match archive.by_name("docProps/app.xml") {
        Ok(mut file) => {
            file.read_to_string(&mut xml_content)
                .map_err(|e| DocprobeError::parsing(format!("Failed to read app.xml: {}", e)))?;
        }
        Err(_) => {
            return Ok(AppProperties::default());
        }
    }

    let doc = roxmltree::Document::parse(&xml_content)
        .map_err(|e| DocprobeError::parsing(format!("Failed to parse app.xml: {}", e)))?;

    let root = doc.root_element();

    Ok(AppProperties {
        application: super::parse_xml_text(root, "Application"),
        pages: super::parse_xml_int(root, "Pages"),
        words: super::parse_xml_int(root, "Words"),
        characters: super::parse_xml_int(root, "Characters"),
        lines: super::parse_xml_int(root, "Lines"),
        paragraphs: super::parse_xml_int(root, "Paragraphs"),
        company: super::parse_xml_text(root, "Company"),
    })
}
