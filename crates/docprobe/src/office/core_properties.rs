//! Core properties extraction from docProps/core.xml.

use crate::{DocprobeError, Result};
use std::io::Read;
use zip::ZipArchive;

/// Dublin Core metadata from `docProps/core.xml`.
///
/// Fields not present in the document are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject/topic
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Keywords or tags
    pub keywords: Option<String>,
    /// Document description/abstract
    pub description: Option<String>,
    /// User who last modified the document
    pub last_modified_by: Option<String>,
    /// Revision number
    pub revision: Option<String>,
    /// Creation timestamp (ISO 8601)
    pub created: Option<String>,
    /// Last modification timestamp (ISO 8601)
    pub modified: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Document language
    pub language: Option<String>,
}

/// Extract core properties from an Office Open XML container.
///
/// A missing `docProps/core.xml` part yields default (all-`None`)
/// properties; a malformed one is a parsing error.
pub fn extract_core_properties<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>) -> Result<CoreProperties> {
    let mut xml_content = String::new();

    match archive.by_name("docProps/core.xml") {
        Ok(mut file) => {
            file.read_to_string(&mut xml_content)
                .map_err(|e| DocprobeError::parsing(format!("Failed to read core.xml: {}", e)))?;
        }
        Err(_) => {
            // core.xml is optional
            return Ok(CoreProperties::default());
        }
    }

    let doc = roxmltree::Document::parse(&xml_content)
        .map_err(|e| DocprobeError::parsing(format!("Failed to parse core.xml: {}", e)))?;

    let root = doc.root_element();

    Ok(CoreProperties {
        title: super::parse_xml_text(root, "title"),
        subject: super::parse_xml_text(root, "subject"),
        creator: super::parse_xml_text(root, "creator"),
        keywords: super::parse_xml_text(root, "keywords"),
        description: super::parse_xml_text(root, "description"),
        last_modified_by: super::parse_xml_text(root, "lastModifiedBy"),
        revision: super::parse_xml_text(root, "revision"),
        created: super::parse_xml_text(root, "created"),
        modified: super::parse_xml_text(root, "modified"),
        category: super::parse_xml_text(root, "category"),
        language: super::parse_xml_text(root, "language"),
    })
}
