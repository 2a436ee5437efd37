//! Word document analyzer.
//!
//! Supports: Office Open XML (.docx) and, by extension claim, legacy .doc
//! files - a real legacy binary file fails the container open and surfaces
//! as an ordinary analysis failure.

use crate::Result;
use crate::core::config::AnalyzerConfig;
use crate::office;
use crate::plugins::{DocumentAnalyzer, Plugin};
use crate::text::truncate_excerpt;
use crate::types::AnalysisReport;
use std::io::Cursor;

/// Analyzer for Word documents.
///
/// Reads body statistics (paragraphs, tables), the image relationship count,
/// Dublin Core metadata, and Word's own application statistics from the OOXML
/// container.
pub struct DocxAnalyzer;

impl DocxAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for DocxAnalyzer {
    fn name(&self) -> &str {
        "docx-analyzer"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> &str {
        "Paragraph, table and image counts plus core metadata from Word documents"
    }
}

impl DocumentAnalyzer for DocxAnalyzer {
    fn analyze_bytes(&self, content: &[u8], file_name: &str, config: &AnalyzerConfig) -> Result<AnalysisReport> {
        let cursor = Cursor::new(content);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| crate::DocprobeError::parsing(format!("Failed to open document container: {}", e)))?;

        let body = office::read_document_body(&mut archive, config.max_paragraphs)?;
        let images = office::count_image_relationships(&mut archive);
        let core = office::extract_core_properties(&mut archive).unwrap_or_default();
        let app = office::extract_app_properties(&mut archive).unwrap_or_default();

        let mut report = AnalysisReport::default();
        let stats = &mut report.stats;

        stats.insert("file_name".to_string(), serde_json::json!(file_name));
        stats.insert("paragraphs".to_string(), serde_json::json!(body.paragraphs));
        stats.insert("tables".to_string(), serde_json::json!(body.tables));
        // Unknown image count stays absent rather than reading as zero.
        if let Some(images) = images {
            stats.insert("images".to_string(), serde_json::json!(images));
        }
        if let Some(creator) = core.creator {
            stats.insert("author".to_string(), serde_json::json!(creator));
        }
        if let Some(created) = core.created {
            stats.insert("created".to_string(), serde_json::json!(created));
        }
        if let Some(title) = core.title {
            stats.insert("title".to_string(), serde_json::json!(title));
        }
        if let Some(pages) = app.pages {
            stats.insert("pages".to_string(), serde_json::json!(pages));
        }
        if let Some(words) = app.words {
            stats.insert("words".to_string(), serde_json::json!(words));
        }

        report.text_sample = truncate_excerpt(&body.texts.join("\n"), config.excerpt_limit);

        Ok(report)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".docx", ".doc"]
    }
}
