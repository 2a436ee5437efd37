//! PDF analyzer.

use crate::Result;
use crate::core::config::AnalyzerConfig;
use crate::pdf::{self, PdfError};
use crate::plugins::{DocumentAnalyzer, Plugin};
use crate::text::truncate_excerpt;
use crate::types::AnalysisReport;

/// Analyzer for PDF documents.
///
/// Reports page count, Info-dictionary metadata and the encryption flag,
/// plus text extracted from the first few pages.
pub struct PdfAnalyzer;

impl PdfAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PdfAnalyzer {
    fn name(&self) -> &str {
        "pdf-analyzer"
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
        "Page count, document metadata and leading-page text from PDF files"
    }
}

impl DocumentAnalyzer for PdfAnalyzer {
    fn analyze_bytes(&self, content: &[u8], file_name: &str, config: &AnalyzerConfig) -> Result<AnalysisReport> {
        let doc = lopdf::Document::load_mem(content).map_err(PdfError::from)?;

        let metadata = pdf::extract_metadata(&doc);
        let pages = pdf::extract_page_texts(&doc, config.max_pdf_pages);

        let mut report = AnalysisReport::default();
        let stats = &mut report.stats;

        stats.insert("file_name".to_string(), serde_json::json!(file_name));
        stats.insert("pages".to_string(), serde_json::json!(metadata.page_count));
        if let Some(author) = metadata.author {
            stats.insert("author".to_string(), serde_json::json!(author));
        }
        if let Some(title) = metadata.title {
            stats.insert("title".to_string(), serde_json::json!(title));
        }
        stats.insert("encrypted".to_string(), serde_json::json!(metadata.encrypted));
        if let Some(producer) = metadata.producer {
            stats.insert("producer".to_string(), serde_json::json!(producer));
        }
        if let Some(created_at) = metadata.created_at {
            stats.insert("created".to_string(), serde_json::json!(created_at));
        }
        if let Some(version) = metadata.pdf_version {
            stats.insert("pdf_version".to_string(), serde_json::json!(version));
        }

        report.text_sample = truncate_excerpt(&pdf::join_page_texts(&pages), config.excerpt_limit);

        Ok(report)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".pdf"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};
    use std::path::Path;

    /// Build a one-page PDF with the given page text and Info entries.
    fn build_pdf(text: &str, title: Option<&str>, author: Option<&str>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if title.is_some() || author.is_some() {
            let mut info = lopdf::Dictionary::new();
            if let Some(title) = title {
                info.set("Title", Object::string_literal(title));
            }
            if let Some(author) = author {
                info.set("Author", Object::string_literal(author));
            }
            let info_id = doc.add_object(Object::Dictionary(info));
            doc.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_plugin_interface() {
        let analyzer = PdfAnalyzer::new();
        assert_eq!(analyzer.name(), "pdf-analyzer");
        assert_eq!(analyzer.supported_extensions(), &[".pdf"]);
        assert!(analyzer.initialize().is_ok());
        assert!(analyzer.shutdown().is_ok());
    }

    #[test]
    fn test_matches_pdf_only() {
        let analyzer = PdfAnalyzer::new();
        assert!(analyzer.matches(Path::new("paper.pdf")));
        assert!(analyzer.matches(Path::new("PAPER.PDF")));
        assert!(!analyzer.matches(Path::new("paper.docx")));
    }

    #[test]
    fn test_analyze_metadata_and_pages() {
        let content = build_pdf("Hello from page one", Some("Test Paper"), Some("Bob"));

        let analyzer = PdfAnalyzer::new();
        let config = AnalyzerConfig::default();
        let report = analyzer.analyze_bytes(&content, "paper.pdf", &config).unwrap();

        assert_eq!(report.stats["file_name"], serde_json::json!("paper.pdf"));
        assert_eq!(report.stats["pages"], serde_json::json!(1));
        assert_eq!(report.stats["author"], serde_json::json!("Bob"));
        assert_eq!(report.stats["title"], serde_json::json!("Test Paper"));
        assert_eq!(report.stats["encrypted"], serde_json::json!(false));
    }

    #[test]
    fn test_analyze_text_sample_has_page_marker() {
        let content = build_pdf("Hello from page one", None, None);

        let analyzer = PdfAnalyzer::new();
        let config = AnalyzerConfig::default();
        let report = analyzer.analyze_bytes(&content, "paper.pdf", &config).unwrap();

        assert!(report.text_sample.starts_with("--- Page 1 ---"));
        assert!(report.text_sample.contains("Hello from page one"));
    }

    #[test]
    fn test_analyze_rejects_garbage() {
        let analyzer = PdfAnalyzer::new();
        let config = AnalyzerConfig::default();
        let result = analyzer.analyze_bytes(b"definitely not a pdf", "bad.pdf", &config);

        assert!(matches!(result, Err(crate::DocprobeError::Parsing { .. })));
    }
}
