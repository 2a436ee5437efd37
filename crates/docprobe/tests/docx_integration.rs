//! DOCX analysis against assembled OOXML fixtures.

use docprobe::{AnalysisResult, AnalyzerConfig, Dispatch, dispatch_file};
use serial_test::serial;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::tempdir;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Introduction paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Body paragraph with </w:t></w:r><w:r><w:t>two runs.</w:t></w:r></w:p>
    <w:tbl>
      <w:tr>
        <w:tc><w:p><w:r><w:t>Name</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>Value</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
    <w:p><w:r><w:t>Closing paragraph.</w:t></w:r></w:p>
    <w:sectPr/>
  </w:body>
</w:document>"#;

const CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:dcterms="http://purl.org/dc/terms/"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>Integration Fixture</dc:title>
    <dc:creator>Fixture Author</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">2024-06-15T08:00:00Z</dcterms:created>
</cp:coreProperties>"#;

const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
    <Application>Microsoft Office Word</Application>
    <Pages>2</Pages>
    <Words>11</Words>
</Properties>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>
</Relationships>"#;

fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
    let cursor = Cursor::new(Vec::new());
    let mut zip = zip::ZipWriter::new(cursor);
    let options = zip::write::FileOptions::<()>::default().compression_method(zip::CompressionMethod::Stored);

    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

fn write_fixture(dir: &Path, name: &str, parts: &[(&str, &str)]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_docx(parts)).unwrap();
    path
}

fn analyze(path: &Path, config: &AnalyzerConfig) -> AnalysisResult {
    match dispatch_file(path, config).unwrap() {
        Dispatch::Analyzed(result) => result,
        Dispatch::Unsupported { extension } => panic!("unexpectedly unsupported: {:?}", extension),
    }
}

#[test]
#[serial]
fn full_fixture_reports_counts_metadata_and_excerpt() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "fixture.docx",
        &[
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("word/document.xml", DOCUMENT_XML),
            ("word/_rels/document.xml.rels", RELS_XML),
            ("docProps/core.xml", CORE_XML),
            ("docProps/app.xml", APP_XML),
        ],
    );

    let config = AnalyzerConfig::default();
    let result = analyze(&path, &config);
    let report = result.report().expect("analysis must succeed");

    assert_eq!(report.stats["file_name"], serde_json::json!("fixture.docx"));
    assert_eq!(report.stats["paragraphs"], serde_json::json!(3));
    assert_eq!(report.stats["tables"], serde_json::json!(1));
    assert_eq!(report.stats["images"], serde_json::json!(1));
    assert_eq!(report.stats["author"], serde_json::json!("Fixture Author"));
    assert_eq!(report.stats["created"], serde_json::json!("2024-06-15T08:00:00Z"));
    assert_eq!(report.stats["title"], serde_json::json!("Integration Fixture"));
    assert_eq!(report.stats["pages"], serde_json::json!(2));
    assert_eq!(report.stats["words"], serde_json::json!(11));

    assert!(report.text_sample.starts_with("Introduction paragraph."));
    assert!(report.text_sample.contains("Body paragraph with two runs."));
    // Table cell text is not part of the body excerpt.
    assert!(!report.text_sample.contains("Name"));
}

#[test]
#[serial]
fn stats_keys_keep_analyzer_order() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "ordered.docx",
        &[
            ("word/document.xml", DOCUMENT_XML),
            ("word/_rels/document.xml.rels", RELS_XML),
            ("docProps/core.xml", CORE_XML),
        ],
    );

    let config = AnalyzerConfig::default();
    let result = analyze(&path, &config);
    let report = result.report().unwrap();

    let keys: Vec<_> = report.stats.keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["file_name", "paragraphs", "tables", "images", "author", "created", "title"]
    );
}

#[test]
#[serial]
fn minimal_fixture_omits_unknown_fields() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "minimal.docx", &[("word/document.xml", DOCUMENT_XML)]);

    let config = AnalyzerConfig::default();
    let result = analyze(&path, &config);
    let report = result.report().unwrap();

    assert!(!report.stats.contains_key("images"));
    assert!(!report.stats.contains_key("author"));
    assert!(!report.stats.contains_key("pages"));
}

#[test]
#[serial]
fn excerpt_bounded_for_large_documents() {
    let paragraphs: String = (0..100)
        .map(|i| format!("<w:p><w:r><w:t>Paragraph number {} with filler text.</w:t></w:r></w:p>", i))
        .collect();
    let document = format!(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        paragraphs
    );

    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "large.docx", &[("word/document.xml", &document)]);

    let config = AnalyzerConfig::default();
    let result = analyze(&path, &config);
    let report = result.report().unwrap();

    assert_eq!(report.stats["paragraphs"], serde_json::json!(100));
    assert!(report.text_sample.chars().count() <= 1000);
    // Only the first 20 paragraphs are sampled.
    assert!(!report.text_sample.contains("Paragraph number 21 "));
}

#[test]
#[serial]
fn zip_without_document_part_fails_cleanly() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "empty.docx", &[("docProps/core.xml", CORE_XML)]);

    let config = AnalyzerConfig::default();
    match analyze(&path, &config) {
        AnalysisResult::Failure { message } => assert!(message.contains("word/document.xml")),
        AnalysisResult::Success(_) => panic!("container without a body must not analyze"),
    }
}

#[test]
#[serial]
fn legacy_doc_extension_dispatches_then_fails_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.doc");
    // OLE compound file magic - a real legacy binary, not a ZIP.
    std::fs::write(&path, [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]).unwrap();

    let config = AnalyzerConfig::default();
    match analyze(&path, &config) {
        AnalysisResult::Failure { message } => assert!(!message.is_empty()),
        AnalysisResult::Success(_) => panic!("legacy binary must not parse as OOXML"),
    }
}
