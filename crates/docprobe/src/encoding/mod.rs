//! Text file encoding toolkit.
//!
//! Detection-first decoding with a short fallback list of legacy Cyrillic
//! and Western codepages, plus the file-level operations built on it:
//! inspect, convert to UTF-8 in place, create UTF-8 files, and scan a tree
//! for NUL-corrupted text files.

use crate::Result;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

/// Legacy encodings tried when detection still decodes with errors. Covers
/// the Cyrillic codepages the tool historically had to repair.
const FALLBACK_LABELS: &[&str] = &["windows-1251", "IBM866", "windows-1252"];

/// Extensions considered text files by [`scan_tree`].
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "toml", "py", "rs"];

/// What [`inspect_file`] learned about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingReport {
    /// Name of the encoding the content was decoded with (e.g. "UTF-8").
    pub encoding: &'static str,
    /// Decoded length in characters.
    pub chars: usize,
    /// Whether the decoded text contains Cyrillic characters.
    pub cyrillic: bool,
}

/// A text file containing NUL bytes, found by [`scan_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFinding {
    pub path: PathBuf,
    pub nul_bytes: usize,
}

/// Decode `bytes` to a string, returning the encoding name used.
///
/// UTF-8 (with or without BOM) is the fast path. Otherwise the content is
/// run through detection; if the detected encoding still produces
/// replacement characters, the fallback labels are tried in order and the
/// first clean decode wins.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.trim_start_matches('\u{feff}').to_string(), "UTF-8");
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let detected = detector.guess(None, true);

    let (decoded, _, had_errors) = detected.decode(bytes);
    if had_errors {
        for label in FALLBACK_LABELS {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                let (candidate, _, errors) = encoding.decode(bytes);
                if !errors {
                    return (candidate.into_owned(), encoding.name());
                }
            }
        }
    }

    (decoded.into_owned(), detected.name())
}

/// Read and decode a text file.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<(String, &'static str)> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(decode_bytes(&bytes))
}

/// Inspect a file's encoding and content shape.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<EncodingReport> {
    let (text, encoding) = read_text_file(path)?;

    Ok(EncodingReport {
        encoding,
        chars: text.chars().count(),
        cyrillic: text.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)),
    })
}

/// Rewrite `path` in place as clean UTF-8, returning the source encoding.
///
/// Stray control characters picked up through a bad decode/re-encode cycle
/// are stripped along the way.
pub fn convert_to_utf8(path: impl AsRef<Path>) -> Result<&'static str> {
    let (text, encoding) = read_text_file(path.as_ref())?;
    let cleaned = crate::text::strip_control_chars(&text);
    std::fs::write(path.as_ref(), cleaned.as_bytes())?;
    tracing::debug!(path = %path.as_ref().display(), source_encoding = encoding, "converted to UTF-8");
    Ok(encoding)
}

/// Create a file with UTF-8 content, creating parent directories as needed.
pub fn create_utf8_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path.as_ref(), content.as_bytes())?;
    Ok(())
}

/// Walk `root` and report text files containing NUL bytes.
///
/// The walk respects ignore files and skips hidden directories, so VCS and
/// virtualenv internals are not scanned.
pub fn scan_tree(root: impl AsRef<Path>) -> Result<Vec<ScanFinding>> {
    let mut findings = Vec::new();

    for entry in ignore::WalkBuilder::new(root.as_ref()).build() {
        let entry = entry.map_err(|e| crate::DocprobeError::Other(format!("walk failed: {}", e)))?;

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let is_text = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| TEXT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);
        if !is_text {
            continue;
        }

        let bytes = std::fs::read(path)?;
        let nul_bytes = bytes.iter().filter(|&&b| b == 0).count();
        if nul_bytes > 0 {
            findings.push(ScanFinding {
                path: path.to_path_buf(),
                nul_bytes,
            });
        }
    }

    findings.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(findings)
}
