//! Document analyzer plugin trait.

use crate::Result;
use crate::core::config::AnalyzerConfig;
use crate::core::extension::extension_of;
use crate::plugins::Plugin;
use crate::types::AnalysisReport;
use std::path::Path;

/// Trait for format analyzer plugins.
///
/// An analyzer declares the file extensions it handles and turns file content
/// into an [`AnalysisReport`]. Selection is purely extension-based: the
/// registry never sniffs content, and registration order decides which
/// analyzer wins when several claim the same extension.
///
/// # Example
///
/// ```rust
/// use docprobe::plugins::{DocumentAnalyzer, Plugin};
/// use docprobe::{AnalyzerConfig, AnalysisReport, Result};
///
/// struct TextAnalyzer;
///
/// impl Plugin for TextAnalyzer {
///     fn name(&self) -> &str { "text-analyzer" }
///     fn version(&self) -> String { "1.0.0".to_string() }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn shutdown(&self) -> Result<()> { Ok(()) }
/// }
///
/// impl DocumentAnalyzer for TextAnalyzer {
///     fn analyze_bytes(&self, content: &[u8], file_name: &str, _config: &AnalyzerConfig)
///         -> Result<AnalysisReport> {
///         let mut report = AnalysisReport::default();
///         report.stats.insert("file_name".to_string(), serde_json::json!(file_name));
///         report.stats.insert("bytes".to_string(), serde_json::json!(content.len()));
///         Ok(report)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &[".txt"]
///     }
/// }
/// ```
pub trait DocumentAnalyzer: Plugin {
    /// Analyze in-memory document content.
    ///
    /// `file_name` is the bare file name used for the `file_name` stat; it is
    /// display data, not a path to open.
    ///
    /// # Errors
    ///
    /// - `DocprobeError::Parsing` - the document could not be parsed
    /// - `DocprobeError::Io` - I/O errors (these always bubble up)
    fn analyze_bytes(&self, content: &[u8], file_name: &str, config: &AnalyzerConfig) -> Result<AnalysisReport>;

    /// Analyze a file on disk.
    ///
    /// The default implementation reads the whole file and delegates to
    /// [`analyze_bytes`](Self::analyze_bytes), so the file handle is released
    /// before analysis starts and on every exit path.
    fn analyze_path(&self, path: &Path, config: &AnalyzerConfig) -> Result<AnalysisReport> {
        let content = std::fs::read(path)?;
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        self.analyze_bytes(&content, file_name, config)
    }

    /// Extensions this analyzer handles: lowercase, including the dot
    /// (e.g. `".docx"`).
    fn supported_extensions(&self) -> &[&str];

    /// Whether this analyzer handles `path`, judged by its lowercased
    /// extension suffix alone.
    fn matches(&self, path: &Path) -> bool {
        match extension_of(path) {
            Some(ext) => self.supported_extensions().contains(&ext.as_str()),
            None => false,
        }
    }
}
