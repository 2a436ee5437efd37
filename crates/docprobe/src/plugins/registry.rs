//! Plugin registration and selection.
//!
//! The registry is an *ordered sequence* of analyzers. `register` appends,
//! `select` scans in registration order and returns the first analyzer whose
//! extension set matches, so an analyzer registered later for an
//! already-claimed extension is shadowed, never selected. Order is the whole
//! contract; there is no priority system.

use crate::plugins::{DocumentAnalyzer, Plugin};
use crate::{DocprobeError, Result};
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Validate a plugin name before registration.
///
/// Names must be non-empty and contain no whitespace.
fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DocprobeError::validation("Plugin name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(DocprobeError::validation(format!(
            "Plugin name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Ordered registry of document analyzers.
///
/// # Thread Safety
///
/// The registry itself is not synchronized; the global instance wraps it in
/// an `RwLock` (see [`analyzer_registry`]).
pub struct AnalyzerRegistry {
    analyzers: Vec<Arc<dyn DocumentAnalyzer>>,
}

impl AnalyzerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { analyzers: Vec::new() }
    }

    /// Append an analyzer to the registration order.
    ///
    /// Validates the plugin name and calls `initialize()` before appending;
    /// the analyzer is not registered if either step fails. No
    /// de-duplication is performed.
    pub fn register(&mut self, analyzer: Arc<dyn DocumentAnalyzer>) -> Result<()> {
        validate_plugin_name(analyzer.name())?;
        analyzer.initialize()?;
        self.analyzers.push(analyzer);
        Ok(())
    }

    /// Select the first analyzer (in registration order) that handles `path`.
    ///
    /// `None` is the normal "unsupported format" outcome, not an error.
    pub fn select(&self, path: &Path) -> Option<Arc<dyn DocumentAnalyzer>> {
        self.analyzers.iter().find(|a| a.matches(path)).map(Arc::clone)
    }

    /// Select the first analyzer claiming `extension` (lowercase, with dot).
    pub fn select_extension(&self, extension: &str) -> Option<Arc<dyn DocumentAnalyzer>> {
        self.analyzers
            .iter()
            .find(|a| a.supported_extensions().contains(&extension))
            .map(Arc::clone)
    }

    /// Names of all registered analyzers, in registration order.
    pub fn list(&self) -> Vec<String> {
        self.analyzers.iter().map(|a| a.name().to_string()).collect()
    }

    /// Iterate registered analyzers in registration order.
    pub fn analyzers(&self) -> impl Iterator<Item = &Arc<dyn DocumentAnalyzer>> {
        self.analyzers.iter()
    }

    /// All claimed extensions, in registration order, de-duplicated.
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions = Vec::new();
        for analyzer in &self.analyzers {
            for ext in analyzer.supported_extensions() {
                if !extensions.iter().any(|e| e == ext) {
                    extensions.push((*ext).to_string());
                }
            }
        }
        extensions
    }

    /// Remove every analyzer with the given name, calling `shutdown()` on each.
    ///
    /// Removing a name that is not registered is a no-op.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let mut removed = Vec::new();
        self.analyzers.retain(|a| {
            if a.name() == name {
                removed.push(Arc::clone(a));
                false
            } else {
                true
            }
        });

        for analyzer in removed {
            analyzer.shutdown()?;
        }
        Ok(())
    }

    /// Shutdown all analyzers and clear the registry.
    pub fn shutdown_all(&mut self) -> Result<()> {
        for analyzer in self.analyzers.drain(..) {
            analyzer.shutdown()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static ANALYZER_REGISTRY: Lazy<RwLock<AnalyzerRegistry>> = Lazy::new(|| RwLock::new(AnalyzerRegistry::new()));

/// The process-wide analyzer registry.
///
/// Built-in analyzers are registered lazily on first dispatch; see
/// [`crate::analyzers::ensure_initialized`].
pub fn analyzer_registry() -> &'static RwLock<AnalyzerRegistry> {
    &ANALYZER_REGISTRY
}

/// Register an analyzer with the global registry.
pub fn register_analyzer(analyzer: Arc<dyn DocumentAnalyzer>) -> Result<()> {
    let mut registry = analyzer_registry()
        .write()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    registry.register(analyzer)
}

/// Unregister an analyzer from the global registry by name.
pub fn unregister_analyzer(name: &str) -> Result<()> {
    let mut registry = analyzer_registry()
        .write()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    registry.remove(name)
}

/// List all analyzers registered in the global registry.
pub fn list_analyzers() -> Result<Vec<String>> {
    let registry = analyzer_registry()
        .read()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    Ok(registry.list())
}

/// Shutdown and remove all analyzers from the global registry.
pub fn clear_analyzers() -> Result<()> {
    let mut registry = analyzer_registry()
        .write()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    registry.shutdown_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AnalyzerConfig;
    use crate::plugins::Plugin;
    use crate::types::AnalysisReport;

    struct NamedAnalyzer {
        name: &'static str,
        extensions: Vec<&'static str>,
    }

    impl Plugin for NamedAnalyzer {
        fn name(&self) -> &str {
            self.name
        }

        fn version(&self) -> String {
            "1.0.0".to_string()
        }

        fn initialize(&self) -> Result<()> {
            Ok(())
        }

        fn shutdown(&self) -> Result<()> {
            Ok(())
        }
    }

    impl DocumentAnalyzer for NamedAnalyzer {
        fn analyze_bytes(&self, _content: &[u8], file_name: &str, _config: &AnalyzerConfig) -> Result<AnalysisReport> {
            let mut report = AnalysisReport::default();
            report
                .stats
                .insert("file_name".to_string(), serde_json::json!(file_name));
            Ok(report)
        }

        fn supported_extensions(&self) -> &[&str] {
            &self.extensions
        }
    }

    fn analyzer(name: &'static str, extensions: Vec<&'static str>) -> Arc<dyn DocumentAnalyzer> {
        Arc::new(NamedAnalyzer { name, extensions })
    }

    #[test]
    fn test_register_and_select() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx", ".doc"])).unwrap();
        registry.register(analyzer("pdf", vec![".pdf"])).unwrap();

        let selected = registry.select(Path::new("report.docx")).unwrap();
        assert_eq!(selected.name(), "word");

        let selected = registry.select(Path::new("report.pdf")).unwrap();
        assert_eq!(selected.name(), "pdf");

        assert!(registry.select(Path::new("report.txt")).is_none());
    }

    #[test]
    fn test_select_is_case_insensitive() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx"])).unwrap();

        let upper = registry.select(Path::new("REPORT.DOCX")).unwrap();
        let lower = registry.select(Path::new("report.docx")).unwrap();
        assert_eq!(upper.name(), lower.name());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("first", vec![".pdf"])).unwrap();
        registry.register(analyzer("second", vec![".pdf"])).unwrap();

        let selected = registry.select(Path::new("x.pdf")).unwrap();
        assert_eq!(selected.name(), "first");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx", ".doc"])).unwrap();
        registry.register(analyzer("pdf", vec![".pdf"])).unwrap();

        assert_eq!(registry.list(), vec!["word", "pdf"]);
        assert_eq!(registry.supported_extensions(), vec![".docx", ".doc", ".pdf"]);
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = AnalyzerRegistry::new();
        let result = registry.register(analyzer("", vec![".pdf"]));
        assert!(matches!(result, Err(DocprobeError::Validation { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_whitespace_name() {
        let mut registry = AnalyzerRegistry::new();
        let result = registry.register(analyzer("bad name", vec![".pdf"]));
        assert!(matches!(result, Err(DocprobeError::Validation { .. })));
    }

    #[test]
    fn test_remove_analyzer() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx"])).unwrap();
        registry.register(analyzer("pdf", vec![".pdf"])).unwrap();

        registry.remove("word").unwrap();
        assert_eq!(registry.list(), vec!["pdf"]);
        assert!(registry.select(Path::new("a.docx")).is_none());

        registry.remove("not-registered").unwrap();
    }

    #[test]
    fn test_shutdown_all() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx"])).unwrap();
        registry.register(analyzer("pdf", vec![".pdf"])).unwrap();

        registry.shutdown_all().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_select_extension() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(analyzer("word", vec![".docx", ".doc"])).unwrap();

        assert_eq!(registry.select_extension(".doc").unwrap().name(), "word");
        assert!(registry.select_extension(".pdf").is_none());
    }
}
