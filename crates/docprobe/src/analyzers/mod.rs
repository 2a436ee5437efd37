//! Built-in format analyzers.
//!
//! The default set is registered lazily on first dispatch, in an order that
//! is part of the contract: the Word analyzer before the PDF analyzer.

use crate::Result;
use crate::plugins::registry::analyzer_registry;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub mod docx;
pub mod pdf;

pub use docx::DocxAnalyzer;
pub use pdf::PdfAnalyzer;

static ANALYZERS_INITIALIZED: Lazy<Result<()>> = Lazy::new(register_default_analyzers);

/// Ensure built-in analyzers are registered.
///
/// Called automatically on first dispatch. Safe to call repeatedly; if the
/// registry was cleared since initialization, the defaults are re-registered.
pub fn ensure_initialized() -> Result<()> {
    ANALYZERS_INITIALIZED
        .as_ref()
        .map(|_| ())
        .map_err(|e| crate::DocprobeError::Plugin {
            message: format!("Failed to register default analyzers: {}", e),
            plugin_name: "built-in-analyzers".to_string(),
        })?;

    let registry = analyzer_registry()
        .read()
        .map_err(|e| crate::DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;

    if registry.is_empty() {
        drop(registry);
        register_default_analyzers()?;
    }

    Ok(())
}

/// Register the built-in analyzers with the global registry.
///
/// Registration order is selection order; keep DOCX before PDF.
pub fn register_default_analyzers() -> Result<()> {
    let mut registry = analyzer_registry()
        .write()
        .map_err(|e| crate::DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;

    registry.register(Arc::new(DocxAnalyzer::new()))?;
    registry.register(Arc::new(PdfAnalyzer::new()))?;

    Ok(())
}
