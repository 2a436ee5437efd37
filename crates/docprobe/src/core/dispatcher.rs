//! Dispatch entry points.
//!
//! This module ties selection and analysis together: find the first analyzer
//! claiming the file's extension, run it, and normalize the outcome. Three
//! cases are kept distinct at this boundary:
//!
//! 1. missing input - rejected with a validation error before dispatch;
//! 2. unsupported format - no analyzer matched; a normal outcome, reported
//!    as [`Dispatch::Unsupported`] so the caller can list supported formats;
//! 3. analyzer fault - any error while reading or parsing the file becomes
//!    [`AnalysisResult::Failure`]; it never propagates past the dispatcher.

use crate::core::config::AnalyzerConfig;
use crate::core::extension::extension_of;
use crate::plugins::registry::analyzer_registry;
use crate::plugins::{DocumentAnalyzer, Plugin};
use crate::types::AnalysisResult;
use crate::{DocprobeError, Result};
use std::path::Path;
use std::sync::Arc;

/// Outcome of dispatching a file, before any rendering.
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// An analyzer was selected and ran; inspect the inner result for
    /// success vs. parse failure.
    Analyzed(AnalysisResult),

    /// No registered analyzer claims this extension. Not an error.
    Unsupported {
        /// The normalized extension, or `None` if the path has no extension.
        extension: Option<String>,
    },
}

/// Select the analyzer for `path` from the global registry.
///
/// Ensures built-in analyzers are registered first. `Ok(None)` means the
/// format is unsupported.
pub fn select_analyzer(path: &Path) -> Result<Option<Arc<dyn DocumentAnalyzer>>> {
    crate::analyzers::ensure_initialized()?;

    let registry = analyzer_registry()
        .read()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    Ok(registry.select(path))
}

/// Run `analyzer` on `path`, converting any fault into a `Failure` outcome.
///
/// Callers are expected to have checked [`select_analyzer`] first; this
/// function does not re-check the extension.
pub fn analyze_with(analyzer: &Arc<dyn DocumentAnalyzer>, path: &Path, config: &AnalyzerConfig) -> AnalysisResult {
    match analyzer.analyze_path(path, config) {
        Ok(report) => AnalysisResult::Success(report),
        Err(err) => {
            tracing::warn!(
                analyzer = analyzer.name(),
                path = %path.display(),
                "analysis failed: {}",
                err
            );
            AnalysisResult::failure(err.to_string())
        }
    }
}

/// Full dispatch: validate the input path, select, analyze, normalize.
///
/// # Errors
///
/// Returns `DocprobeError::Validation` when `path` does not exist (the
/// missing-input case is rejected before any analyzer is consulted), and
/// `DocprobeError::LockPoisoned` if the registry lock is poisoned.
pub fn dispatch_file(path: &Path, config: &AnalyzerConfig) -> Result<Dispatch> {
    if !path.exists() {
        return Err(DocprobeError::validation(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match select_analyzer(path)? {
        Some(analyzer) => {
            tracing::debug!(analyzer = analyzer.name(), path = %path.display(), "dispatching");
            Ok(Dispatch::Analyzed(analyze_with(&analyzer, path, config)))
        }
        None => Ok(Dispatch::Unsupported {
            extension: extension_of(path),
        }),
    }
}

/// All extensions claimed by registered analyzers, in registration order.
pub fn supported_extensions() -> Result<Vec<String>> {
    crate::analyzers::ensure_initialized()?;

    let registry = analyzer_registry()
        .read()
        .map_err(|e| DocprobeError::LockPoisoned(format!("analyzer registry: {}", e)))?;
    Ok(registry.supported_extensions())
}
