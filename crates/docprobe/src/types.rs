//! Result types shared across analyzers and the dispatcher.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered statistics map produced by an analyzer.
///
/// Keys are stable, human-readable stat names (`paragraphs`, `pages`, ...).
/// Order is preserved so callers can render the stats the way the analyzer
/// emitted them.
pub type StatMap = IndexMap<String, serde_json::Value>;

/// A successful analysis: bounded statistics plus a bounded text excerpt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Ordered stat-name to value mapping.
    pub stats: StatMap,

    /// Text excerpt, at most [`crate::core::config::AnalyzerConfig::excerpt_limit`]
    /// characters.
    pub text_sample: String,
}

/// Tagged outcome of analyzing a single file.
///
/// Analyzer-level faults never escape the dispatcher; they arrive here as
/// `Failure`. "Unsupported format" is *not* a failure; see
/// [`crate::core::dispatcher::Dispatch`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    Success(AnalysisReport),
    Failure { message: String },
}

impl AnalysisResult {
    /// Create a failure outcome from any displayable error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The report, if this outcome is a success.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_constructor() {
        let result = AnalysisResult::failure("boom");
        assert!(!result.is_success());
        assert!(result.report().is_none());
    }

    #[test]
    fn test_success_report_access() {
        let mut stats = StatMap::new();
        stats.insert("paragraphs".to_string(), serde_json::json!(3));
        let result = AnalysisResult::Success(AnalysisReport {
            stats,
            text_sample: "hello".to_string(),
        });

        assert!(result.is_success());
        let report = result.report().unwrap();
        assert_eq!(report.stats["paragraphs"], serde_json::json!(3));
    }

    #[test]
    fn test_stat_map_preserves_insertion_order() {
        let mut stats = StatMap::new();
        stats.insert("file_name".to_string(), serde_json::json!("a.docx"));
        stats.insert("paragraphs".to_string(), serde_json::json!(1));
        stats.insert("tables".to_string(), serde_json::json!(0));

        let keys: Vec<_> = stats.keys().cloned().collect();
        assert_eq!(keys, vec!["file_name", "paragraphs", "tables"]);
    }

    #[test]
    fn test_result_serialization_tags() {
        let failure = AnalysisResult::failure("bad file");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], "bad file");

        let success = AnalysisResult::Success(AnalysisReport::default());
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["status"], "success");
    }
}
