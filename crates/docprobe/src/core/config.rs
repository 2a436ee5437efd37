//! Analyzer configuration loading.
//!
//! Configuration is TOML (`docprobe.toml`), loaded explicitly or discovered
//! by walking parent directories from the current working directory.

use crate::{DocprobeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for the analysis pass.
///
/// # Example
///
/// ```rust
/// use docprobe::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.excerpt_limit, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    /// Maximum characters in a report's text excerpt.
    #[serde(default = "default_excerpt_limit")]
    pub excerpt_limit: usize,

    /// Maximum number of body paragraphs sampled for the DOCX excerpt.
    #[serde(default = "default_max_paragraphs")]
    pub max_paragraphs: usize,

    /// Maximum number of leading pages sampled for the PDF excerpt.
    #[serde(default = "default_max_pdf_pages")]
    pub max_pdf_pages: usize,
}

fn default_excerpt_limit() -> usize {
    1000
}

fn default_max_paragraphs() -> usize {
    20
}

fn default_max_pdf_pages() -> usize {
    3
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            excerpt_limit: default_excerpt_limit(),
            max_paragraphs: default_max_paragraphs(),
            max_pdf_pages: default_max_pdf_pages(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DocprobeError::Validation` if the file cannot be read or is
    /// not valid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DocprobeError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DocprobeError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Discover `docprobe.toml` in the current directory or any parent.
    ///
    /// Returns `Ok(None)` when no config file exists anywhere up the tree.
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(DocprobeError::Io)?;

        loop {
            let candidate = current.join("docprobe.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}
