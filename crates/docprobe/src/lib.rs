//! docprobe - document metadata inspection
//!
//! docprobe reports bounded metadata (paragraph/page counts, authorship,
//! encryption) and a bounded text excerpt from DOCX and PDF files. Format
//! handling is plugin-based: an ordered registry of analyzers is consulted
//! by file extension, the first match wins, and every outcome is normalized
//! into a common success/failure shape.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docprobe::{AnalyzerConfig, Dispatch, dispatch_file};
//! use std::path::Path;
//!
//! # fn main() -> docprobe::Result<()> {
//! let config = AnalyzerConfig::default();
//! match dispatch_file(Path::new("report.docx"), &config)? {
//!     Dispatch::Analyzed(result) => println!("{:?}", result),
//!     Dispatch::Unsupported { extension } => println!("unsupported: {:?}", extension),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core** (`core`): dispatch orchestration, extension normalization,
//!   configuration and settings persistence
//! - **Plugin system** (`plugins`): analyzer traits and the ordered registry
//! - **Analyzers** (`analyzers`): the built-in DOCX and PDF analyzers
//! - **Companion toolkits** (`encoding`, `update`): text-encoding repair and
//!   the update-manifest check

#![deny(unsafe_code)]

pub mod analyzers;
pub mod core;
pub mod encoding;
pub mod error;
pub mod office;
pub mod pdf;
pub mod plugins;
pub mod text;
pub mod types;
pub mod update;

pub use error::{DocprobeError, Result};
pub use types::{AnalysisReport, AnalysisResult, StatMap};

pub use crate::core::config::AnalyzerConfig;
pub use crate::core::dispatcher::{Dispatch, analyze_with, dispatch_file, select_analyzer, supported_extensions};
pub use crate::core::extension::extension_of;
pub use crate::core::settings::Settings;

pub use analyzers::{DocxAnalyzer, PdfAnalyzer, ensure_initialized, register_default_analyzers};
pub use plugins::{DocumentAnalyzer, Plugin};
