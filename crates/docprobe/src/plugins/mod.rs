//! Plugin system for format analyzers.
//!
//! Analysis of a document is delegated to the first registered plugin whose
//! declared extension set matches the file's lowercased extension suffix.
//! Two traits make up the contract:
//!
//! - [`Plugin`] - identification and lifecycle
//! - [`DocumentAnalyzer`] - extension capability set plus the analyze call
//!
//! Analyzers are held as `Arc<dyn DocumentAnalyzer>` in an *ordered*
//! [`registry::AnalyzerRegistry`]; registration order decides selection when
//! several analyzers claim the same extension.

mod analyzer;
pub mod registry;
mod traits;

pub use analyzer::DocumentAnalyzer;
pub use registry::{clear_analyzers, list_analyzers, register_analyzer, unregister_analyzer};
pub use traits::Plugin;
