//! File extension normalization.
//!
//! Dispatch is keyed on the path's lowercased extension suffix and nothing
//! else; there is no content sniffing.

use std::path::Path;

/// The lowercased extension of `path`, including the dot (e.g. `".docx"`).
///
/// Returns `None` for paths without an extension or with a non-UTF-8 one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}
