//! PDF parsing: metadata and bounded text extraction over `lopdf`.

pub mod error;
pub mod metadata;
pub mod text;

pub use error::PdfError;
pub use metadata::{PdfMetadata, extract_metadata};
pub use text::{extract_page_texts, join_page_texts};
