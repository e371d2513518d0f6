//! # pdfsift
//!
//! Self-contained heuristic PDF text extraction for Rust.
//!
//! This library pulls plain text out of PDF documents without any external
//! parsing library or service: it scans the raw bytes for the object
//! graph, resolves page content streams, inflates FlateDecode payloads,
//! and decodes the text-showing operators into a readable string.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfsift::Result<()> {
//!     let text = pdfsift::extract_text("document.pdf")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Scope and limitations
//!
//! The engine is a best-effort extractor, not a conformant PDF reader:
//!
//! - Objects are discovered textually, ignoring the cross-reference
//!   table, which keeps damaged files readable.
//! - Only FlateDecode compression is handled; other filters pass through
//!   and typically contribute no text.
//! - Pages come out in object-scan order, which may differ from the
//!   page tree's reading order on multi-page documents.
//! - Encrypted documents, images, and layout reconstruction are out of
//!   scope.
//!
//! Anything the engine cannot decode degrades to "contributes no text"
//! rather than failing the call; see [`Error`] for the four structural
//! failures that are reported.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod text;

// Re-export commonly used types
pub use detect::{is_pdf, is_pdf_bytes};
pub use error::{Error, Result};
pub use model::{Metadata, ObjectTable, PageEntry, RawObject};
pub use parser::{ExtractOptions, PdfExtractor};

use std::path::Path;

/// Extract plain text from a PDF file.
///
/// # Errors
///
/// * [`Error::FileNotFound`] if the path does not exist
/// * [`Error::EmptyFile`] if the file contains no bytes
/// * [`Error::InvalidFormat`] if the `%PDF` magic is missing
/// * [`Error::NoTextExtracted`] if the pipeline produced nothing
///
/// # Example
///
/// ```no_run
/// let text = pdfsift::extract_text("invoice.pdf").unwrap();
/// assert!(!text.is_empty());
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    PdfExtractor::open(path)?.extract()
}

/// Extract plain text from an in-memory PDF buffer.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    PdfExtractor::from_bytes(data).extract()
}

/// Scan a PDF file for metadata (`title`, `author`, `subject`,
/// `creation_date`, `pdf_version`).
///
/// Never fails: a missing or unreadable file yields the empty value, and
/// absent fields are simply unset. Use [`Metadata::to_map`] for a plain
/// string map.
pub fn get_metadata<P: AsRef<Path>>(path: P) -> Metadata {
    match std::fs::read(path) {
        Ok(data) => parser::scan_metadata(&data),
        Err(_) => Metadata::default(),
    }
}

/// Scan an in-memory PDF buffer for metadata.
pub fn get_metadata_from_bytes(data: &[u8]) -> Metadata {
    parser::scan_metadata(data)
}

/// Number of pages: the declared `/Count` when present, else the number
/// of page objects found textually. Returns 0 for a missing file.
pub fn get_page_count<P: AsRef<Path>>(path: P) -> u32 {
    match std::fs::read(path) {
        Ok(data) => parser::scan_page_count(&data),
        Err(_) => 0,
    }
}

/// Number of pages in an in-memory PDF buffer.
pub fn get_page_count_from_bytes(data: &[u8]) -> u32 {
    parser::scan_page_count(data)
}
