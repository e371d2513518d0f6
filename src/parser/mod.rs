//! Heuristic PDF structure parsing.
//!
//! The pipeline runs strictly downward: object scan, page location,
//! stream decompression, operator decoding. Each stage degrades
//! gracefully; only the structural preconditions (readable, non-empty,
//! `%PDF` magic) surface as errors.

mod content;
mod extractor;
mod metadata;
mod options;
mod pages;
pub(crate) mod scan;
mod scanner;
mod stream;

pub use content::decode_text;
pub use extractor::PdfExtractor;
pub use metadata::{scan_metadata, scan_page_count};
pub use options::ExtractOptions;
pub use pages::locate_pages;
pub use scanner::scan_objects;
pub use stream::decompress;
