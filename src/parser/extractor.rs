//! Top-level extraction orchestration.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Metadata, PageEntry};
use crate::text::clean;

use super::content::decode_text;
use super::metadata::{scan_metadata, scan_page_count};
use super::options::ExtractOptions;
use super::pages::locate_pages;
use super::scanner::scan_objects;

/// One-shot PDF text-extraction engine.
///
/// Holds the file bytes and the options for a single document; no state
/// survives between documents, and concurrent extractions each get their
/// own instance.
///
/// # Example
///
/// ```no_run
/// use pdfsift::PdfExtractor;
///
/// fn main() -> pdfsift::Result<()> {
///     let extractor = PdfExtractor::open("invoice.pdf")?;
///     let text = extractor.extract()?;
///     println!("{}", text);
///     Ok(())
/// }
/// ```
pub struct PdfExtractor {
    data: Vec<u8>,
    options: ExtractOptions,
}

impl PdfExtractor {
    /// Open a PDF file with default options.
    ///
    /// # Errors
    /// * [`Error::FileNotFound`] if the path does not exist
    /// * [`Error::Io`] if the file cannot be read
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let data = fs::read(path)?;
        Ok(Self { data, options })
    }

    /// Build an extractor over an in-memory buffer.
    ///
    /// The header check happens at [`extract`](Self::extract) time, so
    /// construction itself never fails.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Build an extractor over an in-memory buffer with custom options.
    pub fn from_bytes_with_options(data: impl Into<Vec<u8>>, options: ExtractOptions) -> Self {
        Self {
            data: data.into(),
            options,
        }
    }

    /// Run the full pipeline: scan objects, locate pages, decode each
    /// page's content stream, then clean the concatenated result.
    ///
    /// # Errors
    /// * [`Error::EmptyFile`] for a zero-byte input
    /// * [`Error::InvalidFormat`] when the `%PDF` magic is missing
    /// * [`Error::NoTextExtracted`] when the cleaned output is empty
    pub fn extract(&self) -> Result<String> {
        let table = scan_objects(&self.data)?;
        if self.options.verbose {
            log::debug!("scanned {} objects", table.len());
        }

        let pages = locate_pages(&table);
        if self.options.verbose {
            log::debug!("located {} pages with content", pages.len());
        }

        let mut all_text = String::new();
        for page in &pages {
            let page_text = decode_text(&page.content);
            if self.options.verbose {
                log::debug!(
                    "page object {}: decoded {} chars",
                    page.page_object,
                    page_text.len()
                );
            }
            if !page_text.is_empty() {
                all_text.push_str(&page_text);
                all_text.push_str("\n\n");
            }
        }

        let cleaned = clean(&all_text);
        if cleaned.is_empty() {
            return Err(Error::NoTextExtracted);
        }
        Ok(cleaned)
    }

    /// Resolved page entries, in object-scan order. Mostly useful for
    /// diagnostics; [`extract`](Self::extract) is the main entry point.
    pub fn page_entries(&self) -> Result<Vec<PageEntry>> {
        let table = scan_objects(&self.data)?;
        Ok(locate_pages(&table))
    }

    /// Metadata scanned from the raw bytes; independent of the pipeline.
    pub fn metadata(&self) -> Metadata {
        scan_metadata(&self.data)
    }

    /// Declared or counted page total; independent of the pipeline.
    pub fn page_count(&self) -> u32 {
        scan_page_count(&self.data)
    }
}
