//! Error types for the pdfsift library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF text extraction.
///
/// Only structural failures are surfaced to callers. Anomalies inside an
/// otherwise readable document (undecompressable streams, dangling object
/// references, undecodable strings) are absorbed and degrade to "contributes
/// no text".
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("PDF file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error when reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file exists but contains no bytes.
    #[error("PDF file is empty or unreadable")]
    EmptyFile,

    /// The file does not start with the `%PDF` magic bytes.
    #[error("invalid PDF file format")]
    InvalidFormat,

    /// The pipeline ran to completion but produced no text.
    ///
    /// Callers should treat this as "document unreadable by this engine",
    /// not as a structural parse error.
    #[error("no text could be extracted from PDF")]
    NoTextExtracted,
}
