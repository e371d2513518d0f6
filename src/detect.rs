//! PDF format detection and header validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes. The engine only commits to the 4-byte form; the
/// version suffix is optional and sniffed separately.
const PDF_MAGIC: &[u8] = b"%PDF";

/// Validate the magic bytes at the start of a buffer.
///
/// # Returns
/// * `Err(Error::EmptyFile)` if the buffer is empty
/// * `Err(Error::InvalidFormat)` if the first four bytes are not `%PDF`
pub fn check_magic(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyFile);
    }
    if data.len() < PDF_MAGIC.len() || &data[..PDF_MAGIC.len()] != PDF_MAGIC {
        return Err(Error::InvalidFormat);
    }
    Ok(())
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    check_magic(data).is_ok()
}

/// Check if a file is a valid PDF.
///
/// Reads only the first few bytes; returns `false` for missing or
/// unreadable files.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    if reader.read_exact(&mut header).is_err() {
        return false;
    }
    is_pdf_bytes(&header)
}

/// Sniff the header version (e.g. `"1.7"`) from a raw byte buffer.
///
/// Scans for the first `%PDF-<digits>.<digits>` marker; the marker is
/// normally at offset 0 but damaged files sometimes carry junk before it.
pub fn sniff_version(data: &[u8]) -> Option<String> {
    const MARKER: &[u8] = b"%PDF-";

    let mut from = 0;
    while let Some(at) = crate::parser::scan::find(data, MARKER, from) {
        let major_start = at + MARKER.len();
        let major_end = crate::parser::scan::digit_run_end(data, major_start);
        if major_end > major_start && data.get(major_end) == Some(&b'.') {
            let minor_start = major_end + 1;
            let minor_end = crate::parser::scan::digit_run_end(data, minor_start);
            if minor_end > minor_start {
                let version = &data[major_start..minor_end];
                return Some(String::from_utf8_lossy(version).into_owned());
            }
        }
        from = at + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_magic_valid() {
        assert!(check_magic(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").is_ok());
        assert!(check_magic(b"%PDF").is_ok());
    }

    #[test]
    fn test_check_magic_empty() {
        assert!(matches!(check_magic(b""), Err(Error::EmptyFile)));
    }

    #[test]
    fn test_check_magic_invalid() {
        assert!(matches!(
            check_magic(b"<!DOCTYPE html>"),
            Err(Error::InvalidFormat)
        ));
        assert!(matches!(check_magic(b"%PD"), Err(Error::InvalidFormat)));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_sniff_version() {
        assert_eq!(sniff_version(b"%PDF-1.7\n").as_deref(), Some("1.7"));
        assert_eq!(sniff_version(b"%PDF-2.0\n").as_deref(), Some("2.0"));
        assert_eq!(sniff_version(b"junk\n%PDF-1.4\n").as_deref(), Some("1.4"));
        assert_eq!(sniff_version(b"%PDF\n"), None);
        assert_eq!(sniff_version(b"no header"), None);
    }
}
