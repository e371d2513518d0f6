//! Metadata and page-count scans over the raw file bytes.
//!
//! Both scans are independent of the extraction pipeline: they look for
//! their patterns anywhere in the buffer and simply omit what they do not
//! find.

use chrono::{DateTime, Utc};

use crate::detect::sniff_version;
use crate::model::Metadata;

use super::content::decode_literal_string;
use super::pages::next_page_marker;
use super::scan;

/// Scan a buffer for metadata fields. Never fails; fields whose pattern
/// does not occur are left unset.
pub fn scan_metadata(data: &[u8]) -> Metadata {
    let mut metadata = Metadata {
        title: keyed_literal(data, b"/Title"),
        author: keyed_literal(data, b"/Author"),
        subject: keyed_literal(data, b"/Subject"),
        pdf_version: sniff_version(data),
        ..Default::default()
    };

    // The raw date string is preserved verbatim; parsing is best-effort.
    if let Some(raw) = keyed_literal_raw(data, b"/CreationDate") {
        metadata.created = parse_pdf_date(&raw);
        metadata.creation_date = Some(raw);
    }

    metadata
}

/// Page count: the first `/Count <n>` wins; otherwise fall back to
/// counting `/Type /Page` (non-`Pages`) occurrences.
pub fn scan_page_count(data: &[u8]) -> u32 {
    const COUNT: &[u8] = b"/Count";

    let mut start = 0;
    while let Some(at) = scan::find(data, COUNT, start) {
        let digits = scan::skip_whitespace(data, at + COUNT.len());
        if digits > at + COUNT.len() {
            let end = scan::digit_run_end(data, digits);
            if end > digits {
                return scan::parse_number(&data[digits..end]);
            }
        }
        start = at + 1;
    }

    let mut pages = 0;
    let mut from = 0;
    while let Some(end) = next_page_marker(data, from) {
        pages += 1;
        from = end;
    }
    pages
}

/// Match `<key> ( ... )` and decode the literal.
fn keyed_literal(data: &[u8], key: &[u8]) -> Option<String> {
    keyed_literal_span(data, key).map(|raw| decode_literal_string(raw))
}

/// Match `<key> ( ... )` and return the raw bytes undecoded, lossily
/// stringified.
fn keyed_literal_raw(data: &[u8], key: &[u8]) -> Option<String> {
    keyed_literal_span(data, key).map(|raw| String::from_utf8_lossy(raw).into_owned())
}

fn keyed_literal_span<'a>(data: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    let mut start = 0;
    while let Some(at) = scan::find(data, key, start) {
        let open = scan::skip_whitespace(data, at + key.len());
        if data.get(open) == Some(&b'(') {
            if let Some((range, _)) = scan::literal_span(data, open) {
                return Some(&data[range]);
            }
        }
        start = at + 1;
    }
    None
}

/// Parse a PDF date string (`D:YYYYMMDDHHmmSS...`); timezone suffixes are
/// ignored and missing components default to their minimum.
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:")?;

    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const SAMPLE: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Title (Invoice 42) /Author (Jane \\(QA\\) Doe) /CreationDate (D:20240115103045+01'00') >>\nendobj\n";

    #[test]
    fn test_scan_metadata_fields() {
        let metadata = scan_metadata(SAMPLE);
        assert_eq!(metadata.title.as_deref(), Some("Invoice 42"));
        assert_eq!(metadata.author.as_deref(), Some("Jane (QA) Doe"));
        assert_eq!(metadata.subject, None);
        assert_eq!(metadata.pdf_version.as_deref(), Some("1.4"));
    }

    #[test]
    fn test_creation_date_raw_and_parsed() {
        let metadata = scan_metadata(SAMPLE);
        assert_eq!(
            metadata.creation_date.as_deref(),
            Some("D:20240115103045+01'00'")
        );
        let created = metadata.created.unwrap();
        assert_eq!(created.year(), 2024);
        assert_eq!(created.month(), 1);
        assert_eq!(created.day(), 15);
    }

    #[test]
    fn test_scan_metadata_nothing_found() {
        let metadata = scan_metadata(b"not a pdf at all");
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_page_count_prefers_count_key() {
        let data = b"%PDF-1.4\n<< /Type /Pages /Count 3 >>\n<< /Type /Page >>\n";
        assert_eq!(scan_page_count(data), 3);
    }

    #[test]
    fn test_page_count_falls_back_to_counting() {
        let data = b"%PDF-1.4\n<< /Type /Page /X >>\n<< /Type /Pages /Kids [] >>\n<< /Type /Page /Y >>\n";
        assert_eq!(scan_page_count(data), 2);
    }

    #[test]
    fn test_page_count_empty() {
        assert_eq!(scan_page_count(b"%PDF-1.4\nno pages here"), 0);
    }

    #[test]
    fn test_parse_pdf_date_minimal() {
        let date = parse_pdf_date("D:2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert!(parse_pdf_date("20240101").is_none());
        assert!(parse_pdf_date("D:20").is_none());
    }
}
