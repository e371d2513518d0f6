//! Integration tests for the metadata and page-count scans.

use chrono::Datelike;

use pdfsift::{get_metadata, get_metadata_from_bytes, get_page_count, get_page_count_from_bytes};

fn pdf_with_info() -> Vec<u8> {
    b"%PDF-1.7\n\
      1 0 obj\n<< /Title (Quarterly Report) /Author (Jana Nov\xe1kov\xe1) \
      /Subject (Q3 numbers) /CreationDate (D:20240301120000Z) >>\nendobj\n\
      2 0 obj\n<< /Type /Pages /Count 3 >>\nendobj\n\
      %%EOF\n"
        .to_vec()
}

#[test]
fn metadata_fields_are_scanned() {
    let metadata = get_metadata_from_bytes(&pdf_with_info());

    assert_eq!(metadata.title.as_deref(), Some("Quarterly Report"));
    // Latin-1 bytes in the author name are converted to UTF-8.
    assert_eq!(metadata.author.as_deref(), Some("Jana Nováková"));
    assert_eq!(metadata.subject.as_deref(), Some("Q3 numbers"));
    assert_eq!(metadata.pdf_version.as_deref(), Some("1.7"));
}

#[test]
fn creation_date_kept_raw_and_parsed() {
    let metadata = get_metadata_from_bytes(&pdf_with_info());

    assert_eq!(metadata.creation_date.as_deref(), Some("D:20240301120000Z"));
    let created = metadata.created.unwrap();
    assert_eq!(created.year(), 2024);
    assert_eq!(created.month(), 3);
    assert_eq!(created.day(), 1);
}

#[test]
fn metadata_map_has_only_found_keys() {
    let metadata = get_metadata_from_bytes(b"%PDF-1.4\n1 0 obj\n<< /Title (Only Title) >>\nendobj\n");
    let map = metadata.to_map();

    assert_eq!(map.get("title").map(String::as_str), Some("Only Title"));
    assert_eq!(map.get("pdf_version").map(String::as_str), Some("1.4"));
    assert!(!map.contains_key("author"));
    assert!(!map.contains_key("subject"));
    assert!(!map.contains_key("creation_date"));
}

#[test]
fn utf16be_title_is_decoded() {
    let mut pdf = b"%PDF-1.4\n1 0 obj\n<< /Title (".to_vec();
    pdf.extend_from_slice(&[0xFE, 0xFF, 0x00, b'H', 0x00, b'i']);
    pdf.extend_from_slice(b") >>\nendobj\n");

    let metadata = get_metadata_from_bytes(&pdf);
    assert_eq!(metadata.title.as_deref(), Some("Hi"));
}

#[test]
fn missing_file_yields_empty_metadata() {
    let metadata = get_metadata("/nonexistent/never-there.pdf");
    assert!(metadata.is_empty());
    assert!(metadata.to_map().is_empty());
}

#[test]
fn declared_count_wins_over_page_objects() {
    // /Count 3 is authoritative even though only one page object exists.
    let pdf = b"%PDF-1.4\n\
        2 0 obj\n<< /Type /Pages /Count 3 >>\nendobj\n\
        3 0 obj\n<< /Type /Page /Contents 4 0 R >>\nendobj\n";
    assert_eq!(get_page_count_from_bytes(pdf), 3);
}

#[test]
fn page_objects_counted_without_declared_count() {
    let pdf = b"%PDF-1.4\n\
        3 0 obj\n<< /Type /Page /A >>\nendobj\n\
        4 0 obj\n<< /Type /Pages /Kids [] >>\nendobj\n\
        5 0 obj\n<< /Type /Page /B >>\nendobj\n";
    assert_eq!(get_page_count_from_bytes(pdf), 2);
}

#[test]
fn missing_file_yields_zero_pages() {
    assert_eq!(get_page_count("/nonexistent/never-there.pdf"), 0);
}

#[test]
fn page_count_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counted.pdf");
    std::fs::write(&path, pdf_with_info()).unwrap();

    assert_eq!(get_page_count(&path), 3);
    assert_eq!(
        get_metadata(&path).title.as_deref(),
        Some("Quarterly Report")
    );
}
