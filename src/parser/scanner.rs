//! Textual object scanner.
//!
//! Discovers `<n> <gen> obj ... endobj` blocks by scanning the raw file
//! bytes, with no use of the cross-reference table. This keeps the engine
//! tolerant of damaged or non-standard xref sections at the cost of
//! trusting whatever object headers appear in the byte stream.

use crate::detect::check_magic;
use crate::error::Result;
use crate::model::{ObjectTable, RawObject};

use super::scan;

const OBJ: &[u8] = b"obj";
const ENDOBJ: &[u8] = b"endobj";

/// Scan a buffer for all PDF objects and build the object table.
///
/// Matching is non-overlapping and lazy: each object body runs from the
/// `obj` keyword to the first following `endobj`, so nested or adjacent
/// objects are never merged. Later objects with a duplicate number
/// overwrite earlier ones.
///
/// # Errors
/// * [`Error::EmptyFile`](crate::Error::EmptyFile) for an empty buffer
/// * [`Error::InvalidFormat`](crate::Error::InvalidFormat) when the first
///   four bytes are not `%PDF`
pub fn scan_objects(data: &[u8]) -> Result<ObjectTable> {
    check_magic(data)?;

    let mut table = ObjectTable::new();
    let mut pos = 0;

    while let Some(keyword) = scan::find(data, OBJ, pos) {
        let Some(number) = object_number_before(data, keyword) else {
            pos = keyword + 1;
            continue;
        };

        let body_start = scan::skip_whitespace(data, keyword + OBJ.len());
        let Some(end) = scan::find(data, ENDOBJ, body_start) else {
            // No terminator anywhere after this header; nothing further
            // can match either.
            break;
        };

        let body = scan::trim_range(data, body_start..end);
        table.insert(RawObject::new(number, data[body].to_vec()));
        pos = end + ENDOBJ.len();
    }

    Ok(table)
}

/// Walk backwards from an `obj` keyword over `<number> <gen> ` and return
/// the object number, or `None` when the bytes before the keyword do not
/// form a valid header. Rejects the `obj` inside `endobj` for free, since
/// it is preceded by a letter rather than whitespace.
fn object_number_before(data: &[u8], keyword: usize) -> Option<u32> {
    let gen_end = walk_back_whitespace(data, keyword)?;
    let gen_start = walk_back_digits(data, gen_end)?;
    let num_end = walk_back_whitespace(data, gen_start)?;
    let num_start = walk_back_digits(data, num_end)?;
    Some(scan::parse_number(&data[num_start..num_end]))
}

/// Index before the run of whitespace ending at `end`; `None` if the run
/// is empty.
fn walk_back_whitespace(data: &[u8], end: usize) -> Option<usize> {
    let mut i = end;
    while i > 0 && scan::is_whitespace(data[i - 1]) {
        i -= 1;
    }
    (i < end).then_some(i)
}

/// Index before the run of digits ending at `end`; `None` if the run is
/// empty.
fn walk_back_digits(data: &[u8], end: usize) -> Option<usize> {
    let mut i = end;
    while i > 0 && data[i - 1].is_ascii_digit() {
        i -= 1;
    }
    (i < end).then_some(i)
}
