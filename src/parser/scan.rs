//! Low-level byte-pattern routines shared by the scanner passes.
//!
//! The engine deliberately scans raw bytes with small, named routines
//! instead of pulling in a regex engine: every match rule below mirrors a
//! lazy (non-greedy) pattern, and keeping the matching explicit pins down
//! exactly which approximations the extractor makes.

use std::ops::Range;

/// Find the first occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|at| from + at)
}

/// Whitespace class used by every pattern: space, tab, CR, LF, FF, VT.
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x0B)
}

/// Index of the first non-whitespace byte at or after `from`.
pub(crate) fn skip_whitespace(data: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < data.len() && is_whitespace(data[i]) {
        i += 1;
    }
    i
}

/// End of the run of ASCII digits starting at `from` (equals `from` when
/// the byte there is not a digit).
pub(crate) fn digit_run_end(data: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < data.len() && data[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Parse a digit run as `u32`, saturating on overflow.
pub(crate) fn parse_number(digits: &[u8]) -> u32 {
    let mut value: u32 = 0;
    for &d in digits {
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(d - b'0'));
    }
    value
}

/// Trim whitespace from both ends of a range over `data`.
pub(crate) fn trim_range(data: &[u8], range: Range<usize>) -> Range<usize> {
    let mut start = range.start;
    let mut end = range.end;
    while start < end && is_whitespace(data[start]) {
        start += 1;
    }
    while end > start && is_whitespace(data[end - 1]) {
        end -= 1;
    }
    start..end
}

/// Find the next `)` at or after `from` that is not escaped by a backslash.
///
/// A `)` preceded by an odd number of consecutive backslashes counts as
/// escaped. Escape pairs themselves are unescaped later, after matching.
pub(crate) fn next_unescaped_close_paren(data: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < data.len() {
        if data[i] == b')' {
            let mut backslashes = 0;
            while i > backslashes && data[i - 1 - backslashes] == b'\\' {
                backslashes += 1;
            }
            if backslashes % 2 == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Match a parenthesized literal starting exactly at `open` (which must
/// index a `(`). Returns the inner range and the index just past `)`.
pub(crate) fn literal_span(data: &[u8], open: usize) -> Option<(Range<usize>, usize)> {
    debug_assert_eq!(data.get(open), Some(&b'('));
    let close = next_unescaped_close_paren(data, open + 1)?;
    Some((open + 1..close, close + 1))
}

/// Match a `<hex-digits>` literal starting exactly at `open` (which must
/// index a `<`). Requires at least one hex digit and a closing `>`.
pub(crate) fn hex_span(data: &[u8], open: usize) -> Option<(Range<usize>, usize)> {
    debug_assert_eq!(data.get(open), Some(&b'<'));
    let mut i = open + 1;
    while i < data.len() && data[i].is_ascii_hexdigit() {
        i += 1;
    }
    if i == open + 1 || data.get(i) != Some(&b'>') {
        return None;
    }
    Some((open + 1..i, i + 1))
}

/// Find the next `( ... ) <op>` occurrence at or after `from`, where the
/// closing paren may be followed by whitespace before the operator.
///
/// Mimics a lazy match: from each `(`, successive unescaped `)` candidates
/// are tried until one is followed by the operator, so the accepted content
/// may itself span earlier close parens. Returns the inner range and the
/// index just past the operator.
pub(crate) fn next_literal_with_op(
    data: &[u8],
    from: usize,
    op: &[u8],
) -> Option<(Range<usize>, usize)> {
    let mut start = from;
    while let Some(open) = find(data, b"(", start) {
        let mut candidate = open + 1;
        while let Some(close) = next_unescaped_close_paren(data, candidate) {
            let after = skip_whitespace(data, close + 1);
            if data.len() - after >= op.len() && &data[after..after + op.len()] == op {
                return Some((open + 1..close, after + op.len()));
            }
            candidate = close + 1;
        }
        start = open + 1;
    }
    None
}

/// Find the next `[ ... ] <op>` occurrence at or after `from`, with the
/// same lazy-expansion rule as [`next_literal_with_op`].
pub(crate) fn next_bracketed_with_op(
    data: &[u8],
    from: usize,
    op: &[u8],
) -> Option<(Range<usize>, usize)> {
    let mut start = from;
    while let Some(open) = find(data, b"[", start) {
        let mut candidate = open + 1;
        while let Some(close) = find(data, b"]", candidate) {
            let after = skip_whitespace(data, close + 1);
            if data.len() - after >= op.len() && &data[after..after + op.len()] == op {
                return Some((open + 1..close, after + op.len()));
            }
            candidate = close + 1;
        }
        start = open + 1;
    }
    None
}

/// Find the next `<hex> <op>` occurrence at or after `from`.
pub(crate) fn next_hex_with_op(
    data: &[u8],
    from: usize,
    op: &[u8],
) -> Option<(Range<usize>, usize)> {
    let mut start = from;
    while let Some(open) = find(data, b"<", start) {
        if let Some((inner, end)) = hex_span(data, open) {
            let after = skip_whitespace(data, end);
            if data.len() - after >= op.len() && &data[after..after + op.len()] == op {
                return Some((inner, after + op.len()));
            }
        }
        start = open + 1;
    }
    None
}
