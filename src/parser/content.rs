//! Text-showing operator extraction from content streams.
//!
//! Four independent passes over the same buffer, in fixed order: `[...] TJ`
//! arrays, `(...) Tj`, the next-line forms `(...) '` and `(...) "`, and
//! `<hex> Tj`. Each decoded operand is appended followed by a single
//! space; elements inside a TJ array concatenate with no separator.

use crate::text::encoding;

use super::{scan, stream};

/// Decode all text-showing operators in a content stream.
///
/// Runs decompression first, then the extraction passes. Never fails; a
/// stream without any matching operator yields an empty string.
pub fn decode_text(stream_bytes: &[u8]) -> String {
    let body = stream::decompress(stream_bytes);
    let mut out = String::new();

    // Pass 1: [ ... ] TJ
    let mut pos = 0;
    while let Some((inner, end)) = scan::next_bracketed_with_op(&body, pos, b"TJ") {
        out.push_str(&decode_array(&body[inner]));
        out.push(' ');
        pos = end;
    }

    // Pass 2: ( ... ) Tj
    extract_literal_operands(&body, b"Tj", &mut out);

    // Pass 3: ( ... ) ' and ( ... ) "
    extract_literal_operands(&body, b"'", &mut out);
    extract_literal_operands(&body, b"\"", &mut out);

    // Pass 4: < hex > Tj
    pos = 0;
    while let Some((inner, end)) = scan::next_hex_with_op(&body, pos, b"Tj") {
        out.push_str(&decode_hex_string(&body[inner]));
        out.push(' ');
        pos = end;
    }

    out
}

fn extract_literal_operands(body: &[u8], op: &[u8], out: &mut String) {
    let mut pos = 0;
    while let Some((inner, end)) = scan::next_literal_with_op(body, pos, op) {
        out.push_str(&decode_literal_string(&body[inner]));
        out.push(' ');
        pos = end;
    }
}

/// Decode the inside of a `[...] TJ` array: every parenthesized literal
/// and every hex literal, in left-to-right order, glyph positioning
/// numbers skipped.
fn decode_array(inner: &[u8]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < inner.len() {
        match inner[i] {
            b'(' => {
                if let Some((range, end)) = scan::literal_span(inner, i) {
                    out.push_str(&decode_literal_string(&inner[range]));
                    i = end;
                } else {
                    i += 1;
                }
            }
            b'<' => {
                if let Some((range, end)) = scan::hex_span(inner, i) {
                    out.push_str(&decode_hex_string(&inner[range]));
                    i = end;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    out
}

/// Decode a parenthesized string literal: unescape backslash sequences,
/// then normalize the byte encoding.
pub(crate) fn decode_literal_string(raw: &[u8]) -> String {
    encoding::normalize(&unescape(raw))
}

/// Decode a hex string literal two digits at a time. A trailing odd digit
/// is dropped; the match rules only ever hand over valid hex digits.
pub(crate) fn decode_hex_string(hex: &[u8]) -> String {
    let bytes: Vec<u8> = hex
        .chunks_exact(2)
        .filter_map(|pair| {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        })
        .collect();
    encoding::normalize(&bytes)
}

/// Unescape C-style backslash sequences in a literal string body.
///
/// `\n`, `\r`, `\t`, `\b`, `\f`, one-to-three-digit octal escapes, and the
/// generic `\<char>` form (which covers `\(`, `\)` and `\\`). Runs after
/// matching, not before, so a literal `\)` inside a string has already
/// terminated the match early; this imprecision is part of the contract.
fn unescape(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let byte = raw[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }
        // Lone trailing backslash is kept as-is.
        let Some(&next) = raw.get(i + 1) else {
            out.push(byte);
            break;
        };
        match next {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 {
                    match raw.get(i + 1 + digits) {
                        Some(&(d @ b'0'..=b'7')) => {
                            value = value * 8 + u32::from(d - b'0');
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                out.push(value as u8);
                i += 1 + digits;
                continue;
            }
            other => out.push(other),
        }
        i += 2;
    }
    out
}
