//! Byte-encoding detection and conversion to UTF-8.

use encoding_rs::{UTF_16BE, WINDOWS_1252};

/// Convert extracted string bytes to a UTF-8 `String`.
///
/// Detection ladder, first match wins:
/// 1. A `FE FF` byte-order mark selects UTF-16BE (common for metadata
///    strings); unpaired surrogates are substituted, never fatal.
/// 2. Bytes that validate as UTF-8 are taken as-is.
/// 3. Everything else is decoded as Windows-1252, the WHATWG superset of
///    Latin-1. The mapping is total, so this step cannot fail; it also
///    makes the narrower legacy candidates (Latin-2, ASCII) unreachable,
///    matching the original detector where Latin-1 always matched first.
pub fn normalize(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let (text, _) = UTF_16BE.decode_without_bom_handling(&bytes[2..]);
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_owned();
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}
