//! FlateDecode stream decompression.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::{DeflateDecoder, ZlibDecoder};

use super::scan;

const STREAM: &[u8] = b"stream";
const ENDSTREAM: &[u8] = b"endstream";
const FILTER: &[u8] = b"/Filter";
const FLATE: &[u8] = b"/FlateDecode";

/// Inflate the first `stream ... endstream` segment of a body when it is
/// marked `/Filter /FlateDecode`, splicing the decompressed bytes back in
/// place so the surrounding dictionary stays inspectable.
///
/// Never fails: bodies without the filter marker, without a stream
/// segment, or whose payload cannot be inflated are returned unchanged.
/// This is the expected outcome for unsupported filters, not an error.
pub fn decompress(body: &[u8]) -> Cow<'_, [u8]> {
    if !has_flate_filter(body) {
        return Cow::Borrowed(body);
    }

    let Some(segment) = stream_segment(body) else {
        return Cow::Borrowed(body);
    };

    let payload = scan::trim_range(body, segment.payload.clone());
    let compressed = &body[payload];

    let inflated = match inflate_zlib(compressed) {
        Ok(data) => data,
        Err(_) => match inflate_raw(compressed) {
            Ok(data) => data,
            Err(err) => {
                log::warn!(
                    "failed to decompress FlateDecode stream ({} bytes): {}",
                    compressed.len(),
                    err
                );
                return Cow::Borrowed(body);
            }
        },
    };

    let mut rebuilt = Vec::with_capacity(body.len() + inflated.len());
    rebuilt.extend_from_slice(&body[..segment.start]);
    rebuilt.extend_from_slice(b"stream ");
    rebuilt.extend_from_slice(&inflated);
    rebuilt.extend_from_slice(b" endstream");
    rebuilt.extend_from_slice(&body[segment.end..]);
    Cow::Owned(rebuilt)
}

/// Textual filter detection: `/Filter` followed by optional whitespace and
/// `/FlateDecode`.
fn has_flate_filter(body: &[u8]) -> bool {
    let mut start = 0;
    while let Some(at) = scan::find(body, FILTER, start) {
        let name = scan::skip_whitespace(body, at + FILTER.len());
        if body.len() - name >= FLATE.len() && &body[name..name + FLATE.len()] == FLATE {
            return true;
        }
        start = at + 1;
    }
    false
}

struct StreamSegment {
    /// Offset of the `stream` keyword.
    start: usize,
    /// Payload between the keywords, whitespace not yet trimmed.
    payload: std::ops::Range<usize>,
    /// Offset just past `endstream`.
    end: usize,
}

/// Locate the first `stream ... endstream` segment.
fn stream_segment(body: &[u8]) -> Option<StreamSegment> {
    let start = scan::find(body, STREAM, 0)?;
    let payload_start = start + STREAM.len();
    let close = scan::find(body, ENDSTREAM, payload_start)?;
    Some(StreamSegment {
        start,
        payload: payload_start..close,
        end: close + ENDSTREAM.len(),
    })
}

/// zlib-wrapped deflate (the standard PDF form).
fn inflate_zlib(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

/// Raw, headerless deflate; some producers omit the zlib wrapper.
fn inflate_raw(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    DeflateDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn zlib_compress(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn flate_body(payload: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(b"<< /Length 99 /Filter /FlateDecode >>\nstream\n");
        body.extend_from_slice(payload);
        body.extend_from_slice(b"\nendstream");
        body
    }

    #[test]
    fn test_unfiltered_body_untouched() {
        let body = b"<< /Length 5 >>\nstream\nBT ET\nendstream";
        assert_eq!(&*decompress(body), body.as_slice());
    }

    #[test]
    fn test_zlib_stream_inflated_in_place() {
        let body = flate_body(&zlib_compress(b"BT (Hello) Tj ET"));
        let result = decompress(&body);

        let text = String::from_utf8_lossy(&result);
        assert!(text.contains("stream BT (Hello) Tj ET endstream"));
        // Dictionary keys survive the splice.
        assert!(text.contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_raw_deflate_fallback() {
        let mut encoder =
            flate2::write::DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"BT (raw) Tj ET").unwrap();
        let body = flate_body(&encoder.finish().unwrap());

        let result = decompress(&body);
        assert!(String::from_utf8_lossy(&result).contains("BT (raw) Tj ET"));
    }

    #[test]
    fn test_corrupt_payload_returned_unchanged() {
        let body = flate_body(b"\x00\x01garbage that is not deflate\xff");
        assert_eq!(&*decompress(&body), body.as_slice());
    }

    #[test]
    fn test_filter_without_stream_keyword() {
        let body = b"<< /Filter /FlateDecode >>";
        assert_eq!(&*decompress(body), body.as_slice());
    }
}
