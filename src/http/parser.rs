use crate::http::json::find;
use crate::http::request::RequestView;

const POST_MARKER: &[u8] = b"POST ";
const CONTENT_LENGTH_MARKER: &[u8] = b"Content-Length: ";
const HEADERS_END: &[u8] = b"\r\n\r\n";

/// Locates the method marker, declared length and body offset in `buf`.
///
/// Never fails: anything missing is simply absent from the returned view.
pub fn parse_http_request(buf: &[u8]) -> RequestView<'_> {
    let is_post = find(buf, POST_MARKER).is_some();

    let content_length = find(buf, CONTENT_LENGTH_MARKER)
        .map(|pos| parse_decimal(&buf[pos + CONTENT_LENGTH_MARKER.len()..]));

    let body_start = find_headers_end(buf).map(|pos| pos + HEADERS_END.len());

    RequestView {
        raw: buf,
        is_post,
        content_length,
        body_start,
    }
}

/// Whether the headers have ended and at least the declared number of body
/// bytes has arrived.
pub fn is_complete(buf: &[u8]) -> bool {
    let view = parse_http_request(buf);
    match view.body_start {
        Some(start) => buf.len() - start >= view.declared_length(),
        None => false,
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    find(buf, HEADERS_END)
}

// Leading whitespace, an optional `+`, then decimal digits. No digits yields
// 0; a value too large for `usize` saturates.
fn parse_decimal(buf: &[u8]) -> usize {
    let start = buf
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(buf.len());
    let rest = buf[start..].strip_prefix(b"+").unwrap_or(&buf[start..]);

    rest.iter()
        .take_while(|b| b.is_ascii_digit())
        .try_fold(0usize, |acc, &b| {
            acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
        })
        .unwrap_or(usize::MAX)
}
