use bytes::Bytes;

/// Bytes received from a client for a single request.
///
/// The buffer is treated as terminated at the first NUL byte, so anything
/// after an embedded NUL is never inspected by the framer or the extractor.
#[derive(Debug, Clone)]
pub struct RawRequest {
    data: Bytes,
}

/// Borrowed view of the structural markers found in a [`RawRequest`].
///
/// Built by [`crate::http::parser::parse_http_request`]. Nothing here is
/// validated against the actual body length: the declared Content-Length is
/// informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestView<'a> {
    pub(crate) raw: &'a [u8],
    /// `POST ` appears somewhere in the buffer.
    pub is_post: bool,
    /// Value following `Content-Length: `. `Some(0)` when the header is
    /// present but carries no digits.
    pub content_length: Option<usize>,
    /// Offset just past the first `\r\n\r\n`.
    pub body_start: Option<usize>,
}

impl RawRequest {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Received bytes up to (not including) the first NUL.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .data
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.data.len());
        &self.data[..end]
    }

    /// Number of bytes actually received, NULs included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'a> RequestView<'a> {
    /// Declared body length, 0 when absent or malformed.
    pub fn declared_length(&self) -> usize {
        self.content_length.unwrap_or(0)
    }

    /// Body bytes eligible for field extraction.
    ///
    /// Returns `None` unless the request carries a POST marker, a
    /// Content-Length header with a non-zero value and a header terminator.
    /// The slice runs to the end of the received bytes regardless of the
    /// declared length.
    pub fn body(&self) -> Option<&'a [u8]> {
        if !self.is_post || self.declared_length() == 0 {
            return None;
        }
        self.body_start.map(|start| &self.raw[start..])
    }
}
