/// Sentence echoed back when none could be extracted from the request.
pub const PLACEHOLDER: &str = "No sentence received.";

/// HTTP status codes emitted by the server.
///
/// Every request is answered with `200 OK`, malformed ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use sentence_echo::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header, replacing the value of an existing one with the same
    /// name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Content-Length is always set to the exact body size.
    pub fn build(self) -> Response {
        let len = self.body.len();
        let builder = self.header("Content-Length", len.to_string());

        Response {
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// Builds the `{hostname, sentence}` reply.
    ///
    /// An absent or empty sentence is replaced with [`PLACEHOLDER`]. Neither
    /// value is escaped; both are embedded between literal quotes.
    pub fn sentence(hostname: &str, sentence: Option<&[u8]>) -> Self {
        let sentence = match sentence {
            Some(s) if !s.is_empty() => s,
            _ => PLACEHOLDER.as_bytes(),
        };

        let body = json_body(hostname, sentence);

        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .header("Content-Length", body.len().to_string())
            .header("Connection", "close")
            .body(body)
            .build()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

fn json_body(hostname: &str, sentence: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(32 + hostname.len() + sentence.len());
    body.extend_from_slice(b"{\"hostname\": \"");
    body.extend_from_slice(hostname.as_bytes());
    body.extend_from_slice(b"\", \"sentence\": \"");
    body.extend_from_slice(sentence);
    body.extend_from_slice(b"\"}");
    body
}
