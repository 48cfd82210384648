use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::config::{Config, ReadMode};
use crate::host::Hostname;
use crate::http::json::extract_string_field;
use crate::http::parser::{is_complete, parse_http_request};
use crate::http::request::RawRequest;
use crate::http::response::Response;
use crate::http::with_timeout;
use crate::http::writer::ResponseWriter;

/// Capacity of the receive buffer. One byte is reserved, so a single read
/// takes at most `BUFFER_SIZE - 1` bytes.
pub const BUFFER_SIZE: usize = 4096;

/// JSON key echoed back to the client.
pub const SENTENCE_KEY: &str = "sentence";

/// Serves exactly one request on `stream`, then closes it.
pub struct Connection<S> {
    stream: S,
    hostname: Hostname,
    read_mode: ReadMode,
    io_timeout: Option<Duration>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsing(RawRequest),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, hostname: Hostname, cfg: &Config) -> Self {
        Self {
            stream,
            hostname,
            read_mode: cfg.read_mode,
            io_timeout: cfg.io_timeout,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// Read failures drop the connection without a response and are returned
    /// to the caller. Write failures are logged and the connection is closed
    /// anyway.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(raw) => ConnectionState::Parsing(raw),
                        None => {
                            debug!("Client sent no data");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Parsing(raw) => {
                    let response = self.handle_request(&raw);
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(writer) => {
                    match writer.write_once(&mut self.stream, self.io_timeout).await {
                        Ok(n) => debug!(
                            bytes = n,
                            response = %String::from_utf8_lossy(writer.as_bytes()),
                            "Response sent"
                        ),
                        Err(e) => warn!(error = %e, "Failed to send response"),
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    if let Err(e) = self.stream.shutdown().await {
                        debug!(error = %e, "Shutdown after response failed");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request according to the configured [`ReadMode`].
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<RawRequest>> {
        let limit = match self.read_mode {
            ReadMode::SingleRead => BUFFER_SIZE - 1,
            ReadMode::UntilContentLength { max_body } => (BUFFER_SIZE - 1).saturating_add(max_body),
        };
        let mut buf = BytesMut::with_capacity(BUFFER_SIZE);

        let n = self.read_chunk(&mut buf, limit).await?;
        if n == 0 {
            return Ok(None);
        }

        // Only the opt-in mode loops; the default keeps whatever one read
        // delivered, even if the declared body is longer.
        if let ReadMode::UntilContentLength { .. } = self.read_mode {
            while !is_complete(&buf) && buf.len() < limit {
                if self.read_chunk(&mut buf, limit).await? == 0 {
                    break;
                }
            }
        }

        debug!(
            bytes = buf.len(),
            request = %String::from_utf8_lossy(&buf),
            "Received request"
        );

        Ok(Some(RawRequest::new(buf.freeze())))
    }

    async fn read_chunk(&mut self, buf: &mut BytesMut, limit: usize) -> anyhow::Result<usize> {
        let start = buf.len();
        let want = limit.saturating_sub(start);
        if want == 0 {
            return Ok(0);
        }

        buf.resize(start + want, 0);
        let result = with_timeout(self.io_timeout, self.stream.read(&mut buf[start..])).await;
        let n = match result {
            Ok(n) => n,
            Err(e) => {
                buf.truncate(start);
                return Err(e);
            }
        };
        buf.truncate(start + n);

        Ok(n)
    }

    fn handle_request(&self, raw: &RawRequest) -> Response {
        let sentence = extract_sentence(raw);
        Response::sentence(self.hostname.as_str(), sentence)
    }
}

/// Runs the framer and extractor over `raw`, logging why nothing was found.
pub fn extract_sentence(raw: &RawRequest) -> Option<&[u8]> {
    let view = parse_http_request(raw.as_bytes());

    let Some(body) = view.body() else {
        debug!("Not a POST request with Content-Length and body");
        return None;
    };

    match extract_string_field(body, SENTENCE_KEY) {
        Ok(sentence) => {
            debug!(sentence = %String::from_utf8_lossy(sentence), "Extracted sentence");
            Some(sentence)
        }
        Err(e) => {
            debug!(reason = ?e, "Could not extract sentence from body");
            None
        }
    }
}
