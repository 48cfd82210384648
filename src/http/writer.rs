use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;
use crate::http::with_timeout;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Size the serialized response is expected to fit in.
pub const MAX_RESPONSE_SIZE: usize = 4096;

pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    buf.put_slice(
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        )
        .as_bytes(),
    );

    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        let buffer = serialize_response(response);
        if buffer.len() > MAX_RESPONSE_SIZE {
            tracing::warn!(
                bytes = buffer.len(),
                limit = MAX_RESPONSE_SIZE,
                "Response exceeds buffer size"
            );
        }
        Self { buffer }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Issues a single write. A short write is not retried; the number of
    /// bytes actually accepted is returned.
    pub async fn write_once<S>(&self, stream: &mut S, timeout: Option<Duration>) -> anyhow::Result<usize>
    where
        S: AsyncWrite + Unpin,
    {
        let n = with_timeout(timeout, stream.write(&self.buffer)).await?;

        if n < self.buffer.len() {
            tracing::warn!(
                written = n,
                expected = self.buffer.len(),
                "Partial response write"
            );
        }

        Ok(n)
    }
}
