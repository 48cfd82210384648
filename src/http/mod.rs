//! HTTP protocol handling for the sentence echo service.
//!
//! Requests are framed by literal byte scans rather than a full HTTP parser,
//! and every connection serves exactly one request.
//!
//! - **`connection`**: the per-connection state machine
//! - **`parser`**: locates the POST marker, Content-Length and body offset
//! - **`request`**: received bytes and the borrowed view over them
//! - **`json`**: literal extraction of one string field from the body
//! - **`response`**: the `{hostname, sentence}` reply
//! - **`writer`**: serializes a response and writes it to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read (or until Content-Length, if enabled)
//!        └──────┬──────┘
//!               │ Bytes received          (empty read / error → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsing       │ ← Framer, then extractor
//!        └──────┬───────────┘
//!               │ Response built
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Single write, failures only logged
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

use std::future::Future;
use std::time::Duration;

use anyhow::Context;

pub mod connection;
pub mod json;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

pub(crate) async fn with_timeout<F, T>(limit: Option<Duration>, fut: F) -> anyhow::Result<T>
where
    F: Future<Output = std::io::Result<T>>,
{
    match limit {
        Some(d) => Ok(tokio::time::timeout(d, fut)
            .await
            .context("connection timed out")??),
        None => Ok(fut.await?),
    }
}
