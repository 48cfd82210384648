//! Sentence Echo - a small concurrent HTTP service
//!
//! Accepts `POST` requests with a JSON body, pulls out the `sentence` field
//! and answers with `{"hostname": ..., "sentence": ...}`.

pub mod config;
pub mod host;
pub mod http;
pub mod server;
