use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// How much of a request the handler reads before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Exactly one read of up to [`crate::http::connection::BUFFER_SIZE`] - 1
    /// bytes. A body arriving in a later packet is never seen.
    SingleRead,
    /// Keep reading until the declared Content-Length has arrived, the peer
    /// stops sending, or `max_body` bytes past the header buffer are held.
    UntilContentLength { max_body: usize },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub backlog: u32,
    /// Upper bound on concurrently running connection handlers.
    pub max_connections: usize,
    /// Applies to each read and write; `None` waits forever.
    pub io_timeout: Option<Duration>,
    pub read_mode: ReadMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            backlog: 10,
            max_connections: 1024,
            io_timeout: None,
            read_mode: ReadMode::SingleRead,
        }
    }
}

impl Config {
    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = Some(timeout);
        self
    }

    pub fn with_read_mode(mut self, mode: ReadMode) -> Self {
        self.read_mode = mode;
        self
    }
}
