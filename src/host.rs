use std::fmt;
use std::sync::Arc;

use anyhow::Context;

/// Machine hostname, resolved once at startup and shared read-only by every
/// connection handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(Arc<str>);

impl Hostname {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Looks up the system hostname.
    pub fn from_system() -> anyhow::Result<Self> {
        let name = ::hostname::get()
            .context("failed to read system hostname")?
            .into_string()
            .map_err(|raw| anyhow::anyhow!("hostname is not valid UTF-8: {:?}", raw))?;
        Ok(Self::new(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
