use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::host::Hostname;
use crate::http::connection::Connection;

/// Binds the listening socket described by `cfg`.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let socket = match cfg.listen_addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    };
    let socket = socket.context("failed to create server socket")?;

    socket
        .set_reuseaddr(true)
        .context("failed to set SO_REUSEADDR on server socket")?;
    socket
        .bind(cfg.listen_addr)
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;

    socket
        .listen(cfg.backlog)
        .with_context(|| format!("failed to listen on {}", cfg.listen_addr))
}

/// Accept loop. Never returns under normal operation.
///
/// Each accepted connection gets its own detached task. Spawning is gated by
/// a semaphore of `cfg.max_connections` permits. While all are taken, the
/// most recently accepted client holds its socket waiting for a permit and
/// later clients queue in the kernel backlog.
///
/// Fails immediately if `cfg.max_connections` is 0 or exceeds
/// [`Semaphore::MAX_PERMITS`].
pub async fn serve(listener: TcpListener, hostname: Hostname, cfg: Config) -> anyhow::Result<()> {
    if cfg.max_connections == 0 || cfg.max_connections > Semaphore::MAX_PERMITS {
        anyhow::bail!(
            "max_connections must be between 1 and {}, got {}",
            Semaphore::MAX_PERMITS,
            cfg.max_connections
        );
    }
    let permits = Arc::new(Semaphore::new(cfg.max_connections));

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Accept failed");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let permit = match permits.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => {
                warn!(%peer, error = %e, "Could not admit connection, dropping it");
                continue;
            }
        };

        let hostname = hostname.clone();
        let cfg = cfg.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, hostname, &cfg);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
            debug!(%peer, "Connection closed");
        });
    }
}

/// Binds according to `cfg` and runs the accept loop.
pub async fn run(cfg: &Config, hostname: Hostname) -> anyhow::Result<()> {
    let listener = bind(cfg)?;
    info!(hostname = %hostname, "Listening on {}", listener.local_addr()?);

    serve(listener, hostname, cfg.clone()).await
}
