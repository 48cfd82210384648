use anyhow::Context;
use sentence_echo::config::Config;
use sentence_echo::host::Hostname;
use sentence_echo::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let hostname = Hostname::from_system().context("cannot start without a hostname")?;
    let cfg = Config::default();

    tokio::select! {
        res = server::listener::run(&cfg, hostname) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
