use std::time::Duration;

use sentence_echo::config::{Config, DEFAULT_PORT, ReadMode};

#[test]
fn test_config_default_address() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.listen_addr.port(), DEFAULT_PORT);
}

#[test]
fn test_config_default_limits() {
    let cfg = Config::default();
    assert_eq!(cfg.backlog, 10);
    assert_eq!(cfg.max_connections, 1024);
    assert_eq!(cfg.io_timeout, None);
    assert_eq!(cfg.read_mode, ReadMode::SingleRead);
}

#[test]
fn test_config_overrides() {
    let cfg = Config::default()
        .with_listen_addr("127.0.0.1:0".parse().unwrap())
        .with_max_connections(4)
        .with_io_timeout(Duration::from_secs(2))
        .with_read_mode(ReadMode::UntilContentLength { max_body: 1024 });

    assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:0");
    assert_eq!(cfg.max_connections, 4);
    assert_eq!(cfg.io_timeout, Some(Duration::from_secs(2)));
    assert_eq!(cfg.read_mode, ReadMode::UntilContentLength { max_body: 1024 });
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default().with_max_connections(7);
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg2.max_connections, 7);
}
