//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use locale_gateway::config::GatewayConfig;
use locale_gateway::http::GatewayServer;
use locale_gateway::lifecycle::Shutdown;

/// Start a mock origin that answers every request with
/// `<request target>|<x-original-pathname or ->`.
pub async fn start_echo_origin() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let head = String::from_utf8_lossy(&buf[..n]).to_string();

                        let target = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("?")
                            .to_string();
                        let marker = head
                            .lines()
                            .find_map(|line| {
                                let (name, value) = line.split_once(':')?;
                                name.eq_ignore_ascii_case("x-original-pathname")
                                    .then(|| value.trim().to_string())
                            })
                            .unwrap_or_else(|| "-".to_string());

                        let body = format!("{target}|{marker}");
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a gateway in front of `upstream`. Returns its address.
pub async fn start_gateway(upstream: SocketAddr, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = GatewayConfig::default();
    config.listener.bind_address = addr.to_string();
    config.upstream.address = upstream.to_string();

    let server = GatewayServer::new(config);
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run_until(listener, &shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
