//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use network_multitool::config::MultitoolConfig;
use network_multitool::{HttpServer, Shutdown};

/// Start a multitool server on an ephemeral port.
///
/// The listener is bound before the task is spawned, so callers can
/// connect immediately. Returns the bound address and the shutdown
/// coordinator that stops the server.
pub async fn start_server(mut config: MultitoolConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).expect("relay client should build");

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client without proxy or connection pooling surprises.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a raw-TCP mock upstream returning a fixed response.
///
/// Pass an empty `content_type` to omit the Content-Type header.
#[allow(dead_code)]
pub async fn start_mock_upstream(
    status: u16,
    content_type: &'static str,
    body: &'static [u8],
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Drain the request head before replying.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            404 => "404 Not Found",
                            418 => "418 I'm a teapot",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let mut head = format!("HTTP/1.1 {status_text}\r\n");
                        if !content_type.is_empty() {
                            head.push_str(&format!("Content-Type: {content_type}\r\n"));
                        }
                        head.push_str(&format!(
                            "Content-Length: {}\r\nConnection: close\r\n\r\n",
                            body.len()
                        ));

                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.write_all(body).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
