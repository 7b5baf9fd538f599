//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;

use checkmate_ui::config::UiConfig;
use checkmate_ui::{HttpServer, Shutdown};

/// Analysis document for `raw`, decomposed as `www.api.example.com/v1/status?id=5`.
pub fn analysis_json(raw: &str) -> String {
    serde_json::json!({
        "meta": {"isValid": true, "isPublic": true, "isIPv4": false},
        "links": {"raw": raw},
        "attributes": {
            "scheme": "http",
            "subDomains": ["www", "api"],
            "rootDomain": "example.com",
            "path": "/v1/status",
            "query": "id=5"
        },
        "relationships": {
            "detections": {
                "data": [
                    {"type": "detection", "attributes": {"source": "url_haus", "reason": "malicious"}}
                ]
            }
        }
    })
    .to_string()
}

/// Start a mock analyzer. `f` gets the `url` query parameter and returns
/// the status code and body to send back.
pub async fn start_mock_analyzer<F>(f: F) -> SocketAddr
where
    F: Fn(String) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        handle_connection(socket, f).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn handle_connection<F>(mut socket: TcpStream, f: Arc<F>)
where
    F: Fn(String) -> (u16, String),
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head.split_whitespace().nth(1).unwrap_or("/");
    let parsed = url::Url::parse(&format!("http://mock{}", target)).unwrap();
    let requested = parsed
        .query_pairs()
        .find(|(k, _)| k == "url")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default();

    let (status, body) = f(requested);
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");
    let status_text = format!("{} {}", status, reason);

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Config pointing at a mock analyzer.
pub fn config_for(analyzer: SocketAddr) -> UiConfig {
    let mut config = UiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.analyzer.base_url = format!("http://{}", analyzer);
    config.analyzer.timeout_secs = 5;
    config
}

/// A running UI server.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

pub async fn start_server(config: UiConfig) -> TestServer {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown: broadcast::Receiver<()> = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown, handle }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
