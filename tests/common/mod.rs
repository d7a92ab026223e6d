//! Shared utilities for integration tests.
//!
//! Mock backends speak raw HTTP/1.1 over Tokio sockets so that tests can
//! produce failures a real server never would (truncated bodies, silence).

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

use ping_relay::observability::{EventKind, LogEvent, MemorySink};
use ping_relay::{RelayConfig, RelayServer, Shutdown, TargetServer};

/// Read until the end of the request head so closing the socket sends FIN, not RST.
async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") && head.len() < 16 * 1024 {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// A mock backend that records the head of every request it receives.
#[allow(dead_code)]
pub struct MockBackend {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/log", self.addr)).unwrap()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Start a mock backend that answers every request with `status_line` and `body`.
#[allow(dead_code)]
pub async fn start_programmable_backend(status_line: &'static str, body: &'static str) -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let head = read_request_head(&mut socket).await;
                recorded.lock().unwrap().push(head);

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend that promises 100 bytes, sends 7, then closes.
#[allow(dead_code)]
pub async fn start_truncated_backend() -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let head = read_request_head(&mut socket).await;
                recorded.lock().unwrap().push(head);

                let headers = "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n";
                let _ = socket.write_all(headers.as_bytes()).await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_millis(50)).await;
                let _ = socket.write_all(b"partial").await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend that promises 100 bytes, sends 3, then goes quiet.
#[allow(dead_code)]
pub async fn start_stalled_body_backend() -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let head = read_request_head(&mut socket).await;
                recorded.lock().unwrap().push(head);

                let response = "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nabc";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            });
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend that accepts connections and never answers.
#[allow(dead_code)]
pub async fn start_silent_backend() -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let head = read_request_head(&mut socket).await;
                recorded.lock().unwrap().push(head);
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            });
        }
    });

    MockBackend { addr, requests }
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/log", addr)).unwrap()
}

/// A node running on an ephemeral loopback port. Dropping it stops the server.
#[allow(dead_code)]
pub struct RunningNode {
    pub addr: SocketAddr,
    pub events: MemorySink,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl RunningNode {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn events_of(&self, kind: EventKind) -> Vec<LogEvent> {
        self.events
            .events()
            .into_iter()
            .filter(|e| e.event == kind)
            .collect()
    }

    /// Events recording the outcome of a relayed ping, in order.
    pub fn ping_outcomes(&self) -> Vec<LogEvent> {
        self.events
            .events()
            .into_iter()
            .filter(|e| e.event.is_ping_outcome())
            .collect()
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

#[allow(dead_code)]
pub async fn start_relay(target_url: Url, service: &str, timeout: Duration) -> RunningNode {
    let mut config = RelayConfig::new(target_url, service);
    config.outbound_timeout = timeout;

    let events = MemorySink::new();
    let server = RelayServer::new(config, Arc::new(events.clone())).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningNode { addr, events, shutdown }
}

#[allow(dead_code)]
pub async fn start_target() -> RunningNode {
    let events = MemorySink::new();
    let server = TargetServer::new(Arc::new(events.clone()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningNode { addr, events, shutdown }
}

/// Client that bypasses any proxy configured in the environment.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
