//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use commvault_backup::config::ControllerConfig;

/// Status code telling the mock server to drop the connection unanswered.
pub const DROP_CONNECTION: u16 = 0;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl MockRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub type RequestLog = Arc<Mutex<Vec<MockRequest>>>;

/// Requests recorded so far whose path starts with `prefix`.
#[allow(dead_code)]
pub fn requests_to(log: &RequestLog, prefix: &str) -> Vec<MockRequest> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|r| r.path.starts_with(prefix))
        .cloned()
        .collect()
}

/// Start a programmable mock API on an ephemeral port.
///
/// `handler` maps each request to `(status, body)`.
pub async fn start_api_server<F>(handler: F) -> (SocketAddr, RequestLog)
where
    F: Fn(&MockRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let server_log = log.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    let log = server_log.clone();
                    tokio::spawn(async move {
                        serve_connection(socket, handler.as_ref(), &log).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

async fn serve_connection<F>(mut socket: TcpStream, handler: &F, log: &RequestLog)
where
    F: Fn(&MockRequest) -> (u16, String),
{
    let request = match read_request(&mut socket).await {
        Some(request) => request,
        None => return,
    };
    log.lock().unwrap().push(request.clone());

    let (status, body) = handler(&request);
    if status == DROP_CONNECTION {
        drop(socket);
        return;
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> Option<MockRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Some(MockRequest {
        method,
        path,
        authorization,
        body,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Plain-HTTP config pointing at the mock server.
pub fn config_for(addr: SocketAddr, check_interval_secs: u64, timeout_secs: u64) -> ControllerConfig {
    let mut config = ControllerConfig::default();
    config.server.host = addr.ip().to_string();
    config.server.port = addr.port();
    config.server.use_ssl = false;
    config.server.request_timeout_secs = 5;
    config.job.client = "SERVER01".into();
    config.job.backup_set = "DefaultBackupSet".into();
    config.polling.check_interval_secs = check_interval_secs;
    config.polling.timeout_secs = timeout_secs;
    config
}

pub fn login_ok() -> (u16, String) {
    (200, r#"{"isAuthenticated": true, "token": "test-token"}"#.into())
}
