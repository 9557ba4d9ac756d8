//! Canned-response HTTP fixture for exercising the client over real sockets.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Raw requests captured by the fixture, one head+body string per request.
pub type CapturedRequests = Arc<Mutex<Vec<String>>>;

/// Bind a listener that answers each connection with the next canned
/// response and records the raw request it received.
///
/// Every canned response should carry `Connection: close` so the client
/// opens a fresh connection per request.
pub async fn spawn_server(responses: Vec<String>) -> (SocketAddr, CapturedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured: CapturedRequests = Arc::new(Mutex::new(Vec::new()));

    let requests = captured.clone();
    tokio::spawn(async move {
        for response in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let (reader, mut writer) = socket.split();
            let mut reader = BufReader::new(reader);

            let mut raw = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                    break;
                }
                let header = line.trim_end().to_ascii_lowercase();
                if let Some(value) = header.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
                let blank = line.trim_end().is_empty();
                raw.push_str(&line);
                if blank {
                    break;
                }
            }
            if content_length > 0 {
                let mut body = vec![0u8; content_length];
                if reader.read_exact(&mut body).await.is_ok() {
                    raw.push_str(&String::from_utf8_lossy(&body));
                }
            }
            requests.lock().unwrap().push(raw);

            let _ = writer.write_all(response.as_bytes()).await;
            let _ = writer.flush().await;
        }
    });

    (addr, captured)
}

/// Format a canned HTTP response with a JSON body.
pub fn json_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}
