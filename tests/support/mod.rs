//! テスト用の簡易HTTPサーバ
//!
//! 1リクエストだけ受け付けて固定レスポンスを返し、受信した生リクエストを返す。

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const SAMPLE_BODY: &str = r#"{"emocion_detectada":"Alegría","confianza":0.87,"analisis_detallado":{"Alegría":0.87,"Tristeza":0.05,"Miedo":0.08}}"#;

pub async fn spawn_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.expect("write failed");
        let _ = stream.shutdown().await;

        request
    });

    (format!("http://{}", addr), handle)
}

/// 誰も待ち受けていないアドレス
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{}", addr)
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let body_len = buf.len() - (header_end + 4);

            match content_length(&headers) {
                Some(len) if body_len >= len => break,
                Some(_) => continue,
                None if find(&buf[header_end..], b"0\r\n\r\n").is_some() => break,
                None => continue,
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn content_length(headers: &str) -> Option<usize> {
    headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
