//! End-to-end tests of the fetch path against a local mock HTTP server.

use profitpoke::domain::criteria::{FilterCriteria, PriceRange, RiskLevel, TimeHorizon};
use profitpoke::domain::errors::ApiError;
use profitpoke::domain::ports::RecommendationSource;
use profitpoke::infrastructure::api::RecommendationApi;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Accepts exactly one connection, captures the raw request, and answers
/// 200 OK with the given JSON body.
async fn serve_once(response_body: &'static str) -> (u16, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (raw_tx, raw_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 4096];

        // Read headers.
        let headers_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed connection before sending a request");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let header_text = String::from_utf8_lossy(&buf[..headers_end]).to_lowercase();
        let content_length: usize = header_text
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);

        // Read the rest of the body.
        while buf.len() < headers_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed connection mid-body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let _ = raw_tx.send(String::from_utf8_lossy(&buf).to_string());

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    (port, raw_rx)
}

fn request_body(raw: &str) -> serde_json::Value {
    let body = raw.split("\r\n\r\n").nth(1).expect("request had no body");
    serde_json::from_str(body).expect("request body was not JSON")
}

#[tokio::test]
async fn test_submit_sends_selected_filters() {
    let (port, raw_rx) = serve_once(r#"{"stocks": [], "messages": []}"#).await;

    let api = RecommendationApi::new(&format!("http://127.0.0.1:{}", port), "csrf-abc".to_string());
    let criteria = FilterCriteria {
        price_range: PriceRange::From200To500,
        time_horizon: TimeHorizon::LongTerm,
        risk_level: RiskLevel::High,
    };
    api.fetch(&criteria).await.unwrap();

    let raw = raw_rx.await.unwrap();

    // Exactly the page-origin POST the server expects.
    assert!(raw.starts_with("POST / HTTP/1.1\r\n"));
    let headers = raw.to_lowercase();
    assert!(headers.contains("content-type: application/json"));
    assert!(headers.contains("x-requested-with: xmlhttprequest"));

    let body = request_body(&raw);
    assert_eq!(body["csrf_token"], "csrf-abc");
    assert_eq!(body["price_range"], "200-500");
    assert_eq!(body["time_horizon"], "long-term");
    assert_eq!(body["risk_level"], "high");
}

#[tokio::test]
async fn test_stocks_response_is_parsed() {
    let (port, _raw_rx) = serve_once(
        r#"{"stocks": [
            {"symbol": "TCS.NS", "name": "Tata Consultancy", "price": 3501.5, "reason": "IT sector strength"},
            {"symbol": "INFY.NS", "name": "Infosys", "price": 1450.0, "reason": "Strong orderbook"}
        ], "messages": [], "request_id": "r-42"}"#,
    )
    .await;

    let api = RecommendationApi::new(&format!("http://127.0.0.1:{}", port), "tok".to_string());
    let result = api.fetch(&FilterCriteria::default()).await.unwrap();

    assert_eq!(result.stocks.len(), 2);
    assert_eq!(result.stocks[0].symbol, "TCS.NS");
    assert_eq!(result.stocks[1].price, 1450.0);
    assert!(result.messages.is_empty());
    assert_eq!(result.request_id.as_deref(), Some("r-42"));
}

#[tokio::test]
async fn test_validation_messages_are_parsed() {
    let (port, _raw_rx) =
        serve_once(r#"{"messages": ["Error in Price Range (INR): This field is required."]}"#).await;

    let api = RecommendationApi::new(&format!("http://127.0.0.1:{}", port), "tok".to_string());
    let result = api.fetch(&FilterCriteria::default()).await.unwrap();

    assert_eq!(result.messages.len(), 1);
    assert!(result.stocks.is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and immediately drop to get a port nobody is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let api = RecommendationApi::new(&format!("http://127.0.0.1:{}", port), "tok".to_string());
    match api.fetch(&FilterCriteria::default()).await {
        Err(ApiError::Transport { .. }) => {}
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_body_error() {
    let (port, _raw_rx) = serve_once("<html>gateway timeout</html>").await;

    let api = RecommendationApi::new(&format!("http://127.0.0.1:{}", port), "tok".to_string());
    match api.fetch(&FilterCriteria::default()).await {
        Err(ApiError::InvalidBody { .. }) => {}
        other => panic!("expected invalid body error, got {:?}", other),
    }
}
