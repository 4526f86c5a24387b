use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, Instrument};

use crate::error::ApiError;

// =============================================================================
// 1. THE REQUEST
// =============================================================================

/// One HTTP call against the orders service, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

// =============================================================================
// 2. THE MESSAGE
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, ApiError>>;

#[derive(Debug)]
pub struct TransportRequest {
    pub request: ApiRequest,
    pub respond_to: Response<Value>,
}

// =============================================================================
// 3. THE HTTP ACTOR
// =============================================================================

/// Owns the HTTP connection pool and executes requests handed to it by
/// [`RestClient`]s.
///
/// Every request runs in its own task, so a slow response never holds up a
/// later one and responses are delivered in whatever order they arrive.
pub struct HttpActor {
    receiver: mpsc::Receiver<TransportRequest>,
    http: reqwest::Client,
    base_url: String,
}

impl HttpActor {
    pub fn new(buffer_size: usize, base_url: impl Into<String>) -> (Self, RestClient) {
        Self::with_client(buffer_size, base_url, reqwest::Client::new())
    }

    pub fn with_client(
        buffer_size: usize,
        base_url: impl Into<String>,
        http: reqwest::Client,
    ) -> (Self, RestClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            http,
            base_url: base_url.into(),
        };
        (actor, RestClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(base_url = %self.base_url, "HttpActor starting");
        while let Some(TransportRequest { request, respond_to }) = self.receiver.recv().await {
            let http = self.http.clone();
            let url = join_url(&self.base_url, &request.path);
            let span = tracing::info_span!("http_request", method = %request.method, path = %request.path);

            tokio::spawn(
                async move {
                    let result = execute(&http, &url, request).await;
                    if let Err(e) = &result {
                        debug!(error = %e, "Request failed");
                    }
                    let _ = respond_to.send(result);
                }
                .instrument(span),
            );
        }
        info!("HttpActor stopped");
    }
}

async fn execute(http: &reqwest::Client, url: &str, request: ApiRequest) -> Result<Value, ApiError> {
    let mut builder = http
        .request(request.method, url)
        .header(CONTENT_TYPE, "application/json");
    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    debug!(status = status.as_u16(), len = bytes.len(), "Response received");
    decode_response(status, &bytes)
}

/// Turns a raw HTTP response into the JSON body or an [`ApiError`].
///
/// A successful response with an empty body (e.g. `204 No Content`) is `null`.
/// For error statuses the body's `message` string, when present, is kept.
pub(crate) fn decode_response(status: StatusCode, body: &[u8]) -> Result<Value, ApiError> {
    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = serde_json::from_slice::<Value>(body).ok().and_then(|value| {
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
    });
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

// =============================================================================
// 4. THE CLIENT HANDLE
// =============================================================================

#[derive(Clone)]
pub struct RestClient {
    sender: mpsc::Sender<TransportRequest>,
}

impl RestClient {
    pub fn new(sender: mpsc::Sender<TransportRequest>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TransportRequest { request, respond_to })
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    pub async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, ApiError> {
        decode(self.send(ApiRequest::new(Method::GET, path)).await?)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: String,
        key: &str,
        value: &str,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::GET, path).with_query(key, value);
        decode(self.send(request).await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: String, body: &B) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::POST, path).with_body(encode(body)?);
        decode(self.send(request).await?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: String, body: &B) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::PUT, path).with_body(encode(body)?);
        decode(self.send(request).await?)
    }

    /// `PUT` without a body; the response body is handed back undecoded.
    pub async fn put_empty(&self, path: String) -> Result<Value, ApiError> {
        self.send(ApiRequest::new(Method::PUT, path)).await
    }

    pub async fn delete(&self, path: String) -> Result<(), ApiError> {
        self.send(ApiRequest::new(Method::DELETE, path)).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// 5. TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(decode_response(StatusCode::NO_CONTENT, b""), Ok(Value::Null));
    }

    #[test]
    fn error_body_message_is_kept() {
        let result = decode_response(StatusCode::NOT_FOUND, br#"{"message": "Order 99 not found"}"#);
        assert_eq!(
            result,
            Err(ApiError::Server { status: 404, message: Some("Order 99 not found".into()) })
        );
    }

    #[test]
    fn error_body_without_json_has_no_message() {
        let result = decode_response(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(result, Err(ApiError::Server { status: 500, message: None }));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        assert!(matches!(
            decode_response(StatusCode::OK, b"{not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn join_url_tolerates_trailing_slash() {
        assert_eq!(join_url("http://localhost:8080/", "/orders/7"), "http://localhost:8080/orders/7");
        assert_eq!(join_url("http://localhost:8080", "/api/items"), "http://localhost:8080/api/items");
    }

    #[tokio::test]
    async fn test_http_actor_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let body = r#"{"message": "Order 99 not found"}"#;
            let reply = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });

        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let (actor, client) = HttpActor::with_client(4, format!("http://{}", addr), http);
        tokio::spawn(actor.run());

        let result = client.get::<Value>("/orders/99".to_string()).await;
        assert_eq!(
            result,
            Err(ApiError::Server { status: 404, message: Some("Order 99 not found".into()) })
        );

        let raw_request = server.await.unwrap();
        assert!(raw_request.starts_with("GET /orders/99 HTTP/1.1"));
        assert!(raw_request.to_ascii_lowercase().contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let client = RestClient::new(sender);

        let result = client.send(ApiRequest::new(Method::GET, "/orders/1")).await;
        assert_eq!(result, Err(ApiError::ActorCommunicationError("Actor closed".into())));
    }

    #[test]
    fn request_builder_collects_query_and_body() {
        let request = ApiRequest::new(Method::GET, "/orders")
            .with_query("status", "PAID")
            .with_body(json!({}));
        assert_eq!(request.query, vec![("status".to_string(), "PAID".to_string())]);
        assert_eq!(request.body, Some(json!({})));
    }
}
