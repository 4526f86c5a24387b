//! # Mock Framework
//!
//! Utilities for testing clients and the controller without a network.
//!
//! Use [`create_mock_client`] to get a [`RestClient`] and the receiving end of
//! its channel, then [`expect_request`] to pop each request and script the reply.

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::clients::{ItemClient, OrderClient};
use crate::controller::FormSyncClient;
use crate::error::ApiError;
use crate::rest_framework::{ApiRequest, RestClient, TransportRequest};

pub type Responder = oneshot::Sender<Result<Value, ApiError>>;

/// Creates a client whose requests land on a receiver the test owns.
pub fn create_mock_client(buffer_size: usize) -> (RestClient, mpsc::Receiver<TransportRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RestClient::new(sender), receiver)
}

/// A controller wired to a single mock transport.
pub fn create_mock_controller(buffer_size: usize) -> (FormSyncClient, mpsc::Receiver<TransportRequest>) {
    let (client, receiver) = create_mock_client(buffer_size);
    let controller = FormSyncClient::new(OrderClient::new(client.clone()), ItemClient::new(client));
    (controller, receiver)
}

/// Waits for the next request and hands back the means to answer it.
pub async fn expect_request(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(ApiRequest, Responder)> {
    receiver
        .recv()
        .await
        .map(|TransportRequest { request, respond_to }| (request, respond_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.get::<Value>("/orders/1".to_string()).await });

        let (request, responder) = expect_request(&mut receiver).await.expect("Expected a request");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/orders/1");
        responder.send(Ok(json!({ "id": 1 }))).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Ok(json!({ "id": 1 })));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.delete("/orders/1".to_string()).await });

        let (_, responder) = expect_request(&mut receiver).await.expect("Expected a request");
        drop(responder);

        let result = task.await.unwrap();
        assert_eq!(result, Err(ApiError::ActorCommunicationError("Actor dropped".into())));
    }
}
