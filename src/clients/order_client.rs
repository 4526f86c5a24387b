use tracing::{debug, instrument};

use crate::domain::{OrderCreate, OrderQueryKind, OrderRecord, OrderUpdate};
use crate::error::ApiError;
use crate::rest_framework::RestClient;

/// Client for the `/orders` resource.
#[derive(Clone)]
pub struct OrderClient {
    inner: RestClient,
}

impl_basic_client!(OrderClient, OrderRecord, order, order_path(id));

impl OrderClient {
    fn order_path(id: &str) -> String {
        format!("/orders/{id}")
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderRecord, ApiError> {
        debug!("Sending request");
        self.inner.post("/orders".to_string(), &order).await
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: &str, order: OrderUpdate) -> Result<OrderRecord, ApiError> {
        debug!("Sending request");
        self.inner.put(Self::order_path(id), &order).await
    }

    /// Asks the service to cancel the order. The returned body is not used.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: &str) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner
            .put_empty(format!("{}/cancel", Self::order_path(id)))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        debug!("Sending request");
        self.inner.get("/api/orders".to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn search_orders(&self, kind: OrderQueryKind, value: &str) -> Result<Vec<OrderRecord>, ApiError> {
        debug!("Sending request");
        self.inner
            .get_query("/orders".to_string(), kind.param(), value)
            .await
    }
}
