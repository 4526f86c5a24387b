use tracing::{debug, instrument};

use crate::domain::{ItemCreate, ItemRecord, ItemUpdate};
use crate::error::ApiError;
use crate::rest_framework::RestClient;

/// Client for the `/orders/{order_id}/items` sub-resource.
#[derive(Clone)]
pub struct ItemClient {
    inner: RestClient,
}

impl_basic_client!(ItemClient, ItemRecord, item, item_path(order_id, item_id));

impl ItemClient {
    fn items_path(order_id: &str) -> String {
        format!("/orders/{order_id}/items")
    }

    fn item_path(order_id: &str, item_id: &str) -> String {
        format!("{}/{item_id}", Self::items_path(order_id))
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, item: ItemCreate) -> Result<ItemRecord, ApiError> {
        debug!("Sending request");
        let path = Self::items_path(&item.order_id);
        self.inner.post(path, &item).await
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, item: ItemUpdate) -> Result<ItemRecord, ApiError> {
        debug!("Sending request");
        let path = Self::item_path(&item.order_id, &item.id);
        self.inner.put(path, &item).await
    }

    /// Lists the items of one order, or every item when `order_id` is `None`.
    #[instrument(skip(self))]
    pub async fn list_items(&self, order_id: Option<&str>) -> Result<Vec<ItemRecord>, ApiError> {
        debug!("Sending request");
        let path = match order_id {
            Some(order_id) => format!("/api{}", Self::items_path(order_id)),
            None => "/api/items".to_string(),
        };
        self.inner.get(path).await
    }
}
