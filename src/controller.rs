use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::actions::FormAction;
use crate::clients::{ItemClient, OrderClient};
use crate::form::{apply, begin, FormState, Outcome};

/// Turns one button press into at most one request and folds the result
/// back into the shared form.
///
/// The lock is never held while a request is in flight, so presses overlap
/// freely and whichever response lands last decides what the form shows.
#[derive(Clone)]
pub struct FormSyncClient {
    state: Arc<Mutex<FormState>>,
    orders: OrderClient,
    items: ItemClient,
}

impl FormSyncClient {
    pub fn new(orders: OrderClient, items: ItemClient) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            orders,
            items,
        }
    }

    pub async fn snapshot(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Applies a direct edit, such as a user typing into a field.
    pub async fn edit(&self, edit: impl FnOnce(&mut FormState)) {
        let mut state = self.state.lock().await;
        edit(&mut *state);
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, action: FormAction) -> FormState {
        let form = {
            let mut state = self.state.lock().await;
            *state = begin(std::mem::take(&mut *state), action);
            state.clone()
        };

        let outcome = self.execute(action, &form).await;
        match outcome.error() {
            Some(e) => warn!(error = %e, "Action failed"),
            None => info!("Action completed"),
        }

        let mut state = self.state.lock().await;
        *state = apply(std::mem::take(&mut *state), outcome);
        state.clone()
    }

    /// Fire-and-forget dispatch, the way a click handler runs.
    pub fn spawn(&self, action: FormAction) -> JoinHandle<FormState> {
        let this = self.clone();
        tokio::spawn(async move { this.dispatch(action).await })
    }

    async fn execute(&self, action: FormAction, form: &FormState) -> Outcome {
        let order = &form.order;
        let item = &form.item;

        match action {
            FormAction::CreateOrder => Outcome::OrderSaved(self.orders.create_order(order.to_create()).await),
            FormAction::UpdateOrder => {
                Outcome::OrderSaved(self.orders.update_order(&order.order_id, order.to_update()).await)
            }
            FormAction::RetrieveOrder => Outcome::OrderRetrieved(self.orders.get_order(&order.order_id).await),
            FormAction::DeleteOrder => Outcome::OrderDeleted(self.orders.delete_order(&order.order_id).await),
            FormAction::CancelOrder => Outcome::OrderCancelled(self.orders.cancel_order(&order.order_id).await),
            FormAction::ClearOrder => Outcome::OrderCleared,
            FormAction::ListOrders => Outcome::OrdersListed(self.orders.list_orders().await),
            FormAction::SearchOrders => match form.order_search.option {
                Some(kind) => Outcome::OrdersListed(self.orders.search_orders(kind, &form.order_search.query).await),
                None => Outcome::OrderQueryMissing,
            },
            FormAction::CreateItem => Outcome::ItemSaved(self.items.create_item(item.to_create()).await),
            FormAction::UpdateItem => Outcome::ItemSaved(self.items.update_item(item.to_update()).await),
            FormAction::RetrieveItem => {
                Outcome::ItemRetrieved(self.items.get_item(&item.item_order_id, &item.item_id).await)
            }
            FormAction::DeleteItem => {
                Outcome::ItemDeleted(self.items.delete_item(&item.item_order_id, &item.item_id).await)
            }
            FormAction::ClearItem => Outcome::ItemCleared,
            FormAction::ListItems => {
                let order_id = Some(form.item_search_order_id.as_str()).filter(|id| !id.is_empty());
                Outcome::ItemsListed(self.items.list_items(order_id).await)
            }
        }
    }
}
