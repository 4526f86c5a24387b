use crate::actions::FormAction;
use crate::domain::{ItemRecord, OrderRecord};
use crate::error::{ApiError, SERVER_ERROR};

use super::{FormState, ResultsTable};

pub const SUCCESS: &str = "Success";
pub const ORDER_DELETED: &str = "Order has been Deleted!";
pub const ORDER_CANCELLED: &str = "Order has been CANCELLED!";
pub const ITEM_DELETED: &str = "Item has been Deleted!";
pub const SELECT_QUERY_TYPE: &str = "Please select one of the query type!";

/// The result of carrying out one [`FormAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Create or update of an order.
    OrderSaved(Result<OrderRecord, ApiError>),
    OrderRetrieved(Result<OrderRecord, ApiError>),
    OrderDeleted(Result<(), ApiError>),
    OrderCancelled(Result<(), ApiError>),
    /// List-all or search.
    OrdersListed(Result<Vec<OrderRecord>, ApiError>),
    /// Search pressed with no query option chosen; nothing was sent.
    OrderQueryMissing,
    OrderCleared,
    /// Create or update of an item.
    ItemSaved(Result<ItemRecord, ApiError>),
    ItemRetrieved(Result<ItemRecord, ApiError>),
    ItemDeleted(Result<(), ApiError>),
    ItemsListed(Result<Vec<ItemRecord>, ApiError>),
    ItemCleared,
}

impl Outcome {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Outcome::OrderSaved(Err(e))
            | Outcome::OrderRetrieved(Err(e))
            | Outcome::ItemSaved(Err(e))
            | Outcome::ItemRetrieved(Err(e)) => Some(e),
            Outcome::OrderDeleted(Err(e))
            | Outcome::OrderCancelled(Err(e))
            | Outcome::ItemDeleted(Err(e)) => Some(e),
            Outcome::OrdersListed(Err(e)) | Outcome::ItemsListed(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// State just before the action's request goes out: the flash of the
/// sub-form it targets is blanked.
pub fn begin(mut state: FormState, action: FormAction) -> FormState {
    if action.targets_items() {
        state.item.flash_message_item.clear();
    } else {
        state.order.flash_message.clear();
    }
    state
}

/// Folds an outcome into the view state.
pub fn apply(mut state: FormState, outcome: Outcome) -> FormState {
    let order = &mut state.order;
    let item = &mut state.item;

    match outcome {
        Outcome::OrderSaved(Ok(record)) | Outcome::OrderRetrieved(Ok(record)) => {
            order.fill(&record);
            order.flash_message = SUCCESS.to_string();
        }
        Outcome::OrderSaved(Err(e)) | Outcome::OrderCancelled(Err(e)) => {
            order.flash_message = e.flash_text();
        }
        Outcome::OrderRetrieved(Err(e)) => {
            order.clear_record();
            order.flash_message = e.flash_text();
        }
        Outcome::OrderDeleted(Ok(())) => {
            order.clear_record();
            order.flash_message = ORDER_DELETED.to_string();
        }
        Outcome::OrderDeleted(Err(_)) => {
            order.flash_message = SERVER_ERROR.to_string();
        }
        Outcome::OrderCancelled(Ok(())) => {
            order.clear_record();
            order.flash_message = ORDER_CANCELLED.to_string();
        }
        Outcome::OrdersListed(Ok(records)) => {
            state.order_results = ResultsTable::orders(&records);
            if let Some(first) = records.first() {
                order.fill(first);
            }
            order.flash_message = SUCCESS.to_string();
        }
        Outcome::OrdersListed(Err(e)) => {
            order.flash_message = e.flash_text();
        }
        Outcome::OrderQueryMissing => {
            order.flash_message = SELECT_QUERY_TYPE.to_string();
        }
        Outcome::OrderCleared => {
            order.clear_record();
            order.flash_message.clear();
        }
        Outcome::ItemSaved(Ok(record)) | Outcome::ItemRetrieved(Ok(record)) => {
            item.fill(&record);
            item.flash_message_item = SUCCESS.to_string();
        }
        Outcome::ItemSaved(Err(e)) => {
            item.flash_message_item = e.flash_text();
        }
        Outcome::ItemRetrieved(Err(e)) => {
            item.clear_record();
            item.flash_message_item = e.flash_text();
        }
        Outcome::ItemDeleted(Ok(())) => {
            item.clear_record();
            item.flash_message_item = ITEM_DELETED.to_string();
        }
        Outcome::ItemDeleted(Err(_)) => {
            item.flash_message_item = SERVER_ERROR.to_string();
        }
        Outcome::ItemsListed(Ok(records)) => {
            state.item_results = ResultsTable::items(&records);
            if let Some(first) = records.first() {
                item.fill(first);
            }
            item.flash_message_item = SUCCESS.to_string();
        }
        Outcome::ItemsListed(Err(e)) => {
            item.flash_message_item = e.flash_text();
        }
        Outcome::ItemCleared => {
            item.clear_record();
            item.flash_message_item.clear();
        }
    }

    state
}
