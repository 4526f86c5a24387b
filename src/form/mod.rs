//! The view state of the order page and the pure functions that update it.
//!
//! Nothing in here performs I/O. The controller feeds request outcomes in
//! and gets the next state back.

mod item_form;
mod order_form;
mod table;
pub mod update;

pub use item_form::ItemForm;
pub use order_form::OrderForm;
pub use table::ResultsTable;
pub use update::{apply, begin, Outcome};

use crate::domain::OrderQueryKind;

/// The order search controls: a radio choice and a query text box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSearch {
    pub option: Option<OrderQueryKind>,
    pub query: String,
}

/// Everything the page displays. The two sub-forms are independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub order: OrderForm,
    pub item: ItemForm,
    pub order_search: OrderSearch,
    /// The `orderid` box that scopes item listing.
    pub item_search_order_id: String,
    pub order_results: ResultsTable,
    pub item_results: ResultsTable,
}

/// A named text field on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OrderId,
    CustomerId,
    TrackingId,
    Status,
    CreatedTime,
    FlashMessage,
    ItemId,
    ItemOrderId,
    ProductId,
    Quantity,
    Price,
    FlashMessageItem,
    ItemSearchOrderId,
    /// The search radio; holds a query parameter name or nothing.
    QueryOption,
    Query,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::OrderId,
        Field::CustomerId,
        Field::TrackingId,
        Field::Status,
        Field::CreatedTime,
        Field::FlashMessage,
        Field::ItemId,
        Field::ItemOrderId,
        Field::ProductId,
        Field::Quantity,
        Field::Price,
        Field::FlashMessageItem,
        Field::ItemSearchOrderId,
        Field::QueryOption,
        Field::Query,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::OrderId => "order_id",
            Field::CustomerId => "customer_id",
            Field::TrackingId => "tracking_id",
            Field::Status => "status",
            Field::CreatedTime => "created_time",
            Field::FlashMessage => "flash_message",
            Field::ItemId => "item_id",
            Field::ItemOrderId => "item_order_id",
            Field::ProductId => "product_id",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::FlashMessageItem => "flash_message_item",
            Field::ItemSearchOrderId => "orderid",
            Field::QueryOption => "query_option",
            Field::Query => "query",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Flash fields are written by actions only.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Field::FlashMessage | Field::FlashMessageItem)
    }
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::OrderId => &self.order.order_id,
            Field::CustomerId => &self.order.customer_id,
            Field::TrackingId => &self.order.tracking_id,
            Field::Status => &self.order.status,
            Field::CreatedTime => &self.order.created_time,
            Field::FlashMessage => &self.order.flash_message,
            Field::ItemId => &self.item.item_id,
            Field::ItemOrderId => &self.item.item_order_id,
            Field::ProductId => &self.item.product_id,
            Field::Quantity => &self.item.quantity,
            Field::Price => &self.item.price,
            Field::FlashMessageItem => &self.item.flash_message_item,
            Field::ItemSearchOrderId => &self.item_search_order_id,
            Field::QueryOption => self.order_search.option.map_or("", |kind| kind.param()),
            Field::Query => &self.order_search.query,
        }
    }

    /// Replaces a field's text verbatim; no trimming or type checks.
    ///
    /// `QueryOption` is the exception: it keeps a known option name and
    /// treats anything else as no selection.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if field == Field::QueryOption {
            self.order_search.option = OrderQueryKind::from_param(&value.into());
            return;
        }
        let slot = match field {
            Field::OrderId => &mut self.order.order_id,
            Field::CustomerId => &mut self.order.customer_id,
            Field::TrackingId => &mut self.order.tracking_id,
            Field::Status => &mut self.order.status,
            Field::CreatedTime => &mut self.order.created_time,
            Field::FlashMessage => &mut self.order.flash_message,
            Field::ItemId => &mut self.item.item_id,
            Field::ItemOrderId => &mut self.item.item_order_id,
            Field::ProductId => &mut self.item.product_id,
            Field::Quantity => &mut self.item.quantity,
            Field::Price => &mut self.item.price,
            Field::FlashMessageItem => &mut self.item.flash_message_item,
            Field::ItemSearchOrderId => &mut self.item_search_order_id,
            Field::QueryOption => return,
            Field::Query => &mut self.order_search.query,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_name_resolves() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("nope"), None);
    }

    #[test]
    fn set_then_get_is_verbatim() {
        let mut state = FormState::default();
        state.set(Field::Quantity, " 3 apples ");
        state.set(Field::ItemSearchOrderId, "7");
        assert_eq!(state.get(Field::Quantity), " 3 apples ");
        assert_eq!(state.item_search_order_id, "7");
    }

    #[test]
    fn query_option_is_a_field() {
        let mut state = FormState::default();
        assert_eq!(state.get(Field::QueryOption), "");

        state.set(Field::QueryOption, "customer_id");
        assert_eq!(state.order_search.option, Some(OrderQueryKind::CustomerId));
        assert_eq!(state.get(Field::QueryOption), "customer_id");

        state.set(Field::QueryOption, "");
        assert_eq!(state.order_search.option, None);
        assert_eq!(state.get(Field::QueryOption), "");
    }

    #[test]
    fn fresh_form_defaults_status() {
        let state = FormState::default();
        assert_eq!(state.get(Field::Status), "PLACED");
        assert_eq!(state.get(Field::OrderId), "");
    }
}
