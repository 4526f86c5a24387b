//! Typed clients for the order and order-item resources.

#[macro_use]
mod macros;

pub mod order_client;
pub mod item_client;

pub use order_client::OrderClient;
pub use item_client::ItemClient;
