use crate::domain::{ItemCreate, ItemRecord, ItemUpdate};

/// The order-item sub-form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub item_id: String,
    pub item_order_id: String,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
    pub flash_message_item: String,
}

impl ItemForm {
    pub fn fill(&mut self, record: &ItemRecord) {
        self.item_id = record.id.clone();
        self.item_order_id = record.order_id.clone();
        self.product_id = record.product_id.clone();
        self.quantity = record.quantity.clone();
        self.price = record.price.clone();
    }

    pub fn clear_record(&mut self) {
        let flash_message_item = std::mem::take(&mut self.flash_message_item);
        *self = Self {
            flash_message_item,
            ..Self::default()
        };
    }

    pub fn to_create(&self) -> ItemCreate {
        ItemCreate {
            order_id: self.item_order_id.clone(),
            product_id: self.product_id.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }

    pub fn to_update(&self) -> ItemUpdate {
        ItemUpdate {
            id: self.item_id.clone(),
            order_id: self.item_order_id.clone(),
            product_id: self.product_id.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }
}
