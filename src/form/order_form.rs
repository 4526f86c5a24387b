use crate::domain::{OrderCreate, OrderRecord, OrderStatus, OrderUpdate};

/// The order sub-form: whatever text is currently in the order fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub order_id: String,
    pub customer_id: String,
    pub tracking_id: String,
    pub status: String,
    pub created_time: String,
    pub flash_message: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            customer_id: String::new(),
            tracking_id: String::new(),
            status: OrderStatus::default().to_string(),
            created_time: String::new(),
            flash_message: String::new(),
        }
    }
}

impl OrderForm {
    /// Overwrites every record field with the server's copy.
    pub fn fill(&mut self, record: &OrderRecord) {
        self.order_id = record.id.clone();
        self.customer_id = record.customer_id.clone();
        self.tracking_id = record.tracking_id.clone();
        self.status = record.status.clone();
        self.created_time = record.created_time.clone();
    }

    /// Empties the record fields (status back to `PLACED`). The flash is left alone.
    pub fn clear_record(&mut self) {
        let flash_message = std::mem::take(&mut self.flash_message);
        *self = Self {
            flash_message,
            ..Self::default()
        };
    }

    pub fn to_create(&self) -> OrderCreate {
        OrderCreate {
            customer_id: self.customer_id.clone(),
            tracking_id: self.tracking_id.clone(),
            status: self.status.clone(),
        }
    }

    pub fn to_update(&self) -> OrderUpdate {
        OrderUpdate {
            id: self.order_id.clone(),
            customer_id: self.customer_id.clone(),
            tracking_id: self.tracking_id.clone(),
            status: self.status.clone(),
        }
    }
}
