/// One variant per button on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    CreateOrder,
    UpdateOrder,
    RetrieveOrder,
    DeleteOrder,
    CancelOrder,
    ClearOrder,
    ListOrders,
    SearchOrders,
    CreateItem,
    UpdateItem,
    RetrieveItem,
    DeleteItem,
    ClearItem,
    ListItems,
}

impl FormAction {
    pub const ALL: [FormAction; 14] = [
        FormAction::CreateOrder,
        FormAction::UpdateOrder,
        FormAction::RetrieveOrder,
        FormAction::DeleteOrder,
        FormAction::CancelOrder,
        FormAction::ClearOrder,
        FormAction::ListOrders,
        FormAction::SearchOrders,
        FormAction::CreateItem,
        FormAction::UpdateItem,
        FormAction::RetrieveItem,
        FormAction::DeleteItem,
        FormAction::ClearItem,
        FormAction::ListItems,
    ];

    pub fn button_id(&self) -> &'static str {
        match self {
            FormAction::CreateOrder => "create-btn",
            FormAction::UpdateOrder => "update-btn",
            FormAction::RetrieveOrder => "retrieve-btn",
            FormAction::DeleteOrder => "delete-btn",
            FormAction::CancelOrder => "cancel-btn",
            FormAction::ClearOrder => "clear-btn",
            FormAction::ListOrders => "listall-btn",
            FormAction::SearchOrders => "search-btn",
            FormAction::CreateItem => "create-item-btn",
            FormAction::UpdateItem => "update-item-btn",
            FormAction::RetrieveItem => "retrieve-item-btn",
            FormAction::DeleteItem => "delete-item-btn",
            FormAction::ClearItem => "clear-item-btn",
            FormAction::ListItems => "listall-item-btn",
        }
    }

    /// Resolves a button from its id (`create-item-btn`) or its label
    /// (`Create Item`, `List All`). Case, spaces, dashes and the `-btn`
    /// suffix are not significant.
    pub fn from_button(label: &str) -> Option<Self> {
        let key = normalize(label);
        let key = key.strip_suffix("btn").unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|action| normalize(action.button_id()).strip_suffix("btn") == Some(key))
    }

    /// Whether the action reads and writes the item sub-form.
    pub fn targets_items(&self) -> bool {
        matches!(
            self,
            FormAction::CreateItem
                | FormAction::UpdateItem
                | FormAction::RetrieveItem
                | FormAction::DeleteItem
                | FormAction::ClearItem
                | FormAction::ListItems
        )
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
