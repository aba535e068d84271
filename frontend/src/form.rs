//! State of the add-item form (`itemForm` with `itemName` and
//! `itemDescription`).

use items_core::{NewItem, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
}

impl ItemForm {
    pub fn to_new_item(&self) -> Result<NewItem, ValidationError> {
        NewItem::new(&self.name, &self.description)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
    }
}
