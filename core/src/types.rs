//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned item identifier.
pub type ItemId = i64;

/// A single item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// The description if there is one worth showing. An empty string from
    /// the server counts as "no description".
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Wire envelope of `GET /items`. A body without `items` is an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Request payload for creating a new item.
///
/// Only constructible through [`NewItem::new`], so a value of this type
/// always carries a trimmed, non-empty name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    description: String,
}

impl NewItem {
    pub fn new(name: &str, description: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
