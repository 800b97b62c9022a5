use crate::errors::MenuError;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DESCRIPTION: &str = "Delicious dish from our menu.";

/// Store identifier of a menu item.
///
/// Only 24-character hex strings parse; anything else is rejected before a
/// store is ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(ObjectId);

impl MenuItemId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for MenuItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for MenuItemId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| MenuError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A persisted menu item. Field names match the `menus` collection layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl MenuItem {
    /// Materialize a validated item with a fresh id and timestamps.
    pub fn new(item: NewMenuItem) -> Self {
        let now = DateTime::now();
        Self {
            id: MenuItemId::new(),
            name: item.name,
            price: item.price,
            image: item.image,
            category: item.category,
            description: item.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply changes in place and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply(&mut self, changes: MenuItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = DateTime::now().max(self.updated_at);
    }
}

/// A validated create request; every required field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub description: String,
}

/// A validated update request. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl MenuItemChanges {
    /// Update document for the changed fields.
    ///
    /// `updatedAt` goes through `$max`, so it only ever moves forward. `$set`
    /// is left out when no field changes.
    pub fn to_update_document(&self, updated_at: DateTime) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(image) = &self.image {
            set.insert("image", image.as_str());
        }
        if let Some(category) = &self.category {
            set.insert("category", category.as_str());
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }

        let mut update = doc! { "$max": { "updatedAt": updated_at } };
        if !set.is_empty() {
            update.insert("$set", set);
        }
        update
    }
}
