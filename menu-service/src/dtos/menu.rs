use crate::errors::MenuError;
use crate::models::{MenuItem, MenuItemChanges, NewMenuItem, DEFAULT_DESCRIPTION};
use chrono::SecondsFormat;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, price, image, category";

/// Request body for `POST /menu` and `PUT /menu/:id`.
///
/// Only these fields are recognized; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MenuItemPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub price: Option<f64>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Check a create payload and fill in defaults.
///
/// Every required field must be present and non-empty; `price` may be zero.
pub fn validate_for_create(payload: MenuItemPayload) -> Result<NewMenuItem, MenuError> {
    let MenuItemPayload {
        name,
        price,
        image,
        category,
        description,
    } = payload;

    match (non_empty(name), price, non_empty(image), non_empty(category)) {
        (Some(name), Some(price), Some(image), Some(category)) => Ok(NewMenuItem {
            name,
            price,
            image,
            category,
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }),
        _ => Err(MenuError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    }
}

/// Check an update payload. Absent fields are left unchanged by the store.
pub fn validate_for_update(payload: MenuItemPayload) -> Result<MenuItemChanges, MenuError> {
    payload.validate()?;

    Ok(MenuItemChanges {
        name: payload.name,
        price: payload.price,
        image: payload.image,
        category: payload.category,
        description: payload.description,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price,
            image: item.image,
            category: item.category,
            description: item.description,
            created_at: format_timestamp(item.created_at),
            updated_at: format_timestamp(item.updated_at),
        }
    }
}

/// Body of update and delete responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuItemMessageResponse {
    pub message: String,
    pub item: MenuItemResponse,
}

/// Millisecond-precision RFC 3339 in UTC, e.g. `2024-01-12T09:30:00.000Z`.
fn format_timestamp(timestamp: DateTime) -> String {
    timestamp
        .to_chrono()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> MenuItemPayload {
        MenuItemPayload {
            name: Some("Pizza".to_string()),
            price: Some(9.5),
            image: Some("p.jpg".to_string()),
            category: Some("Main".to_string()),
            description: None,
        }
    }

    #[test]
    fn create_defaults_description() {
        let item = validate_for_create(full_payload()).unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn create_keeps_explicit_description() {
        let item = validate_for_create(MenuItemPayload {
            description: Some("Wood fired".to_string()),
            ..full_payload()
        })
        .unwrap();
        assert_eq!(item.description, "Wood fired");
    }

    #[test]
    fn create_accepts_zero_price() {
        let item = validate_for_create(MenuItemPayload {
            price: Some(0.0),
            ..full_payload()
        })
        .unwrap();
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn create_rejects_each_missing_required_field() {
        let cases = [
            MenuItemPayload { name: None, ..full_payload() },
            MenuItemPayload { price: None, ..full_payload() },
            MenuItemPayload { image: None, ..full_payload() },
            MenuItemPayload { category: None, ..full_payload() },
            MenuItemPayload { name: Some(String::new()), ..full_payload() },
        ];

        for payload in cases {
            match validate_for_create(payload) {
                Err(MenuError::Validation(message)) => assert_eq!(message, MISSING_FIELDS_MESSAGE),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn update_allows_partial_payload() {
        let changes = validate_for_update(MenuItemPayload {
            price: Some(12.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(changes.price, Some(12.0));
        assert!(changes.name.is_none());
    }

    #[test]
    fn update_rejects_empty_text() {
        let err = validate_for_update(MenuItemPayload {
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();

        match err {
            MenuError::Validation(message) => assert_eq!(message, "name must not be empty"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload: MenuItemPayload =
            serde_json::from_str(r#"{"name":"Pizza","spicy":true,"_id":"x"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Pizza"));
    }

    #[test]
    fn response_uses_camel_case_timestamps() {
        let item = MenuItem::new(validate_for_create(full_payload()).unwrap());
        let json = serde_json::to_value(MenuItemResponse::from(item.clone())).unwrap();

        assert_eq!(json["id"], item.id.to_string());
        assert!(json["createdAt"].as_str().unwrap().ends_with('Z'));
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
