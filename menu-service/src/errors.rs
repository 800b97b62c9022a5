//! Error kinds produced by menu validation and persistence.

use service_core::error::AppError;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";
pub const NOT_FOUND_MESSAGE: &str = "Menu item not found";

#[derive(Debug, Error)]
pub enum MenuError {
    /// A required field is missing or a present field is malformed.
    #[error("{0}")]
    Validation(String),

    /// The identifier is not a well-formed store identifier.
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Menu item not found")]
    NotFound,

    /// Any other failure reported by the backing store.
    #[error("{0}")]
    Store(anyhow::Error),
}

impl From<mongodb::error::Error> for MenuError {
    fn from(err: mongodb::error::Error) -> Self {
        MenuError::Store(anyhow::Error::new(err))
    }
}

impl From<validator::ValidationErrors> for MenuError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        // field_errors() iterates a HashMap
        messages.sort();
        MenuError::Validation(messages.join(", "))
    }
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::Validation(message) => AppError::BadRequest(anyhow::anyhow!(message)),
            MenuError::InvalidId(_) => AppError::BadRequest(anyhow::anyhow!(INVALID_ID_MESSAGE)),
            MenuError::NotFound => AppError::NotFound(anyhow::anyhow!(NOT_FOUND_MESSAGE)),
            MenuError::Store(err) => AppError::DatabaseError(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (MenuError::Validation("name is required".into()), StatusCode::BAD_REQUEST),
            (MenuError::InvalidId("nope".into()), StatusCode::BAD_REQUEST),
            (MenuError::NotFound, StatusCode::NOT_FOUND),
            (
                MenuError::Store(anyhow::anyhow!("socket closed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn invalid_id_uses_fixed_message() {
        let err = AppError::from(MenuError::InvalidId("not-an-id".into()));
        assert_eq!(err.message(), INVALID_ID_MESSAGE);
    }

    #[test]
    fn store_error_keeps_underlying_message() {
        let err = AppError::from(MenuError::Store(anyhow::anyhow!("socket closed")));
        assert_eq!(err.message(), "socket closed");
    }
}
