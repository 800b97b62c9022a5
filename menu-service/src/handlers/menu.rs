use crate::dtos::{
    validate_for_create, validate_for_update, MenuItemMessageResponse, MenuItemPayload,
    MenuItemResponse,
};
use crate::errors::MenuError;
use crate::models::MenuItemId;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use metrics::counter;
use service_core::error::AppError;
use service_core::utils::JsonBody;

/// Parse a path id, rejecting malformed ones before any store access.
fn parse_id(raw: &str) -> Result<MenuItemId, MenuError> {
    raw.parse().map_err(|e| {
        tracing::warn!(item_id = %raw, "Rejected malformed menu item id");
        e
    })
}

pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemResponse>>, AppError> {
    let items = state.store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list menu items");
        e
    })?;

    Ok(Json(items.into_iter().map(MenuItemResponse::from).collect()))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemResponse>, AppError> {
    let id = parse_id(&id)?;

    let item = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| {
            tracing::error!(item_id = %id, error = %e, "Failed to fetch menu item");
            e
        })?
        .ok_or(MenuError::NotFound)?;

    Ok(Json(MenuItemResponse::from(item)))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MenuItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new_item = validate_for_create(payload).map_err(|e| {
        tracing::warn!(error = %e, "Rejected menu item create request");
        e
    })?;

    let item = state.store.create(new_item).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create menu item");
        e
    })?;

    counter!("menu_items_created_total").increment(1);
    tracing::info!(item_id = %item.id, name = %item.name, "Menu item created");

    Ok((StatusCode::CREATED, Json(MenuItemResponse::from(item))))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MenuItemPayload>, JsonRejection>,
) -> Result<Json<MenuItemMessageResponse>, AppError> {
    let id = parse_id(&id)?;

    let payload = match body {
        Ok(Json(payload)) => payload,
        // A request without a JSON body changes nothing
        Err(JsonRejection::MissingJsonContentType(_)) => MenuItemPayload::default(),
        Err(rejection) => {
            tracing::warn!(item_id = %id, "Rejected malformed update body");
            return Err(rejection.into());
        }
    };
    let changes = validate_for_update(payload)?;

    let item = state.store.update_by_id(&id, changes).await.map_err(|e| {
        if !matches!(e, MenuError::NotFound) {
            tracing::error!(item_id = %id, error = %e, "Failed to update menu item");
        }
        e
    })?;

    tracing::info!(item_id = %id, "Menu item updated");

    Ok(Json(MenuItemMessageResponse {
        message: "Menu item updated successfully".to_string(),
        item: MenuItemResponse::from(item),
    }))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemMessageResponse>, AppError> {
    let id = parse_id(&id)?;

    let item = state.store.delete_by_id(&id).await.map_err(|e| {
        match &e {
            MenuError::NotFound => tracing::info!(item_id = %id, "No menu item to delete"),
            _ => tracing::error!(item_id = %id, error = %e, "Failed to delete menu item"),
        }
        e
    })?;

    counter!("menu_items_deleted_total").increment(1);
    tracing::info!(item_id = %id, name = %item.name, "Menu item deleted");

    Ok(Json(MenuItemMessageResponse {
        message: "Menu item deleted successfully".to_string(),
        item: MenuItemResponse::from(item),
    }))
}
