use crate::errors::MenuError;
use crate::models::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
use async_trait::async_trait;

/// Persistence capability for menu items.
///
/// Identifiers are parsed before they reach a store, so implementations never
/// see a malformed id. Each call is a single round-trip with no retries.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All items, in insertion order where the backend keeps one.
    async fn find_all(&self) -> Result<Vec<MenuItem>, MenuError>;

    async fn find_by_id(&self, id: &MenuItemId) -> Result<Option<MenuItem>, MenuError>;

    /// Persist a new item and return it with its assigned id and timestamps.
    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, MenuError>;

    /// Apply `changes` and return the post-update record.
    ///
    /// Fails with [`MenuError::NotFound`] when no item has this id.
    async fn update_by_id(
        &self,
        id: &MenuItemId,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, MenuError>;

    /// Remove the item and return its last state.
    ///
    /// Fails with [`MenuError::NotFound`] when no item has this id.
    async fn delete_by_id(&self, id: &MenuItemId) -> Result<MenuItem, MenuError>;

    /// Connectivity probe used by `/health` and `/ready`.
    async fn health_check(&self) -> Result<(), MenuError> {
        Ok(())
    }
}
