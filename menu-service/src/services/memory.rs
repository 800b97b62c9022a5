use crate::errors::MenuError;
use crate::models::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
use crate::services::store::MenuStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local [`MenuStore`] for development and tests.
///
/// Keeps items in insertion order. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryMenuStore {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn find_all(&self) -> Result<Vec<MenuItem>, MenuError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: &MenuItemId) -> Result<Option<MenuItem>, MenuError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == *id).cloned())
    }

    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, MenuError> {
        let item = MenuItem::new(item);
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update_by_id(
        &self,
        id: &MenuItemId,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, MenuError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or(MenuError::NotFound)?;
        item.apply(changes);
        Ok(item.clone())
    }

    async fn delete_by_id(&self, id: &MenuItemId) -> Result<MenuItem, MenuError> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id == *id)
            .ok_or(MenuError::NotFound)?;
        Ok(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_DESCRIPTION;

    fn new_item(name: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            price: 4.0,
            image: format!("{}.jpg", name.to_lowercase()),
            category: "Starter".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = InMemoryMenuStore::new();
        store.create(new_item("Soup")).await.unwrap();
        store.create(new_item("Salad")).await.unwrap();
        store.create(new_item("Bread")).await.unwrap();

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, ["Soup", "Salad", "Bread"]);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let store = InMemoryMenuStore::new();
        let a = store.create(new_item("Soup")).await.unwrap();
        let b = store.create(new_item("Soup")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let store = InMemoryMenuStore::new();
        let result = store
            .update_by_id(&MenuItemId::new(), MenuItemChanges::default())
            .await;
        assert!(matches!(result, Err(MenuError::NotFound)));
    }

    #[tokio::test]
    async fn delete_returns_snapshot_and_removes() {
        let store = InMemoryMenuStore::new();
        let created = store.create(new_item("Soup")).await.unwrap();

        let deleted = store.delete_by_id(&created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(store.is_empty().await);
        assert!(store.find_by_id(&created.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_by_id(&created.id).await,
            Err(MenuError::NotFound)
        ));
    }
}
