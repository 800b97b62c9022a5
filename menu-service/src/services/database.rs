use crate::errors::MenuError;
use crate::models::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
use crate::services::store::MenuStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, MenuError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            MenuError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), MenuError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                MenuError::from(e)
            })?;
        Ok(())
    }

    pub fn menu_items(&self, collection: &str) -> Collection<MenuItem> {
        self.db.collection(collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// [`MenuStore`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoMenuStore {
    db: MongoDb,
    collection: Collection<MenuItem>,
}

impl MongoMenuStore {
    pub fn new(db: MongoDb, collection: &str) -> Self {
        let collection = db.menu_items(collection);
        Self { db, collection }
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn find_all(&self) -> Result<Vec<MenuItem>, MenuError> {
        let cursor = self.collection.find(None, None).await?;
        let items: Vec<MenuItem> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: &MenuItemId) -> Result<Option<MenuItem>, MenuError> {
        let item = self
            .collection
            .find_one(doc! { "_id": *id.as_object_id() }, None)
            .await?;
        Ok(item)
    }

    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, MenuError> {
        let item = MenuItem::new(item);
        self.collection.insert_one(&item, None).await?;
        Ok(item)
    }

    async fn update_by_id(
        &self,
        id: &MenuItemId,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, MenuError> {
        let update = changes.to_update_document(DateTime::now());
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": *id.as_object_id() }, update, options)
            .await?
            .ok_or(MenuError::NotFound)
    }

    async fn delete_by_id(&self, id: &MenuItemId) -> Result<MenuItem, MenuError> {
        self.collection
            .find_one_and_delete(doc! { "_id": *id.as_object_id() }, None)
            .await?
            .ok_or(MenuError::NotFound)
    }

    async fn health_check(&self) -> Result<(), MenuError> {
        self.db.health_check().await
    }
}
