#![allow(dead_code)]

use menu_service::config::MenuConfig;
use menu_service::services::{InMemoryMenuStore, MenuStore};
use menu_service::startup::Application;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

pub const MISSING_ID: &str = "65a1b2c3d4e5f60718293a4b";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: InMemoryMenuStore,
    pub client: Client,
}

impl TestApp {
    /// Boot the service on a random port against a fresh in-memory store.
    pub async fn spawn() -> Self {
        let store = InMemoryMenuStore::new();
        let shared: Arc<dyn MenuStore> = Arc::new(store.clone());

        let app = Application::build_with_store(MenuConfig::in_memory(), shared)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_item(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/menu"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_item(&self, id: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/menu/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn pizza() -> Value {
    json!({
        "name": "Pizza",
        "price": 9.5,
        "image": "p.jpg",
        "category": "Main"
    })
}
