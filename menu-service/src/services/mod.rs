pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::{MongoDb, MongoMenuStore};
pub use memory::InMemoryMenuStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::MenuStore;
