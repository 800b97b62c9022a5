pub mod health;
pub mod menu;

pub use health::{health_check, liveness, metrics_endpoint, readiness_check};
pub use menu::{
    create_menu_item, delete_menu_item, get_menu_item, list_menu_items, update_menu_item,
};
