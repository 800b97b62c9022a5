//! menu-service: CRUD HTTP API over menu items.
pub mod config;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
