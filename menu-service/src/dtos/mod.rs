pub mod menu;

pub use menu::{
    validate_for_create, validate_for_update, MenuItemMessageResponse, MenuItemPayload,
    MenuItemResponse, MISSING_FIELDS_MESSAGE,
};
