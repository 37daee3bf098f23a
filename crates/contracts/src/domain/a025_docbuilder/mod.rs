pub mod aggregate;
pub mod state_key;
pub mod ui_content;
