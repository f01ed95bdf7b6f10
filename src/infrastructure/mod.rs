pub mod api;
pub mod saved_store;
