pub mod client;
pub mod tips;
pub mod view_state;
