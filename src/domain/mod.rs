pub mod criteria;
pub mod errors;
pub mod ports;
pub mod recommendation;
