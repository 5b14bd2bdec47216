pub mod core;
pub mod models;
pub mod stores;
pub mod handlers;
pub mod utils;
