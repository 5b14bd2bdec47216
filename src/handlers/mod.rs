pub mod fallback;
pub mod root;
pub mod users;
