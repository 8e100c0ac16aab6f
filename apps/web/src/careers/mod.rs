pub mod handlers;
pub mod taxonomy;
