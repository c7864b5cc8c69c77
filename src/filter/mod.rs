pub mod compose;
pub mod loader;

pub use compose::{compose_queries, page_for_limit};
pub use loader::load_filters;
