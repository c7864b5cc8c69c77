pub mod client;
pub mod search;

pub use client::build_http_client;
pub use search::{RequestParams, SearchClient, ShodanClient, build_search_url};
