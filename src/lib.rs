pub mod constants;
pub mod error;
pub mod filter;
pub mod http;
pub mod output;
pub mod processor;
pub mod types;
pub mod utils;

pub use error::RunnerError;
pub use processor::{DispatchSummary, dispatch_queries, dispatch_queries_to, run_batch};
pub use types::{Cli, Config};
