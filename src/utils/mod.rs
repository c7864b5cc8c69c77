pub mod connectivity;

pub use connectivity::{check_connectivity, is_host_not_found};
