pub mod formatter;

pub use formatter::{format_error, write_output};
