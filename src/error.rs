use thiserror::Error;

/// Fatal errors reported to the user before exiting with code 1
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RunnerError {
    #[error("Missing required API key.")]
    MissingApiKey,

    #[error("Wrong number of filter files used. Only two (2) are allowed.")]
    WrongFilterFileCount(usize),

    #[error("Please check your internet connection.")]
    Connectivity,
}
