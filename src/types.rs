use clap::Parser;
use std::path::PathBuf;

use crate::constants::{BANNER, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS, DISCLAIMER, FILTER_FILE_COUNT};
use crate::error::RunnerError;

/// Run every combination of two Shodan filter lists as a search query.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = None,
    before_help = BANNER,
    after_help = DISCLAIMER
)]
pub struct Cli {
    /// Output file (accepted for compatibility, results go to stdout).
    #[arg(value_name = "outputfile")]
    pub output_file: PathBuf,

    /// The two filter files, one filter per line.
    #[arg(value_name = "files")]
    pub files: Vec<PathBuf>,

    // SEARCH
    /// Shodan API key.
    #[arg(
        short = 'K',
        long = "apiKey",
        visible_alias = "api-key",
        value_name = "key",
        help_heading = "SEARCH"
    )]
    pub api_key: Option<String>,

    /// The number of results you want to download.
    #[arg(
        short,
        long,
        value_name = "int",
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "SEARCH"
    )]
    pub limit: u64,

    // NETWORK
    /// Timeout for each request in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help_heading = "NETWORK")]
    pub timeout: u64,

    /// Maximum number of concurrent requests (0 for unlimited).
    #[arg(long, default_value_t = 0, help_heading = "NETWORK")]
    pub concurrency: usize,

    /// Use a proxy for requests (e.g., "http://127.0.0.1:8080").
    #[arg(long, help_heading = "NETWORK")]
    pub proxy: Option<String>,

    // OUTPUT
    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,
}

/// Validated settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub limit: u64,
    pub output_file: PathBuf,
    pub filter_files: [PathBuf; FILTER_FILE_COUNT],
    pub concurrency: Option<usize>,
    pub color: bool,
}

impl Config {
    /// Validate parsed arguments. The filter file count is checked before the key.
    pub fn from_cli(cli: &Cli) -> Result<Self, RunnerError> {
        let filter_files: [PathBuf; FILTER_FILE_COUNT] = cli
            .files
            .clone()
            .try_into()
            .map_err(|files: Vec<PathBuf>| RunnerError::WrongFilterFileCount(files.len()))?;

        let api_key = match cli.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(RunnerError::MissingApiKey),
        };

        Ok(Self {
            api_key,
            limit: cli.limit,
            output_file: cli.output_file.clone(),
            filter_files,
            concurrency: (cli.concurrency > 0).then_some(cli.concurrency),
            color: !cli.no_color,
        })
    }
}
