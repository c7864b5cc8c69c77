/// Shodan API constants
pub const SHODAN_API_SERVER: &str = "https://api.shodan.io";
pub const SEARCH_PATH: &str = "/shodan/query/search";

/// Host resolved by the connectivity check
pub const CONNECTIVITY_HOST: &str = "shodan.io";
pub const CONNECTIVITY_PORT: u16 = 443;

/// Shodan returns 10 results per page
pub const RESULTS_PER_PAGE: u64 = 10;
pub const DEFAULT_LIMIT: u64 = 1000;

/// Timeout for each request in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of filter files a run combines
pub const FILTER_FILE_COUNT: usize = 2;

pub const MSG_API_UNRESPONSIVE: &str =
    "The Shodan API is unresponsive at the moment, please try again later.";

pub const BANNER: &str = concat!(
    "███████╗██╗  ██╗ ██████╗ ██████╗  █████╗ ███╗   ██╗██████╗ ██╗   ██╗███╗   ██╗███╗   ██╗███████╗██████╗\n",
    "██╔════╝██║  ██║██╔═══██╗██╔══██╗██╔══██╗████╗  ██║██╔══██╗██║   ██║████╗  ██║████╗  ██║██╔════╝██╔══██╗\n",
    "███████╗███████║██║   ██║██║  ██║███████║██╔██╗ ██║██████╔╝██║   ██║██╔██╗ ██║██╔██╗ ██║█████╗  ██████╔╝\n",
    "╚════██║██╔══██║██║   ██║██║  ██║██╔══██║██║╚██╗██║██╔══██╗██║   ██║██║╚██╗██║██║╚██╗██║██╔══╝  ██╔══██╗\n",
    "███████║██║  ██║╚██████╔╝██████╔╝██║  ██║██║ ╚████║██║  ██║╚██████╔╝██║ ╚████║██║ ╚████║███████╗██║  ██║\n",
    "╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝ Version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "https://github.com/gmontalvoriv/shodan-runner-node\n",
    "License: MIT",
);

pub const DISCLAIMER: &str = "*No safety checks here for bad syntax or bad search filters, pay attention or lose search queries tokens*";
