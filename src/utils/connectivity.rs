use std::io;
use tokio::net::lookup_host;

use crate::constants::CONNECTIVITY_PORT;
use crate::error::RunnerError;

/// Resolver messages meaning the name does not exist (glibc, macOS, Windows)
const HOST_NOT_FOUND_MARKERS: [&str; 4] = [
    "Name or service not known",
    "nodename nor servname provided",
    "No address associated with hostname",
    "No such host is known",
];

/// Check that `host` resolves.
///
/// Only a host-not-found answer is treated as a connectivity failure. Other
/// resolver errors, such as timeouts, are logged and ignored.
pub async fn check_connectivity(host: &str) -> Result<(), RunnerError> {
    match lookup_host((host, CONNECTIVITY_PORT)).await {
        Ok(mut addrs) => {
            if addrs.next().is_some() {
                log::debug!("resolved {}", host);
                Ok(())
            } else {
                Err(RunnerError::Connectivity)
            }
        }
        Err(err) if is_host_not_found(&err) => {
            log::debug!("lookup of {} failed: {}", host, err);
            Err(RunnerError::Connectivity)
        }
        Err(err) => {
            log::debug!("ignoring DNS error for {}: {}", host, err);
            Ok(())
        }
    }
}

/// Whether a lookup error says the host does not exist
pub fn is_host_not_found(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    let message = err.to_string();
    HOST_NOT_FOUND_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}
