use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use crate::types::Cli;

/// Build HTTP client from CLI configuration
pub fn build_http_client(cli: &Cli) -> Result<Client> {
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy_url) = &cli.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        client_builder = client_builder.proxy(proxy);
    }

    Ok(client_builder.build()?)
}
