use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::constants::MSG_API_UNRESPONSIVE;
use crate::filter::{compose_queries, load_filters, page_for_limit};
use crate::http::{RequestParams, SearchClient};
use crate::output::{format_error, write_output};
use crate::types::Config;

/// Outcome counts of a dispatched batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Load both filter files, combine them and search every combination
pub async fn run_batch<C>(config: &Config, client: &C) -> Result<DispatchSummary>
where
    C: SearchClient + ?Sized,
{
    let [first_path, second_path] = &config.filter_files;
    let first = load_filters(first_path).await?;
    let second = load_filters(second_path).await?;

    let queries = compose_queries(&first, &second);
    let page = page_for_limit(config.limit);
    log::info!(
        "dispatching {} queries at page {} (output file {} is not written)",
        queries.len(),
        page,
        config.output_file.display()
    );

    let summary = dispatch_queries(client, config, &queries, page).await;
    log::info!(
        "batch finished: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );
    Ok(summary)
}

/// Send one search per query and print each raw response body to stdout.
pub async fn dispatch_queries<C>(
    client: &C,
    config: &Config,
    queries: &[String],
    page: u64,
) -> DispatchSummary
where
    C: SearchClient + ?Sized,
{
    let stdout = Mutex::new(io::stdout());
    dispatch_queries_to(client, config, queries, page, &stdout).await
}

/// Send one search per query and write each raw response body to `output`.
///
/// A failed request is reported and does not stop the rest of the batch.
pub async fn dispatch_queries_to<C, W>(
    client: &C,
    config: &Config,
    queries: &[String],
    page: u64,
    output: &Mutex<W>,
) -> DispatchSummary
where
    C: SearchClient + ?Sized,
    W: Write,
{
    let succeeded = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    stream::iter(queries)
        .for_each_concurrent(config.concurrency, |query| {
            let succeeded = &succeeded;
            let failed = &failed;
            async move {
                let params = RequestParams {
                    api_key: &config.api_key,
                    query,
                    page,
                };
                log::debug!("[{}] - sending page {}", query, page);
                match client.search(params).await {
                    Ok(body) => {
                        write_output(output, &body);
                        succeeded.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => {
                        log::debug!("[{}] - request failed: {:#}", query, err);
                        write_output(output, &format_error(MSG_API_UNRESPONSIVE, config.color));
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        })
        .await;

    DispatchSummary {
        succeeded: succeeded.into_inner(),
        failed: failed.into_inner(),
    }
}
