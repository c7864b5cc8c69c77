use crate::constants::RESULTS_PER_PAGE;

/// Combine every filter of `first` with every filter of `second`.
///
/// The outer loop runs over `first`, so queries come out grouped by its entries.
pub fn compose_queries(first: &[String], second: &[String]) -> Vec<String> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| format!("{} {}", a, b)))
        .collect()
}

/// Page requested for a result limit. The same page is sent with every query.
pub fn page_for_limit(limit: u64) -> u64 {
    limit.div_ceil(RESULTS_PER_PAGE)
}
