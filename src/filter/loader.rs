use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read a filter file to completion, one trimmed entry per line.
///
/// Blank lines are kept as empty filters. Invalid UTF-8 is replaced, not rejected.
pub async fn load_filters(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .await
        .with_context(|| format!("failed to open filter file: {}", path.display()))?;

    let mut lines = BufReader::new(file).split(b'\n');
    let mut filters = Vec::new();
    while let Some(line) = lines
        .next_segment()
        .await
        .with_context(|| format!("failed to read filter file: {}", path.display()))?
    {
        filters.push(String::from_utf8_lossy(&line).trim().to_string());
    }

    log::debug!("loaded {} filters from {}", filters.len(), path.display());
    Ok(filters)
}
