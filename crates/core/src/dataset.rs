use thiserror::Error;

use crate::model::{TimelineDataset, TimelineEntry};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the dataset: a JSON array of `{ "number", "symbol"?, "description" }`
/// objects. The source's ordering is not trusted; entries are sorted ascending
/// by `number` before use. An empty array is a valid (inert) dataset.
pub fn parse_dataset(data: &[u8]) -> Result<TimelineDataset, DatasetError> {
    let entries: Vec<TimelineEntry> = serde_json::from_slice(data)?;
    Ok(TimelineDataset::from_entries(entries))
}
