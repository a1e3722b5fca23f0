use numberline_protocol::{SharedStr, SlotContent};
use serde::Deserialize;

/// One timeline entry, as delivered by the dataset source.
///
/// Source objects look like `{ "number": 6.28, "symbol": "τ", "description":
/// "the circle constant" }`; `symbol` may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    /// Globally unique sort key.
    #[serde(rename = "number")]
    pub key: f64,
    /// Optional short label shown as the entry's heading.
    #[serde(rename = "symbol", default)]
    pub label: Option<SharedStr>,
    /// Body text describing the entry.
    #[serde(rename = "description")]
    pub body: SharedStr,
}

impl TimelineEntry {
    /// The payload handed to a surface when this entry gains a slot.
    pub fn slot_content(&self) -> SlotContent {
        SlotContent {
            key: self.key,
            label: self.label.clone(),
            body: self.body.clone(),
        }
    }
}

/// The full ordered entry sequence plus the parallel key vector used by
/// nearest-key search. Immutable once built.
#[derive(Debug, Clone)]
pub struct TimelineDataset {
    entries: Vec<TimelineEntry>,
    keys: Vec<f64>,
}

impl TimelineDataset {
    /// Build a dataset from entries in any order. Entries are sorted
    /// ascending by key; the sort is stable, so duplicate keys keep their
    /// source order.
    pub fn from_entries(mut entries: Vec<TimelineEntry>) -> Self {
        entries.sort_by(|a, b| a.key.total_cmp(&b.key));
        let keys = entries.iter().map(|e| e.key).collect();
        Self { entries, keys }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The bare key sequence, ascending. Used only for search.
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn entry(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: f64) -> TimelineEntry {
        TimelineEntry {
            key,
            label: None,
            body: SharedStr::from("body"),
        }
    }

    #[test]
    fn from_entries_sorts_ascending() {
        let dataset = TimelineDataset::from_entries(vec![entry(3.0), entry(1.0), entry(2.0)]);
        assert_eq!(dataset.keys(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn duplicate_keys_keep_source_order() {
        let a = TimelineEntry {
            key: 2.0,
            label: Some(SharedStr::from("first")),
            body: SharedStr::from(""),
        };
        let b = TimelineEntry {
            key: 2.0,
            label: Some(SharedStr::from("second")),
            body: SharedStr::from(""),
        };
        let dataset = TimelineDataset::from_entries(vec![a, b]);
        assert_eq!(dataset.entries()[0].label.as_deref(), Some("first"));
        assert_eq!(dataset.entries()[1].label.as_deref(), Some("second"));
    }

    #[test]
    fn keys_parallel_entries() {
        let dataset = TimelineDataset::from_entries(vec![entry(5.0), entry(4.0)]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.keys().len(), dataset.len());
        assert_eq!(dataset.entry(0).map(|e| e.key), Some(4.0));
        assert!(dataset.entry(2).is_none());
    }
}
