use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// Opaque identifier for a live view slot.
///
/// Handles are issued by the surface when a slot is created and stay valid
/// until the slot is removed. The engine never inspects the value; it only
/// hands it back for updates and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotHandle(pub u64);

/// The displayable payload of one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotContent {
    /// The entry's sort key, shown as the slot's number.
    pub key: f64,
    /// Optional short label (e.g. a symbol) shown as the slot's heading.
    pub label: Option<SharedStr>,
    /// Body text describing the entry.
    pub body: SharedStr,
}
