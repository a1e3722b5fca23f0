use std::collections::HashMap;

use numberline_protocol::{SlotHandle, SlotSurface};

use crate::model::TimelineDataset;
use crate::window::Window;

/// Diffs the resident slot set against the required window and drives the
/// surface: remove what left the window, move what stayed, create what
/// entered, then typeset the newly created slots only.
///
/// Owns the index-to-handle map — the one mutable collection in the engine.
/// A slot is never torn down and recreated just to move; creation happens
/// only for indices with no existing slot, which makes back-to-back passes
/// over an unchanged window produce no effects at all.
#[derive(Debug, Default)]
pub struct Reconciler {
    slots: HashMap<usize, SlotHandle>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently resident slots.
    pub fn resident_count(&self) -> usize {
        self.slots.len()
    }

    pub fn reconcile<S: SlotSurface>(
        &mut self,
        window: &Window,
        dataset: &TimelineDataset,
        surface: &mut S,
    ) {
        // Drop slots that left the window (plus buffer).
        let stale: Vec<usize> = self
            .slots
            .keys()
            .copied()
            .filter(|index| !window.range.contains(index))
            .collect();
        for index in stale {
            if let Some(handle) = self.slots.remove(&index) {
                surface.remove_slot(handle);
            }
        }

        // Move residents, create newcomers, in ascending index order.
        let mut created: Vec<SlotHandle> = Vec::new();
        for placement in &window.placements {
            match self.slots.get(&placement.index) {
                Some(&handle) => {
                    surface.update_slot(handle, placement.top_pct, placement.faded);
                }
                None => {
                    // The window is constructed within [0, len); a miss here
                    // is a bug, not a runtime condition.
                    let entry = &dataset.entries()[placement.index];
                    let handle =
                        surface.create_slot(entry.slot_content(), placement.top_pct, placement.faded);
                    self.slots.insert(placement.index, handle);
                    created.push(handle);
                }
            }
        }

        // One typesetting pass scoped to this pass's new slots. Skipped when
        // nothing was created so an unchanged window stays effect-free.
        if !created.is_empty() {
            surface.retypeset(&created);
        }
    }
}
