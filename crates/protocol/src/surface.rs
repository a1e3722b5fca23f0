use crate::effects::SlotEffect;
use crate::types::{SlotContent, SlotHandle};

/// The rendering surface the engine reconciles against.
///
/// One implementation per front end: the terminal UI backs this with a slot
/// store it paints each frame, the wasm bridge with a [`RecordingSurface`]
/// whose effect log is shipped to the browser host as JSON.
///
/// Positions are percentages of the viewport height (`top_pct`); `faded`
/// marks slots that must stay resident but visually suppressed.
pub trait SlotSurface {
    /// Materialize a slot for new content. The returned handle identifies
    /// the slot in later `update_slot`/`remove_slot` calls.
    fn create_slot(&mut self, content: SlotContent, top_pct: f64, faded: bool) -> SlotHandle;

    /// Reposition an existing slot and refresh its visibility.
    fn update_slot(&mut self, handle: SlotHandle, top_pct: f64, faded: bool);

    /// Tear down a slot.
    fn remove_slot(&mut self, handle: SlotHandle);

    /// Run content post-processing over the given slots only. Called at most
    /// once per reconciliation pass, with exactly the handles created in it.
    fn retypeset(&mut self, scope: &[SlotHandle]);
}

/// A surface that records every call as a [`SlotEffect`].
///
/// Handles are issued sequentially. The effect log accumulates across calls
/// until drained with [`RecordingSurface::take_effects`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    effects: Vec<SlotEffect>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return the effects recorded since the last call.
    pub fn take_effects(&mut self) -> Vec<SlotEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Effects recorded so far, without draining.
    pub fn effects(&self) -> &[SlotEffect] {
        &self.effects
    }
}

impl SlotSurface for RecordingSurface {
    fn create_slot(&mut self, content: SlotContent, top_pct: f64, faded: bool) -> SlotHandle {
        let handle = SlotHandle(self.next_handle);
        self.next_handle += 1;
        self.effects.push(SlotEffect::Create {
            handle,
            content,
            top_pct,
            faded,
        });
        handle
    }

    fn update_slot(&mut self, handle: SlotHandle, top_pct: f64, faded: bool) {
        self.effects.push(SlotEffect::Update {
            handle,
            top_pct,
            faded,
        });
    }

    fn remove_slot(&mut self, handle: SlotHandle) {
        self.effects.push(SlotEffect::Remove { handle });
    }

    fn retypeset(&mut self, scope: &[SlotHandle]) {
        self.effects.push(SlotEffect::Retypeset {
            scope: scope.to_vec(),
        });
    }
}
