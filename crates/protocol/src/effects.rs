use serde::{Deserialize, Serialize};

use crate::types::{SlotContent, SlotHandle};

/// One recorded surface call.
///
/// A reconciliation pass produces a short sequence of effects. Surfaces that
/// live in the same process apply them directly through [`crate::SlotSurface`];
/// remote surfaces (e.g. a browser host behind the wasm bridge) replay the
/// serialized list instead — each effect carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotEffect {
    /// Materialize a new slot at the given viewport position.
    ///
    /// `top_pct` is the slot's top edge as a percentage of the viewport
    /// height; `faded` marks buffer slots that are resident but should not
    /// be fully visible.
    Create {
        handle: SlotHandle,
        content: SlotContent,
        top_pct: f64,
        faded: bool,
    },

    /// Move an existing slot and refresh its visibility.
    Update {
        handle: SlotHandle,
        top_pct: f64,
        faded: bool,
    },

    /// Tear down a slot that left the resident window.
    Remove { handle: SlotHandle },

    /// Run content post-processing (typesetting) over the given slots only.
    /// Issued at most once per pass, scoped to slots created in that pass.
    Retypeset { scope: Vec<SlotHandle> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_str::SharedStr;

    #[test]
    fn effects_roundtrip_as_json() {
        let effects = vec![
            SlotEffect::Create {
                handle: SlotHandle(3),
                content: SlotContent {
                    key: 42.0,
                    label: Some(SharedStr::from("τ/2·13.37…")),
                    body: SharedStr::from("the answer"),
                },
                top_pct: 12.5,
                faded: false,
            },
            SlotEffect::Update {
                handle: SlotHandle(3),
                top_pct: -8.75,
                faded: true,
            },
            SlotEffect::Remove {
                handle: SlotHandle(3),
            },
            SlotEffect::Retypeset {
                scope: vec![SlotHandle(4), SlotHandle(5)],
            },
        ];

        let json = serde_json::to_string(&effects).unwrap();
        let back: Vec<SlotEffect> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effects);
    }

    #[test]
    fn optional_label_serializes_as_null() {
        let content = SlotContent {
            key: 1.0,
            label: None,
            body: SharedStr::from("unity"),
        };
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains("\"label\":null"));
    }
}
