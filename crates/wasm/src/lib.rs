//! Browser bridge: the JS host fetches the dataset, feeds wheel and query
//! events in, and applies the returned slot effects to the DOM (create or
//! remove nodes, set `top` percentages, toggle a hidden class, and queue
//! typesetting for the `Retypeset` scope).

use std::sync::Mutex;

use numberline_core::{TimelineViewer, ViewerConfig, parse_dataset};
use numberline_protocol::RecordingSurface;
use wasm_bindgen::prelude::*;

static VIEWER: Mutex<Option<(TimelineViewer, RecordingSurface)>> = Mutex::new(None);

fn with_viewer<T>(
    f: impl FnOnce(&mut TimelineViewer, &mut RecordingSurface) -> T,
) -> Result<T, JsError> {
    let mut guard = VIEWER
        .lock()
        .map_err(|_| JsError::new("viewer lock poisoned"))?;
    match guard.as_mut() {
        Some((viewer, surface)) => Ok(f(viewer, surface)),
        None => Err(JsError::new("no dataset loaded")),
    }
}

/// Parse a dataset (JSON bytes), install the viewer, and run the initial
/// pass. Returns the entry count for the host's status label. The initial
/// paint's effects are pending; drain them with [`take_effects`].
#[wasm_bindgen]
pub fn load_dataset(data: &[u8]) -> Result<usize, JsError> {
    let dataset = parse_dataset(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut viewer = TimelineViewer::new(dataset, ViewerConfig::default());
    let mut surface = RecordingSurface::new();
    viewer.render(&mut surface);
    let count = viewer.entry_count();

    let mut guard = VIEWER
        .lock()
        .map_err(|_| JsError::new("viewer lock poisoned"))?;
    *guard = Some((viewer, surface));
    Ok(count)
}

/// Drain pending slot effects as JSON.
#[wasm_bindgen]
pub fn take_effects() -> Result<String, JsError> {
    let effects = with_viewer(|_, surface| surface.take_effects())?;
    serde_json::to_string(&effects).map_err(|e| JsError::new(&e.to_string()))
}

/// Feed one wheel event; returns the resulting slot effects as JSON.
#[wasm_bindgen]
pub fn on_wheel(delta_y: f64) -> Result<String, JsError> {
    let effects = with_viewer(|viewer, surface| {
        viewer.on_wheel(delta_y, surface);
        surface.take_effects()
    })?;
    serde_json::to_string(&effects).map_err(|e| JsError::new(&e.to_string()))
}

/// Feed one search edit; returns the resulting slot effects as JSON.
#[wasm_bindgen]
pub fn on_query(query: &str) -> Result<String, JsError> {
    let effects = with_viewer(|viewer, surface| {
        viewer.on_query(query, surface);
        surface.take_effects()
    })?;
    serde_json::to_string(&effects).map_err(|e| JsError::new(&e.to_string()))
}

/// Entry count of the loaded dataset.
#[wasm_bindgen]
pub fn entry_count() -> Result<usize, JsError> {
    with_viewer(|viewer, _| viewer.entry_count())
}
