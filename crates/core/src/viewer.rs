use std::cmp::Ordering;

use numberline_protocol::SlotSurface;

use crate::model::TimelineDataset;
use crate::reconcile::Reconciler;
use crate::scroll::ScrollState;
use crate::search::find_nearest;
use crate::window::compute_window;

/// Fixed windowing constants, set at construction.
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    /// Logical rows that fit the viewport.
    pub visible_rows: usize,
    /// Extra rows kept resident above and below the visible range, to mask
    /// slot-creation latency during fast scrolling.
    pub buffer_rows: usize,
    /// Offset change per wheel tick. Fixed, so scroll speed is uniform
    /// regardless of input-device sensitivity.
    pub scroll_step: f64,
    /// Scroll distance representing one logical row.
    pub unit_height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            visible_rows: 8,
            buffer_rows: 5,
            scroll_step: 70.0,
            unit_height: 100.0,
        }
    }
}

/// The timeline component: dataset, scroll offset, and resident slot set,
/// owned together and mutated only through the event entry points below.
///
/// Everything is synchronous — each `on_*` call clamps the offset, computes
/// the window, and reconciles before returning, so no two passes can ever
/// overlap and the offset invariant holds at every observation point.
pub struct TimelineViewer {
    config: ViewerConfig,
    dataset: TimelineDataset,
    scroll: ScrollState,
    reconciler: Reconciler,
}

impl TimelineViewer {
    /// Build a viewer over a loaded dataset. A non-empty dataset opens at the
    /// entry whose key is nearest 1; an empty one stays inert at offset 0.
    pub fn new(dataset: TimelineDataset, config: ViewerConfig) -> Self {
        let mut scroll = ScrollState::new();
        if !dataset.is_empty() {
            let seed = find_nearest(dataset.keys(), 1.0);
            scroll.jump_to(seed, dataset.len(), config.visible_rows, config.unit_height);
        }
        Self {
            config,
            dataset,
            scroll,
            reconciler: Reconciler::new(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    /// Run one reconciliation pass against the current offset. Called by the
    /// event entry points; also the initial paint.
    pub fn render<S: SlotSurface>(&mut self, surface: &mut S) {
        let window = compute_window(
            self.scroll.offset(),
            self.dataset.len(),
            self.config.visible_rows,
            self.config.unit_height,
            self.config.buffer_rows,
        );
        self.reconciler.reconcile(&window, &self.dataset, surface);
    }

    /// One wheel tick: only the sign of the delta matters, the step magnitude
    /// is the fixed config constant. A zero delta is a no-op pass.
    pub fn on_wheel<S: SlotSurface>(&mut self, delta_y: f64, surface: &mut S) {
        let step = match delta_y.partial_cmp(&0.0) {
            Some(Ordering::Greater) => self.config.scroll_step,
            Some(Ordering::Less) => -self.config.scroll_step,
            _ => 0.0,
        };
        self.scroll.apply(
            step,
            self.dataset.len(),
            self.config.visible_rows,
            self.config.unit_height,
        );
        self.render(surface);
    }

    /// One search edit: jump to the entry whose key is nearest the query.
    /// An empty or non-numeric query falls back to negative infinity, which
    /// the nearest-match rule resolves to index 0. An empty dataset skips the
    /// search entirely.
    pub fn on_query<S: SlotSurface>(&mut self, query: &str, surface: &mut S) {
        if !self.dataset.is_empty() {
            let target = query.trim().parse::<f64>().unwrap_or(f64::NEG_INFINITY);
            let index = find_nearest(self.dataset.keys(), target);
            self.scroll.jump_to(
                index,
                self.dataset.len(),
                self.config.visible_rows,
                self.config.unit_height,
            );
        }
        self.render(surface);
    }
}
