/// Clamp a scroll offset to `[0, max(0, (entry_count - visible_rows) * unit_height)]`.
///
/// The upper bound is the offset that puts the last `visible_rows` entries in
/// view; fewer entries than visible rows means no scrolling at all.
pub fn clamp(offset: f64, entry_count: usize, visible_rows: usize, unit_height: f64) -> f64 {
    let max = entry_count.saturating_sub(visible_rows) as f64 * unit_height;
    offset.clamp(0.0, max.max(0.0))
}

/// The single continuous scroll offset.
///
/// The offset is private and every mutation re-clamps, so the invariant above
/// holds at every observation point. Only `apply` and `jump_to` change it.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Add a signed step to the offset and re-clamp.
    pub fn apply(&mut self, delta: f64, entry_count: usize, visible_rows: usize, unit_height: f64) {
        self.offset = clamp(self.offset + delta, entry_count, visible_rows, unit_height);
    }

    /// Set the offset so `index` is the top visible row, re-clamped.
    pub fn jump_to(
        &mut self,
        index: usize,
        entry_count: usize,
        visible_rows: usize,
        unit_height: f64,
    ) {
        self.offset = clamp(
            index as f64 * unit_height,
            entry_count,
            visible_rows,
            unit_height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_holds_invariant_for_extreme_inputs() {
        // 20 entries, 8 visible, unit 100 -> max offset 1200
        for offset in [-1e18, -70.0, 0.0, 600.0, 1200.0, 1200.1, 1e18] {
            let clamped = clamp(offset, 20, 8, 100.0);
            assert!((0.0..=1200.0).contains(&clamped), "offset {offset} -> {clamped}");
        }
        assert_eq!(clamp(5000.0, 20, 8, 100.0), 1200.0);
        assert_eq!(clamp(-5.0, 20, 8, 100.0), 0.0);
    }

    #[test]
    fn fewer_entries_than_visible_rows_pins_to_zero() {
        assert_eq!(clamp(350.0, 3, 8, 100.0), 0.0);
        assert_eq!(clamp(350.0, 0, 8, 100.0), 0.0);
    }

    #[test]
    fn apply_accumulates_and_clamps() {
        let mut scroll = ScrollState::new();
        // 18 wheel ticks of +70 would reach 1260; the max for 20 entries is 1200.
        for _ in 0..18 {
            scroll.apply(70.0, 20, 8, 100.0);
        }
        assert_eq!(scroll.offset(), 1200.0);
        scroll.apply(-70.0, 20, 8, 100.0);
        assert_eq!(scroll.offset(), 1130.0);
    }

    #[test]
    fn apply_never_goes_negative() {
        let mut scroll = ScrollState::new();
        scroll.apply(-70.0, 20, 8, 100.0);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn jump_to_lands_on_row_boundary() {
        let mut scroll = ScrollState::new();
        scroll.jump_to(5, 20, 8, 100.0);
        assert_eq!(scroll.offset(), 500.0);
        // Jumping past the end clamps to the max offset.
        scroll.jump_to(19, 20, 8, 100.0);
        assert_eq!(scroll.offset(), 1200.0);
    }
}
