use std::ops::Range;

/// Where one resident entry sits in the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPlacement {
    pub index: usize,
    /// Top edge as a percentage of the viewport height. One logical row
    /// occupies `100 / visible_rows` percent.
    pub top_pct: f64,
    /// Resident but outside the fade margin: keep the slot, suppress it
    /// visually.
    pub faded: bool,
}

/// The contiguous index range that must be resident for a given offset,
/// with each index's placement. `placements` is parallel to `range`.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub range: Range<usize>,
    pub placements: Vec<SlotPlacement>,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn placement(&self, index: usize) -> Option<&SlotPlacement> {
        if self.range.contains(&index) {
            self.placements.get(index - self.range.start)
        } else {
            None
        }
    }
}

/// Map a scroll offset to the window of entries that must be resident.
///
/// The row under the viewport top is `center = floor(offset / unit_height)`;
/// the window extends `buffer_rows` above it and `visible_rows + buffer_rows`
/// below, clipped to `[0, entry_count)`. Each resident index gets a viewport
/// fraction shifted by the sub-row remainder of the offset, so scrolling moves
/// slots continuously between row boundaries.
///
/// Pure: safe to call once per input event with no accumulated state.
pub fn compute_window(
    offset: f64,
    entry_count: usize,
    visible_rows: usize,
    unit_height: f64,
    buffer_rows: usize,
) -> Window {
    if entry_count == 0 {
        return Window {
            range: 0..0,
            placements: Vec::new(),
        };
    }

    let center = (offset / unit_height).floor() as usize;
    let end = (center + visible_rows + buffer_rows).min(entry_count);
    let start = center.saturating_sub(buffer_rows).min(end);

    let row_pct = 100.0 / visible_rows as f64;
    let shift_pct = (offset % unit_height) / unit_height * row_pct;
    let fade_margin = buffer_rows as f64 * row_pct;

    let mut placements = Vec::with_capacity(end - start);
    for index in start..end {
        let row = index as f64 - center as f64;
        let top_pct = row * row_pct - shift_pct;
        let faded = top_pct < -fade_margin || top_pct > 100.0 + fade_margin;
        placements.push(SlotPlacement {
            index,
            top_pct,
            faded,
        });
    }

    Window {
        range: start..end,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: usize = 8;
    const UNIT: f64 = 100.0;
    const BUFFER: usize = 5;

    fn window(offset: f64, entry_count: usize) -> Window {
        compute_window(offset, entry_count, VISIBLE, UNIT, BUFFER)
    }

    #[test]
    fn top_of_20_entries_yields_0_to_13() {
        let w = window(0.0, 20);
        assert_eq!(w.range, 0..13);
        assert_eq!(w.placements.len(), 13);
    }

    #[test]
    fn range_never_exceeds_visible_plus_two_buffers() {
        for step in 0..200 {
            let offset = step as f64 * 35.0;
            let w = window(offset.min(9200.0), 100);
            assert!(w.range.len() <= VISIBLE + 2 * BUFFER);
            assert!(w.range.end <= 100);
        }
    }

    #[test]
    fn mid_scroll_extends_buffer_both_ways() {
        // center = 50: window is [45, 63)
        let w = window(5000.0, 100);
        assert_eq!(w.range, 45..63);
    }

    #[test]
    fn empty_dataset_yields_empty_window() {
        let w = window(0.0, 0);
        assert!(w.is_empty());
        assert!(w.placements.is_empty());
    }

    #[test]
    fn placements_on_row_boundary() {
        let w = window(500.0, 100);
        assert_eq!(w.range, 0..18);
        // The center row sits flush at the viewport top; each row is 12.5%.
        assert_eq!(w.placement(5).map(|p| p.top_pct), Some(0.0));
        assert_eq!(w.placement(6).map(|p| p.top_pct), Some(12.5));
        assert_eq!(w.placement(0).map(|p| p.top_pct), Some(-62.5));
        assert_eq!(w.placement(17).map(|p| p.top_pct), Some(150.0));
        assert!(w.placement(18).is_none());
    }

    #[test]
    fn sub_row_offset_shifts_all_placements() {
        let flush = window(500.0, 100);
        let shifted = window(570.0, 100);
        assert_eq!(flush.range, shifted.range);
        for (a, b) in flush.placements.iter().zip(&shifted.placements) {
            let delta = a.top_pct - b.top_pct;
            // 70/100 of a 12.5% row
            assert!((delta - 8.75).abs() < 1e-9, "shift was {delta}");
        }
    }

    #[test]
    fn fade_marks_only_outside_the_margin() {
        // Flush on a row boundary nothing exceeds the margin.
        let w = window(500.0, 100);
        assert!(w.placements.iter().all(|p| !p.faded));

        // Any sub-row shift pushes the topmost buffer row past the margin.
        let w = window(510.0, 100);
        let first = &w.placements[0];
        assert!(first.faded, "top buffer row at {} should fade", first.top_pct);
        let last = w.placements.last().map(|p| p.faded);
        assert_eq!(last, Some(false));
    }
}
