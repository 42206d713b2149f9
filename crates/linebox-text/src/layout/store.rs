use core::ops::Range;

use crate::layout::TextRun;

/// Where a text offset landed inside the run list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLocation {
    /// Index of the run in store order.
    pub index: usize,
    /// Byte position inside the run, `0..=run.len()`.
    pub position: usize,
}

/// Positioned runs of one text node in visual order
/// (top to bottom, then left to right).
#[derive(Debug, Clone, Default)]
pub struct RunStore {
    runs: Vec<TextRun>,
}

impl RunStore {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    pub fn push(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Drop every run, keeping the allocation for the next layout pass.
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextRun> {
        self.runs.get(index)
    }

    pub fn first(&self) -> Option<&TextRun> {
        self.runs.first()
    }

    pub fn last(&self) -> Option<&TextRun> {
        self.runs.last()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TextRun> {
        self.runs.iter()
    }

    pub fn as_slice(&self) -> &[TextRun] {
        &self.runs
    }

    /// Locate the run holding byte `offset` and the position inside it.
    ///
    /// Runs are walked in store order, accumulating their extents; an
    /// offset beyond the last run clamps to that run's end. Offsets are
    /// only meaningful for logically ordered runs, so the walk gives up
    /// (`None`) as soon as it touches a reversed run.
    pub fn find_run(&self, offset: usize) -> Option<RunLocation> {
        let first = self.runs.first()?;
        if first.reversed {
            tracing::debug!(offset, "find_run: reversed run, no logical position");
            return None;
        }

        let mut index = 0;
        let mut end = first.end();
        while offset > end && index + 1 < self.runs.len() {
            index += 1;
            let run = &self.runs[index];
            if run.reversed {
                tracing::debug!(offset, index, "find_run: reversed run, no logical position");
                return None;
            }
            end = run.end();
        }

        let len = self.runs[index].len();
        let position = if offset > end {
            len
        } else {
            len.saturating_sub(end - offset)
        };
        Some(RunLocation { index, position })
    }

    /// Index of the first run whose top is at or below `y`.
    ///
    /// Runs are sorted by `y`; equal tops resolve to the earliest run.
    pub fn first_run_at_or_below(&self, y: f32) -> usize {
        self.runs.partition_point(|run| run.y < y)
    }

    /// Runs whose line band overlaps `[top, top + height]`.
    pub fn runs_in_band(&self, top: f32, height: f32, line_height: f32) -> Range<usize> {
        let mut start = self.first_run_at_or_below(top);
        while start > 0 && self.runs[start - 1].intersects_band(top, height, line_height) {
            start -= 1;
        }
        let mut end = start;
        while end < self.runs.len() && self.runs[end].intersects_band(top, height, line_height) {
            end += 1;
        }
        start..end
    }

    /// Horizontal extent `(min x, max right edge)` over all runs.
    pub fn horizontal_extent(&self) -> Option<(f32, f32)> {
        let first = self.runs.first()?;
        let init = (first.x, first.right());
        Some(self.runs.iter().fold(init, |(min_x, max_x), run| {
            (min_x.min(run.x), max_x.max(run.right()))
        }))
    }
}

impl<'a> IntoIterator for &'a RunStore {
    type Item = &'a TextRun;
    type IntoIter = core::slice::Iter<'a, TextRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(range: Range<usize>, y: f32, reversed: bool) -> TextRun {
        TextRun {
            x: 0.0,
            y,
            width: range.len() as f32 * 8.0,
            range,
            baseline: 12.0,
            reversed,
            first_line: false,
        }
    }

    fn two_lines() -> RunStore {
        // "Hello\nworld": newline at 5 is not part of any run.
        let mut store = RunStore::new();
        store.push(run(0..5, 0.0, false));
        store.push(run(6..11, 16.0, false));
        store
    }

    #[test]
    fn find_run_empty_store() {
        assert_eq!(RunStore::new().find_run(0), None);
    }

    #[test]
    fn find_run_walks_runs() {
        let store = two_lines();
        assert_eq!(store.find_run(0), Some(RunLocation { index: 0, position: 0 }));
        assert_eq!(store.find_run(3), Some(RunLocation { index: 0, position: 3 }));
        assert_eq!(store.find_run(5), Some(RunLocation { index: 0, position: 5 }));
        assert_eq!(store.find_run(6), Some(RunLocation { index: 1, position: 0 }));
        assert_eq!(store.find_run(9), Some(RunLocation { index: 1, position: 3 }));
    }

    #[test]
    fn find_run_clamps_past_end() {
        let store = two_lines();
        assert_eq!(store.find_run(40), Some(RunLocation { index: 1, position: 5 }));
    }

    #[test]
    fn find_run_gives_up_on_reversed_runs() {
        let mut store = RunStore::new();
        store.push(run(0..5, 0.0, false));
        store.push(run(6..11, 16.0, true));
        // Offsets inside the first run never touch the reversed one.
        assert_eq!(store.find_run(2), Some(RunLocation { index: 0, position: 2 }));
        assert_eq!(store.find_run(8), None);

        let mut store = RunStore::new();
        store.push(run(0..5, 0.0, true));
        assert_eq!(store.find_run(2), None);
    }

    #[test]
    fn band_queries() {
        let mut store = RunStore::new();
        for line in 0..5 {
            store.push(run(line * 4..line * 4 + 3, line as f32 * 20.0, false));
        }
        assert_eq!(store.first_run_at_or_below(40.0), 2);
        assert_eq!(store.first_run_at_or_below(41.0), 3);
        assert_eq!(store.first_run_at_or_below(500.0), 5);
        // Band 50..54 overlaps the run at 40 (bottom 40+12+16); the run at 20
        // ends at 48 and the run at 60 starts below the band.
        assert_eq!(store.runs_in_band(50.0, 4.0, 16.0), 2..3);
        assert_eq!(store.runs_in_band(0.0, 100.0, 16.0), 0..5);
        assert_eq!(store.runs_in_band(200.0, 10.0, 16.0), 5..5);
    }

    #[test]
    fn horizontal_extent() {
        let mut store = RunStore::new();
        assert_eq!(store.horizontal_extent(), None);
        store.push(TextRun { x: 10.0, ..run(0..2, 0.0, false) });
        store.push(TextRun { x: 4.0, ..run(3..4, 16.0, false) });
        assert_eq!(store.horizontal_extent(), Some((4.0, 26.0)));
    }
}
