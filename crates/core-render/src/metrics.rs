//! Border render counters.
//!
//! Counters are atomics so one renderer can be shared by threads laying out
//! different pages. They record what the renderer did, not what was asked:
//! a cell whose sides are all zero-width counts as rendered with zero sides
//! stroked.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RenderMetrics {
    /// Cells that went through the border pass (save/restore issued).
    pub cells_rendered: AtomicU64,
    /// Cells skipped because no side was enabled.
    pub cells_skipped: AtomicU64,
    /// Sides stroked, solid and dashed.
    pub sides_stroked: AtomicU64,
    /// Sub-count of `sides_stroked` drawn with a dash pattern.
    pub dashed_sides: AtomicU64,
    /// Dashed sides dropped because their run length had no valid pattern.
    pub degenerate_dashed_sides: AtomicU64,
    /// Chained hooks invoked after the border pass.
    pub hooks_invoked: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderMetricsSnapshot {
    pub cells_rendered: u64,
    pub cells_skipped: u64,
    pub sides_stroked: u64,
    pub dashed_sides: u64,
    pub degenerate_dashed_sides: u64,
    pub hooks_invoked: u64,
}

impl RenderMetrics {
    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add(counter: &AtomicU64, n: u64) {
        if n > 0 {
            counter.fetch_add(n, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> RenderMetricsSnapshot {
        RenderMetricsSnapshot {
            cells_rendered: self.cells_rendered.load(Ordering::Relaxed),
            cells_skipped: self.cells_skipped.load(Ordering::Relaxed),
            sides_stroked: self.sides_stroked.load(Ordering::Relaxed),
            dashed_sides: self.dashed_sides.load(Ordering::Relaxed),
            degenerate_dashed_sides: self.degenerate_dashed_sides.load(Ordering::Relaxed),
            hooks_invoked: self.hooks_invoked.load(Ordering::Relaxed),
        }
    }
}
