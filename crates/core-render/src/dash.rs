//! Self-adjusting dash pattern.
//!
//! A dashed side is split into an odd number of equal segments that exactly
//! tile its run length. With an equal on/off dash starting at phase 0 the
//! first and last segments are both "on", so no side ends in half a gap at a
//! corner.
//!
//! ```text
//! count = floor(run / unit); if count is even: count -= 1
//! dash  = run / count
//! ```
//!
//! Degenerate inputs (zero, negative or non-finite run or unit) yield no
//! pattern and the caller skips the side. So does a run shorter than one
//! unit: its count floors to 0 and corrects to -1.

pub use core_border::DEFAULT_DASH_UNIT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    /// Length of each on and each off segment.
    pub unit: f32,
    pub phase: f32,
    /// Odd number of equal segments covering the run.
    pub segments: u32,
}

/// Segment count after parity correction. `<= 0` for runs shorter than `unit`.
pub fn corrected_count(run: f32, unit: f32) -> i64 {
    let mut count = (run / unit).floor() as i64;
    if count % 2 == 0 {
        count -= 1;
    }
    count
}

/// Dash pattern for a side of length `run` (sign ignored).
pub fn pattern_for(run: f32, unit: f32) -> Option<DashPattern> {
    let run = run.abs();
    if !run.is_finite() || run <= 0.0 || !unit.is_finite() || unit <= 0.0 {
        return None;
    }
    let count = corrected_count(run, unit);
    if count <= 0 {
        return None;
    }
    let segments = u32::try_from(count).unwrap_or(u32::MAX);
    Some(DashPattern {
        unit: run / segments as f32,
        phase: 0.0,
        segments,
    })
}

impl DashPattern {
    /// Drawn `(start, end)` offsets along the run.
    pub fn spans(&self) -> Vec<(f32, f32)> {
        (0..self.segments)
            .step_by(2)
            .map(|i| (i as f32 * self.unit, (i + 1) as f32 * self.unit))
            .collect()
    }

    /// Total length covered by all segments.
    pub fn covered(&self) -> f32 {
        self.unit * self.segments as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_count_drops_to_odd() {
        // 10 / 2.5 = 4 segments -> 3
        let p = pattern_for(10.0, 2.5).unwrap();
        assert_eq!(p.segments, 3);
        assert!((p.unit - 10.0 / 3.0).abs() < 1e-5);
        assert_eq!(p.phase, 0.0);
        let spans = p.spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].0, 0.0);
        assert!((spans[1].1 - 10.0).abs() < 1e-4);
    }

    #[test]
    fn odd_count_is_kept() {
        let p = pattern_for(12.5, 2.5).unwrap();
        assert_eq!(p.segments, 5);
        assert!((p.unit - 2.5).abs() < 1e-6);
    }

    #[test]
    fn fractional_run_floors_first() {
        // 11 / 2.5 = 4.4 -> 4 -> 3
        let p = pattern_for(11.0, 2.5).unwrap();
        assert_eq!(p.segments, 3);
        assert!((p.covered() - 11.0).abs() < 1e-4);
    }

    #[test]
    fn zero_run_has_no_pattern() {
        assert_eq!(pattern_for(0.0, 2.5), None);
        assert_eq!(pattern_for(-0.0, 2.5), None);
    }

    #[test]
    fn short_run_has_no_pattern() {
        assert_eq!(corrected_count(2.0, 2.5), -1);
        assert_eq!(pattern_for(2.0, 2.5), None);
        assert_eq!(pattern_for(-2.0, 2.5), None);
    }

    #[test]
    fn run_of_exactly_one_unit_is_one_dash() {
        let p = pattern_for(2.5, 2.5).unwrap();
        assert_eq!(p.segments, 1);
        assert_eq!(p.spans(), vec![(0.0, 2.5)]);
    }

    #[test]
    fn negative_run_uses_length() {
        assert_eq!(pattern_for(-10.0, 2.5), pattern_for(10.0, 2.5));
    }

    #[test]
    fn bad_unit_or_run_has_no_pattern() {
        assert_eq!(pattern_for(10.0, 0.0), None);
        assert_eq!(pattern_for(10.0, -2.5), None);
        assert_eq!(pattern_for(f32::NAN, 2.5), None);
        assert_eq!(pattern_for(f32::INFINITY, 2.5), None);
        assert_eq!(pattern_for(10.0, f32::NAN), None);
    }
}
