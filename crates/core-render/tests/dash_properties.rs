//! Property tests for dash sizing.

use core_render::dash::{corrected_count, pattern_for};
use proptest::prelude::*;

proptest! {
    // Segment count is always odd and at least one once the run covers a unit.
    #[test]
    fn segments_are_odd(run in 20.0f32..2000.0, unit in 0.1f32..20.0) {
        let p = pattern_for(run, unit).unwrap();
        prop_assert!(p.segments >= 1);
        prop_assert_eq!(p.segments % 2, 1);
    }

    // Equal segments tile the run exactly: no trailing partial gap.
    #[test]
    fn segments_tile_run(run in 20.0f32..2000.0, unit in 0.1f32..20.0) {
        let p = pattern_for(run, unit).unwrap();
        prop_assert!((p.covered() - run).abs() <= run * 1e-4);
        let spans = p.spans();
        prop_assert_eq!(spans.first().map(|s| s.0), Some(0.0));
        let last_end = spans.last().map(|s| s.1).unwrap();
        prop_assert!((last_end - run).abs() <= run * 1e-4);
        prop_assert_eq!(spans.len() as u32, p.segments / 2 + 1);
    }

    // Parity correction never moves more than one step from floor(run/unit).
    #[test]
    fn correction_is_at_most_one(run in 0.0f32..2000.0, unit in 0.1f32..20.0) {
        let raw = (run / unit).floor() as i64;
        let c = corrected_count(run, unit);
        prop_assert!(c == raw || c == raw - 1);
        prop_assert!(c % 2 != 0);
    }

    // Runs shorter than one unit correct to a non-positive count: no pattern.
    #[test]
    fn short_runs_have_no_pattern(unit in 0.1f32..20.0, frac in 0.0f32..0.99) {
        prop_assert_eq!(pattern_for(unit * frac, unit), None);
    }

    #[test]
    fn sign_of_run_is_ignored(run in 0.01f32..2000.0) {
        prop_assert_eq!(pattern_for(-run, 2.5), pattern_for(run, 2.5));
    }
}
