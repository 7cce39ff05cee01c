//! Mathematical property tests
//!
//! Checks the scheduler and the decay curves against their defining rules
//! over every short grade sequence and a set of long ones.

use chrono::Duration;
use mnemo_core::decay::{retention, review_gain, sample_gain};
use mnemo_core::ReviewGrade;
use mnemo_e2e_tests::harness::EASE_FLOOR;
use mnemo_e2e_tests::{GradeScenarioFactory, ReviewHarness};

// ============================================================================
// SCHEDULER RULES
// ============================================================================

#[test]
fn test_every_step_of_every_six_review_sequence() {
    let harness = ReviewHarness::new();

    for grades in GradeScenarioFactory::all_sequences(6) {
        let mut state = harness.fresh_state();
        let mut today = harness.start;

        for &grade in &grades {
            let before = state.clone();
            let outcome = harness.scheduler.review(&mut state, grade, today).unwrap();

            assert_eq!(outcome.interval_days, state.interval_days);
            assert_eq!(outcome.ease_factor, state.ease_factor);
            assert_eq!(state.last_review_date, today);
            assert_eq!(
                state.next_review_date,
                today + Duration::days(i64::from(state.interval_days))
            );

            if grade < 3 {
                assert_eq!(state.repetition_number, 0);
                assert_eq!(state.interval_days, 1);
                assert_eq!(state.ease_factor, before.ease_factor);
            } else {
                assert_eq!(state.repetition_number, before.repetition_number + 1);
                let expected = match before.repetition_number {
                    0 => 1,
                    1 => 6,
                    _ => (f64::from(before.interval_days) * state.ease_factor).floor() as u32,
                };
                assert_eq!(state.interval_days, expected, "grades {:?}", grades);
            }

            assert!(state.ease_factor >= EASE_FLOOR);
            today = state.next_review_date;
        }
    }
}

#[test]
fn test_default_perfect_streak_grows_without_ceiling() {
    let harness = ReviewHarness::new();
    let (_, history) = harness.replay_fixed(&GradeScenarioFactory::perfect_streak(14).grades);

    let intervals: Vec<u32> = history.iter().map(|r| r.interval_days).collect();
    assert_eq!(
        intervals,
        vec![
            1, 6, 16, 46, 138, 427, 1_366, 4_507, 15_323, 53_630, 193_068, 714_351,
            2_714_533, 10_586_678,
        ]
    );
    for pair in history.windows(2).skip(1) {
        let expected = (f64::from(pair[0].interval_days) * pair[1].ease_factor).floor() as u32;
        assert_eq!(pair[1].interval_days, expected);
    }
}

#[test]
fn test_ease_floor_holds_for_long_sequences() {
    let harness = ReviewHarness::new();
    let scenarios = [
        GradeScenarioFactory::always_hard(1_000),
        GradeScenarioFactory::cycled(&[3, 0, 3, 3, 1], 1_000),
        GradeScenarioFactory::cycled(&[3, 4, 3, 2, 5, 3], 1_000),
    ];

    for scenario in scenarios {
        let (state, history) = harness.replay_fixed(&scenario.grades);
        assert!(history.iter().all(|r| r.ease_factor >= EASE_FLOOR), "{}", scenario.description);
        harness.assert_state_invariants(&state);
    }
}

#[test]
fn test_repeated_hard_passes_converge_on_floor() {
    let harness = ReviewHarness::new();
    let (state, history) = harness.replay_fixed(&GradeScenarioFactory::always_hard(20).grades);

    // 2.5 -> 1.3 takes ceil(1.2 / 0.14) = 9 hard passes
    assert!(history[7].ease_factor > EASE_FLOOR);
    assert_eq!(history[8].ease_factor, EASE_FLOOR);
    assert_eq!(state.ease_factor, EASE_FLOOR);
}

#[test]
fn test_ease_change_is_monotonic_in_grade() {
    let harness = ReviewHarness::new();
    let mut previous = f64::NEG_INFINITY;
    for grade in [ReviewGrade::Hard, ReviewGrade::Good, ReviewGrade::Perfect] {
        let ease = harness.scheduler.next_ease_factor(2.0, grade);
        assert!(ease > previous);
        previous = ease;
    }
}

// ============================================================================
// DECAY CURVES
// ============================================================================

#[test]
fn test_review_gain_peak_is_exact() {
    for optimal in [0.25, 1.0, 3.0, 7.5, 10.0, 30.0, 365.0] {
        assert_eq!(review_gain(optimal, optimal).unwrap(), 1.0);
        assert_eq!(review_gain(0.0, optimal).unwrap(), 0.0);
    }
}

#[test]
fn test_review_gain_never_exceeds_peak() {
    let points = sample_gain(10.0, 50.0, 501).unwrap();
    let (best_idx, best) = points
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.value.total_cmp(&b.1.value))
        .unwrap();

    assert_eq!(best.elapsed_days, 10.0);
    assert_eq!(best_idx, 100);
    assert!(points.iter().all(|p| p.value <= 1.0));
}

#[test]
fn test_retention_properties() {
    for stability in [0.5, 1.0, 2.0, 10.0] {
        assert_eq!(retention(0.0, stability).unwrap(), 1.0);

        let mut previous = 1.0;
        for step in 1..=200 {
            let r = retention(step as f64 * 0.1, stability).unwrap();
            assert!(r < previous);
            assert!(r > 0.0 && r <= 1.0);
            previous = r;
        }
    }
}
