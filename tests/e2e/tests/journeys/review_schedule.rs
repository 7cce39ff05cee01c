//! Journey: a learner reviews one card from creation to mastery
//!
//! Walks the full flow a caller sees:
//! 1. Create a card on a fixed day
//! 2. Replay a grade sequence through a review session
//! 3. Read back history, summary and final state
//! 4. Persist and restore the card state as JSON

use chrono::{Duration, NaiveDate};
use mnemo_core::{
    Card, CardMemoryState, ReviewGrade, ReviewScheduler, ReviewSession, ReviewTiming,
};
use mnemo_e2e_tests::{GradeScenarioFactory, ReviewHarness};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_struggle_then_mastery_same_day() {
    let harness = ReviewHarness::new();
    let scenario = GradeScenarioFactory::struggle_then_mastery();
    let (state, history) = harness.replay_fixed(&scenario.grades);

    let intervals: Vec<String> = history.iter().map(|r| r.interval_days.to_string()).collect();
    assert_eq!(intervals.join(","), scenario.metadata["intervals"]);

    // Grade 3 costs 0.14, grade 4 is neutral, grade 5 adds 0.1
    let expected_ease = [2.36, 2.36, 2.46, 2.56, 2.66];
    for (record, want) in history.iter().zip(expected_ease) {
        assert!((record.ease_factor - want).abs() < 1e-9);
    }

    // Third review grows from the previous interval with the freshly updated ease
    assert_eq!(
        history[2].interval_days,
        (6.0 * history[2].ease_factor).floor() as u32
    );

    assert_eq!(state.repetition_number, 5);
    assert_eq!(state.interval_days, 93);
    assert_eq!(state.next_review_date, harness.start + Duration::days(93));
    harness.assert_state_invariants(&state);
    harness.assert_history_invariants(&history);
}

#[test]
fn test_on_schedule_reviews_follow_the_calendar() {
    let harness = ReviewHarness::new();
    let (state, history) = harness.replay_on_schedule(&[4, 4, 4, 4]);

    assert_eq!(history[0].reviewed_on, day(2026, 1, 1));
    assert_eq!(history[1].reviewed_on, day(2026, 1, 2));
    assert_eq!(history[2].reviewed_on, day(2026, 1, 8));
    for pair in history.windows(2) {
        assert_eq!(pair[1].reviewed_on, pair[0].next_review_date);
    }
    assert_eq!(state.last_review_date, history[3].reviewed_on);
    harness.assert_history_invariants(&history);
}

#[test]
fn test_lapse_mid_streak_resets_and_recovers() {
    let harness = ReviewHarness::new();
    let scenario = GradeScenarioFactory::lapse_and_recover();
    let lapse_at: usize = scenario.metadata["lapse_index"].parse().unwrap();
    let (state, history) = harness.replay_on_schedule(&scenario.grades);

    let before = &history[lapse_at - 1];
    let lapse = &history[lapse_at];
    assert!(before.interval_days > 6);
    assert_eq!(lapse.interval_days, 1);
    assert_eq!(lapse.ease_factor, before.ease_factor);

    // Streak restarts at the 1 / 6 tiers
    assert_eq!(history[lapse_at + 1].interval_days, 1);
    assert_eq!(history[lapse_at + 2].interval_days, 6);
    assert_eq!(state.repetition_number, 3);
}

#[test]
fn test_session_over_existing_state_appends_in_order() {
    let scheduler = ReviewScheduler::new();
    let start = day(2026, 5, 1);
    let mut session = ReviewSession::new(&scheduler, CardMemoryState::new(start));

    session.review(5, start).unwrap();
    session.review(5, day(2026, 5, 2)).unwrap();
    session
        .replay(&[4, 3], ReviewTiming::OnSchedule)
        .unwrap();

    let grades: Vec<ReviewGrade> = session.history().iter().map(|r| r.grade).collect();
    assert_eq!(
        grades,
        vec![
            ReviewGrade::Perfect,
            ReviewGrade::Perfect,
            ReviewGrade::Good,
            ReviewGrade::Hard
        ]
    );
    assert_eq!(session.summary().reviews, 4);
    assert_eq!(session.summary().lapses, 0);
}

#[test]
fn test_card_state_survives_json_round_trip() {
    let scheduler = ReviewScheduler::new();
    let start = day(2026, 9, 1);
    let mut card = Card::new(
        &scheduler,
        "Tech",
        "Digital Twin",
        "Virtual model of a physical system",
        start,
    );

    card.review(&scheduler, 4, start).unwrap();
    card.review(&scheduler, 5, card.memory.next_review_date).unwrap();

    let stored = serde_json::to_string(&card).unwrap();
    let mut restored: Card = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, card);

    // A restored card keeps scheduling exactly where it left off
    let due = restored.memory.next_review_date;
    let from_restored = restored.review(&scheduler, 5, due).unwrap();
    let from_original = card.review(&scheduler, 5, due).unwrap();
    assert_eq!(from_restored, from_original);
}

#[test]
fn test_preview_matches_actual_review() {
    let harness = ReviewHarness::new();
    let (state, _) = harness.replay_on_schedule(&[5, 4, 3]);
    let due = state.next_review_date;
    let preview = harness.scheduler.preview(&state, due);

    for grade in ReviewGrade::ALL {
        let mut actual = state.clone();
        let outcome = harness.scheduler.review_grade(&mut actual, grade, due);
        assert_eq!(preview.get(grade), &outcome);
    }
}
