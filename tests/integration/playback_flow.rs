//! End-to-end playback behavior: fidelity to the builder's result,
//! per-algorithm example runs, and pause/resume non-loss.

use proptest::prelude::*;

use sortscope::{build_trace, PlaybackEngine, RunState, SortKind, TraceEvent};

use super::common;

fn any_kind() -> impl Strategy<Value = SortKind> {
    prop_oneof![
        Just(SortKind::Bubble),
        Just(SortKind::Shaker),
        Just(SortKind::Quick),
    ]
}

#[test]
fn bubble_scenario_counters_and_final_array() {
    let input = [5, 3, 8, 4, 2];
    let outcome = build_trace(SortKind::Bubble, &input);
    let swap_events = outcome
        .trace
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::Swap { .. }))
        .count() as u64;

    let last = common::drive_to_completion(SortKind::Bubble, &input);
    assert_eq!(last.values, vec![2, 3, 4, 5, 8]);
    // 4 + 3 + 2 + 1
    assert_eq!(last.comparisons, 10);
    assert_eq!(last.swaps, swap_events);
}

#[test]
fn extra_ticks_after_done_change_nothing() {
    let input = [5, 3, 8, 4, 2];
    let outcome = build_trace(SortKind::Bubble, &input);

    let mut engine = PlaybackEngine::new();
    engine.start(outcome.trace, &input).unwrap();
    let mut last = engine.snapshot();
    while !last.is_finished() {
        last = engine.tick().unwrap();
    }

    let drained = engine.tick().unwrap();
    assert_eq!(drained.comparisons, last.comparisons);
    assert_eq!(drained.swaps, last.swaps);
    assert_eq!(drained.run_state, RunState::Finished);
    assert_eq!(drained, last);
}

#[test]
fn shaker_on_sorted_input_stops_after_the_forward_pass() {
    let outcome = build_trace(SortKind::Shaker, &[1, 2, 3, 4, 5]);
    let compares = outcome
        .trace
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::Compare { .. }))
        .count();

    assert_eq!(compares, 4);
    // 4 compares plus Done; no backward pass was recorded.
    assert_eq!(outcome.trace.len(), 5);
}

#[test]
fn quick_on_duplicates_emits_no_swaps() {
    let outcome = build_trace(SortKind::Quick, &[3, 3, 3]);
    assert!(outcome
        .trace
        .events()
        .iter()
        .all(|e| !matches!(e, TraceEvent::Swap { .. })));

    let last = common::drive_to_completion(SortKind::Quick, &[3, 3, 3]);
    assert_eq!(last.values, vec![3, 3, 3]);
    assert_eq!(last.swaps, 0);
}

#[test]
fn empty_array_yields_a_done_only_trace_for_every_algorithm() {
    for kind in SortKind::ALL {
        let outcome = build_trace(kind, &[]);
        assert_eq!(outcome.trace.events(), &[TraceEvent::Done]);

        let last = common::drive_to_completion(kind, &[]);
        assert!(last.values.is_empty());
        assert_eq!(last.run_state, RunState::Finished);
    }
}

proptest! {
    #[test]
    fn playback_reproduces_the_builder_result(kind in any_kind(),
        input in proptest::collection::vec(-500i32..500, 0..40))
    {
        let outcome = build_trace(kind, &input);
        let last = common::drive_to_completion(kind, &input);

        prop_assert_eq!(&last.values, &outcome.sorted);

        let compares = outcome.trace.events().iter()
            .filter(|e| matches!(e, TraceEvent::Compare { .. })).count() as u64;
        let swaps = outcome.trace.events().iter()
            .filter(|e| matches!(e, TraceEvent::Swap { .. })).count() as u64;
        prop_assert_eq!(last.comparisons, compares);
        prop_assert_eq!(last.swaps, swaps);
    }

    #[test]
    fn pausing_never_loses_or_replays_events(kind in any_kind(),
        input in proptest::collection::vec(-500i32..500, 2..32),
        pause_after in 0usize..64)
    {
        let outcome = build_trace(kind, &input);

        let mut engine = PlaybackEngine::new();
        engine.start(outcome.trace.clone(), &input).unwrap();

        let mut ticks = 0usize;
        let mut last = engine.snapshot();
        while !last.is_finished() {
            if ticks == pause_after {
                engine.pause().unwrap();
                // No events are applied while paused.
                prop_assert!(engine.tick().is_err());
                engine.resume().unwrap();
            }
            last = engine.tick().unwrap();
            ticks += 1;
        }

        let uninterrupted = common::drive_to_completion(kind, &input);
        prop_assert_eq!(last, uninterrupted);
    }
}
