//! Trace-level properties: replay equivalence, determinism, termination,
//! and multiset preservation, for every algorithm over arbitrary inputs.

use proptest::prelude::*;

use sortscope::{build_trace, is_sorted, SortKind, TraceEvent};

fn any_kind() -> impl Strategy<Value = SortKind> {
    prop_oneof![
        Just(SortKind::Bubble),
        Just(SortKind::Shaker),
        Just(SortKind::Quick),
    ]
}

fn any_input() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-1000i32..1000, 0..48)
}

proptest! {
    #[test]
    fn replaying_swaps_reproduces_the_direct_sort(kind in any_kind(), input in any_input()) {
        let outcome = build_trace(kind, &input);

        let mut replay = input.clone();
        for event in outcome.trace.events() {
            if let TraceEvent::Swap { i, j } = event {
                replay.swap(*i, *j);
            }
        }

        prop_assert_eq!(&replay, &outcome.sorted);
        prop_assert!(is_sorted(&outcome.sorted));
    }

    #[test]
    fn traces_are_deterministic(kind in any_kind(), input in any_input()) {
        let first = build_trace(kind, &input);
        let second = build_trace(kind, &input);
        prop_assert_eq!(first.trace.events(), second.trace.events());
        prop_assert_eq!(first.sorted, second.sorted);
    }

    #[test]
    fn traces_end_with_exactly_one_done(kind in any_kind(), input in any_input()) {
        let outcome = build_trace(kind, &input);
        let events = outcome.trace.events();

        prop_assert_eq!(events.last().copied(), Some(TraceEvent::Done));
        prop_assert_eq!(
            events.iter().filter(|e| **e == TraceEvent::Done).count(),
            1
        );
    }

    #[test]
    fn sorting_preserves_the_multiset(kind in any_kind(), input in any_input()) {
        let outcome = build_trace(kind, &input);

        let mut expected = input.clone();
        expected.sort_unstable();
        prop_assert_eq!(outcome.sorted, expected);
    }

    #[test]
    fn event_indices_are_in_bounds_and_distinct(kind in any_kind(), input in any_input()) {
        let n = input.len();
        let outcome = build_trace(kind, &input);

        for event in outcome.trace.events() {
            match *event {
                TraceEvent::Compare { i, j } | TraceEvent::Swap { i, j } => {
                    prop_assert!(i < n && j < n);
                    prop_assert_ne!(i, j);
                }
                TraceEvent::PivotSet { index: Some(i) } => prop_assert!(i < n),
                TraceEvent::PivotSet { index: None } | TraceEvent::Done => {}
            }
        }
    }
}
