// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Defendant Numbering
//!
//! Numbers are append-only: new defendants continue after the current
//! maximum in input order, and removals never renumber survivors.

use court_progression::aggregate::hearing::apply_event;
use court_progression::events::HearingEvent;
use court_progression::{Aggregate, HearingState};
use proptest::prelude::*;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::fixtures::*;

// ============================================================================
// Strategies
// ============================================================================

/// Distinct existing defendant numbers, possibly with gaps
fn existing_numbers() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::btree_set(1u32..60, 0..12).prop_map(|set| set.into_iter().collect())
}

/// Count of fresh defendants to add
fn new_count() -> impl Strategy<Value = u32> {
    0u32..10
}

fn fresh_ids(count: u32) -> Vec<Uuid> {
    (0..count).map(|i| defendant(1_000 + i)).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Existing max M, adding K ids yields M+1..M+K in input order
    #[test]
    fn prop_new_numbers_follow_max(numbers in existing_numbers(), k in new_count()) {
        let state = hearing_with_numbers(&numbers);
        let max = numbers.iter().copied().max().unwrap_or(0);
        let ids = fresh_ids(k);

        let events = state.handle(update_defendants(ids.clone(), vec![])).unwrap();

        let assigned: Vec<(Uuid, u32)> = events
            .iter()
            .map(|e| match e {
                HearingEvent::DefendantAddedToHearing(a) => (a.defendant_id, a.defendant_number),
                other => panic!("Unexpected event {:?}", other),
            })
            .collect();
        let expected: Vec<(Uuid, u32)> =
            ids.into_iter().zip(max + 1..=max + k).collect();

        prop_assert_eq!(assigned, expected, "Numbers must continue after the maximum");
    }

    /// Property: Removal never renumbers the survivors
    #[test]
    fn prop_removal_keeps_survivor_numbers(
        numbers in existing_numbers(),
        mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let state = hearing_with_numbers(&numbers);
        let removed: Vec<u32> = numbers
            .iter()
            .zip(mask.iter())
            .filter(|(_, remove)| **remove)
            .map(|(n, _)| *n)
            .collect();

        let events = state
            .handle(update_defendants(vec![], removed.iter().map(|&n| defendant(n)).collect()))
            .unwrap();
        let after = events.iter().fold(state, |s, e| apply_event(s, e));

        let removed: BTreeSet<u32> = removed.into_iter().collect();
        for n in numbers.iter().filter(|n| !removed.contains(n)) {
            prop_assert_eq!(after.defendant_number(defendant(*n)), Some(*n));
        }
        for n in &removed {
            prop_assert!(!after.has_defendant(defendant(*n)));
        }
    }

    /// Property: Every added event precedes every removed event
    #[test]
    fn prop_additions_precede_removals(numbers in existing_numbers(), k in new_count()) {
        let state = hearing_with_numbers(&numbers);
        let removed = numbers.iter().map(|&n| defendant(n)).collect();

        let events = state.handle(update_defendants(fresh_ids(k), removed)).unwrap();

        let first_removal = events
            .iter()
            .position(|e| matches!(e, HearingEvent::DefendantRemovedFromHearing(_)))
            .unwrap_or(events.len());
        prop_assert!(events[first_removal..]
            .iter()
            .all(|e| matches!(e, HearingEvent::DefendantRemovedFromHearing(_))));
        prop_assert_eq!(first_removal, k as usize);
        prop_assert_eq!(events.len() - first_removal, numbers.len());
    }

    /// Property: Numbers on the list are always unique
    #[test]
    fn prop_numbers_stay_unique(numbers in existing_numbers(), rounds in prop::collection::vec(new_count(), 1..5)) {
        let mut state: HearingState = hearing_with_numbers(&numbers);
        let mut next_id = 2_000;

        for k in rounds {
            let ids: Vec<_> = (0..k).map(|i| defendant(next_id + i)).collect();
            next_id += k;
            let events = state.handle(update_defendants(ids, vec![])).unwrap();
            state = events.iter().fold(state, |s, e| apply_event(s, e));
        }

        let unique: BTreeSet<u32> = state.defendants.iter().map(|d| d.defendant_number).collect();
        prop_assert_eq!(unique.len(), state.defendants.len());
    }
}
