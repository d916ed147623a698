// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Event Application
//!
//! Arbitrary (not necessarily command-valid) histories are folded directly,
//! covering what a hand-edited or corrupted log could contain.

use std::collections::HashSet;

use proptest::prelude::*;

use cim_building::aggregate::{BuildingState, ReplayError};
use cim_building::domain::Username;
use cim_building::events::BuildingEvent;

use crate::fixtures::*;

/// Generate a check-in or check-out event body for a small user pool
fn membership_event() -> impl Strategy<Value = (bool, &'static str)> {
    (any::<bool>(), prop::sample::select(vec!["alice", "bob", "carol"]))
}

/// Generate a registered history of arbitrary check-ins and check-outs
fn history() -> impl Strategy<Value = Vec<BuildingEvent>> {
    prop::collection::vec(membership_event(), 0..50).prop_map(|bodies| {
        let mut events = vec![building_registered_fixture()];
        for (n, (inside, name)) in bodies.into_iter().enumerate() {
            let n = n as u64 + 2;
            events.push(if inside {
                user_checked_in_fixture(n, name)
            } else {
                user_checked_out_fixture(n, name)
            });
        }
        events
    })
}

/// Reference model: last event per user wins
fn expected_members(events: &[BuildingEvent]) -> HashSet<Username> {
    let mut members = HashSet::new();
    for event in events {
        match event {
            BuildingEvent::UserCheckedIn(e) => {
                members.insert(e.username.clone());
            }
            BuildingEvent::UserCheckedOut(e) => {
                members.remove(&e.username);
            }
            BuildingEvent::BuildingRegistered(_) => {}
        }
    }
    members
}

proptest! {
    /// Property: replay is deterministic
    ///
    /// Folding the same history into two fresh states yields equal states.
    #[test]
    fn prop_replay_is_deterministic(events in history()) {
        let first = BuildingState::from_events(&events).unwrap();
        let second = BuildingState::from_events(&events).unwrap();

        prop_assert_eq!(first, second, "Same events must produce same state");
    }

    /// Property: fold matches the last-event-wins model
    #[test]
    fn prop_fold_matches_model(events in history()) {
        let state = BuildingState::from_events(&events).unwrap().unwrap();

        prop_assert_eq!(state.checked_in_users, expected_members(&events));
        prop_assert_eq!(state.name.as_str(), "Tower A");
        prop_assert_eq!(state.id, aggregate_id());
    }

    /// Property: replaying a prefix then the rest equals replaying everything
    #[test]
    fn prop_fold_is_incremental(events in history(), split in any::<prop::sample::Index>()) {
        let at = split.index(events.len()) + 1;
        let (head, tail) = events.split_at(at.min(events.len()));

        let whole = BuildingState::from_events(&events).unwrap();
        let partial = BuildingState::from_events(head).unwrap();
        let resumed = tail.iter().try_fold(partial, |state, event| {
            cim_building::aggregate::apply_event(state, event).map(Some)
        }).unwrap();

        prop_assert_eq!(whole, resumed);
    }

    /// Property: a history without its registration never replays
    #[test]
    fn prop_missing_registration_rejected(events in history()) {
        prop_assume!(events.len() > 1);

        let result = BuildingState::from_events(&events[1..]);

        let rejected = matches!(result, Err(ReplayError::NotRegistered { .. }));
        prop_assert!(rejected, "history without registration must be rejected");
    }
}
