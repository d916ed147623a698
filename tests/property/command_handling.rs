// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Command Handling
//!
//! Random sequences of check-in/check-out commands are run against a
//! building and against a plain `HashSet` model. The building must accept
//! exactly the commands the model accepts and end in the same state.

use std::collections::HashSet;

use proptest::prelude::*;

use cim_building::aggregate::{Building, CommandError};
use cim_building::domain::Username;
use cim_building::events::BuildingEvent;

use crate::fixtures::*;

#[derive(Debug, Clone)]
enum Op {
    CheckIn(String),
    CheckOut(String),
}

/// Small name pool so collisions (duplicates, absent users) are common
fn user_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alice".to_string()),
        Just("Alice".to_string()),
        Just("bob".to_string()),
        Just("carol".to_string()),
        "[a-z]{1,6}",
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        user_name().prop_map(Op::CheckIn),
        user_name().prop_map(Op::CheckOut),
    ]
}

fn op_sequence() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..60)
}

proptest! {
    /// Property: the building accepts exactly what a set model accepts
    #[test]
    fn prop_commands_match_set_model(ops in op_sequence()) {
        let mut building = Building::create(register_command("Tower A")).unwrap();
        let id = building.id();
        let mut model: HashSet<Username> = HashSet::new();

        for op in ops {
            let before = building.uncommitted_events().len();

            match op {
                Op::CheckIn(name) => {
                    let user = username(&name);
                    let result = building.check_in_user(check_in_command(id, &name));
                    if model.insert(user.clone()) {
                        let event = result.expect("check-in of absent user must succeed");
                        prop_assert!(matches!(event, BuildingEvent::UserCheckedIn(ref e) if e.username == user));
                        prop_assert_eq!(building.uncommitted_events().len(), before + 1);
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(CommandError::DuplicateCheckIn { building_id: id, username: user })
                        );
                        prop_assert_eq!(building.uncommitted_events().len(), before);
                    }
                }
                Op::CheckOut(name) => {
                    let user = username(&name);
                    let result = building.check_out_user(check_out_command(id, &name));
                    if model.remove(&user) {
                        let event = result.expect("check-out of present user must succeed");
                        prop_assert!(matches!(event, BuildingEvent::UserCheckedOut(ref e) if e.username == user));
                        prop_assert_eq!(building.uncommitted_events().len(), before + 1);
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(CommandError::NotCheckedIn { building_id: id, username: user })
                        );
                        prop_assert_eq!(building.uncommitted_events().len(), before);
                    }
                }
            }

            prop_assert_eq!(building.checked_in_users(), &model);
        }
    }

    /// Property: any accepted history replays to the live state
    #[test]
    fn prop_recorded_history_replays_to_live_state(ops in op_sequence()) {
        let mut building = Building::create(register_command("Tower A")).unwrap();
        let id = building.id();

        for op in ops {
            // Rejections are expected here; only accepted events matter
            let _ = match op {
                Op::CheckIn(name) => building.check_in_user(check_in_command(id, &name)),
                Op::CheckOut(name) => building.check_out_user(check_out_command(id, &name)),
            };
        }

        let replayed = Building::from_events(building.uncommitted_events())
            .expect("recorded history must replay")
            .expect("history starts with registration");

        prop_assert_eq!(replayed.state(), building.state());
    }

    /// Property: membership is decided by the user's most recent event
    #[test]
    fn prop_membership_follows_latest_event(ops in op_sequence()) {
        let mut building = Building::create(register_command("Tower A")).unwrap();
        let id = building.id();

        for op in ops {
            let _ = match op {
                Op::CheckIn(name) => building.check_in_user(check_in_command(id, &name)),
                Op::CheckOut(name) => building.check_out_user(check_out_command(id, &name)),
            };
        }

        let mut latest: std::collections::HashMap<Username, bool> = Default::default();
        for event in building.uncommitted_events() {
            match event {
                BuildingEvent::UserCheckedIn(e) => { latest.insert(e.username.clone(), true); }
                BuildingEvent::UserCheckedOut(e) => { latest.insert(e.username.clone(), false); }
                BuildingEvent::BuildingRegistered(_) => {}
            }
        }

        let expected: HashSet<Username> = latest
            .into_iter()
            .filter_map(|(user, inside)| inside.then_some(user))
            .collect();
        prop_assert_eq!(building.checked_in_users(), &expected);
    }
}
