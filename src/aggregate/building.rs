// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Aggregate
//!
//! State is never set directly. Every change goes through one fold step,
//! [`apply_event`], used identically for historical replay and for events a
//! command has just produced.
//!
//! ```text
//! Command → handle_*() → Result<Event, CommandError>
//!                               ↓
//! Events  → apply_event() → New State
//! ```
//!
//! A [`Building`] pairs the folded [`BuildingState`] with the events it has
//! recorded but the caller has not yet persisted.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::aggregate::commands::*;
use crate::aggregate::handlers::*;
use crate::domain::{BuildingName, Username};
use crate::event_store::StoredEvent;
use crate::events::building::*;
use crate::events::DomainEvent;

/// Event history could not be folded into a valid state
///
/// These errors mean the history itself is corrupt. Replay stops at the
/// first one; there is no meaningful state to continue from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// A second registration event for an already registered building
    #[error("Building {aggregate_id} is already registered")]
    AlreadyRegistered { aggregate_id: Uuid },

    /// An event arrived before the building was registered
    #[error("{event_type} applied before the building was registered")]
    NotRegistered { event_type: &'static str },

    /// Event belongs to a different aggregate
    #[error("Event for aggregate {actual} applied to building {expected}")]
    AggregateMismatch { expected: Uuid, actual: Uuid },

    /// Stored sequence numbers are not contiguous from 1
    #[error("Expected event sequence {expected}, found {actual}")]
    SequenceGap { expected: u64, actual: u64 },
}

/// Building state reconstructed from events
///
/// A plain value: equal histories fold to equal states, which also makes the
/// state usable as a snapshot together with its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingState {
    /// Aggregate ID
    pub id: Uuid,

    /// Display name
    pub name: BuildingName,

    /// Users currently inside the building
    pub checked_in_users: HashSet<Username>,

    /// Timestamp of the registration event
    pub registered_at: DateTime<Utc>,

    /// Timestamp of the latest applied event
    pub updated_at: DateTime<Utc>,
}

impl BuildingState {
    /// State right after registration
    pub fn registered(event: &BuildingRegistered) -> Self {
        Self {
            id: event.aggregate_id,
            name: event.name.clone(),
            checked_in_users: HashSet::new(),
            registered_at: event.timestamp,
            updated_at: event.timestamp,
        }
    }

    /// Reconstruct state from an event stream
    ///
    /// ```text
    /// State = fold(Events, None, apply_event)
    /// ```
    ///
    /// An empty stream means the building was never registered.
    pub fn from_events(events: &[BuildingEvent]) -> Result<Option<Self>, ReplayError> {
        events
            .iter()
            .try_fold(None, |state, event| apply_event(state, event).map(Some))
    }

    pub fn is_checked_in(&self, username: &Username) -> bool {
        self.checked_in_users.contains(username)
    }
}

/// Apply event to state (pure function)
///
/// # Invariants
/// - `BuildingRegistered` must be the first event, and only the first
/// - Every later event must carry the registered aggregate ID
///
/// A check-in for a user already inside, or a check-out for a user not
/// inside, cannot come from a validated command. Both leave the set as is
/// and are logged as warnings.
pub fn apply_event(
    state: Option<BuildingState>,
    event: &BuildingEvent,
) -> Result<BuildingState, ReplayError> {
    match (state, event) {
        (None, BuildingEvent::BuildingRegistered(e)) => Ok(BuildingState::registered(e)),

        (None, other) => Err(ReplayError::NotRegistered {
            event_type: other.event_type_name(),
        }),

        (Some(mut state), event) => {
            evolve(&mut state, event)?;
            Ok(state)
        }
    }
}

/// Fold one event into a registered building in place
///
/// Checks run before any field changes, so an error leaves `state` as it was.
fn evolve(state: &mut BuildingState, event: &BuildingEvent) -> Result<(), ReplayError> {
    match event {
        BuildingEvent::BuildingRegistered(_) => {
            return Err(ReplayError::AlreadyRegistered {
                aggregate_id: state.id,
            });
        }

        other if other.aggregate_id() != state.id => {
            return Err(ReplayError::AggregateMismatch {
                expected: state.id,
                actual: other.aggregate_id(),
            });
        }

        BuildingEvent::UserCheckedIn(e) => {
            if !state.checked_in_users.insert(e.username.clone()) {
                warn!(
                    building_id = %state.id,
                    username = %e.username,
                    event_id = %e.event_id,
                    "replayed check-in for a user already checked in"
                );
            }
            state.updated_at = e.timestamp;
        }

        BuildingEvent::UserCheckedOut(e) => {
            if !state.checked_in_users.remove(&e.username) {
                warn!(
                    building_id = %state.id,
                    username = %e.username,
                    event_id = %e.event_id,
                    "replayed check-out for a user not checked in"
                );
            }
            state.updated_at = e.timestamp;
        }
    }

    Ok(())
}

/// Building aggregate root
///
/// Holds the folded state, the number of events already committed to the
/// event log, and the events recorded since then.
///
/// ```rust
/// use chrono::Utc;
/// use uuid::Uuid;
/// use cim_building::aggregate::{Building, CheckUserIntoBuilding, RegisterBuildingCommand};
/// use cim_building::domain::{BuildingName, Username};
///
/// let mut building = Building::create(RegisterBuildingCommand {
///     name: BuildingName::new("Tower A").unwrap(),
///     timestamp: Utc::now(),
///     correlation_id: Uuid::now_v7(),
/// })
/// .unwrap();
///
/// let alice = Username::new("alice").unwrap();
/// building
///     .check_in_user(CheckUserIntoBuilding::new(
///         alice.clone(),
///         building.id(),
///         Utc::now(),
///         Uuid::now_v7(),
///     ))
///     .unwrap();
///
/// assert!(building.is_checked_in(&alice));
/// assert_eq!(building.uncommitted_events().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    state: BuildingState,
    version: u64,
    uncommitted: Vec<BuildingEvent>,
}

impl Building {
    /// Register a new building under a freshly generated identifier
    ///
    /// The registration is folded through [`apply_event`] like any other
    /// event, and the returned instance holds it as its one uncommitted event.
    pub fn create(command: RegisterBuildingCommand) -> Result<Self, CommandError> {
        let aggregate_id = Uuid::now_v7();
        let event = BuildingEvent::from(handle_register_building(command, aggregate_id));
        let state = apply_event(None, &event)?;

        debug!(building_id = %aggregate_id, name = %state.name, "building registered");

        Ok(Self {
            state,
            version: 0,
            uncommitted: vec![event],
        })
    }

    /// Rebuild a building from its full history
    ///
    /// Returns `Ok(None)` for an empty history.
    pub fn from_events(events: &[BuildingEvent]) -> Result<Option<Self>, ReplayError> {
        let state = BuildingState::from_events(events)?;

        Ok(state.map(|state| Self {
            state,
            version: events.len() as u64,
            uncommitted: Vec::new(),
        }))
    }

    /// Rebuild a building from stored events, checking sequence continuity
    pub fn from_stored_events(
        stored: &[StoredEvent<BuildingEvent>],
    ) -> Result<Option<Self>, ReplayError> {
        let mut state = None;
        let mut version = 0;

        for event in stored {
            let expected = version + 1;
            if event.sequence != expected {
                return Err(ReplayError::SequenceGap {
                    expected,
                    actual: event.sequence,
                });
            }
            state = Some(apply_event(state, &event.data)?);
            version = event.sequence;
        }

        Ok(state.map(|state| Self {
            state,
            version,
            uncommitted: Vec::new(),
        }))
    }

    /// Check a user in
    ///
    /// On success the produced event is already folded into state and queued
    /// as uncommitted. On failure nothing changes.
    pub fn check_in_user(
        &mut self,
        command: CheckUserIntoBuilding,
    ) -> Result<BuildingEvent, CommandError> {
        let event = handle_check_in_user(&self.state, &command)?;
        self.record(event.into())
    }

    /// Check a user out
    ///
    /// Fails with [`CommandError::NotCheckedIn`] unless the user is inside.
    pub fn check_out_user(
        &mut self,
        command: CheckUserOutOfBuilding,
    ) -> Result<BuildingEvent, CommandError> {
        let event = handle_check_out_user(&self.state, &command)?;
        self.record(event.into())
    }

    fn record(&mut self, event: BuildingEvent) -> Result<BuildingEvent, CommandError> {
        evolve(&mut self.state, &event)?;
        self.uncommitted.push(event.clone());
        Ok(event)
    }

    pub fn id(&self) -> Uuid {
        self.state.id
    }

    pub fn name(&self) -> &BuildingName {
        &self.state.name
    }

    pub fn checked_in_users(&self) -> &HashSet<Username> {
        &self.state.checked_in_users
    }

    pub fn is_checked_in(&self, username: &Username) -> bool {
        self.state.is_checked_in(username)
    }

    pub fn state(&self) -> &BuildingState {
        &self.state
    }

    /// Number of events committed to the event log
    ///
    /// This is the expected version for the next append.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Events recorded since the last commit, in the order produced
    pub fn uncommitted_events(&self) -> &[BuildingEvent] {
        &self.uncommitted
    }

    /// Mark uncommitted events as persisted at `version`
    pub fn mark_committed(&mut self, version: u64) {
        self.uncommitted.clear();
        self.version = version;
    }
}
