// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Command Handlers for the Building Aggregate
//!
//! Command handlers are pure functions that:
//! 1. Take current state + command
//! 2. Validate business rules
//! 3. Return Event (success) or Error (validation failure)
//!
//! ```text
//! handle_command(State, Command) → Result<Event, CommandError>
//! ```
//!
//! Handlers never touch state. Folding the returned event is the aggregate's
//! job (see [`crate::aggregate::Building`]).
//!
//! # Business Rules
//!
//! - A user cannot check in while already checked in
//! - A user cannot check out unless checked in
//! - A command must be addressed to the building handling it

use uuid::Uuid;

use crate::aggregate::building::{BuildingState, ReplayError};
use crate::aggregate::commands::*;
use crate::domain::Username;
use crate::events::building::*;

/// Command validation error
///
/// A rejected command leaves the aggregate untouched and produces no events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// User is already checked into the building
    #[error("User {username} was already checked in to building {building_id}")]
    DuplicateCheckIn {
        building_id: Uuid,
        username: Username,
    },

    /// User is not checked into the building
    #[error("User {username} is not checked in to building {building_id}")]
    NotCheckedIn {
        building_id: Uuid,
        username: Username,
    },

    /// Command was routed to the wrong aggregate
    #[error("Command addressed to building {actual} was handled by building {expected}")]
    BuildingMismatch { expected: Uuid, actual: Uuid },

    /// Folding the produced event failed
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

/// Handle RegisterBuilding command
///
/// Registration has no preconditions: the aggregate does not exist yet.
pub fn handle_register_building(
    command: RegisterBuildingCommand,
    aggregate_id: Uuid,
) -> BuildingRegistered {
    BuildingRegistered {
        event_version: BuildingRegistered::CURRENT_VERSION,
        event_id: Uuid::now_v7(),
        aggregate_id,
        timestamp: command.timestamp,
        correlation_id: command.correlation_id,
        causation_id: None,
        name: command.name,
    }
}

/// Handle CheckUserIntoBuilding command
///
/// # Business Rules
/// - Command must target this building
/// - Username must not already be checked in (exact match)
pub fn handle_check_in_user(
    state: &BuildingState,
    command: &CheckUserIntoBuilding,
) -> Result<UserCheckedIn, CommandError> {
    ensure_addressed_to(state, command)?;

    if state.is_checked_in(command.username()) {
        return Err(CommandError::DuplicateCheckIn {
            building_id: state.id,
            username: command.username().clone(),
        });
    }

    Ok(UserCheckedIn {
        event_version: UserCheckedIn::CURRENT_VERSION,
        event_id: Uuid::now_v7(),
        aggregate_id: state.id,
        timestamp: command.timestamp(),
        correlation_id: command.correlation_id(),
        causation_id: command.causation_id(),
        username: command.username().clone(),
    })
}

/// Handle CheckUserOutOfBuilding command
///
/// # Business Rules
/// - Command must target this building
/// - Username must currently be checked in
pub fn handle_check_out_user(
    state: &BuildingState,
    command: &CheckUserOutOfBuilding,
) -> Result<UserCheckedOut, CommandError> {
    ensure_addressed_to(state, command)?;

    if !state.is_checked_in(command.username()) {
        return Err(CommandError::NotCheckedIn {
            building_id: state.id,
            username: command.username().clone(),
        });
    }

    Ok(UserCheckedOut {
        event_version: UserCheckedOut::CURRENT_VERSION,
        event_id: Uuid::now_v7(),
        aggregate_id: state.id,
        timestamp: command.timestamp(),
        correlation_id: command.correlation_id(),
        causation_id: command.causation_id(),
        username: command.username().clone(),
    })
}

fn ensure_addressed_to(
    state: &BuildingState,
    command: &impl BuildingCommand,
) -> Result<(), CommandError> {
    if command.building_id() != state.id {
        return Err(CommandError::BuildingMismatch {
            expected: state.id,
            actual: command.building_id(),
        });
    }
    Ok(())
}
