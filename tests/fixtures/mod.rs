// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-building
//!
//! Deterministic test data: all UUIDs and timestamps are fixed constants so
//! replayed states can be compared exactly.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use cim_building::aggregate::{CheckUserIntoBuilding, CheckUserOutOfBuilding, RegisterBuildingCommand};
use cim_building::domain::{BuildingName, Username};
use cim_building::events::building::*;

// Fixed test UUIDs (UUID v7 format, but deterministic for testing)
pub const EVENT_ID_1: &str = "01934f4a-0001-7000-8000-000000000001";

pub const AGGREGATE_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";

pub const CORRELATION_ID_1: &str = "01934f4a-c001-7000-8000-00000000c001";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn aggregate_id() -> Uuid {
    parse_uuid(AGGREGATE_ID_1)
}

pub fn username(name: &str) -> Username {
    Username::new(name).expect("Invalid username in test fixture")
}

/// Deterministic event ID for position `n` in a stream
pub fn event_id(n: u64) -> Uuid {
    Uuid::from_u128(0x01934f4a_0000_7000_8000_000000000000 + n as u128)
}

/// `BuildingRegistered` for "Tower A" with fixed data
pub fn building_registered_fixture() -> BuildingEvent {
    BuildingEvent::BuildingRegistered(BuildingRegistered {
        event_version: 1,
        event_id: parse_uuid(EVENT_ID_1),
        aggregate_id: aggregate_id(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
        causation_id: None,
        name: BuildingName::new("Tower A").expect("Invalid building name"),
    })
}

pub fn user_checked_in_fixture(n: u64, name: &str) -> BuildingEvent {
    BuildingEvent::UserCheckedIn(UserCheckedIn {
        event_version: 1,
        event_id: event_id(n),
        aggregate_id: aggregate_id(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
        causation_id: None,
        username: username(name),
    })
}

pub fn user_checked_out_fixture(n: u64, name: &str) -> BuildingEvent {
    BuildingEvent::UserCheckedOut(UserCheckedOut {
        event_version: 1,
        event_id: event_id(n),
        aggregate_id: aggregate_id(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
        causation_id: None,
        username: username(name),
    })
}

pub fn register_command(name: &str) -> RegisterBuildingCommand {
    RegisterBuildingCommand {
        name: BuildingName::new(name).expect("Invalid building name"),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
    }
}

pub fn check_in_command(building_id: Uuid, name: &str) -> CheckUserIntoBuilding {
    CheckUserIntoBuilding::new(
        username(name),
        building_id,
        fixed_timestamp(),
        parse_uuid(CORRELATION_ID_1),
    )
}

pub fn check_out_command(building_id: Uuid, name: &str) -> CheckUserOutOfBuilding {
    CheckUserOutOfBuilding::new(
        username(name),
        building_id,
        fixed_timestamp(),
        parse_uuid(CORRELATION_ID_1),
    )
}
