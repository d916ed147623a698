// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Domain Events
//!
//! All state changes to Building aggregates are represented as immutable events:
//! - Past tense naming (UserCheckedIn, not CheckInUser)
//! - Include correlation_id and causation_id for traceability
//! - Versioned for schema evolution
//! - Serializable for persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainEvent;
use crate::domain::{BuildingName, Username};

/// Building Domain Events
///
/// The set of variants is closed: replay matches exhaustively over it, and a
/// stored payload with an unknown `type` tag fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildingEvent {
    /// Building was registered. Always the first event of a stream.
    BuildingRegistered(BuildingRegistered),

    /// User entered the building
    UserCheckedIn(UserCheckedIn),

    /// User left the building
    UserCheckedOut(UserCheckedOut),
}

/// A new building was registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRegistered {
    /// Event version for schema evolution
    pub event_version: u32,

    /// Unique event identifier (UUID v7 for time ordering)
    pub event_id: Uuid,

    /// Building aggregate ID
    pub aggregate_id: Uuid,

    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for request tracing
    pub correlation_id: Uuid,

    /// Causation ID (event that caused this event)
    pub causation_id: Option<Uuid>,

    /// Display name, fixed for the lifetime of the building
    pub name: BuildingName,
}

/// A user checked into a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCheckedIn {
    pub event_version: u32,
    pub event_id: Uuid,
    pub aggregate_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,

    /// User who checked in
    pub username: Username,
}

/// A user checked out of a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCheckedOut {
    pub event_version: u32,
    pub event_id: Uuid,
    pub aggregate_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,

    /// User who checked out
    pub username: Username,
}

/// Event version constants
impl BuildingRegistered {
    pub const CURRENT_VERSION: u32 = 1;
}

impl UserCheckedIn {
    pub const CURRENT_VERSION: u32 = 1;
}

impl UserCheckedOut {
    pub const CURRENT_VERSION: u32 = 1;
}

impl BuildingEvent {
    /// Username carried by check-in/check-out events
    pub fn username(&self) -> Option<&Username> {
        match self {
            BuildingEvent::BuildingRegistered(_) => None,
            BuildingEvent::UserCheckedIn(e) => Some(&e.username),
            BuildingEvent::UserCheckedOut(e) => Some(&e.username),
        }
    }
}

impl DomainEvent for BuildingEvent {
    fn event_id(&self) -> Uuid {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.event_id,
            BuildingEvent::UserCheckedIn(e) => e.event_id,
            BuildingEvent::UserCheckedOut(e) => e.event_id,
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.aggregate_id,
            BuildingEvent::UserCheckedIn(e) => e.aggregate_id,
            BuildingEvent::UserCheckedOut(e) => e.aggregate_id,
        }
    }

    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.timestamp,
            BuildingEvent::UserCheckedIn(e) => e.timestamp,
            BuildingEvent::UserCheckedOut(e) => e.timestamp,
        }
    }

    fn correlation_id(&self) -> Uuid {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.correlation_id,
            BuildingEvent::UserCheckedIn(e) => e.correlation_id,
            BuildingEvent::UserCheckedOut(e) => e.correlation_id,
        }
    }

    fn causation_id(&self) -> Option<Uuid> {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.causation_id,
            BuildingEvent::UserCheckedIn(e) => e.causation_id,
            BuildingEvent::UserCheckedOut(e) => e.causation_id,
        }
    }

    fn event_version(&self) -> u32 {
        match self {
            BuildingEvent::BuildingRegistered(e) => e.event_version,
            BuildingEvent::UserCheckedIn(e) => e.event_version,
            BuildingEvent::UserCheckedOut(e) => e.event_version,
        }
    }

    fn event_type_name(&self) -> &'static str {
        match self {
            BuildingEvent::BuildingRegistered(_) => "BuildingRegistered",
            BuildingEvent::UserCheckedIn(_) => "UserCheckedIn",
            BuildingEvent::UserCheckedOut(_) => "UserCheckedOut",
        }
    }
}

impl From<BuildingRegistered> for BuildingEvent {
    fn from(event: BuildingRegistered) -> Self {
        BuildingEvent::BuildingRegistered(event)
    }
}

impl From<UserCheckedIn> for BuildingEvent {
    fn from(event: UserCheckedIn) -> Self {
        BuildingEvent::UserCheckedIn(event)
    }
}

impl From<UserCheckedOut> for BuildingEvent {
    fn from(event: UserCheckedOut) -> Self {
        BuildingEvent::UserCheckedOut(event)
    }
}
