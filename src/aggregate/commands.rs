// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Building Aggregate
//!
//! Commands express user intent and can fail validation. They are plain data:
//! the aggregate operation they target does all the validation.
//!
//! ```text
//! Command → handle_command(State, Command) → Result<Event, Error>
//! ```
//!
//! # Time Handling
//!
//! All commands include an explicit `timestamp`.
//! **NEVER call `Utc::now()` in domain logic**.
//! Time is passed from the application layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{BuildingName, Username};

/// Command addressed to an existing building
///
/// Exposes the target aggregate so a dispatcher can route it.
pub trait BuildingCommand {
    /// Building this command is addressed to
    fn building_id(&self) -> Uuid;

    /// Correlation ID for distributed tracing
    fn correlation_id(&self) -> Uuid;
}

/// Command to register a new building
///
/// This is the initial command that creates the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterBuildingCommand {
    /// Display name for the building
    pub name: BuildingName,

    /// Timestamp when command was issued (explicit time parameter)
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}

/// Command to check a user into a building
///
/// Immutable once constructed; both the username and the target building
/// are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckUserIntoBuilding {
    username: Username,
    building_id: Uuid,
    timestamp: DateTime<Utc>,
    correlation_id: Uuid,
    causation_id: Option<Uuid>,
}

impl CheckUserIntoBuilding {
    pub fn new(
        username: Username,
        building_id: Uuid,
        timestamp: DateTime<Utc>,
        correlation_id: Uuid,
    ) -> Self {
        Self {
            username,
            building_id,
            timestamp,
            correlation_id,
            causation_id: None,
        }
    }

    /// Record the event that caused this command
    pub fn caused_by(self, causation_id: Uuid) -> Self {
        Self {
            causation_id: Some(causation_id),
            ..self
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn causation_id(&self) -> Option<Uuid> {
        self.causation_id
    }
}

impl BuildingCommand for CheckUserIntoBuilding {
    fn building_id(&self) -> Uuid {
        self.building_id
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to check a user out of a building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckUserOutOfBuilding {
    username: Username,
    building_id: Uuid,
    timestamp: DateTime<Utc>,
    correlation_id: Uuid,
    causation_id: Option<Uuid>,
}

impl CheckUserOutOfBuilding {
    pub fn new(
        username: Username,
        building_id: Uuid,
        timestamp: DateTime<Utc>,
        correlation_id: Uuid,
    ) -> Self {
        Self {
            username,
            building_id,
            timestamp,
            correlation_id,
            causation_id: None,
        }
    }

    /// Record the event that caused this command
    pub fn caused_by(self, causation_id: Uuid) -> Self {
        Self {
            causation_id: Some(causation_id),
            ..self
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn causation_id(&self) -> Option<Uuid> {
        self.causation_id
    }
}

impl BuildingCommand for CheckUserOutOfBuilding {
    fn building_id(&self) -> Uuid {
        self.building_id
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
