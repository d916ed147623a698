// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Service Layer
//!
//! Application service that runs commands against event-sourced buildings.
//!
//! # Transaction Semantics
//!
//! Each service method is a transaction:
//! 1. Load events from store
//! 2. Reconstruct current state
//! 3. Handle command (validate, record, fold)
//! 4. Append recorded events with the loaded version as expected version
//!
//! Step 4 fails if another writer appended in between. The whole cycle is
//! then retried against the fresh history, up to
//! [`BuildingServiceConfig::max_conflict_retries`] times, so a racing
//! duplicate check-in is rejected by validation instead of being stored.

use async_trait::async_trait;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::aggregate::{
    Building, BuildingCommand, CheckUserIntoBuilding, CheckUserOutOfBuilding, CommandError,
    RegisterBuildingCommand, ReplayError,
};
use crate::config::BuildingServiceConfig;
use crate::errors::EventStoreError;
use crate::event_store::EventStore;
use crate::events::BuildingEvent;

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Command validation failed
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Stored history could not be replayed
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    /// Event store error
    #[error("Event store error: {0}")]
    EventStore(#[from] EventStoreError),

    /// Aggregate not found
    #[error("Building not found: {0}")]
    NotFound(Uuid),

    /// Every attempt lost the optimistic concurrency race
    #[error("Gave up on building {aggregate_id} after {attempts} conflicting attempts")]
    ConflictRetriesExhausted { aggregate_id: Uuid, attempts: u32 },
}

/// Building service trait
#[async_trait]
pub trait BuildingService: Send + Sync {
    /// Register a new building
    ///
    /// # Returns
    /// - Aggregate ID of the new building
    async fn register_building(&self, command: RegisterBuildingCommand) -> ServiceResult<Uuid>;

    /// Check a user into the building the command is addressed to
    ///
    /// # Returns
    /// - Events appended by this command
    async fn check_in_user(
        &self,
        command: CheckUserIntoBuilding,
    ) -> ServiceResult<Vec<BuildingEvent>>;

    /// Check a user out of the building the command is addressed to
    async fn check_out_user(
        &self,
        command: CheckUserOutOfBuilding,
    ) -> ServiceResult<Vec<BuildingEvent>>;

    /// Get a building reconstructed from its events
    async fn get_building(&self, building_id: Uuid) -> ServiceResult<Building>;

    /// Check if a building exists
    async fn exists(&self, building_id: Uuid) -> ServiceResult<bool>;
}

/// Event-sourced implementation of BuildingService
pub struct EventSourcedBuildingService<S> {
    /// Event store for persistence
    event_store: S,

    config: BuildingServiceConfig,
}

impl<S: EventStore> EventSourcedBuildingService<S> {
    /// Create a service with default configuration
    pub fn new(event_store: S) -> Self {
        Self::with_config(event_store, BuildingServiceConfig::default())
    }

    pub fn with_config(event_store: S, config: BuildingServiceConfig) -> Self {
        Self {
            event_store,
            config,
        }
    }

    pub fn event_store(&self) -> &S {
        &self.event_store
    }

    /// Load current state from event store
    async fn load(&self, building_id: Uuid) -> ServiceResult<Building> {
        let stored = self.event_store.read_events(building_id).await?;

        Building::from_stored_events(&stored)?.ok_or(ServiceError::NotFound(building_id))
    }

    /// Run one command with load → handle → append, retrying on conflicts
    async fn execute<F>(&self, building_id: Uuid, operation: F) -> ServiceResult<Vec<BuildingEvent>>
    where
        F: Fn(&mut Building) -> Result<BuildingEvent, CommandError> + Send + Sync,
    {
        let mut attempt: u32 = 0;

        loop {
            let mut building = self.load(building_id).await?;
            operation(&mut building)?;

            let events = building.uncommitted_events().to_vec();
            match self
                .event_store
                .append(building_id, events.clone(), Some(building.version()))
                .await
            {
                Ok(version) => {
                    building.mark_committed(version);
                    return Ok(events);
                }
                Err(EventStoreError::ConcurrencyConflict { .. })
                    if attempt < self.config.max_conflict_retries =>
                {
                    attempt += 1;
                    warn!(%building_id, attempt, "concurrent append detected, retrying");
                }
                Err(EventStoreError::ConcurrencyConflict { .. }) => {
                    return Err(ServiceError::ConflictRetriesExhausted {
                        aggregate_id: building_id,
                        attempts: attempt + 1,
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[async_trait]
impl<S: EventStore> BuildingService for EventSourcedBuildingService<S> {
    #[instrument(skip(self, command), fields(name = %command.name))]
    async fn register_building(&self, command: RegisterBuildingCommand) -> ServiceResult<Uuid> {
        let mut building = Building::create(command)?;
        let building_id = building.id();

        let version = self
            .event_store
            .append(building_id, building.uncommitted_events().to_vec(), Some(0))
            .await?;
        building.mark_committed(version);

        info!(%building_id, "building registered");
        Ok(building_id)
    }

    #[instrument(
        skip(self, command),
        fields(building_id = %command.building_id(), username = %command.username())
    )]
    async fn check_in_user(
        &self,
        command: CheckUserIntoBuilding,
    ) -> ServiceResult<Vec<BuildingEvent>> {
        let events = self
            .execute(command.building_id(), |building| {
                building.check_in_user(command.clone())
            })
            .await?;

        info!("user checked in");
        Ok(events)
    }

    #[instrument(
        skip(self, command),
        fields(building_id = %command.building_id(), username = %command.username())
    )]
    async fn check_out_user(
        &self,
        command: CheckUserOutOfBuilding,
    ) -> ServiceResult<Vec<BuildingEvent>> {
        let events = self
            .execute(command.building_id(), |building| {
                building.check_out_user(command.clone())
            })
            .await?;

        info!("user checked out");
        Ok(events)
    }

    async fn get_building(&self, building_id: Uuid) -> ServiceResult<Building> {
        self.load(building_id).await
    }

    async fn exists(&self, building_id: Uuid) -> ServiceResult<bool> {
        Ok(self.event_store.get_version(building_id).await?.is_some())
    }
}
