// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory Event Store
//!
//! Keeps one ordered stream per aggregate behind a single lock. The version
//! check and the append happen under the same write guard.
//!
//! Intended for tests, local development and the demo binary. Nothing
//! survives the process.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{EventStore, StoredEvent};
use crate::errors::{EventStoreError, EventStoreResult};
use crate::events::{BuildingEvent, DomainEvent};

type Streams = HashMap<Uuid, Vec<StoredEvent<BuildingEvent>>>;

/// In-memory event store
///
/// Cloning shares the underlying streams.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    streams: Arc<RwLock<Streams>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of aggregates with at least one event
    pub async fn stream_count(&self) -> usize {
        self.streams.read().await.len()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<BuildingEvent>,
        expected_version: Option<u64>,
    ) -> EventStoreResult<u64> {
        let mut streams = self.streams.write().await;
        let current_version = streams
            .get(&aggregate_id)
            .map(|stream| stream.len() as u64)
            .unwrap_or(0);

        if let Some(expected) = expected_version {
            if expected != current_version {
                warn!(
                    %aggregate_id,
                    expected,
                    actual = current_version,
                    "rejected append with stale version"
                );
                return Err(EventStoreError::ConcurrencyConflict {
                    aggregate_id,
                    expected,
                    actual: current_version,
                });
            }
        }

        if let Some(foreign) = events.iter().find(|e| e.aggregate_id() != aggregate_id) {
            return Err(EventStoreError::Storage(format!(
                "event {} belongs to aggregate {}, not {}",
                foreign.event_id(),
                foreign.aggregate_id(),
                aggregate_id
            )));
        }

        if events.is_empty() {
            return Ok(current_version);
        }

        let stream = streams.entry(aggregate_id).or_default();
        for event in events {
            let sequence = stream.len() as u64 + 1;
            debug!(
                %aggregate_id,
                sequence,
                event_type = event.event_type_name(),
                "appending event"
            );
            stream.push(StoredEvent::new(event, sequence));
        }

        Ok(stream.len() as u64)
    }

    async fn read_events(
        &self,
        aggregate_id: Uuid,
    ) -> EventStoreResult<Vec<StoredEvent<BuildingEvent>>> {
        self.read_events_from(aggregate_id, 1).await
    }

    async fn read_events_from(
        &self,
        aggregate_id: Uuid,
        from_version: u64,
    ) -> EventStoreResult<Vec<StoredEvent<BuildingEvent>>> {
        let streams = self.streams.read().await;

        Ok(streams
            .get(&aggregate_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|stored| stored.sequence >= from_version)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_version(&self, aggregate_id: Uuid) -> EventStoreResult<Option<u64>> {
        let streams = self.streams.read().await;

        Ok(streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map(|stored| stored.sequence))
    }
}
