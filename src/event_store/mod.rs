// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! The append/load contract between the Building aggregate and whatever log
//! persists its events.
//!
//! # Architecture
//!
//! ```text
//! Command → Building → Events → EventStore → Storage
//!              ↑                    │
//!              └──── read_events ───┘
//! ```
//!
//! # Event Store Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Events keep their append order within an aggregate
//! 3. **Optimistic Concurrency**: A stale `expected_version` is rejected, so
//!    two racing load → validate → append cycles cannot both succeed
//! 4. **Replay**: Events can be read back in order to rebuild state
//!
//! # Example
//!
//! ```rust
//! use cim_building::event_store::{EventStore, InMemoryEventStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryEventStore::new();
//!
//!     let aggregate_id = uuid::Uuid::now_v7();
//!     let events = store.read_events(aggregate_id).await?;
//!     assert!(events.is_empty());
//!     assert_eq!(store.get_version(aggregate_id).await?, None);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EventStoreResult;
use crate::events::{BuildingEvent, DomainEvent};

pub mod memory;

pub use memory::InMemoryEventStore;

/// Event Store trait for persisting and retrieving building events
///
/// Implementations must ensure:
///
/// - **Atomicity**: Appending events succeeds or fails as a unit
/// - **Consistency**: Event ordering is maintained
/// - **Isolation**: At most one append per aggregate passes a given
///   `expected_version`
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to an aggregate's event stream
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The aggregate these events belong to
    /// * `events` - Events to append, in order
    /// * `expected_version` - Current version the caller loaded (0 for a new
    ///   stream); `None` skips the check
    ///
    /// # Returns
    ///
    /// The new version after appending events
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if expected_version doesn't match actual version
    /// - `Storage` if writing to storage fails
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<BuildingEvent>,
        expected_version: Option<u64>,
    ) -> EventStoreResult<u64>;

    /// Read all events for an aggregate, in append order
    ///
    /// An unknown aggregate yields an empty vector.
    async fn read_events(
        &self,
        aggregate_id: Uuid,
    ) -> EventStoreResult<Vec<StoredEvent<BuildingEvent>>>;

    /// Read events for an aggregate from a specific version (inclusive)
    async fn read_events_from(
        &self,
        aggregate_id: Uuid,
        from_version: u64,
    ) -> EventStoreResult<Vec<StoredEvent<BuildingEvent>>>;

    /// Get the current version of an aggregate
    ///
    /// Returns the highest sequence number, or None if no events exist.
    async fn get_version(&self, aggregate_id: Uuid) -> EventStoreResult<Option<u64>>;
}

/// Stored event envelope with metadata
///
/// Wraps a domain event with the sequence number the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent<E> {
    /// Unique event ID (UUID v7 for time-ordering)
    pub event_id: Uuid,

    /// Aggregate ID this event belongs to
    pub aggregate_id: Uuid,

    /// Sequence number within aggregate stream, starting at 1
    pub sequence: u64,

    /// Event timestamp (when it occurred)
    pub timestamp: DateTime<Utc>,

    /// Correlation ID (tracks related events across aggregates)
    pub correlation_id: Uuid,

    /// Causation ID (immediate cause of this event)
    pub causation_id: Option<Uuid>,

    /// The domain event
    pub data: E,
}

impl<E: DomainEvent> StoredEvent<E> {
    /// Wrap an event at the given stream position
    pub fn new(data: E, sequence: u64) -> Self {
        Self {
            event_id: data.event_id(),
            aggregate_id: data.aggregate_id(),
            sequence,
            timestamp: data.timestamp(),
            correlation_id: data.correlation_id(),
            causation_id: data.causation_id(),
            data,
        }
    }
}
