// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Domain Events
//!
//! Events are immutable facts representing state changes that have occurred.
//!
//! # Event Sourcing Principles
//!
//! 1. **Events are immutable**: Once recorded, events never change
//! 2. **Events are past tense**: Named for what happened (Registered, not Register)
//! 3. **Events include metadata**: correlation_id, causation_id, timestamp
//! 4. **Events are versioned**: event_version field records the schema version
//!
//! # Event Flow
//!
//! ```text
//! Command → Building → Event → EventStore
//!   (what to do)  (validate)  (what happened)  (persist)
//! ```
//!
//! Ordering within a stream is not part of the event itself. The event store
//! assigns a sequence number on append (see [`crate::event_store::StoredEvent`]).

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod building;

// Re-export commonly used types
pub use building::{BuildingEvent, BuildingRegistered, UserCheckedIn, UserCheckedOut};

/// Capability shared by every domain event
///
/// Gives uniform access to the metadata envelope regardless of the concrete
/// event type.
pub trait DomainEvent {
    /// Unique event identifier
    fn event_id(&self) -> Uuid;

    /// Aggregate this event belongs to
    fn aggregate_id(&self) -> Uuid;

    /// When the event occurred
    fn timestamp(&self) -> DateTime<Utc>;

    /// Correlation ID for request tracing
    fn correlation_id(&self) -> Uuid;

    /// Event that caused this one, if any
    fn causation_id(&self) -> Option<Uuid>;

    /// Schema version of the payload
    fn event_version(&self) -> u32;

    /// Human-readable event type name
    fn event_type_name(&self) -> &'static str;
}
