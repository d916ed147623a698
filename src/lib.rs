// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-sourced Building aggregate for the Composable Information Machine
//!
//! A building's state is never stored directly. It is reconstructed by
//! folding its event history, and only changes through commands that validate
//! against current state before recording new events.
//!
//! ```text
//! Command → Building → Events → EventStore
//!              ↑                    │
//!              └──── replay ────────┘
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod service;

// Re-export commonly used types
pub use aggregate::{Building, BuildingState, CommandError, ReplayError};
pub use config::BuildingServiceConfig;
pub use domain::{BuildingName, Username};
pub use errors::{ConfigError, EventStoreError, EventStoreResult};
pub use event_store::{EventStore, InMemoryEventStore, StoredEvent};
pub use events::{BuildingEvent, DomainEvent};
pub use service::{BuildingService, EventSourcedBuildingService, ServiceError, ServiceResult};
