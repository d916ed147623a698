// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-Sourced Building Aggregate
//!
//! - Command handlers are pure functions: State → Command → Result<Event, Error>
//! - State reconstruction via event folding: [Event] → State
//! - All state changes represented as events
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Command → Aggregate → Events → Event Store
//!    ↓          ↓          ↓
//! Intent   Validation  Facts
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use cim_building::aggregate::*;
//!
//! // Load events from event store
//! let stored = event_store.read_events(building_id).await?;
//!
//! // Reconstruct current state
//! let mut building = Building::from_stored_events(&stored)?
//!     .ok_or(ServiceError::NotFound(building_id))?;
//!
//! // Handle command; the event is folded before this returns
//! building.check_in_user(command)?;
//!
//! // Persist what was recorded
//! let version = event_store
//!     .append(building_id, building.uncommitted_events().to_vec(), Some(building.version()))
//!     .await?;
//! building.mark_committed(version);
//! ```
//!
//! # Design Principles
//!
//! ## 1. Command-Event Separation
//! - Commands express intent, events express facts
//! - Commands can fail, events can only be corrupt
//!
//! ## 2. One Fold Step
//! - `apply_event(Option<State>, Event) → Result<State, ReplayError>`
//! - Same function for replay and for freshly recorded events
//!
//! ## 3. Time as Parameter
//! - Timestamps come from commands, never from `Utc::now()` in domain logic

pub mod building;
pub mod commands;
pub mod handlers;

pub use building::{apply_event, Building, BuildingState, ReplayError};
pub use commands::*;
pub use handlers::*;
