// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Building Management
//!
//! Orchestrates the aggregate and the event store. The aggregate itself
//! never performs I/O; this layer loads it, runs the command, and hands the
//! recorded events to the store.
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Building (validate → record → fold)
//!     ↓
//! Event Store (optimistic append)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use uuid::Uuid;
//! use cim_building::aggregate::{CheckUserIntoBuilding, RegisterBuildingCommand};
//! use cim_building::domain::{BuildingName, Username};
//! use cim_building::event_store::InMemoryEventStore;
//! use cim_building::service::{BuildingService, EventSourcedBuildingService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = EventSourcedBuildingService::new(InMemoryEventStore::new());
//!
//!     let building_id = service
//!         .register_building(RegisterBuildingCommand {
//!             name: BuildingName::new("Tower A")?,
//!             timestamp: Utc::now(),
//!             correlation_id: Uuid::now_v7(),
//!         })
//!         .await?;
//!
//!     service
//!         .check_in_user(CheckUserIntoBuilding::new(
//!             Username::new("alice")?,
//!             building_id,
//!             Utc::now(),
//!             Uuid::now_v7(),
//!         ))
//!         .await?;
//!
//!     let building = service.get_building(building_id).await?;
//!     assert_eq!(building.checked_in_users().len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod building;

pub use building::{BuildingService, EventSourcedBuildingService, ServiceError, ServiceResult};
