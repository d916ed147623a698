// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Domain Models
//!
//! Value objects with validation invariants used by the Building aggregate.
//!
//! - [`BuildingName`] - display name fixed at registration
//! - [`Username`] - identity of a user checking in or out (exact, case-sensitive)

pub mod building_name;
pub mod username;

// Re-export value objects
pub use building_name::{BuildingName, BuildingNameError};
pub use username::{Username, UsernameError};
