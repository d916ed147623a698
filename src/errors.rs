// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for event storage and configuration
//!
//! Domain failures (rejected commands, corrupted histories) live next to the
//! aggregate in [`crate::aggregate`]. This module covers the collaborators
//! around it.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in event store operations
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// Optimistic concurrency check failed
    #[error("Concurrency conflict on {aggregate_id}: expected version {expected}, current version is {actual}")]
    ConcurrencyConflict {
        aggregate_id: Uuid,
        expected: u64,
        actual: u64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for event store operations
pub type EventStoreResult<T> = Result<T, EventStoreError>;

impl From<serde_json::Error> for EventStoreError {
    fn from(err: serde_json::Error) -> Self {
        EventStoreError::Serialization(err.to_string())
    }
}

/// Configuration error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable held a value that could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
