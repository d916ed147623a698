// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building service configuration

use crate::errors::ConfigError;

/// Environment variable holding the conflict retry limit
pub const MAX_CONFLICT_RETRIES_VAR: &str = "BUILDING_MAX_CONFLICT_RETRIES";

/// Configuration for [`crate::service::EventSourcedBuildingService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingServiceConfig {
    /// How many times a command is reloaded and retried after losing an
    /// optimistic concurrency race (default: 3)
    pub max_conflict_retries: u32,
}

impl Default for BuildingServiceConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: 3,
        }
    }
}

impl BuildingServiceConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(MAX_CONFLICT_RETRIES_VAR) {
            config.max_conflict_retries =
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: MAX_CONFLICT_RETRIES_VAR.to_string(),
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn with_max_conflict_retries(mut self, retries: u32) -> Self {
        self.max_conflict_retries = retries;
        self
    }
}
