// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Name Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Building name validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildingNameError {
    #[error("Building name is empty")]
    Empty,

    #[error("Building name exceeds maximum length of 255 characters: {0}")]
    TooLong(usize),
}

/// Display name of a building
///
/// Invariants:
/// - Not empty and not whitespace-only
/// - At most 255 characters
///
/// The name is stored exactly as given; surrounding whitespace is kept.
///
/// # Examples
///
/// ```rust
/// use cim_building::domain::BuildingName;
///
/// let name = BuildingName::new("Tower A").unwrap();
/// assert_eq!(name.as_str(), "Tower A");
///
/// assert!(BuildingName::new("").is_err());
/// assert!(BuildingName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildingName(String);

impl BuildingName {
    /// Maximum length in characters
    pub const MAX_LENGTH: usize = 255;

    /// Create a new building name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, BuildingNameError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(BuildingNameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(BuildingNameError::TooLong(length));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BuildingName {
    type Error = BuildingNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BuildingName> for String {
    fn from(name: BuildingName) -> Self {
        name.0
    }
}

impl TryFrom<&str> for BuildingName {
    type Error = BuildingNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for BuildingName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
