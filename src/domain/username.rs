// Copyright (c) 2025 - Cowboy AI, Inc.
//! Username Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Username validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is empty")]
    Empty,
}

/// Identity of a user checking into or out of a building
///
/// Usernames compare exactly: `"alice"` and `"Alice"` are different users,
/// and no trimming or normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new username
    ///
    /// # Invariants
    /// - Non-empty
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameError> {
        let username = username.into();

        if username.is_empty() {
            return Err(UsernameError::Empty);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_rejected() {
        assert_eq!(Username::new(""), Err(UsernameError::Empty));
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let lower = Username::new("alice").unwrap();
        let upper = Username::new("Alice").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_whitespace_is_significant() {
        let plain = Username::new("bob").unwrap();
        let padded = Username::new(" bob").unwrap();
        assert_ne!(plain, padded);
        assert_eq!(padded.as_str(), " bob");
    }
}
