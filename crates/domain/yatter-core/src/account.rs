//! Credential value objects.
//!
//! Both wrappers accept any raw string. `validate` classifies the value
//! without side effects; an invalid value is an ordinary outcome, not an error
//! path, so the form can echo whatever the user typed.

use serde::{Deserialize, Serialize};
use std::fmt;
use yatter_config::{PASSWORD_MIN_LEN, USERNAME_MAX_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsernameIssue {
    #[error("username is empty")]
    Empty,
    #[error("username is longer than {} characters", USERNAME_MAX_LEN)]
    TooLong,
    #[error("username may only contain a-z, A-Z, 0-9 and _")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordIssue {
    #[error("password is empty")]
    Empty,
    #[error("password is shorter than {} characters", PASSWORD_MIN_LEN)]
    TooShort,
    #[error("password is blank")]
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> Result<(), UsernameIssue> {
        if self.0.is_empty() {
            return Err(UsernameIssue::Empty);
        }
        if self.0.chars().count() > USERNAME_MAX_LEN {
            return Err(UsernameIssue::TooLong);
        }
        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(UsernameIssue::InvalidCharacters);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Never printed through `Debug`; the value is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> Result<(), PasswordIssue> {
        if self.0.is_empty() {
            return Err(PasswordIssue::Empty);
        }
        if self.0.trim().is_empty() {
            return Err(PasswordIssue::Blank);
        }
        if self.0.chars().count() < PASSWORD_MIN_LEN {
            return Err(PasswordIssue::TooShort);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
