//! Contact domain model.
//!
//! ## Summary
//! A [`ContactSubmission`] is what the public form sends after validation; a
//! [`Contact`] is a stored submission carrying its store-assigned id and
//! insertion timestamp.

pub mod validation;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use validation::{ValidationError, validate};

/// Store-assigned contact identifier.
///
/// Backed by a UUIDv7, so identifiers generated later compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(uuid::Uuid);

impl ContactId {
    /// ## Summary
    /// Generates a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl FromStr for ContactId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_err| CoreError::InvalidIdentifier(s.to_string()))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A validated contact-form submission, before it has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub services: Vec<String>,
}

impl ContactSubmission {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub services: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    #[must_use]
    pub fn from_submission(
        id: ContactId,
        submission: ContactSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone_number: submission.phone_number,
            message: submission.message,
            services: submission.services,
            created_at,
        }
    }

    /// ## Summary
    /// Replaces every mutable field with the values from `submission`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, submission: ContactSubmission) {
        self.first_name = submission.first_name;
        self.last_name = submission.last_name;
        self.email = submission.email;
        self.phone_number = submission.phone_number;
        self.message = submission.message;
        self.services = submission.services;
    }
}
