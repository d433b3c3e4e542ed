//! Record types for the contact table
//!
//! This module defines the record model shared by every layer:
//! - ContactId: engine-assigned row identifier
//! - ContactRow: one persisted row
//! - ContactValues: caller-supplied partial record with key-presence
//!   semantics (an absent field is neither validated nor written)
//! - NewContact: a validated insert payload
//! - ContactPatch: a validated update payload

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schema::Gender;

/// Unique identifier for a contact row
///
/// Assigned monotonically by the storage engine on insert, never reused
/// after deletion, including across process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactId(i64);

impl ContactId {
    /// Wrap a raw identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value of this identifier
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// One persisted row of the contact table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    /// Unique row identifier
    pub id: ContactId,
    /// Contact name, never empty for a persisted row
    pub name: String,
    /// Email address; `None` is rendered by consumers with a placeholder
    pub email: Option<String>,
    /// Gender, persisted through its ordinal codec
    pub gender: Gender,
    /// Phone number; when present and non-empty, exactly 10 characters
    pub mobile: Option<String>,
}

/// Caller-supplied partial record
///
/// Mirrors the shape callers hand to insert/update: each field is
/// optional, and `None` means "key not present": the field is neither
/// validated nor written. Gender travels as its raw ordinal so that
/// out-of-domain values reach the validator instead of being silently
/// coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValues {
    /// Contact name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Gender as a raw ordinal, validated before any mutation
    pub gender: Option<i64>,
    /// Phone number
    pub mobile: Option<String>,
}

impl ContactValues {
    /// Create an empty partial record (no keys present)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email field
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the gender field from a typed value
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender.ordinal());
        self
    }

    /// Set the gender field from a raw ordinal
    pub fn gender_ordinal(mut self, ordinal: i64) -> Self {
        self.gender = Some(ordinal);
        self
    }

    /// Set the mobile field
    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// True if no keys are present at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.gender.is_none() && self.mobile.is_none()
    }
}

/// A validated insert payload
///
/// Produced by the engine after `validate_insert` has passed; the storage
/// layer trusts it and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Contact name, non-empty
    pub name: String,
    /// Email address, stored as given
    pub email: Option<String>,
    /// Decoded gender
    pub gender: Gender,
    /// Phone number, stored as given
    pub mobile: Option<String>,
}

/// A validated update payload
///
/// Field presence mirrors the originating [`ContactValues`]; gender has
/// already been decoded through the ordinal codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// Replacement name, non-empty when present
    pub name: Option<String>,
    /// Replacement email
    pub email: Option<String>,
    /// Replacement gender
    pub gender: Option<Gender>,
    /// Replacement phone number
    pub mobile: Option<String>,
}

impl ContactPatch {
    /// Apply this patch to a row in place
    pub fn apply(&self, row: &mut ContactRow) {
        if let Some(name) = &self.name {
            row.name = name.clone();
        }
        if let Some(email) = &self.email {
            row.email = Some(email.clone());
        }
        if let Some(gender) = self.gender {
            row.gender = gender;
        }
        if let Some(mobile) = &self.mobile {
            row.mobile = Some(mobile.clone());
        }
    }
}
