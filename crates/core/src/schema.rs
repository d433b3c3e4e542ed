//! Schema for the contact table
//!
//! Single source of truth for the authority string, the collection path,
//! column names, resource-type tags, and the gender domain. Every other
//! crate names columns and addresses through this module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority naming the whole directory, the first segment of every address
pub const AUTHORITY: &str = "rolodex";

/// Path segment for the contact collection, appended to the authority
pub const PATH_CONTACTS: &str = "contacts";

/// Name of the persisted contact table
pub const TABLE_NAME: &str = "contacts";

/// Resource-type tag for a collection address
pub const CONTENT_LIST_TYPE: &str = "application/vnd.rolodex.contact-list";

/// Resource-type tag for a single-item address
pub const CONTENT_ITEM_TYPE: &str = "application/vnd.rolodex.contact";

/// Columns of the contact table
///
/// The `as_str` names are part of the persisted schema and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Unique row identifier, engine-assigned
    Id,
    /// Contact name, required
    Name,
    /// Email address, optional
    Email,
    /// Gender, stored as its ordinal
    Gender,
    /// Phone number, optional, length 10 if non-empty
    Mobile,
}

/// All columns in schema order, the default projection
pub const ALL_COLUMNS: [Column; 5] = [
    Column::Id,
    Column::Name,
    Column::Email,
    Column::Gender,
    Column::Mobile,
];

impl Column {
    /// Column name as persisted in the table schema
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Id => "_id",
            Column::Name => "name",
            Column::Email => "email",
            Column::Gender => "gender",
            Column::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of a contact
///
/// Stored as a stable ordinal integer. The ordinal values are part of the
/// on-disk format and MUST NOT change:
/// - Unknown = 0
/// - Male = 1
/// - Female = 2
///
/// Encoding and decoding go through [`Gender::ordinal`] and
/// [`Gender::from_ordinal`] rather than declaration order; unknown
/// ordinals are rejected, whether they come from a caller or from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Gender {
    /// Gender not specified
    Unknown,
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Stable integer encoding of this gender
    pub fn ordinal(self) -> i64 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// Decode a stored ordinal, rejecting anything outside the domain
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Gender::Unknown),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unknown
    }
}

impl From<Gender> for i64 {
    fn from(gender: Gender) -> i64 {
        gender.ordinal()
    }
}

impl TryFrom<i64> for Gender {
    type Error = InvalidGenderOrdinal;

    fn try_from(ordinal: i64) -> std::result::Result<Self, Self::Error> {
        Gender::from_ordinal(ordinal).ok_or(InvalidGenderOrdinal(ordinal))
    }
}

/// Error returned when decoding an ordinal outside the gender domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGenderOrdinal(pub i64);

impl fmt::Display for InvalidGenderOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid gender ordinal: {}", self.0)
    }
}

impl std::error::Error for InvalidGenderOrdinal {}
