//! Address resolution
//!
//! Records are addressed by opaque strings following the
//! `<authority>/<collection>[/<id>]` scheme:
//!
//! - `rolodex/contacts` is the whole collection
//! - `rolodex/contacts/3` is the row with id 3
//!
//! The resolver is constructed once at startup from the schema authority
//! and injected into the engine; resolution is a pure pattern match on
//! the address shape, shared by query, update, delete, and
//! `resource_type`. Insert accepts only the collection form.

use crate::error::{Error, Result};
use crate::schema::{AUTHORITY, PATH_CONTACTS};
use crate::types::ContactId;

/// Operation target a resolved address refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// All rows of the table, optionally narrowed by a caller filter
    Collection,
    /// The single row carrying the extracted identifier
    Item(ContactId),
}

/// Maps opaque address strings to operation targets
///
/// One resolver is built per directory instance; the authority is
/// configuration, not global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResolver {
    authority: String,
    collection: String,
}

impl AddressResolver {
    /// Create a resolver for the given authority
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            collection: PATH_CONTACTS.to_string(),
        }
    }

    /// Authority this resolver answers for
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Canonical address of the contact collection
    pub fn collection_address(&self) -> String {
        format!("{}/{}", self.authority, self.collection)
    }

    /// Canonical address of a single row
    pub fn item_address(&self, id: ContactId) -> String {
        format!("{}/{}/{}", self.authority, self.collection, id)
    }

    /// Resolve an address to its operation target
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAddress`] if the address matches
    /// neither the collection nor the item pattern.
    pub fn resolve(&self, address: &str) -> Result<Resolved> {
        let unsupported = || Error::UnsupportedAddress(address.to_string());

        let rest = address
            .strip_prefix(self.authority.as_str())
            .and_then(|r| r.strip_prefix('/'))
            .ok_or_else(unsupported)?;

        match rest.strip_prefix(self.collection.as_str()) {
            Some("") => Ok(Resolved::Collection),
            Some(tail) => {
                let id = tail
                    .strip_prefix('/')
                    .filter(|t| !t.is_empty())
                    .and_then(|t| t.parse::<ContactId>().ok())
                    .ok_or_else(unsupported)?;
                Ok(Resolved::Item(id))
            }
            None => Err(unsupported()),
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new(AUTHORITY)
    }
}
