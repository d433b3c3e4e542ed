//! Core types for the Rolodex contact directory
//!
//! This crate defines the foundational types shared by the storage,
//! notification, and engine layers:
//! - Schema: table name, column names, authority, resource-type tags
//! - Gender: tagged enumeration with a stable ordinal codec
//! - ContactId / ContactRow / ContactValues: the record model
//! - AddressResolver: collection vs. single-item address resolution
//! - Filter / Order: typed selection predicates and sort keys
//! - Value / Row / Projection: projected, dynamically-typed reads
//! - Error: error type hierarchy
//!
//! Nothing in this crate performs I/O; it is pure vocabulary consumed by
//! the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod error;
pub mod filter;
pub mod row;
pub mod schema;
pub mod types;
pub mod value;

pub use address::{AddressResolver, Resolved};
pub use error::{Error, Result};
pub use filter::{Direction, Filter, Order};
pub use row::{Projection, Row};
pub use schema::{Column, Gender, InvalidGenderOrdinal, ALL_COLUMNS};
pub use types::{ContactId, ContactPatch, ContactRow, ContactValues, NewContact};
pub use value::Value;
