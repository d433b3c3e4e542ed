//! Rolodex: an embedded, file-backed contact directory
//!
//! A single-table contact store behind a validating CRUD provider, with
//! string addressing (`rolodex/contacts`, `rolodex/contacts/<id>`) and an
//! address-keyed change-notification hub readers subscribe to.
//!
//! # Example
//!
//! ```no_run
//! use rolodex::{ContactValues, Filter, Gender, Projection};
//!
//! let directory = rolodex::open("contacts.tbl")?;
//! let collection = directory.resolver().collection_address();
//!
//! let values = ContactValues::new()
//!     .name("Terminous")
//!     .email("abc@ijk.xyz")
//!     .gender(Gender::Male)
//!     .mobile("9718666289");
//! let id = directory.insert(&collection, &values)?;
//!
//! let item = directory.resolver().item_address(id);
//! for row in directory.query(&item, &Projection::All, &Filter::All, None)? {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), rolodex::Error>(())
//! ```

#![warn(clippy::all)]

pub mod editor;

pub use rolodex_core::{
    schema, AddressResolver, Column, ContactId, ContactRow, ContactValues, Direction, Error,
    Filter, Gender, Order, Projection, Resolved, Result, Row, Value, ALL_COLUMNS,
};
pub use rolodex_engine::{
    validate_insert, validate_update, Directory, DirectoryConfig, Rows, UpdateCheck,
};
pub use rolodex_notify::{ChangeHub, Observer, Subscription};
pub use rolodex_storage::ContactTable;

use std::path::PathBuf;

/// Open a directory at the given table file with default configuration
///
/// # Errors
///
/// Returns an error if an existing table file fails verification.
pub fn open(data_path: impl Into<PathBuf>) -> Result<Directory> {
    Directory::open(DirectoryConfig::new(data_path))
}
