//! Directory engine
//!
//! The provider layer of the contact directory. It wires the address
//! resolver, the validation gate, the file-backed table, and the change
//! hub into the five operations callers see:
//! `query` / `insert` / `update` / `delete` / `resource_type`.

#![warn(clippy::all)]

pub mod config;
pub mod directory;
pub mod validate;

pub use config::DirectoryConfig;
pub use directory::{Directory, Rows};
pub use validate::{validate_insert, validate_update, UpdateCheck};
