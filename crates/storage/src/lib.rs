//! Storage layer for the contact directory
//!
//! This crate implements the file-backed table store:
//! - ContactTable: ordered in-memory table guarded by a `parking_lot::RwLock`,
//!   with a persisted monotonic id allocator
//! - Checksummed on-disk format with atomic rewrites (temp file + rename)
//!
//! # Design Notes
//!
//! - **Single logical writer**: every mutation runs under the write lock;
//!   the in-memory apply and the file rewrite happen inside one critical
//!   section, so readers observe either the pre- or post-state of a
//!   mutation, never a partial one.
//! - **Copy-then-commit**: mutations build the post-state, persist it,
//!   and only then swap it in. A failed write leaves memory and disk on
//!   the pre-state.
//! - **Ids are never reused**: the allocator high-water mark is written
//!   into the table file, so deletion (and restart) never resurrects an
//!   identifier.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod table;

pub use format::TableImage;
pub use table::ContactTable;
