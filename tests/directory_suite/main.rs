//! End-to-end suite for the contact directory
//!
//! Drives the public facade the way a consuming UI layer would: list
//! queries on the collection address, item-scoped edits, observer
//! refresh signals, and restarts against the same table file.

mod common;

mod editor_flow;
mod observers;
mod scenarios;
