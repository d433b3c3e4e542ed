//! Change notification for the contact directory
//!
//! Process-wide observer registry keyed by address. The engine calls
//! `notify(address)` after every successful mutation; a dedicated
//! dispatcher thread delivers the change to every observer registered on
//! that address or an ancestor of it. Delivery is fire-and-forget: the
//! mutating caller never waits for observers.

#![warn(clippy::all)]

mod hub;

pub use hub::{ChangeHub, Observer, Subscription};
