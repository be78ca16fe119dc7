//! Shared data model for the cmdhint workspace.
//!
//! # Design constraints
//! - Everything here is plain data: no I/O, no matching logic.
//! - `Resolution` keys candidates by package name in a `BTreeMap` so that
//!   every consumer observes the same ascending-by-package order.

mod channel;
mod index;
mod resolution;

pub use channel::ChannelTag;
pub use index::{CommandIndex, PackageBinaries};
pub use resolution::{Candidate, Classification, Resolution};
