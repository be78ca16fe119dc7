//! Matching core: turn a mistyped command plus a set of command indexes into
//! a deterministic resolution.
//!
//! This crate owns *what* the best matches are. It does not own where
//! indexes come from (`cmdhint-index`) or how results are worded
//! (`cmdhint-cli`). Everything here is pure in-memory computation; the only
//! failure mode is distance-table exhaustion.

mod aggregate;
mod distance;
mod resolve;

pub use aggregate::{MatchState, scan_index};
pub use distance::{DistanceError, distance};
pub use resolve::{SUGGEST_THRESHOLD, classify, resolve};
