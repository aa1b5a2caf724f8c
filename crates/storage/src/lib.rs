//! Snapshot supply for leverage.
//!
//! The scoring and progress crates work on in-memory data. This crate
//! provides a trait-based way to obtain that data, with a JSON file
//! reference implementation and a validation pass that flags out-of-range
//! input without rejecting it.

#![warn(missing_docs)]

pub mod trait_;
pub mod snapshot;
pub mod json_source;
pub mod validation;

pub use trait_::{SnapshotSource, StorageError, Result, InMemorySource};
pub use snapshot::{Snapshot, STRONG_IMPACT_MIN};
pub use json_source::JsonSnapshotSource;
pub use validation::{validate_activity, validate_ideal_path, validate_snapshot, ValidationIssue};
