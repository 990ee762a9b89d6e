//! Shared type definitions for the RSVP registry.
//!
//! This crate is the single source of truth for the data model shared by the
//! registry core and the demo runner. It contains no logic beyond
//! constructors and trivial accessors; all behavior lives in
//! `rsvp-registry`.
//!
//! # Modules
//!
//! - [`enums`] -- The closed [`ResponseStatus`] enumeration
//! - [`structs`] -- Participants, response records, and aggregate counts

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::ResponseStatus;
pub use structs::{Participant, ResponseCounts, ResponseRecord};
