//! Error types for the `rsvp-registry` crate.
//!
//! Only two operations can fail: [`upsert`] when the participant carries no
//! identifier, and [`load_snapshot`] when the snapshot text is not a valid
//! record array. Every query is a total function over current state.
//!
//! [`upsert`]: crate::ResponseRegistry::upsert
//! [`load_snapshot`]: crate::ResponseRegistry::load_snapshot

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The participant on a single-record operation has an empty identifier.
    ///
    /// The operation performs no mutation when this is returned.
    #[error("participant is missing an id")]
    MissingParticipantId,

    /// A snapshot could not be parsed as a record array.
    ///
    /// Registry state is left exactly as it was before the load attempt.
    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot {
        /// The underlying parse failure, rendered.
        reason: String,
    },

    /// An internal error that should not occur in normal operation.
    #[error("internal registry error: {0}")]
    Internal(&'static str),
}
