//! Core entity structs for the RSVP registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ResponseStatus;

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A person who may submit an attendance response.
///
/// The registry treats participants as caller-supplied value objects: it
/// stores whatever fields it is handed, verbatim, and never merges an old
/// record's name or email into a new one. The only field the registry
/// inspects is `id`, which must be non-empty for a record to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier. Uniqueness is the caller's contract; the registry
    /// keys records by this value.
    pub id: String,
    /// Display name. Not validated.
    pub name: String,
    /// Contact address. Not validated (presence or format).
    pub email: String,
}

impl Participant {
    /// Create a participant from its three fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response record
// ---------------------------------------------------------------------------

/// The stored association of one participant, one status, and the moment the
/// status was last set.
///
/// Records are immutable once stored: every update replaces the whole record
/// (participant fields included) rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// The participant as supplied on the call that created this record.
    pub participant: Participant,
    /// The attendance response.
    pub status: ResponseStatus,
    /// When the status was set.
    pub responded_at: DateTime<Utc>,
}

impl ResponseRecord {
    /// Build a record stamped with the current time.
    pub fn new(participant: Participant, status: ResponseStatus) -> Self {
        Self {
            participant,
            status,
            responded_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregate counts
// ---------------------------------------------------------------------------

/// Aggregate response counts, derived fresh from registry state on each call.
///
/// Invariant: `total == confirmed + declined + tentative`. The status
/// enumeration is closed, so every stored record lands in exactly one of the
/// three buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCounts {
    /// Count of all stored records.
    pub total: usize,
    /// Records with status [`ResponseStatus::Confirmed`].
    pub confirmed: usize,
    /// Records with status [`ResponseStatus::Declined`].
    pub declined: usize,
    /// Records with status [`ResponseStatus::Tentative`].
    pub tentative: usize,
}

impl ResponseCounts {
    /// Whether the three per-status counts sum to the total.
    ///
    /// Holds for every value produced by the registry; exposed so tests and
    /// downstream consumers can assert it.
    pub const fn is_balanced(&self) -> bool {
        self.confirmed
            .saturating_add(self.declined)
            .saturating_add(self.tentative)
            == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_new_stamps_current_time() {
        let before = Utc::now();
        let record = ResponseRecord::new(
            Participant::new("p1", "Alice", "alice@example.com"),
            ResponseStatus::Confirmed,
        );
        assert!(record.responded_at >= before);
        assert!(record.responded_at <= Utc::now());
    }

    #[test]
    fn counts_balance_check() {
        let balanced = ResponseCounts {
            total: 3,
            confirmed: 1,
            declined: 1,
            tentative: 1,
        };
        assert!(balanced.is_balanced());

        let skewed = ResponseCounts {
            total: 2,
            confirmed: 1,
            declined: 0,
            tentative: 0,
        };
        assert!(!skewed.is_balanced());
    }

    #[test]
    fn record_roundtrip_serde() {
        let original = ResponseRecord::new(
            Participant::new("p1", "Alice", "alice@example.com"),
            ResponseStatus::Tentative,
        );
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<ResponseRecord, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }
}
