//! The response registry: one current record per participant.
//!
//! [`ResponseRegistry`] owns the participant-to-record mapping and serves
//! every query from it. There are no cached aggregates -- counts are derived
//! fresh on each call, so they can never drift from the stored records.
//!
//! # Design
//!
//! - **One record per participant**: keyed by participant id, replaced
//!   wholesale on every update (last write wins for all fields).
//! - **Closed status set**: every record is Confirmed, Declined, or
//!   Tentative; the per-status projections partition the full listing.
//! - **Observability only**: the injected [`Notifier`] never influences
//!   state or return values.

use std::collections::BTreeMap;

use rsvp_types::{Participant, ResponseCounts, ResponseRecord, ResponseStatus};

use crate::error::RegistryError;
use crate::notifier::Notifier;

/// In-memory registry of attendance responses, keyed by participant id.
///
/// Iteration order for [`all_responses`] and the per-status projections is
/// ascending participant id (the backing map is a [`BTreeMap`]), which keeps
/// listings deterministic across runs regardless of insertion order.
///
/// Mutating operations take `&mut self`, so each call is atomic under the
/// ownership rules. Callers that share a registry across threads wrap it in
/// a `Mutex`; the registry itself holds no lock.
///
/// [`all_responses`]: ResponseRegistry::all_responses
#[derive(Debug)]
pub struct ResponseRegistry<N> {
    /// Current records, one per participant id.
    records: BTreeMap<String, ResponseRecord>,
    /// Observability sink for successful updates and rejected input.
    notifier: N,
}

impl<N: Notifier> ResponseRegistry<N> {
    /// Create an empty registry reporting to the given notifier.
    pub const fn new(notifier: N) -> Self {
        Self {
            records: BTreeMap::new(),
            notifier,
        }
    }

    /// Return the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return whether the registry has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add or replace a participant's response.
    ///
    /// The stored record carries the participant exactly as passed here --
    /// a later call with the same id and a different name or email replaces
    /// those fields too. The record is stamped at call time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingParticipantId`] when the participant
    /// id is empty. No state changes in that case; the rejection is also
    /// reported through the notifier.
    pub fn upsert(
        &mut self,
        participant: Participant,
        status: ResponseStatus,
    ) -> Result<&ResponseRecord, RegistryError> {
        if participant.id.is_empty() {
            let err = RegistryError::MissingParticipantId;
            self.notifier
                .notify_error("cannot store response: participant is missing an id", Some(&err));
            return Err(err);
        }

        let id = participant.id.clone();
        let message = format!(
            "response recorded for {} ({}): {}",
            participant.name, participant.id, status,
        );

        let record = ResponseRecord::new(participant, status);
        self.records.insert(id.clone(), record);
        self.notifier.notify_info(&message);

        // Return a reference to the record we just inserted.
        self.records
            .get(&id)
            .ok_or(RegistryError::Internal("record missing after insert"))
    }

    /// All records with the given status, in ascending participant id order.
    pub fn responses_by_status(&self, status: ResponseStatus) -> Vec<&ResponseRecord> {
        self.records
            .values()
            .filter(|record| record.status == status)
            .collect()
    }

    /// All records with status [`ResponseStatus::Confirmed`].
    pub fn confirmed_attendees(&self) -> Vec<&ResponseRecord> {
        self.responses_by_status(ResponseStatus::Confirmed)
    }

    /// All records with status [`ResponseStatus::Declined`].
    pub fn declined_attendees(&self) -> Vec<&ResponseRecord> {
        self.responses_by_status(ResponseStatus::Declined)
    }

    /// All records with status [`ResponseStatus::Tentative`].
    pub fn tentative_attendees(&self) -> Vec<&ResponseRecord> {
        self.responses_by_status(ResponseStatus::Tentative)
    }

    /// Every stored record, in ascending participant id order.
    pub fn all_responses(&self) -> Vec<&ResponseRecord> {
        self.records.values().collect()
    }

    /// Aggregate counts, derived from current state on every call.
    ///
    /// `total` always equals the sum of the three per-status counts: the
    /// status set is closed, so no record can fall outside the buckets.
    pub fn counts(&self) -> ResponseCounts {
        let count_of = |status: ResponseStatus| {
            self.records
                .values()
                .filter(|record| record.status == status)
                .count()
        };

        ResponseCounts {
            total: self.records.len(),
            confirmed: count_of(ResponseStatus::Confirmed),
            declined: count_of(ResponseStatus::Declined),
            tentative: count_of(ResponseStatus::Tentative),
        }
    }

    /// Discard all current state and store the given records.
    ///
    /// Candidates are keyed by their participant id in input order, so a
    /// duplicate id keeps the last candidate in the sequence. A candidate
    /// with an empty id is skipped and reported through the notifier; the
    /// load still succeeds for every valid candidate. An empty input simply
    /// clears the registry.
    ///
    /// Returns the number of records stored.
    pub fn replace_all(&mut self, records: Vec<ResponseRecord>) -> usize {
        self.records.clear();

        for record in records {
            if record.participant.id.is_empty() {
                self.notifier
                    .notify_error("skipping response: participant is missing an id", None);
                continue;
            }
            self.records.insert(record.participant.id.clone(), record);
        }

        let stored = self.records.len();
        self.notifier
            .notify_info(&format!("registry loaded with {stored} responses"));
        stored
    }

    /// Parse a JSON snapshot (an array of records) and load it via
    /// [`replace_all`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedSnapshot`] when the text is not a
    /// valid record array. Existing state is left completely unchanged in
    /// that case -- a malformed snapshot is a hard failure of the whole
    /// load, distinct from skipping a single id-less candidate.
    ///
    /// [`replace_all`]: ResponseRegistry::replace_all
    pub fn load_snapshot(&mut self, json: &str) -> Result<usize, RegistryError> {
        let records: Vec<ResponseRecord> = match serde_json::from_str(json) {
            Ok(records) => records,
            Err(err) => {
                self.notifier
                    .notify_error("cannot load snapshot: not a record array", Some(&err));
                return Err(RegistryError::MalformedSnapshot {
                    reason: err.to_string(),
                });
            }
        };

        Ok(self.replace_all(records))
    }

    /// Look up a participant's current record.
    ///
    /// Returns `None` for an identifier that was never stored; this is not
    /// an error condition.
    pub fn response_for(&self, participant_id: &str) -> Option<&ResponseRecord> {
        self.records.get(participant_id)
    }
}
