//! Enumeration types for the RSVP registry.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Response status
// ---------------------------------------------------------------------------

/// A participant's attendance response.
///
/// This is a closed set: no other status is representable, which is what
/// makes [`counts`] exhaustive (total always equals the sum of the three
/// per-status counts). The serde representation keeps the wire labels of the
/// system this registry imports snapshots from: `"Yes"`, `"No"`, `"Maybe"`.
///
/// [`counts`]: struct@crate::ResponseCounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    /// The participant will attend ("Yes").
    #[serde(rename = "Yes")]
    Confirmed,
    /// The participant will not attend ("No").
    #[serde(rename = "No")]
    Declined,
    /// The participant is unsure ("Maybe").
    #[serde(rename = "Maybe")]
    Tentative,
}

impl ResponseStatus {
    /// All three statuses, in display order.
    ///
    /// Useful for exhaustive iteration (e.g. printing one roster per status).
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Declined, Self::Tentative];

    /// The wire/display label for this status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Yes",
            Self::Declined => "No",
            Self::Tentative => "Maybe",
        }
    }
}

impl core::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Confirmed).ok(),
            Some(String::from("\"Yes\"")),
        );
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Declined).ok(),
            Some(String::from("\"No\"")),
        );
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Tentative).ok(),
            Some(String::from("\"Maybe\"")),
        );
    }

    #[test]
    fn wire_labels_parse_back() {
        let parsed: Result<ResponseStatus, _> = serde_json::from_str("\"Maybe\"");
        assert_eq!(parsed.ok(), Some(ResponseStatus::Tentative));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let parsed: Result<ResponseStatus, _> = serde_json::from_str("\"Perhaps\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn display_matches_label() {
        for status in ResponseStatus::ALL {
            assert_eq!(status.to_string(), status.label());
        }
    }
}
