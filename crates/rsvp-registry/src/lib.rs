//! In-memory attendance response registry.
//!
//! One registry instance owns one record per participant and serves every
//! query from that mapping: status-filtered rosters, a full listing,
//! aggregate counts, and point lookups. Records are replaced wholesale on
//! every update and the whole mapping can be reloaded from a snapshot.
//!
//! # Architecture
//!
//! - [`registry`] -- The [`ResponseRegistry`]: mutations, projections, counts.
//! - [`notifier`] -- The [`Notifier`] capability plus production and
//!   capturing implementations.
//! - [`error`] -- [`RegistryError`] for the two fallible operations.
//!
//! # Usage
//!
//! ```
//! use rsvp_registry::{ResponseRegistry, TracingNotifier};
//! use rsvp_types::{Participant, ResponseStatus};
//!
//! let mut registry = ResponseRegistry::new(TracingNotifier);
//!
//! let alice = Participant::new("p1", "Alice", "alice@example.com");
//! registry.upsert(alice, ResponseStatus::Confirmed).ok();
//!
//! let counts = registry.counts();
//! assert_eq!(counts.total, 1);
//! assert_eq!(counts.confirmed, 1);
//! ```

pub mod error;
pub mod notifier;
pub mod registry;

// Re-export primary types at crate root.
pub use error::RegistryError;
pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
pub use registry::ResponseRegistry;
