//! Console demo driver for the RSVP registry.
//!
//! Seeds a small roster, records and updates responses, and prints counts
//! and per-status attendee lists. Optionally preloads a JSON snapshot
//! (`RSVP_SNAPSHOT` env var) before the demo sequence.
//!
//! The registry reports through a [`TracingNotifier`], so every upsert and
//! load shows up in the log output alongside the printed rosters.

mod config;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsvp_registry::{Notifier, ResponseRegistry, TracingNotifier};
use rsvp_types::{Participant, ResponseStatus};

use crate::config::RunnerConfig;

/// Application entry point.
///
/// Initializes logging, optionally preloads a snapshot, then runs the demo
/// sequence.
///
/// # Errors
///
/// Returns an error if the configured snapshot file cannot be read or is
/// malformed.
fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("rsvp-runner starting");

    let config = RunnerConfig::from_env();
    let mut registry = ResponseRegistry::new(TracingNotifier);

    if let Some(path) = &config.snapshot_path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot file {path}"))?;
        let loaded = registry
            .load_snapshot(&json)
            .with_context(|| format!("loading snapshot file {path}"))?;
        info!(path = %path, loaded, "snapshot preloaded");
    }

    run_demo(&mut registry)?;

    Ok(())
}

/// The scripted demo sequence: initial responses, a counts/roster readout,
/// some updates, and a final readout.
fn run_demo<N: Notifier>(registry: &mut ResponseRegistry<N>) -> anyhow::Result<()> {
    println!("==== RSVP Registry Demo ====");

    let roster = [
        Participant::new("p1", "Emily Rodriguez", "emily@example.com"),
        Participant::new("p2", "James Wilson", "james@example.com"),
        Participant::new("p3", "Sofia Chen", "sofia@example.com"),
        Participant::new("p4", "Miguel Santos", "miguel@example.com"),
        Participant::new("p5", "Olivia Johnson", "olivia@example.com"),
    ];
    let [emily, james, sofia, miguel, olivia] = roster;

    println!("\nRecording initial responses...");
    registry.upsert(emily, ResponseStatus::Confirmed)?;
    registry.upsert(james, ResponseStatus::Declined)?;
    registry.upsert(sofia.clone(), ResponseStatus::Tentative)?;

    print_counts(registry);

    println!("\nConfirmed attendees:");
    for record in registry.confirmed_attendees() {
        println!(
            "- {} ({})",
            record.participant.name, record.participant.email,
        );
    }

    println!("\nUpdating responses...");
    // Sofia firms up from Maybe to Yes; Miguel and Olivia respond late.
    registry.upsert(sofia, ResponseStatus::Confirmed)?;
    registry.upsert(miguel, ResponseStatus::Confirmed)?;
    registry.upsert(olivia, ResponseStatus::Declined)?;

    print_counts(registry);
    print_rosters(registry);

    Ok(())
}

/// Print the aggregate counts block.
fn print_counts<N: Notifier>(registry: &ResponseRegistry<N>) {
    let counts = registry.counts();
    println!("\nResponse counts:");
    println!("- Total: {}", counts.total);
    println!("- Confirmed: {}", counts.confirmed);
    println!("- Declined: {}", counts.declined);
    println!("- Tentative: {}", counts.tentative);
}

/// Print one roster per status, with response timestamps.
fn print_rosters<N: Notifier>(registry: &ResponseRegistry<N>) {
    println!("\nAll responses by status:");
    for status in ResponseStatus::ALL {
        println!("\n{status}:");
        for record in registry.responses_by_status(status) {
            println!(
                "- {} (responded {})",
                record.participant.name,
                record.responded_at.format("%b %-d %H:%M"),
            );
        }
    }
}
