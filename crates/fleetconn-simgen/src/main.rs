//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "binary"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Binary entrypoint for the fleet snapshot generator."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fleetconn_sim::{FleetSnapshot, SnapshotEngine};
use tempfile::NamedTempFile;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate a synthetic fleet connectivity snapshot",
    long_about = None
)]
struct Cli {
    /// Number of vehicles to synthesize
    #[arg(long, default_value_t = 50)]
    vehicles: usize,

    /// Number of coverage-map cell towers
    #[arg(long, default_value_t = 90)]
    towers: usize,

    /// Output file path; omit to print the document to stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Seed for the snapshot generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut engine = SnapshotEngine::new(cli.seed);
    let snapshot = engine.generate(cli.vehicles, cli.towers, Utc::now());
    // Serialize fully before touching the sink so a write failure never
    // leaves a half-rendered document behind.
    let document =
        serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;

    write_snapshot(cli.output.as_deref(), &snapshot, &document)?;
    log_summary(&snapshot);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_snapshot(output: Option<&Path>, snapshot: &FleetSnapshot, document: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_file_atomic(path, document)
                .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
            println!(
                "Written {} vehicles, {} towers, {} errors to {}",
                snapshot.v.len(),
                snapshot.t.len(),
                snapshot.errors.len(),
                path.display()
            );
        }
        None => println!("{document}"),
    }
    Ok(())
}

/// Stage the document in a sibling temp file and rename it over the
/// target, so an interrupted run never leaves a truncated snapshot.
fn write_file_atomic(path: &Path, document: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(document.as_bytes())?;
    staged.persist(path)?;
    Ok(())
}

fn log_summary(snapshot: &FleetSnapshot) {
    info!(
        vehicles = snapshot.v.len(),
        towers = snapshot.t.len(),
        errors = snapshot.errors.len(),
        "fleet snapshot generated"
    );
    for (tier, count) in snapshot.tier_counts() {
        info!(tier = %tier, count, "tier population");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use clap::CommandFactory;
    use std::fs;

    fn reference_time() -> DateTime<Utc> {
        "2026-08-01T12:00:00Z".parse().expect("valid timestamp")
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_controls() {
        let cli = Cli::parse_from(["fleetconn-simgen"]);
        assert_eq!(cli.vehicles, 50);
        assert_eq!(cli.towers, 90);
        assert_eq!(cli.seed, 42);
        assert!(cli.output.is_none());
    }

    #[test]
    fn writes_snapshot_to_file() {
        let mut engine = SnapshotEngine::new(42);
        let snapshot = engine.generate(3, 2, reference_time());
        let document = serde_json::to_string_pretty(&snapshot).unwrap();

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("snapshot.json");
        write_snapshot(Some(&path), &snapshot, &document).expect("write succeeds");

        let written = fs::read_to_string(&path).expect("file readable");
        assert_eq!(written, document);
        let parsed: FleetSnapshot = serde_json::from_str(&written).expect("valid document");
        assert_eq!(parsed.v.len(), 3);
        assert_eq!(parsed.t.len(), 2);
    }

    #[test]
    fn overwrite_replaces_the_previous_document_completely() {
        let mut engine = SnapshotEngine::new(42);
        let snapshot = engine.generate(2, 1, reference_time());
        let document = serde_json::to_string_pretty(&snapshot).unwrap();

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("snapshot.json");
        // Seed the target with a longer stale document; a truncating
        // writer that dies midway would leave a mix of both.
        fs::write(&path, "x".repeat(document.len() * 2)).expect("stale file");
        write_snapshot(Some(&path), &snapshot, &document).expect("write succeeds");

        let written = fs::read_to_string(&path).expect("file readable");
        assert_eq!(written, document);
    }

    #[test]
    fn write_failure_names_the_path() {
        let mut engine = SnapshotEngine::new(42);
        let snapshot = engine.generate(1, 1, reference_time());
        let err = write_snapshot(
            Some(std::path::Path::new("/nonexistent-dir/snapshot.json")),
            &snapshot,
            "{}",
        )
        .expect_err("write into missing directory fails");
        assert!(err.to_string().contains("/nonexistent-dir/snapshot.json"));
    }
}
