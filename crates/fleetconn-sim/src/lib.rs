//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "01-bootstrap"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Fleet snapshot generation module exports and shared types."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
//! Synthetic fleet connectivity telemetry for dashboard demos.
//!
//! The pipeline is a single seeded pass: static catalogs feed the vehicle
//! synthesizer, towers are sampled independently, and the error log is
//! derived from the finished vehicle list. All randomness flows through one
//! explicitly seeded generator so a fixed seed reproduces the snapshot.

pub mod catalog;
pub mod errorlog;
pub mod health;
pub mod profile;
pub mod records;
pub mod snapshot;
pub mod towers;
pub mod vehicle;

pub use errorlog::derive_error_log;
pub use health::{classify, HealthTier};
pub use profile::{HealthProfile, ProfileParams, SuccessRule};
pub use records::{
    CellTower, ErrorLogEntry, FleetSnapshot, Incident, IncidentSeverity, IncidentStatus,
    NetworkEvent, VehicleRecord,
};
pub use snapshot::SnapshotEngine;
pub use towers::synthesize_towers;
pub use vehicle::synthesize_vehicle;

/// Round to `digits` decimal places, matching the fixed-precision float
/// fields of the snapshot document.
pub(crate) fn round_dp(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
