//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Serde record types for the fleet snapshot document."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
//! Wire-shape records. Field declaration order matches the document layout
//! the dashboard consumes, and the abbreviated key names are part of the
//! contract with it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health::HealthTier;

/// One vehicle's combined telemetry and connectivity state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub nm: String,
    pub lat: f64,
    pub lon: f64,
    pub spd: u32,
    pub drv: bool,
    pub comm: bool,
    pub imsi: String,
    pub sig: i64,
    pub tier: HealthTier,
    pub rat: String,
    pub carrier: String,
    pub mcc: String,
    pub mnc: String,
    pub lac: String,
    pub cell: String,
    pub used: u32,
    pub plan: u32,
    pub bal_pct: f64,
    pub drops: u32,
    pub uptime: f64,
    pub last_disc: u32,
    pub incidents: Vec<Incident>,
    pub events: Vec<NetworkEvent>,
    pub imei: String,
    pub pdp_attempts: u32,
    pub pdp_success: u32,
    pub loc_updates: u32,
    pub loc_success: u32,
    pub err_count: u32,
    pub err_types: Vec<String>,
    pub last_err: Option<String>,
    pub dl_bytes: u64,
    pub ul_bytes: u64,
    pub country: String,
}

/// A signalling event owned by one vehicle, newest first in its list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEvent {
    pub id: String,
    pub code: String,
    pub occurred_at: DateTime<Utc>,
    pub rat_type: u8,
    pub mcc: String,
    pub mnc: String,
    pub lac: String,
    pub cell_id: String,
    pub pdprx: u32,
    pub pdptx: u32,
}

/// An open connectivity incident attached to one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub status: IncidentStatus,
    pub severity: IncidentSeverity,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    New,
    Assigned,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IncidentSeverity {
    High,
    Critical,
    Medium,
}

/// A coverage-map tower, unrelated to any vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellTower {
    pub lat: f64,
    pub lon: f64,
    pub rat: String,
    pub carrier: String,
    pub mcc: String,
    pub mnc: String,
    pub lac: String,
    pub cell: String,
    pub weak: bool,
}

/// Flat error-log row denormalized from a vehicle's error state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    pub ts: String,
    pub vehicle: String,
    pub imsi: String,
    pub imei: String,
    pub carrier: String,
    pub country: String,
    pub rat: String,
    pub err_code: String,
    pub err_desc: String,
    pub cell: String,
    pub tier: HealthTier,
}

/// Top-level snapshot document: vehicles, towers, derived error log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub v: Vec<VehicleRecord>,
    pub t: Vec<CellTower>,
    pub errors: Vec<ErrorLogEntry>,
}

impl FleetSnapshot {
    /// Vehicle count per health tier, ordered healthy through critical.
    pub fn tier_counts(&self) -> BTreeMap<HealthTier, usize> {
        let mut counts = BTreeMap::new();
        for vehicle in &self.v {
            *counts.entry(vehicle.tier).or_insert(0) += 1;
        }
        counts
    }
}
