//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Derivation of the flat error log from the vehicle list."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
use crate::catalog::error_description;
use crate::health::HealthTier;
use crate::records::{ErrorLogEntry, VehicleRecord};

/// Derive the flat error log: one entry per error-type code of every
/// vehicle that is not healthy and has a last-error timestamp, sorted by
/// timestamp descending. Pure derivation, no randomness.
pub fn derive_error_log(vehicles: &[VehicleRecord]) -> Vec<ErrorLogEntry> {
    let mut entries = Vec::new();
    for vehicle in vehicles {
        if vehicle.tier == HealthTier::Healthy {
            continue;
        }
        let Some(ts) = &vehicle.last_err else {
            continue;
        };
        for code in &vehicle.err_types {
            entries.push(ErrorLogEntry {
                ts: ts.clone(),
                vehicle: vehicle.nm.clone(),
                imsi: vehicle.imsi.clone(),
                imei: vehicle.imei.clone(),
                carrier: vehicle.carrier.clone(),
                country: vehicle.country.clone(),
                rat: vehicle.rat.clone(),
                err_code: code.clone(),
                err_desc: error_description(code).to_owned(),
                cell: format!(
                    "{}-{}-{}-{}",
                    vehicle.mcc, vehicle.mnc, vehicle.lac, vehicle.cell
                ),
                tier: vehicle.tier,
            });
        }
    }
    // Timestamps share a fixed-width format, so the lexicographic order is
    // the chronological order.
    entries.sort_by(|a, b| b.ts.cmp(&a.ts));
    entries
}
