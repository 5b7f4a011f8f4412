//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Seeded snapshot engine assembling vehicles, towers, and errors."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errorlog::derive_error_log;
use crate::records::FleetSnapshot;
use crate::towers::synthesize_towers;
use crate::vehicle::synthesize_vehicle;

/// Owns the single seeded generator the whole snapshot is drawn from.
///
/// Vehicle and tower counts are independent; the error log is derived from
/// the finished vehicle list without consuming further randomness. A fixed
/// seed, counts, and reference timestamp reproduce the snapshot exactly.
#[derive(Debug)]
pub struct SnapshotEngine {
    rng: StdRng,
}

impl SnapshotEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(
        &mut self,
        vehicles: usize,
        towers: usize,
        now: DateTime<Utc>,
    ) -> FleetSnapshot {
        let v: Vec<_> = (1..=vehicles)
            .map(|index| synthesize_vehicle(&mut self.rng, index, now))
            .collect();
        let t = synthesize_towers(&mut self.rng, towers);
        let errors = derive_error_log(&v);
        FleetSnapshot { v, t, errors }
    }
}
