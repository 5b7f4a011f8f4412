//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Per-vehicle telemetry record synthesis."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
//! Vehicle synthesis. The draw order below is fixed: the latent profile
//! first, then carrier/site/position, then every profile-driven metric in
//! declaration order. Reordering draws changes seeded output.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::health::classify;
use crate::profile::HealthProfile;
use crate::records::{Incident, IncidentStatus, NetworkEvent, VehicleRecord};
use crate::round_dp;

/// Standard IoT data plan, in MB.
const PLAN_MB: u32 = 2048;

static INCIDENT_STATUSES: [IncidentStatus; 3] = [
    IncidentStatus::New,
    IncidentStatus::Assigned,
    IncidentStatus::InProgress,
];

/// Synthesize one fully populated vehicle record for a 1-based index.
pub fn synthesize_vehicle<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    now: DateTime<Utc>,
) -> VehicleRecord {
    let profile = HealthProfile::sample(rng);
    let params = profile.params();

    let carrier = catalog::CARRIERS
        .choose(rng)
        .expect("carrier catalog is non-empty");
    let site = carrier.sites.choose(rng).expect("carrier has cell sites");
    let (depot_lat, depot_lon) = *catalog::DEPOT_LOCATIONS
        .choose(rng)
        .expect("depot catalog is non-empty");
    let lat = round_dp(depot_lat + rng.gen_range(-0.02..0.02), 7);
    let lon = round_dp(depot_lon + rng.gen_range(-0.02..0.02), 7);

    let signal = rng.gen_range(params.signal.0..=params.signal.1);
    let rat = *params.rat_pool.choose(rng).expect("profile has a RAT pool");
    let drops = rng.gen_range(params.drops.0..=params.drops.1);
    let uptime = round_dp(rng.gen_range(params.uptime.0..params.uptime.1), 1);
    let err_count = rng.gen_range(params.err_count.0..=params.err_count.1);
    let err_types: Vec<String> = if err_count > 0 {
        let picks = rng.gen_range(params.err_pick.0..=params.err_pick.1);
        catalog::ERROR_CATALOG[..params.err_pool]
            .choose_multiple(rng, picks)
            .map(|err| err.code.to_owned())
            .collect()
    } else {
        Vec::new()
    };
    let data_used = rng.gen_range(params.data_used.0..=params.data_used.1);
    let pdp_attempts = rng.gen_range(params.pdp_attempts.0..=params.pdp_attempts.1);
    let pdp_success = params.pdp_success.sample(pdp_attempts, rng);
    let loc_updates = rng.gen_range(params.loc_updates.0..=params.loc_updates.1);
    let loc_success = params.loc_success.sample(loc_updates, rng);
    let num_events = rng.gen_range(params.events.0..=params.events.1);
    let num_incidents = rng.gen_range(params.incidents.0..=params.incidents.1);

    let bal_pct = round_dp(
        f64::from(PLAN_MB - data_used) / f64::from(PLAN_MB) * 100.0,
        1,
    );
    let last_disc = rng.gen_range(params.min_last_disc..=10_000);
    let driving = rng.gen_bool(0.2);
    let speed = if driving {
        // Driving vehicles split evenly between stationary and moving.
        if rng.gen_bool(0.5) {
            0
        } else {
            rng.gen_range(15..=95)
        }
    } else {
        0
    };

    let mut events = Vec::with_capacity(num_events);
    for seq in 0..num_events {
        let occurred_at = now - hours(rng.gen_range(0.5..24.0));
        let code = *catalog::EVENT_CODES
            .choose(rng)
            .expect("event catalog is non-empty");
        events.push(NetworkEvent {
            id: format!("EVT-{index:02}-{seq:03}"),
            code: code.to_owned(),
            occurred_at,
            rat_type: rat.code(),
            mcc: carrier.mcc.to_owned(),
            mnc: carrier.mnc.to_owned(),
            lac: site.lac.to_owned(),
            cell_id: site.cell.to_owned(),
            pdprx: rng.gen_range(1_000..=500_000),
            pdptx: rng.gen_range(1_000..=200_000),
        });
    }
    events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    let mut incidents = Vec::with_capacity(num_incidents);
    for _ in 0..num_incidents {
        let incident_type = catalog::INCIDENT_CATALOG
            .choose(rng)
            .expect("incident catalog is non-empty");
        let created = now - hours(rng.gen_range(1.0..72.0));
        let status = *INCIDENT_STATUSES
            .choose(rng)
            .expect("status pool is non-empty");
        incidents.push(Incident {
            id: format!("INC-{index:02}-{}", incident_type.code),
            kind: incident_type.code.to_owned(),
            description: incident_type.description.to_owned(),
            status,
            severity: incident_type.severity,
            created,
        });
    }

    let last_err = if err_count > 0 && profile != HealthProfile::Healthy {
        let ts = now - Duration::minutes(i64::from(rng.gen_range(10u32..=300)));
        Some(ts.format("%Y-%m-%dT%H:%M:00Z").to_string())
    } else {
        None
    };

    let tier = classify(signal, drops, uptime);
    let imei = format_imei(index, rng.gen_range(10..=99));
    let dl_bytes = rng.gen_range(70_000_000..=1_000_000_000u64);
    let ul_bytes = rng.gen_range(20_000_000..=420_000_000u64);

    VehicleRecord {
        id: format!("b{index:x}"),
        nm: format!("Demo - {index:02}"),
        lat,
        lon,
        spd: speed,
        drv: driving,
        comm: true,
        imsi: format_imsi(index),
        sig: signal,
        tier,
        rat: rat.label().to_owned(),
        carrier: carrier.carrier.to_owned(),
        mcc: carrier.mcc.to_owned(),
        mnc: carrier.mnc.to_owned(),
        lac: site.lac.to_owned(),
        cell: site.cell.to_owned(),
        used: data_used,
        plan: PLAN_MB,
        bal_pct,
        drops,
        uptime,
        last_disc,
        incidents,
        events,
        imei,
        pdp_attempts,
        pdp_success,
        loc_updates,
        loc_success,
        err_count,
        err_types,
        last_err,
        dl_bytes,
        ul_bytes,
        country: carrier.country.to_owned(),
    }
}

/// IMSI with the fleet's fixed PLMN prefix and a zero-padded index.
fn format_imsi(index: usize) -> String {
    format!("21401{index:010}")
}

/// 14-digit IMEI derived from the index plus a two-digit random suffix.
fn format_imei(index: usize, suffix: u64) -> String {
    (35_684_900_000_000u64 + index as u64 * 100 + suffix).to_string()
}

fn hours(value: f64) -> Duration {
    Duration::milliseconds((value * 3_600_000.0) as i64)
}
