//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Coverage-map cell tower synthesis."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{RatCode, CARRIERS, TOWER_LAT_RANGE, TOWER_LON_RANGE};
use crate::records::CellTower;
use crate::round_dp;

static RAT_POOL: [RatCode; 3] = [RatCode::Lte, RatCode::Wcdma, RatCode::Gsm];

/// Sample `count` independent towers inside the coverage bounding box.
/// Towers carry no relation to any vehicle.
pub fn synthesize_towers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<CellTower> {
    let mut towers = Vec::with_capacity(count);
    for _ in 0..count {
        let lat = rng.gen_range(TOWER_LAT_RANGE.0..TOWER_LAT_RANGE.1);
        let lon = rng.gen_range(TOWER_LON_RANGE.0..TOWER_LON_RANGE.1);
        let carrier = CARRIERS.choose(rng).expect("carrier catalog is non-empty");
        let rat = *RAT_POOL.choose(rng).expect("RAT pool is non-empty");
        let weak = rng.gen_bool(0.15);
        towers.push(CellTower {
            lat: round_dp(lat, 5),
            lon: round_dp(lon, 5),
            rat: rat.label().to_owned(),
            carrier: carrier.carrier.to_owned(),
            mcc: carrier.mcc.to_owned(),
            mnc: carrier.mnc.to_owned(),
            lac: rng.gen_range(100u32..=999).to_string(),
            cell: rng.gen_range(10_000u32..=65_000).to_string(),
            weak,
        });
    }
    towers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn respects_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(synthesize_towers(&mut rng, 0).len(), 0);
        assert_eq!(synthesize_towers(&mut rng, 90).len(), 90);
    }

    #[test]
    fn towers_stay_inside_the_bounding_box() {
        let mut rng = StdRng::seed_from_u64(2);
        for tower in synthesize_towers(&mut rng, 200) {
            assert!((TOWER_LAT_RANGE.0..=TOWER_LAT_RANGE.1).contains(&tower.lat));
            assert!((TOWER_LON_RANGE.0..=TOWER_LON_RANGE.1).contains(&tower.lon));
        }
    }

    #[test]
    fn identifiers_fall_in_catalog_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for tower in synthesize_towers(&mut rng, 200) {
            let lac: u32 = tower.lac.parse().expect("numeric lac");
            let cell: u32 = tower.cell.parse().expect("numeric cell");
            assert!((100..=999).contains(&lac));
            assert!((10_000..=65_000).contains(&cell));
            assert!(["LTE", "WCDMA", "GSM"].contains(&tower.rat.as_str()));
        }
    }

    #[test]
    fn weak_coverage_is_a_minority_flag() {
        let mut rng = StdRng::seed_from_u64(4);
        let towers = synthesize_towers(&mut rng, 1_000);
        let weak = towers.iter().filter(|t| t.weak).count();
        // 15% probability; generous bounds keep the test stable.
        assert!(weak > 50 && weak < 300, "weak count {weak}");
    }
}
