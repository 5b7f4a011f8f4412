//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Static carrier, cell-site, and fault catalogs for snapshot synthesis."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
//! Read-only reference tables. Values mirror the carrier and network
//! identifiers observed in the Iberian Peninsula fleet the demo models.

use crate::records::IncidentSeverity;

/// A carrier's PLMN identity together with its known cell sites.
#[derive(Debug, Clone, Copy)]
pub struct CarrierInfo {
    pub carrier: &'static str,
    pub mcc: &'static str,
    pub mnc: &'static str,
    pub country: &'static str,
    pub sites: [CellSite; 2],
}

/// A cell site keyed by location-area code and cell id.
#[derive(Debug, Clone, Copy)]
pub struct CellSite {
    pub lac: &'static str,
    pub cell: &'static str,
}

pub static CARRIERS: [CarrierInfo; 5] = [
    CarrierInfo {
        carrier: "Orange ES",
        mcc: "214",
        mnc: "03",
        country: "Spain",
        sites: [
            CellSite { lac: "103", cell: "49885" },
            CellSite { lac: "803", cell: "64084" },
        ],
    },
    CarrierInfo {
        carrier: "Vodafone PT",
        mcc: "268",
        mnc: "01",
        country: "Portugal",
        sites: [
            CellSite { lac: "131", cell: "47723" },
            CellSite { lac: "954", cell: "49145" },
        ],
    },
    CarrierInfo {
        carrier: "NOS PT",
        mcc: "268",
        mnc: "03",
        country: "Portugal",
        sites: [
            CellSite { lac: "234", cell: "18145" },
            CellSite { lac: "354", cell: "12245" },
        ],
    },
    CarrierInfo {
        carrier: "Movistar",
        mcc: "214",
        mnc: "07",
        country: "Spain",
        sites: [
            CellSite { lac: "496", cell: "25821" },
            CellSite { lac: "367", cell: "26890" },
        ],
    },
    CarrierInfo {
        carrier: "Vodafone ES",
        mcc: "214",
        mnc: "01",
        country: "Spain",
        sites: [
            CellSite { lac: "703", cell: "56754" },
            CellSite { lac: "725", cell: "40532" },
        ],
    },
];

/// Radio access technology with its signalling-event numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatCode {
    Gsm,
    Wcdma,
    Lte,
}

impl RatCode {
    /// Numeric `rat_type` code carried on signalling events.
    pub fn code(self) -> u8 {
        match self {
            RatCode::Gsm => 1,
            RatCode::Wcdma => 2,
            RatCode::Lte => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatCode::Gsm => "GSM",
            RatCode::Wcdma => "WCDMA",
            RatCode::Lte => "LTE",
        }
    }
}

/// Network signalling event codes.
pub static EVENT_CODES: [&str; 7] = [
    "ATTACH",
    "DETACH",
    "HANDOVER",
    "TAU",
    "PDP_ACTIVATE",
    "PDP_DEACTIVATE",
    "SERVICE_REQUEST",
];

/// Diagnosable network error with a human-readable description.
///
/// Catalog order matters: profile sampling pools are prefixes of this
/// list, narrowing to the benign entries for low-severity profiles.
#[derive(Debug, Clone, Copy)]
pub struct ErrorType {
    pub code: &'static str,
    pub description: &'static str,
}

pub static ERROR_CATALOG: [ErrorType; 6] = [
    ErrorType {
        code: "CONTEXT_DEACTIVATION",
        description: "Data session torn down by network — congestion or admin action",
    },
    ErrorType {
        code: "NETWORK_TIMEOUT",
        description: "No response from SGSN/MME within timeout window — signalling path failure",
    },
    ErrorType {
        code: "AUTH_FAILURE",
        description: "SIM authentication rejected by visited network — possible roaming agreement issue",
    },
    ErrorType {
        code: "GPRS_DETACH",
        description: "Network-initiated GPRS detach — SIM deregistered from packet domain",
    },
    ErrorType {
        code: "ATTACH_REJECT",
        description: "Network attach request rejected — IMSI not provisioned for this PLMN",
    },
    ErrorType {
        code: "PDP_REJECT",
        description: "Packet data session activation denied by GGSN — APN config or quota exceeded",
    },
];

pub fn error_description(code: &str) -> &'static str {
    ERROR_CATALOG
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.description)
        .unwrap_or("Unknown error")
}

/// Incident category with a fixed severity.
#[derive(Debug, Clone, Copy)]
pub struct IncidentType {
    pub code: &'static str,
    pub description: &'static str,
    pub severity: IncidentSeverity,
}

pub static INCIDENT_CATALOG: [IncidentType; 4] = [
    IncidentType {
        code: "3G-FALLBACK",
        description: "Persistent 3G/2G fallback in LTE coverage area",
        severity: IncidentSeverity::High,
    },
    IncidentType {
        code: "SIG-LOSS",
        description: "Intermittent signal loss detected",
        severity: IncidentSeverity::Critical,
    },
    IncidentType {
        code: "DATA-RETRY",
        description: "Excessive data retransmissions",
        severity: IncidentSeverity::Critical,
    },
    IncidentType {
        code: "PERF-DEGRADE",
        description: "Network performance degradation observed",
        severity: IncidentSeverity::Medium,
    },
];

/// Depot and route coordinates vehicles are jittered around.
pub static DEPOT_LOCATIONS: [(f64, f64); 8] = [
    (41.8975, -8.8574), // Viana do Castelo depot
    (42.2348, -8.7131), // Vigo area
    (42.1336, -8.7983), // Redondela area
    (42.2644, -8.4569), // Ourense area
    (42.0410, -8.6481), // Tui border area
    (41.5283, 0.5164),  // Lleida area
    (39.4852, -0.5346), // Valencia area
    (38.6322, -3.4661), // Central Spain route
];

/// Coverage-map bounding box for tower placement.
pub const TOWER_LAT_RANGE: (f64, f64) = (41.0, 43.5);
pub const TOWER_LON_RANGE: (f64, f64) = (-9.5, -6.5);
