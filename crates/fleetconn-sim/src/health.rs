//! ---
//! fci_section: "11-simulation"
//! fci_subsection: "module"
//! fci_type: "source"
//! fci_scope: "code"
//! fci_description: "Connectivity health-tier classification."
//! fci_version: "v0.1.0"
//! fci_owner: "tbd"
//! ---
use std::fmt;

use serde::{Deserialize, Serialize};

/// Connectivity quality tier derived from signal, drop, and uptime metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Healthy,
    Minor,
    Warning,
    Critical,
}

impl HealthTier {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthTier::Healthy => "healthy",
            HealthTier::Minor => "minor",
            HealthTier::Warning => "warning",
            HealthTier::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify composite connectivity metrics into a [`HealthTier`].
///
/// Clauses are evaluated in strict priority order and the ranges overlap,
/// so the first match wins. Reordering changes the result for inputs such
/// as `signal=48, drops=10`, which must stay critical.
pub fn classify(signal: i64, drops: u32, uptime: f64) -> HealthTier {
    if signal < 50 || drops >= 8 || uptime < 90.0 {
        HealthTier::Critical
    } else if ((50..65).contains(&signal) && drops >= 3) || (drops >= 3 && uptime < 96.0) {
        HealthTier::Warning
    } else if signal < 70 || drops >= 2 || uptime < 98.0 {
        HealthTier::Minor
    } else {
        HealthTier::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_metrics_are_healthy() {
        assert_eq!(classify(80, 0, 99.5), HealthTier::Healthy);
        assert_eq!(classify(70, 1, 98.0), HealthTier::Healthy);
    }

    #[test]
    fn critical_clause_wins_over_later_matches() {
        // Also matches the minor clause; priority order keeps it critical.
        assert_eq!(classify(48, 10, 99.0), HealthTier::Critical);
        assert_eq!(classify(80, 8, 99.0), HealthTier::Critical);
        assert_eq!(classify(80, 0, 89.9), HealthTier::Critical);
    }

    #[test]
    fn warning_requires_drops_with_weak_signal_or_uptime() {
        assert_eq!(classify(60, 3, 99.0), HealthTier::Warning);
        assert_eq!(classify(80, 3, 95.0), HealthTier::Warning);
        // Weak-ish signal alone is only minor.
        assert_eq!(classify(60, 0, 99.0), HealthTier::Minor);
    }

    #[test]
    fn minor_covers_single_soft_degradations() {
        assert_eq!(classify(69, 0, 99.0), HealthTier::Minor);
        assert_eq!(classify(90, 2, 99.0), HealthTier::Minor);
        assert_eq!(classify(90, 0, 97.9), HealthTier::Minor);
    }

    #[test]
    fn boundary_values_follow_threshold_definitions() {
        assert_eq!(classify(50, 0, 99.0), HealthTier::Minor);
        assert_eq!(classify(49, 0, 99.0), HealthTier::Critical);
        assert_eq!(classify(65, 3, 95.0), HealthTier::Warning);
        assert_eq!(classify(65, 3, 96.0), HealthTier::Minor);
        assert_eq!(classify(80, 0, 90.0), HealthTier::Minor);
    }

    #[test]
    fn tier_ordering_ranks_severity() {
        assert!(HealthTier::Healthy < HealthTier::Minor);
        assert!(HealthTier::Warning < HealthTier::Critical);
    }

    #[test]
    fn tier_serializes_to_lowercase_labels() {
        let json = serde_json::to_string(&HealthTier::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(HealthTier::Critical.to_string(), "critical");
    }
}
