//! Statistics collection and reporting
//!
//! This module contains the final report of a simulation run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::types::BarberId;

/// Final tally of one simulation run.
///
/// Conservation must hold on every complete run:
/// `customers_served + customers_rejected == customers_submitted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Total customer visits submitted
    pub customers_submitted: usize,
    /// Visits that completed a full hair-cut and payment
    pub customers_served: usize,
    /// Visits rejected because the shop was at capacity
    pub customers_rejected: usize,
    /// Hair-cuts completed per barber, index = barber index - 1
    pub per_barber_served: Vec<usize>,
    /// Wall-clock duration of the run
    pub wall_clock: Duration,
}

impl SimulationReport {
    /// Percentage of submitted visits that were served.
    pub fn service_percentage(&self) -> f64 {
        if self.customers_submitted == 0 {
            0.0
        } else {
            self.customers_served as f64 / self.customers_submitted as f64 * 100.0
        }
    }

    /// Percentage of submitted visits that were rejected.
    pub fn rejection_percentage(&self) -> f64 {
        if self.customers_submitted == 0 {
            0.0
        } else {
            self.customers_rejected as f64 / self.customers_submitted as f64 * 100.0
        }
    }

    /// Hair-cuts completed by one barber.
    pub fn served_by(&self, barber: BarberId) -> usize {
        self.per_barber_served.get((barber.get() as usize).wrapping_sub(1)).copied().unwrap_or(0)
    }

    /// The barber who completed the most hair-cuts, if any were done.
    ///
    /// Ties go to the lowest index.
    pub fn busiest_barber(&self) -> Option<BarberId> {
        let (idx, &count) =
            self.per_barber_served.iter().enumerate().max_by_key(|&(idx, &count)| {
                (count, std::cmp::Reverse(idx))
            })?;
        if count == 0 {
            None
        } else {
            Some(BarberId::new(idx as u32 + 1))
        }
    }

    /// True when every submitted visit is accounted for.
    pub fn is_conserved(&self) -> bool {
        self.customers_served + self.customers_rejected == self.customers_submitted
    }

    /// One-paragraph human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Simulation Report ===\n");
        out.push_str(&format!("Customers submitted: {}\n", self.customers_submitted));
        out.push_str(&format!(
            "Served: {} ({:.1}%)\n",
            self.customers_served,
            self.service_percentage()
        ));
        out.push_str(&format!(
            "Turned away: {} ({:.1}%)\n",
            self.customers_rejected,
            self.rejection_percentage()
        ));
        for (idx, count) in self.per_barber_served.iter().enumerate() {
            out.push_str(&format!("  barber[{}]: {} hair-cuts\n", idx + 1, count));
        }
        out.push_str(&format!("Wall clock: {:.2}s", self.wall_clock.as_secs_f64()));
        out
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SimulationReport {
        SimulationReport {
            customers_submitted: 10,
            customers_served: 8,
            customers_rejected: 2,
            per_barber_served: vec![5, 3],
            wall_clock: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_percentages() {
        let report = report();
        assert!((report.service_percentage() - 80.0).abs() < f64::EPSILON);
        assert!((report.rejection_percentage() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_run_percentages() {
        let report = SimulationReport {
            customers_submitted: 0,
            customers_served: 0,
            customers_rejected: 0,
            per_barber_served: vec![0],
            wall_clock: Duration::ZERO,
        };
        assert_eq!(report.service_percentage(), 0.0);
        assert_eq!(report.rejection_percentage(), 0.0);
        assert!(report.is_conserved());
        assert_eq!(report.busiest_barber(), None);
    }

    #[test]
    fn test_conservation() {
        let mut report = report();
        assert!(report.is_conserved());
        report.customers_rejected = 1;
        assert!(!report.is_conserved());
    }

    #[test]
    fn test_per_barber_breakdown() {
        let report = report();
        assert_eq!(report.served_by(BarberId::new(1)), 5);
        assert_eq!(report.served_by(BarberId::new(2)), 3);
        assert_eq!(report.served_by(BarberId::new(7)), 0);
        assert_eq!(report.busiest_barber(), Some(BarberId::new(1)));
    }

    #[test]
    fn test_busiest_barber_tie_goes_to_lowest_index() {
        let mut report = report();
        report.per_barber_served = vec![4, 4];
        assert_eq!(report.busiest_barber(), Some(BarberId::new(1)));
    }

    #[test]
    fn test_summary_mentions_counts() {
        let text = report().summary();
        assert!(text.contains("Customers submitted: 10"));
        assert!(text.contains("barber[1]: 5 hair-cuts"));
        assert!(text.contains("Turned away: 2"));
    }

    #[test]
    fn test_report_serialization() {
        let report = report();
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.customers_served, report.customers_served);
        assert_eq!(back.per_barber_served, report.per_barber_served);
    }
}
