//! Schedule quality metrics (KPIs).
//!
//! Computes reporting figures from a completed schedule and its instance.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total score | Sum of scores of the assigned books |
//! | Reachable score | Sum of scores of books held by any library |
//! | Score ratio | Total / reachable |
//! | Signup days used | Sum of signup days of scheduled libraries |
//! | Scan utilization | Assigned books / scanning capacity, per library |

use std::collections::HashMap;

use crate::models::{LibraryId, ProblemInstance, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Sum of scores of all assigned books.
    pub total_score: i64,
    /// Upper bound: sum of scores of every held book.
    pub reachable_score: i64,
    /// `total_score / reachable_score` (0.0..1.0; 0.0 if nothing is reachable).
    pub score_ratio: f64,
    /// Number of signed-up libraries.
    pub libraries_signed_up: usize,
    /// Number of assigned books.
    pub books_scanned: usize,
    /// Days spent on signups.
    pub signup_days_used: i64,
    /// Per-library fraction of scanning capacity used.
    pub utilization_by_library: HashMap<LibraryId, f64>,
    /// Mean of `utilization_by_library` (0.0 for an empty schedule).
    pub avg_scan_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the instance it was built for.
    pub fn calculate(schedule: &Schedule, instance: &ProblemInstance) -> Self {
        let total_score = schedule.total_score(instance);
        let reachable_score = instance.reachable_score();
        let score_ratio = if reachable_score > 0 {
            total_score as f64 / reachable_score as f64
        } else {
            0.0
        };

        let mut utilization_by_library = HashMap::new();
        let mut days_used: i64 = 0;
        for entry in &schedule.libraries {
            let Some(library) = instance.library(entry.library_id) else {
                continue;
            };
            let capacity = library.scan_capacity(instance.days - days_used);
            days_used += library.signup_days;
            let used = if capacity == 0 {
                0.0
            } else {
                entry.book_count() as f64 / capacity as f64
            };
            utilization_by_library.insert(entry.library_id, used);
        }

        let avg_scan_utilization = if utilization_by_library.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_library.values().sum();
            sum / utilization_by_library.len() as f64
        };

        Self {
            total_score,
            reachable_score,
            score_ratio,
            libraries_signed_up: schedule.library_count(),
            books_scanned: schedule.book_count(),
            signup_days_used: days_used,
            utilization_by_library,
            avg_scan_utilization,
        }
    }

    /// Whether the schedule reaches at least `min_ratio` of the reachable score.
    pub fn meets_threshold(&self, min_ratio: f64) -> bool {
        self.score_ratio >= min_ratio
    }
}
