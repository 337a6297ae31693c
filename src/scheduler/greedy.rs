//! Greedy valuation-driven library scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the instance; reject it whole if any invariant fails.
//! 2. Value every unscheduled library against the current remaining days
//!    and ledger. Values are recomputed from scratch each step since both
//!    inputs change after every commit.
//! 3. Pick the best valuation by the configured [`SelectionKey`], ties to
//!    the lower library id.
//! 4. If nothing fits or the best value is zero, stop. Otherwise claim its
//!    books, subtract its signup days, append it, and go to 2.
//!
//! This is a one-step lookahead heuristic. The underlying problem is
//! NP-hard and the result is not guaranteed optimal.
//!
//! # Complexity
//! O(L² · b) for L libraries holding at most b books each.

use tracing::{debug, info};

use super::{SchedulerConfig, SelectionKey};
use crate::error::ScheduleError;
use crate::ledger::BookLedger;
use crate::models::{LibraryId, ProblemInstance, Schedule, ScheduledLibrary};
use crate::validation::validate_instance;
use crate::valuation::{LibraryValuator, Valuation};

/// Greedy book scanning scheduler.
///
/// Holds no state between solves; each call to [`solve`](Self::solve)
/// builds its own ledger, so one scheduler can serve many instances.
///
/// # Example
///
/// ```
/// use u_bookscan::models::{Library, ProblemInstance};
/// use u_bookscan::scheduler::GreedyScheduler;
///
/// let instance = ProblemInstance::new(3, vec![10, 20, 30])
///     .with_library(Library::new(0, 1, 2).with_books(vec![0, 1, 2]));
///
/// let schedule = GreedyScheduler::new().solve(&instance).unwrap();
/// assert_eq!(schedule.library_count(), 1);
/// assert_eq!(schedule.libraries[0].books, vec![2, 1]);
/// assert_eq!(schedule.total_score(&instance), 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    config: SchedulerConfig,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the selection key.
    pub fn with_selection_key(mut self, key: SelectionKey) -> Self {
        self.config.selection_key = key;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds a schedule for `instance`.
    ///
    /// # Errors
    /// [`ScheduleError::MalformedInstance`] if validation fails. No partial
    /// schedule is returned on error.
    pub fn solve(&self, instance: &ProblemInstance) -> Result<Schedule, ScheduleError> {
        validate_instance(instance).map_err(ScheduleError::MalformedInstance)?;

        let valuator = LibraryValuator::new(instance);
        let mut ledger = BookLedger::new(instance.book_count());
        let mut selected = vec![false; instance.library_count()];
        let mut pending: Vec<LibraryId> = (0..instance.library_count()).collect();
        let mut remaining_days = instance.days;
        let mut schedule = Schedule::new();

        loop {
            // Remaining days only shrink, so a library that cannot finish
            // signup with a scanning day left never will.
            pending.retain(|&id| instance.libraries[id].signup_days < remaining_days);

            let Some(best) = self.select_best(&valuator, &ledger, &pending, remaining_days) else {
                break;
            };
            if best.is_worthless() {
                break;
            }

            if std::mem::replace(&mut selected[best.library_id], true) {
                debug_assert!(false, "library {} selected twice", best.library_id);
                return Err(ScheduleError::InternalConsistency(format!(
                    "library {} selected twice",
                    best.library_id
                )));
            }
            if let Err(err) = ledger.claim(&best.books) {
                debug_assert!(false, "{err}");
                return Err(err);
            }

            remaining_days -= best.signup_days;
            pending.retain(|&id| id != best.library_id);

            debug!(
                step = schedule.library_count(),
                library = best.library_id,
                books = best.books.len(),
                score = best.score,
                remaining_days,
                "library committed"
            );
            schedule.add_library(ScheduledLibrary::new(best.library_id, best.books));
        }

        info!(
            key = self.config.selection_key.name(),
            libraries = schedule.library_count(),
            books = ledger.claimed_count(),
            score = schedule.total_score(instance),
            "schedule built"
        );
        Ok(schedule)
    }

    /// Values all pending libraries and returns the best one.
    fn select_best(
        &self,
        valuator: &LibraryValuator<'_>,
        ledger: &BookLedger,
        pending: &[LibraryId],
        remaining_days: i64,
    ) -> Option<Valuation> {
        let key = self.config.selection_key;
        self.evaluate_pending(valuator, ledger, pending, remaining_days)
            .into_iter()
            .reduce(|best, v| if key.prefers(&v, &best) { v } else { best })
    }

    #[cfg(feature = "parallel")]
    fn evaluate_pending(
        &self,
        valuator: &LibraryValuator<'_>,
        ledger: &BookLedger,
        pending: &[LibraryId],
        remaining_days: i64,
    ) -> Vec<Valuation> {
        use rayon::prelude::*;

        let instance = valuator.instance();
        if self.config.parallel {
            pending
                .par_iter()
                .map(|&id| valuator.evaluate(&instance.libraries[id], ledger, remaining_days))
                .collect()
        } else {
            pending
                .iter()
                .map(|&id| valuator.evaluate(&instance.libraries[id], ledger, remaining_days))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_pending(
        &self,
        valuator: &LibraryValuator<'_>,
        ledger: &BookLedger,
        pending: &[LibraryId],
        remaining_days: i64,
    ) -> Vec<Valuation> {
        let instance = valuator.instance();
        pending
            .iter()
            .map(|&id| valuator.evaluate(&instance.libraries[id], ledger, remaining_days))
            .collect()
    }
}
