//! Scheduler configuration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::valuation::Valuation;

/// How candidate libraries are ranked at each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionKey {
    /// Highest total score of the selectable books.
    #[default]
    ByTotalScore,
    /// Highest total score divided by signup days.
    ///
    /// Favors libraries that pay for their signup quickly. Compared by
    /// cross-multiplication, so no floating point is involved.
    ByScorePerSignupDay,
}

impl SelectionKey {
    /// All available keys.
    pub const ALL: [SelectionKey; 2] = [Self::ByTotalScore, Self::ByScorePerSignupDay];

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ByTotalScore => "total-score",
            Self::ByScorePerSignupDay => "score-per-signup-day",
        }
    }

    /// Compares two valuations by this key alone.
    ///
    /// `Greater` means `a` is the better candidate.
    pub fn compare(&self, a: &Valuation, b: &Valuation) -> Ordering {
        match self {
            Self::ByTotalScore => a.score.cmp(&b.score),
            Self::ByScorePerSignupDay => {
                let lhs = i128::from(a.score) * i128::from(b.signup_days);
                let rhs = i128::from(b.score) * i128::from(a.signup_days);
                lhs.cmp(&rhs)
            }
        }
    }

    /// Whether `a` ranks strictly ahead of `b`.
    ///
    /// Ties on the key go to the lower library id, which makes the ranking
    /// total.
    pub fn prefers(&self, a: &Valuation, b: &Valuation) -> bool {
        self.compare(a, b)
            .then_with(|| b.library_id.cmp(&a.library_id))
            == Ordering::Greater
    }
}

/// Configuration for [`GreedyScheduler`](super::GreedyScheduler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Ranking used to pick the next library.
    pub selection_key: SelectionKey,
    /// Whether to value candidates in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
}

impl SchedulerConfig {
    /// Sets the selection key.
    pub fn with_selection_key(mut self, key: SelectionKey) -> Self {
        self.selection_key = key;
        self
    }

    /// Enables or disables parallel valuation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
