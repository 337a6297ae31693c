//! Schedule (solution) model.
//!
//! A schedule is the ordered list of library signups. Each entry carries
//! the books that library scans; book sets are disjoint across entries.

use serde::{Deserialize, Serialize};

use super::{BookId, LibraryId, ProblemInstance};

/// A complete schedule, in signup order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Signed-up libraries, first signup first.
    pub libraries: Vec<ScheduledLibrary>,
}

/// A signed-up library and the books assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledLibrary {
    /// Library identifier.
    pub library_id: LibraryId,
    /// Books to scan, in scanning order.
    pub books: Vec<BookId>,
}

impl ScheduledLibrary {
    /// Creates a scheduled library entry.
    pub fn new(library_id: LibraryId, books: Vec<BookId>) -> Self {
        Self { library_id, books }
    }

    /// Number of assigned books.
    #[inline]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a library signup.
    pub fn add_library(&mut self, library: ScheduledLibrary) {
        self.libraries.push(library);
    }

    /// Number of signed-up libraries.
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Total number of assigned books.
    pub fn book_count(&self) -> usize {
        self.libraries.iter().map(ScheduledLibrary::book_count).sum()
    }

    /// Whether no library is signed up.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Finds the entry for a library.
    pub fn entry_for_library(&self, library_id: LibraryId) -> Option<&ScheduledLibrary> {
        self.libraries.iter().find(|l| l.library_id == library_id)
    }

    /// Signup position of a library, if scheduled.
    pub fn position_of(&self, library_id: LibraryId) -> Option<usize> {
        self.libraries.iter().position(|l| l.library_id == library_id)
    }

    /// Sum of the scores of all assigned books.
    ///
    /// Assumes books are distinct across entries (true for schedules built
    /// by the scheduler). Unknown book identifiers contribute nothing.
    /// Saturates at `i64::MAX`.
    pub fn total_score(&self, instance: &ProblemInstance) -> i64 {
        self.libraries
            .iter()
            .flat_map(|l| l.books.iter())
            .filter_map(|&b| instance.score(b))
            .fold(0, i64::saturating_add)
    }

    /// Total signup days consumed by the scheduled libraries.
    pub fn signup_days_used(&self, instance: &ProblemInstance) -> i64 {
        self.libraries
            .iter()
            .filter_map(|l| instance.library(l.library_id))
            .map(|l| l.signup_days)
            .sum()
    }
}
