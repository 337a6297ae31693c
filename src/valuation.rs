//! Per-library valuation against the current ledger.
//!
//! # Algorithm
//!
//! 1. Capacity = `max(0, remaining_days - signup_days) * books_per_day`,
//!    capped at the number of held books.
//! 2. Candidates = held books not yet claimed.
//! 3. Keep the `capacity` best candidates by score (descending), ties to the
//!    lower book id. Uses a partial selection when only part of the
//!    candidates fit, then sorts the kept prefix.
//!
//! The valuation looks at one library in isolation. It ignores what other
//! unscheduled libraries could contribute.
//!
//! # Complexity
//! O(b + k log k) for b held books and capacity k.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::ledger::BookLedger;
use crate::models::{BookId, Library, LibraryId, ProblemInstance};

/// Best achievable contribution of one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    /// Evaluated library.
    pub library_id: LibraryId,
    /// Signup days of the library (copied for ranking).
    pub signup_days: i64,
    /// Selected books, highest score first.
    pub books: Vec<BookId>,
    /// Sum of the selected books' scores.
    pub score: i64,
}

impl Valuation {
    /// A valuation with no books.
    pub fn empty(library: &Library) -> Self {
        Self {
            library_id: library.id,
            signup_days: library.signup_days,
            books: Vec::new(),
            score: 0,
        }
    }

    /// Whether scheduling this library would add nothing.
    pub fn is_worthless(&self) -> bool {
        self.score <= 0
    }
}

/// Computes [`Valuation`]s for libraries of one instance.
#[derive(Debug, Clone, Copy)]
pub struct LibraryValuator<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> LibraryValuator<'a> {
    /// Creates a valuator over a validated instance.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// The instance being valued.
    pub fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }

    /// Values `library` if its signup started with `remaining_days` left.
    ///
    /// Book identifiers must be in range (guaranteed after validation). The
    /// score saturates at `i64::MAX`; validation rejects instances whose
    /// held scores could reach it.
    pub fn evaluate(&self, library: &Library, ledger: &BookLedger, remaining_days: i64) -> Valuation {
        let capacity = library.scan_capacity(remaining_days);
        if capacity == 0 {
            return Valuation::empty(library);
        }

        let scores = &self.instance.book_scores;
        let mut candidates: Vec<(i64, BookId)> = library
            .books
            .iter()
            .filter(|&&b| !ledger.is_claimed(b))
            .map(|&b| (scores[b], b))
            .collect();

        if candidates.len() > capacity {
            candidates.select_nth_unstable_by(capacity - 1, by_rank);
            candidates.truncate(capacity);
        }
        candidates.sort_unstable_by(by_rank);

        Valuation {
            library_id: library.id,
            signup_days: library.signup_days,
            score: candidates.iter().fold(0, |total, &(s, _)| total.saturating_add(s)),
            books: candidates.into_iter().map(|(_, b)| b).collect(),
        }
    }
}

/// Higher score first, then lower book id.
fn by_rank(a: &(i64, BookId), b: &(i64, BookId)) -> Ordering {
    b.0.cmp(&a.0).then(a.1.cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProblemInstance {
        ProblemInstance::new(10, vec![10, 20, 30, 20, 5, 0])
            .with_library(Library::new(0, 1, 2).with_books(vec![0, 1, 2]))
            .with_library(Library::new(1, 2, 1).with_books(vec![3, 1, 4, 5, 0]))
    }

    #[test]
    fn test_top_k_by_score() {
        let inst = instance();
        let ledger = BookLedger::new(inst.book_count());
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[0], &ledger, 2);
        // 1 scanning day * 2/day → books 2 (30) and 1 (20)
        assert_eq!(v.books, vec![2, 1]);
        assert_eq!(v.score, 50);
        assert_eq!(v.library_id, 0);
        assert_eq!(v.signup_days, 1);
    }

    #[test]
    fn test_tie_breaks_by_lower_book_id() {
        let inst = instance();
        let ledger = BookLedger::new(inst.book_count());
        // Library 1 holds 3 (20) and 1 (20); capacity 1 → book 1
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[1], &ledger, 3);
        assert_eq!(v.books, vec![1]);
        assert_eq!(v.score, 20);
    }

    #[test]
    fn test_all_books_fit_sorted() {
        let inst = instance();
        let ledger = BookLedger::new(inst.book_count());
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[1], &ledger, 10);
        assert_eq!(v.books, vec![1, 3, 0, 4, 5]);
        assert_eq!(v.score, 55);
    }

    #[test]
    fn test_claimed_books_skipped() {
        let inst = instance();
        let mut ledger = BookLedger::new(inst.book_count());
        ledger.claim(&[2, 1]).unwrap();
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[0], &ledger, 10);
        assert_eq!(v.books, vec![0]);
        assert_eq!(v.score, 10);

        ledger.claim(&[0]).unwrap();
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[0], &ledger, 10);
        assert!(v.books.is_empty());
        assert!(v.is_worthless());
    }

    #[test]
    fn test_no_scanning_days() {
        let inst = instance();
        let ledger = BookLedger::new(inst.book_count());
        let valuator = LibraryValuator::new(&inst);
        assert!(valuator.evaluate(&inst.libraries[1], &ledger, 2).is_worthless());
        assert!(valuator.evaluate(&inst.libraries[1], &ledger, 0).books.is_empty());
    }

    #[test]
    fn test_huge_scores_saturate() {
        let inst = ProblemInstance::new(10, vec![i64::MAX / 2 + 1; 2])
            .with_library(Library::new(0, 1, 5).with_books(vec![0, 1]));
        let ledger = BookLedger::new(2);
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[0], &ledger, 10);
        assert_eq!(v.books, vec![0, 1]);
        assert_eq!(v.score, i64::MAX);
        assert!(!v.is_worthless());
    }

    #[test]
    fn test_zero_score_books_are_worthless() {
        let inst = ProblemInstance::new(5, vec![0, 0])
            .with_library(Library::new(0, 1, 1).with_books(vec![0, 1]));
        let ledger = BookLedger::new(2);
        let v = LibraryValuator::new(&inst).evaluate(&inst.libraries[0], &ledger, 5);
        assert_eq!(v.books, vec![0, 1]);
        assert!(v.is_worthless());
    }
}
