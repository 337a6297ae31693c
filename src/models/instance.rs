//! Problem instance model.
//!
//! Built once from parsed input and never mutated during a solve.

use serde::{Deserialize, Serialize};

use super::{Book, BookId, Library, LibraryId};
use crate::validation::{validate_instance, ValidationResult};

/// A book scanning problem: day budget, book scores, and libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Total days available for signups and scanning.
    pub days: i64,
    /// Score per book, indexed by [`BookId`].
    pub book_scores: Vec<i64>,
    /// Libraries, indexed by [`LibraryId`].
    pub libraries: Vec<Library>,
}

impl ProblemInstance {
    /// Creates an instance with the given day budget and book scores.
    pub fn new(days: i64, book_scores: Vec<i64>) -> Self {
        Self {
            days,
            book_scores,
            libraries: Vec::new(),
        }
    }

    /// Sets the libraries.
    pub fn with_libraries(mut self, libraries: Vec<Library>) -> Self {
        self.libraries = libraries;
        self
    }

    /// Appends a library.
    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    /// Number of books in the score table.
    pub fn book_count(&self) -> usize {
        self.book_scores.len()
    }

    /// Number of libraries.
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Score of a book, if the identifier is in range.
    pub fn score(&self, book: BookId) -> Option<i64> {
        self.book_scores.get(book).copied()
    }

    /// Looks up a library by identifier.
    pub fn library(&self, id: LibraryId) -> Option<&Library> {
        self.libraries.get(id)
    }

    /// Iterates over all books.
    pub fn books(&self) -> impl Iterator<Item = Book> + '_ {
        self.book_scores
            .iter()
            .enumerate()
            .map(|(id, &score)| Book::new(id, score))
    }

    /// Sum of the scores of every book held by at least one library.
    ///
    /// Upper bound on any schedule's total score. Out-of-range identifiers
    /// are ignored. Saturates at `i64::MAX`.
    pub fn reachable_score(&self) -> i64 {
        self.reachable_scores().fold(0, i64::saturating_add)
    }

    /// Like [`reachable_score`](Self::reachable_score), but `None` if the
    /// sum overflows `i64`.
    pub fn checked_reachable_score(&self) -> Option<i64> {
        self.reachable_scores().try_fold(0i64, i64::checked_add)
    }

    /// Scores of held books, each book once.
    fn reachable_scores(&self) -> impl Iterator<Item = i64> + '_ {
        let mut seen = vec![false; self.book_count()];
        self.libraries
            .iter()
            .flat_map(|library| library.books.iter().copied())
            .filter_map(move |book| match seen.get_mut(book) {
                Some(flag) if !*flag => {
                    *flag = true;
                    Some(self.book_scores[book])
                }
                _ => None,
            })
    }

    /// Checks structural invariants. See [`validate_instance`].
    pub fn validate(&self) -> ValidationResult {
        validate_instance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProblemInstance {
        ProblemInstance::new(7, vec![1, 2, 3, 6, 5, 4])
            .with_library(Library::new(0, 2, 2).with_books(vec![0, 1, 2, 3, 4]))
            .with_library(Library::new(1, 3, 1).with_books(vec![3, 2, 5, 0]))
    }

    #[test]
    fn test_instance_accessors() {
        let inst = sample();
        assert_eq!(inst.days, 7);
        assert_eq!(inst.book_count(), 6);
        assert_eq!(inst.library_count(), 2);
        assert_eq!(inst.score(3), Some(6));
        assert_eq!(inst.score(6), None);
        assert_eq!(inst.library(1).map(|l| l.signup_days), Some(3));
        assert!(inst.library(2).is_none());
    }

    #[test]
    fn test_books_iterator() {
        let inst = sample();
        let books: Vec<Book> = inst.books().collect();
        assert_eq!(books.len(), 6);
        assert_eq!(books[4], Book::new(4, 5));
    }

    #[test]
    fn test_reachable_score_counts_shared_books_once() {
        // Every book is held; 1+2+3+6+5+4 = 21
        assert_eq!(sample().reachable_score(), 21);

        let partial = ProblemInstance::new(3, vec![10, 20, 30])
            .with_library(Library::new(0, 1, 1).with_books(vec![2]))
            .with_library(Library::new(1, 1, 1).with_books(vec![2, 0]));
        assert_eq!(partial.reachable_score(), 40);
    }

    #[test]
    fn test_reachable_score_overflow() {
        let inst = ProblemInstance::new(10, vec![i64::MAX / 2 + 1; 2])
            .with_library(Library::new(0, 1, 5).with_books(vec![0, 1]));
        assert_eq!(inst.checked_reachable_score(), None);
        assert_eq!(inst.reachable_score(), i64::MAX);

        // A book shared by two libraries counts once
        let shared = ProblemInstance::new(10, vec![i64::MAX])
            .with_library(Library::new(0, 1, 1).with_book(0))
            .with_library(Library::new(1, 1, 1).with_book(0));
        assert_eq!(shared.checked_reachable_score(), Some(i64::MAX));
    }

    #[test]
    fn test_empty_instance() {
        let inst = ProblemInstance::default();
        assert_eq!(inst.book_count(), 0);
        assert_eq!(inst.reachable_score(), 0);
        assert!(inst.validate().is_ok());
    }
}
