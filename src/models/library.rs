//! Library model.
//!
//! A library must be signed up before it can scan. Signups happen one at a
//! time, so a library signed up after others only starts scanning once all
//! earlier signups and its own have completed.

use serde::{Deserialize, Serialize};

use super::BookId;

/// 0-based library identifier (position in the input).
pub type LibraryId = usize;

/// A library holding a set of books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Library identifier, equal to its position in the instance.
    pub id: LibraryId,
    /// Days needed to sign up (must be positive).
    pub signup_days: i64,
    /// Books scanned per day once signed up (must be positive).
    pub books_per_day: i64,
    /// Distinct books held by this library, in input order.
    pub books: Vec<BookId>,
}

impl Library {
    /// Creates a library with no books.
    pub fn new(id: LibraryId, signup_days: i64, books_per_day: i64) -> Self {
        Self {
            id,
            signup_days,
            books_per_day,
            books: Vec::new(),
        }
    }

    /// Sets the held books.
    pub fn with_books(mut self, books: Vec<BookId>) -> Self {
        self.books = books;
        self
    }

    /// Adds a single held book.
    pub fn with_book(mut self, book: BookId) -> Self {
        self.books.push(book);
        self
    }

    /// Number of books held.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Whether the library holds the given book.
    pub fn holds(&self, book: BookId) -> bool {
        self.books.contains(&book)
    }

    /// Maximum number of books this library can scan if its signup starts
    /// with `remaining_days` left.
    ///
    /// `max(0, remaining_days - signup_days) * books_per_day`, capped at the
    /// number of books held. Zero when the signup would not finish with at
    /// least one scanning day left.
    pub fn scan_capacity(&self, remaining_days: i64) -> usize {
        let scan_days = u64::try_from(remaining_days.saturating_sub(self.signup_days)).unwrap_or(0);
        let per_day = u64::try_from(self.books_per_day).unwrap_or(0);
        let held = self.books.len();
        let capacity = scan_days.saturating_mul(per_day);
        usize::try_from(capacity).map_or(held, |c| c.min(held))
    }
}
