//! Record of books already claimed during one schedule build.
//!
//! Claims are permanent: a book, once claimed, stays claimed until the
//! ledger is dropped. Each solve creates its own ledger.

use crate::error::ScheduleError;
use crate::models::BookId;

/// Tracks which books have been claimed by a scheduled library.
#[derive(Debug, Clone)]
pub struct BookLedger {
    claimed: Vec<bool>,
    count: usize,
}

impl BookLedger {
    /// Creates an empty ledger for `book_count` books.
    pub fn new(book_count: usize) -> Self {
        Self {
            claimed: vec![false; book_count],
            count: 0,
        }
    }

    /// Whether the book has been claimed.
    ///
    /// Identifiers outside the ledger's range are never claimed.
    #[inline]
    pub fn is_claimed(&self, book: BookId) -> bool {
        self.claimed.get(book).copied().unwrap_or(false)
    }

    /// Number of claimed books.
    pub fn claimed_count(&self) -> usize {
        self.count
    }

    /// Claims every book in `books`.
    ///
    /// All-or-nothing: if any book is already claimed, repeated within
    /// `books`, or out of range, the ledger is left unchanged and an
    /// [`ScheduleError::InternalConsistency`] is returned.
    pub fn claim(&mut self, books: &[BookId]) -> Result<(), ScheduleError> {
        let book_count = self.claimed.len();
        for (i, &book) in books.iter().enumerate() {
            let conflict = match self.claimed.get_mut(book) {
                Some(flag) if !*flag => {
                    *flag = true;
                    None
                }
                Some(_) => Some(format!("book {book} claimed twice")),
                None => Some(format!("book {book} outside ledger of {book_count} books")),
            };
            if let Some(message) = conflict {
                for &done in &books[..i] {
                    self.claimed[done] = false;
                }
                return Err(ScheduleError::InternalConsistency(message));
            }
        }
        self.count += books.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_and_query() {
        let mut ledger = BookLedger::new(5);
        assert!(!ledger.is_claimed(2));
        ledger.claim(&[2, 4]).unwrap();
        assert!(ledger.is_claimed(2));
        assert!(ledger.is_claimed(4));
        assert!(!ledger.is_claimed(0));
        assert_eq!(ledger.claimed_count(), 2);
    }

    #[test]
    fn test_double_claim_fails() {
        let mut ledger = BookLedger::new(5);
        ledger.claim(&[1]).unwrap();
        let err = ledger.claim(&[0, 1]).unwrap_err();
        assert!(matches!(err, ScheduleError::InternalConsistency(_)));
        // Book 0 rolled back
        assert!(!ledger.is_claimed(0));
        assert_eq!(ledger.claimed_count(), 1);
    }

    #[test]
    fn test_repeat_within_call_fails() {
        let mut ledger = BookLedger::new(3);
        assert!(ledger.claim(&[2, 0, 2]).is_err());
        assert_eq!(ledger.claimed_count(), 0);
        assert!(!ledger.is_claimed(2));
        assert!(!ledger.is_claimed(0));
    }

    #[test]
    fn test_out_of_range() {
        let mut ledger = BookLedger::new(2);
        assert!(!ledger.is_claimed(7));
        assert!(ledger.claim(&[7]).is_err());
    }

    #[test]
    fn test_claim_empty() {
        let mut ledger = BookLedger::new(0);
        ledger.claim(&[]).unwrap();
        assert_eq!(ledger.claimed_count(), 0);
    }
}
