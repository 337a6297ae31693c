//! Book model.

use serde::{Deserialize, Serialize};

/// Index into the global book score table.
pub type BookId = usize;

/// A book with its score.
///
/// Books are identified by their position in the instance's score table;
/// this type is a view handed out by [`ProblemInstance::books`](super::ProblemInstance::books).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// 0-based book identifier.
    pub id: BookId,
    /// Score gained the first time this book is scanned.
    pub score: i64,
}

impl Book {
    /// Creates a book.
    pub fn new(id: BookId, score: i64) -> Self {
        Self { id, score }
    }
}
