//! Book scanning domain models.
//!
//! Provides the data types for the problem (books, libraries, day budget)
//! and its solution (ordered library signups with assigned books).
//!
//! # Domain Mappings
//!
//! | u-bookscan | Scheduling term | Meaning |
//! |------------|-----------------|---------|
//! | Book | Job value | Item worth a score, scanned at most once |
//! | Library | Resource | Signup cost + daily throughput |
//! | ProblemInstance | Problem | Day budget, scores, libraries |
//! | Schedule | Solution | Signup order + assigned books |

mod book;
mod instance;
mod library;
mod schedule;

pub use book::{Book, BookId};
pub use instance::ProblemInstance;
pub use library::{Library, LibraryId};
pub use schedule::{Schedule, ScheduledLibrary};
