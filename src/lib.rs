//! Library signup and book scanning scheduler for the U-Engine ecosystem.
//!
//! Given books with scores and libraries with a signup cost, a daily
//! scanning throughput, and a set of held books, builds an ordered signup
//! schedule with per-library book assignments that maximizes the total score
//! of distinct books scanned within a day budget.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Book`, `Library`, `ProblemInstance`,
//!   `Schedule`, `ScheduledLibrary`
//! - **`ledger`**: `BookLedger`, the claimed-book record of one solve
//! - **`valuation`**: `LibraryValuator`, top-K book selection per library
//! - **`scheduler`**: `GreedyScheduler`, `SelectionKey`, `ScheduleKpi`
//! - **`validation`**: Instance integrity checks and schedule verification
//! - **`format`**: Text codec for problem and submission files
//!
//! # Architecture
//!
//! The scheduler consumes an in-memory `ProblemInstance` and returns a
//! `Schedule`; it does no I/O. `format` and the `u-bookscan` binary are the
//! file-facing layer around it.
//!
//! # Features
//!
//! - **`parallel`**: value candidate libraries concurrently with rayon.
//!
//! # References
//!
//! - Google Hash Code 2020 Online Qualification, "Book Scanning"
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2 (greedy set cover)

pub mod error;
pub mod format;
pub mod ledger;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod valuation;

pub use error::ScheduleError;
