//! Integrity checks for problem instances and schedules.
//!
//! [`validate_instance`] runs before scheduling and detects:
//! - Negative day budget
//! - Negative book scores
//! - Non-positive signup days or throughput
//! - Library identifiers that do not match their position
//! - Out-of-range or repeated book references
//! - Held book scores whose total overflows
//!
//! [`verify_schedule`] checks a finished schedule against its instance:
//! distinct books, held books only, signup days within budget, and per-library
//! scanning capacity.
//!
//! Both collect every issue instead of stopping at the first.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::models::{ProblemInstance, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The day budget is negative.
    InvalidDayBudget,
    /// A book has a negative score.
    NegativeScore,
    /// A library's signup days are zero or negative.
    InvalidSignupDays,
    /// A library's books per day are zero or negative.
    InvalidThroughput,
    /// A library's `id` differs from its position.
    LibraryIdMismatch,
    /// A library references a book outside the score table.
    BookOutOfRange,
    /// A library lists the same book twice.
    DuplicateBookInLibrary,
    /// The summed scores of all held books overflow `i64`.
    ScoreOverflow,
    /// A schedule references a library that does not exist.
    UnknownLibrary,
    /// A schedule signs up the same library twice.
    DuplicateLibrary,
    /// A schedule assigns the same book more than once.
    DuplicateBook,
    /// A schedule assigns a book the library does not hold.
    BookNotHeld,
    /// Cumulative signup days exceed the budget.
    DayBudgetExceeded,
    /// A library is assigned more books than it can scan.
    CapacityExceeded,
    /// A scheduled library has no books assigned.
    EmptyAssignment,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a problem instance.
///
/// Checks:
/// 1. Day budget is non-negative (zero is allowed and yields an empty schedule)
/// 2. Every book score is non-negative
/// 3. Every library has positive signup days and throughput
/// 4. Every library's `id` equals its index
/// 5. Every held book is a valid index into the score table
/// 6. No library lists a book twice
/// 7. The scores of all held books sum without overflowing `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.days < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDayBudget,
            format!("Day budget {} is negative", instance.days),
        ));
    }

    for book in instance.books() {
        if book.score < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeScore,
                format!("Book {} has negative score {}", book.id, book.score),
            ));
        }
    }

    let book_count = instance.book_count();
    for (index, library) in instance.libraries.iter().enumerate() {
        if library.id != index {
            errors.push(ValidationError::new(
                ValidationErrorKind::LibraryIdMismatch,
                format!("Library at position {index} has id {}", library.id),
            ));
        }
        if library.signup_days <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSignupDays,
                format!(
                    "Library {} has non-positive signup days {}",
                    library.id, library.signup_days
                ),
            ));
        }
        if library.books_per_day <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidThroughput,
                format!(
                    "Library {} has non-positive books per day {}",
                    library.id, library.books_per_day
                ),
            ));
        }

        let mut held = HashSet::new();
        for &book in &library.books {
            if book >= book_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BookOutOfRange,
                    format!(
                        "Library {} references unknown book {book} (only {book_count} books)",
                        library.id
                    ),
                ));
            } else if !held.insert(book) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateBookInLibrary,
                    format!("Library {} lists book {book} more than once", library.id),
                ));
            }
        }
    }

    if instance.checked_reachable_score().is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ScoreOverflow,
            "Total score of held books overflows a 64-bit integer",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(issues = errors.len(), "problem instance rejected");
        Err(errors)
    }
}

/// Verifies a schedule against the instance it was built for.
///
/// Checks, walking the schedule in signup order:
/// 1. Every library exists and is signed up at most once
/// 2. Cumulative signup days never exceed the day budget
/// 3. Each library has at least one book and no more than
///    `(days - signup days so far, own included) * books_per_day`
/// 4. Every assigned book is held by its library
/// 5. No book is assigned twice across the schedule
pub fn verify_schedule(instance: &ProblemInstance, schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_libraries = HashSet::new();
    let mut seen_books = HashSet::new();
    let mut days_used: i64 = 0;

    for entry in &schedule.libraries {
        let Some(library) = instance.library(entry.library_id) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLibrary,
                format!("Schedule references unknown library {}", entry.library_id),
            ));
            continue;
        };

        if !seen_libraries.insert(entry.library_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLibrary,
                format!("Library {} is signed up more than once", entry.library_id),
            ));
        }

        days_used = days_used.saturating_add(library.signup_days);
        if days_used > instance.days {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayBudgetExceeded,
                format!(
                    "Signup of library {} ends on day {days_used}, budget is {}",
                    library.id, instance.days
                ),
            ));
        }

        if entry.books.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAssignment,
                format!("Library {} is signed up with no books", library.id),
            ));
        }

        let scan_days = instance.days.saturating_sub(days_used).max(0);
        let capacity = scan_days.saturating_mul(library.books_per_day.max(0));
        if i64::try_from(entry.books.len()).map_or(true, |n| n > capacity) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityExceeded,
                format!(
                    "Library {} is assigned {} books but can scan {capacity}",
                    library.id,
                    entry.books.len()
                ),
            ));
        }

        for &book in &entry.books {
            if !library.holds(book) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BookNotHeld,
                    format!("Library {} does not hold book {book}", library.id),
                ));
            }
            if !seen_books.insert(book) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateBook,
                    format!("Book {book} is assigned more than once"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
