//! Plain-text codec for problem and submission files.
//!
//! # Input
//!
//! ```text
//! B L D            book count, library count, days
//! s0 s1 ... sB-1   book scores
//! N T M            per library: book count, signup days, books per day
//! b0 ... bN-1      per library: held book ids
//! ```
//!
//! Blank lines are ignored. A library declaring `N = 0` has no id line.
//!
//! # Output
//!
//! ```text
//! A                scheduled library count
//! Y K              per library: library id, assigned book count
//! k0 ... kK-1      per library: assigned book ids in scanning order
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::models::{BookId, Library, ProblemInstance, Schedule};

/// Errors raised while parsing an input file.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before the expected record.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },
    /// A token is not a valid number for its position.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// Line of the token.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A line holds a different number of values than declared.
    #[error("line {line}: expected {expected} values, found {found}")]
    CountMismatch {
        /// Line of the record.
        line: usize,
        /// Declared count.
        expected: usize,
        /// Actual count.
        found: usize,
    },
    /// Non-blank lines remain after the last library.
    #[error("line {line}: unexpected trailing data")]
    TrailingData {
        /// First trailing line.
        line: usize,
    },
}

/// Line reader that skips blank lines and tracks line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .by_ref()
            .map(|(i, l)| (i + 1, l))
            .find(|(_, l)| !l.trim().is_empty())
    }

    /// Reads the next record as exactly `count` values of type `T`.
    fn record<T: FromStr>(
        &mut self,
        count: usize,
        expected: &'static str,
    ) -> Result<(usize, Vec<T>), ParseError> {
        let (line, text) = self
            .next_line()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        let values = text
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        if values.len() != count {
            return Err(ParseError::CountMismatch {
                line,
                expected: count,
                found: values.len(),
            });
        }
        Ok((line, values))
    }
}

/// Parses a problem file.
///
/// Only the text layout is checked here. Semantic invariants (score signs,
/// book ranges, positive signup days) are left to
/// [`validate_instance`](crate::validation::validate_instance).
pub fn parse_instance(text: &str) -> Result<ProblemInstance, ParseError> {
    let mut records = Records::new(text);

    let (header_line, header) = records.record::<i64>(3, "header line")?;
    let count = |value: i64| {
        usize::try_from(value).map_err(|_| ParseError::InvalidNumber {
            line: header_line,
            token: value.to_string(),
        })
    };
    let book_count = count(header[0])?;
    let library_count = count(header[1])?;
    let days = header[2];

    let (_, book_scores) = records.record::<i64>(book_count, "book scores")?;

    let mut libraries = Vec::with_capacity(library_count);
    for id in 0..library_count {
        let (line, meta) = records.record::<i64>(3, "library header")?;
        let held = usize::try_from(meta[0]).map_err(|_| ParseError::InvalidNumber {
            line,
            token: meta[0].to_string(),
        })?;
        let books = if held == 0 {
            Vec::new()
        } else {
            records.record::<BookId>(held, "library books")?.1
        };
        libraries.push(Library::new(id, meta[1], meta[2]).with_books(books));
    }

    if let Some((line, _)) = records.next_line() {
        return Err(ParseError::TrailingData { line });
    }

    Ok(ProblemInstance::new(days, book_scores).with_libraries(libraries))
}

/// Renders a schedule as a submission file.
///
/// The count line always ends with a newline; no newline follows the last
/// book id line.
pub fn write_schedule(schedule: &Schedule) -> String {
    let mut out = format!("{}\n", schedule.library_count());
    for (i, entry) in schedule.libraries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} {}\n", entry.library_id, entry.book_count()));
        let ids: Vec<String> = entry.books.iter().map(ToString::to_string).collect();
        out.push_str(&ids.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduledLibrary;

    const EXAMPLE: &str = "6 2 7\n1 2 3 6 5 4\n5 2 2\n0 1 2 3 4\n4 3 1\n3 2 5 0\n";

    #[test]
    fn test_parse_example() {
        let inst = parse_instance(EXAMPLE).unwrap();
        assert_eq!(inst.days, 7);
        assert_eq!(inst.book_scores, vec![1, 2, 3, 6, 5, 4]);
        assert_eq!(inst.library_count(), 2);
        assert_eq!(inst.libraries[1], Library::new(1, 3, 1).with_books(vec![3, 2, 5, 0]));
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_crlf() {
        let text = "\n2 1 4\r\n\r\n5 6\r\n2 1 1\r\n1 0\r\n\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(inst.libraries[0].books, vec![1, 0]);
    }

    #[test]
    fn test_parse_library_without_books() {
        let inst = parse_instance("1 2 3\n9\n0 1 1\n1 1 1\n0\n").unwrap();
        assert!(inst.libraries[0].books.is_empty());
        assert_eq!(inst.libraries[1].books, vec![0]);
    }

    #[test]
    fn test_parse_keeps_negative_values_for_validation() {
        let inst = parse_instance("1 1 -3\n-5\n1 0 1\n0\n").unwrap();
        assert_eq!(inst.days, -3);
        assert_eq!(inst.book_scores, vec![-5]);
        assert!(inst.validate().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_instance(""),
            Err(ParseError::UnexpectedEof {
                expected: "header line"
            })
        );
        assert_eq!(
            parse_instance("2 0 3\n1 x\n"),
            Err(ParseError::InvalidNumber {
                line: 2,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_instance("3 0 3\n1 2\n"),
            Err(ParseError::CountMismatch {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_instance("1 1 3\n1\n1 1 1\n-1\n"),
            Err(ParseError::InvalidNumber {
                line: 4,
                token: "-1".into()
            })
        );
        assert_eq!(
            parse_instance("1 0 3\n1\n7\n"),
            Err(ParseError::TrailingData { line: 3 })
        );
        assert!(matches!(
            parse_instance("1 1 3\n1\n1 1 1\n"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_write_schedule() {
        let mut s = Schedule::new();
        s.add_library(ScheduledLibrary::new(1, vec![5, 2, 3]));
        s.add_library(ScheduledLibrary::new(0, vec![0, 1, 2, 3, 4]));
        assert_eq!(write_schedule(&s), "2\n1 3\n5 2 3\n0 5\n0 1 2 3 4");
    }

    #[test]
    fn test_write_empty_schedule() {
        assert_eq!(write_schedule(&Schedule::new()), "0\n");
    }
}
