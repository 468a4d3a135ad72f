use thiserror::Error;

use crate::cell::Role;
use crate::position::Position;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations. These are caller bugs and are reported before a grid is touched;
/// a search that finds no path is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a grid needs at least one row")]
    InvalidSize,

    #[error("{position} lies outside the {rows}x{rows} grid")]
    OutOfBounds { position: Position, rows: usize },

    #[error("start and end are both {0}")]
    StartIsEnd(Position),

    #[error("no {0} cell has been designated")]
    MissingRole(Role),

    #[error("expected a single {role} cell, found {count}")]
    DuplicateRole { role: Role, count: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let error = Error::OutOfBounds {
            position: Position::new(3, 0),
            rows: 3,
        };
        assert_eq!(error.to_string(), "(3, 0) lies outside the 3x3 grid");
        let error = Error::DuplicateRole {
            role: Role::Start,
            count: 2,
        };
        assert_eq!(error.to_string(), "expected a single start cell, found 2");
    }
}
