//! Cursor failure types.

use std::fmt;

use crate::address;

/// Coarse classification of cursor failures.
///
/// [`ErrorKind::InvalidArgument`] is a caller bug, surfaced before any state
/// change. [`ErrorKind::OutOfBounds`] is an expected, recoverable condition:
/// the usual reaction is to start a fresh grid rather than treat it as a
/// defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfBounds,
}

/// Error raised by [`Cursor`](crate::Cursor) operations.
///
/// Every variant is detected before the cursor mutates, so a failed
/// operation always leaves the cursor exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Step count was zero; moves take at least one cell.
    ZeroStep,
    /// A rightward move would pass the format's last column.
    ColumnOverflow { limit: usize },
    /// A leftward move would pass column 1.
    ColumnUnderflow,
    /// A downward move would pass the format's last row.
    RowOverflow { limit: usize },
    /// An upward move would pass row 1.
    RowUnderflow,
}

impl CursorError {
    /// Which of the two failure classes this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CursorError::ZeroStep => ErrorKind::InvalidArgument,
            CursorError::ColumnOverflow { .. }
            | CursorError::ColumnUnderflow
            | CursorError::RowOverflow { .. }
            | CursorError::RowUnderflow => ErrorKind::OutOfBounds,
        }
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "step count must be a positive integer"),
            Self::ColumnOverflow { limit } => {
                write!(f, "column right limit reached ({} | {limit})", address::column_letter(*limit))
            }
            Self::ColumnUnderflow => write!(f, "column left limit reached (A | 1)"),
            Self::RowOverflow { limit } => write!(f, "row lower limit reached ({limit})"),
            Self::RowUnderflow => write!(f, "row upper limit reached (1)"),
        }
    }
}

impl std::error::Error for CursorError {}
