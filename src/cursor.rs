//! Stateful cell cursor: current position, visited boundary, format limits.

use serde::{Deserialize, Serialize};

use crate::address;
use crate::error::CursorError;
use crate::format::SheetFormat;

/// A (column, row) cell position, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", address::coordinate(self.column, self.row))
    }
}

/// Mutable cell cursor over a bounded spreadsheet grid.
///
/// Tracks the current cell, keeps its A1 rendering cached, and records the
/// furthest column and row ever occupied (the boundary). Movement is atomic:
/// bounds are checked before any field changes, so a failed move leaves the
/// cursor untouched.
///
/// Move operations return `&mut Self` for chaining:
///
/// ```
/// use cellcursor::{Cursor, SheetFormat};
///
/// let mut cursor = Cursor::new(SheetFormat::Xlsx);
/// cursor.right(2)?.down(1)?;
/// assert_eq!(cursor.coord(), "C2");
/// # Ok::<(), cellcursor::CursorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    column: usize,
    row: usize,
    /// A1 rendering of the current cell, refreshed on every successful move.
    coordinate: String,
    max_column: usize,
    max_row: usize,
    format: SheetFormat,
}

impl Cursor {
    /// Cursor at A1 with the given format's addressable limits.
    pub fn new(format: SheetFormat) -> Self {
        Self {
            column: 1,
            row: 1,
            coordinate: address::coordinate(1, 1),
            max_column: 1,
            max_row: 1,
            format,
        }
    }

    /// Cursor from a format token.
    ///
    /// Tokens resolve case-insensitively; unknown tokens fall back to the
    /// xlsx grid (see [`SheetFormat::from_name`]).
    pub fn from_format_name(name: &str) -> Self {
        Self::new(SheetFormat::from_name(name))
    }

    /// Refresh the coordinate cache and fold the current cell into the
    /// visited boundary. Both axes are folded even on single-axis moves.
    fn update_coordinate(&mut self) {
        self.coordinate = address::coordinate(self.column, self.row);
        self.max_column = self.max_column.max(self.column);
        self.max_row = self.max_row.max(self.row);
    }

    /// Move right by `n` columns.
    pub fn right(&mut self, n: usize) -> Result<&mut Self, CursorError> {
        if n == 0 {
            return Err(CursorError::ZeroStep);
        }
        let limit = self.column_limit();
        match self.column.checked_add(n) {
            Some(target) if target <= limit => {
                self.column = target;
                self.update_coordinate();
                Ok(self)
            }
            _ => Err(CursorError::ColumnOverflow { limit }),
        }
    }

    /// Move left by `n` columns.
    pub fn left(&mut self, n: usize) -> Result<&mut Self, CursorError> {
        if n == 0 {
            return Err(CursorError::ZeroStep);
        }
        if n >= self.column {
            return Err(CursorError::ColumnUnderflow);
        }
        self.column -= n;
        self.update_coordinate();
        Ok(self)
    }

    /// Move down by `n` rows.
    pub fn down(&mut self, n: usize) -> Result<&mut Self, CursorError> {
        if n == 0 {
            return Err(CursorError::ZeroStep);
        }
        let limit = self.row_limit();
        match self.row.checked_add(n) {
            Some(target) if target <= limit => {
                self.row = target;
                self.update_coordinate();
                Ok(self)
            }
            _ => Err(CursorError::RowOverflow { limit }),
        }
    }

    /// Move up by `n` rows.
    pub fn up(&mut self, n: usize) -> Result<&mut Self, CursorError> {
        if n == 0 {
            return Err(CursorError::ZeroStep);
        }
        if n >= self.row {
            return Err(CursorError::RowUnderflow);
        }
        self.row -= n;
        self.update_coordinate();
        Ok(self)
    }

    /// Jump to the first column of the next row, like pressing Enter.
    ///
    /// Always advances exactly one row; there is no step-count variant.
    pub fn enter(&mut self) -> Result<&mut Self, CursorError> {
        let limit = self.row_limit();
        if self.row >= limit {
            return Err(CursorError::RowOverflow { limit });
        }
        self.row += 1;
        self.column = 1;
        self.update_coordinate();
        Ok(self)
    }

    /// Yield the current cell's coordinate, then advance one column right.
    ///
    /// The returned string names the cell occupied before the move. A
    /// rightward bounds hit propagates unchanged and yields nothing.
    pub fn tab(&mut self) -> Result<String, CursorError> {
        let current = self.coordinate.clone();
        self.right(1)?;
        Ok(current)
    }

    /// Current cell in A1 notation.
    pub fn coord(&self) -> &str {
        &self.coordinate
    }

    /// Current cell as a (column, row) pair.
    pub fn position(&self) -> Position {
        Position { column: self.column, row: self.row }
    }

    /// Furthest (column, row) ever occupied. Never shrinks.
    pub fn boundary(&self) -> Position {
        Position { column: self.max_column, row: self.max_row }
    }

    /// Boundary in A1 notation.
    pub fn boundary_coord(&self) -> String {
        address::coordinate(self.max_column, self.max_row)
    }

    /// Current row, 1-based.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column, 1-based.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Letter rendering of the current column.
    pub fn column_letter(&self) -> String {
        address::column_letter(self.column)
    }

    /// Format chosen at construction.
    pub fn format(&self) -> SheetFormat {
        self.format
    }

    /// Highest addressable column for this cursor's format.
    pub fn column_limit(&self) -> usize {
        self.format.max_columns()
    }

    /// Highest addressable row for this cursor's format.
    pub fn row_limit(&self) -> usize {
        self.format.max_rows()
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(SheetFormat::default())
    }
}
