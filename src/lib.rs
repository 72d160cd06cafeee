//! `cellcursor` - stateful cell cursor for spreadsheet writers.
//!
//! Pure engine crate: tracks a 1-based (column, row) position over an
//! XLS/XLSX addressable grid, records the furthest cell ever visited, and
//! renders positions in A1 notation. No file IO and no workbook output;
//! writers consume the rendered addresses.

pub mod address;
pub mod cursor;
pub mod error;
pub mod format;

pub use cursor::{Cursor, Position};
pub use error::{CursorError, ErrorKind};
pub use format::SheetFormat;
