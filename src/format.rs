//! Workbook format selection and the addressable grid it implies.

use serde::{Deserialize, Serialize};

/// Workbook file format, fixing the addressable grid size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetFormat {
    /// Legacy BIFF8 grid: 256 columns (IV), 65536 rows.
    Xls,
    /// OOXML grid: 16384 columns (XFD), 1048576 rows.
    #[default]
    Xlsx,
}

impl SheetFormat {
    /// Highest addressable 1-based column index.
    pub const fn max_columns(self) -> usize {
        match self {
            SheetFormat::Xls => 256,
            SheetFormat::Xlsx => 16_384,
        }
    }

    /// Highest addressable 1-based row index.
    pub const fn max_rows(self) -> usize {
        match self {
            SheetFormat::Xls => 65_536,
            SheetFormat::Xlsx => 1_048_576,
        }
    }

    /// Resolve a format token, case-insensitively.
    ///
    /// Unrecognized tokens resolve to [`SheetFormat::Xlsx`]. Long-standing
    /// compatibility behavior: existing callers rely on passing arbitrary
    /// strings and getting the xlsx grid.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "xls" => SheetFormat::Xls,
            _ => SheetFormat::Xlsx,
        }
    }
}

impl std::fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetFormat::Xls => write!(f, "xls"),
            SheetFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}
