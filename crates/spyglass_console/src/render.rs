//! Fixed-width column rendering for console output.
//!
//! A small closed set of typed cell values replaces the printf-style
//! formatting a C console would use. Two shapes exist: tabular output (header
//! row, dash separator, one row per item) and key/value detail output (fixed
//! label column, one pair per line).
//!
//! Padding rules: every sized column is left-justified and padded with spaces
//! to its declared width, never truncated; the last column of a row has no
//! declared width and is newline-terminated instead of padded.

use std::io::{self, Write};

/// One typed column value.
#[derive(Clone, Debug)]
pub enum Cell {
    /// Plain text.
    Text(String),

    /// A non-negative number, decimal formatted.
    Num(u64),

    /// A type expression, rendered bracketed as `[A, B]`.
    TypeExpr(String),

    /// An absent or empty value, rendered as `-`.
    Dash,
}

impl Cell {
    /// Renders the cell to its unpadded text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Num(n) => n.to_string(),
            Self::TypeExpr(expr) => format!("[{expr}]"),
            Self::Dash => "-".to_string(),
        }
    }
}

/// Declared header and width of one column. Width 0 marks the final,
/// newline-terminated column of a layout.
#[derive(Copy, Clone, Debug)]
pub struct ColumnSpec {
    /// Header text.
    pub header: &'static str,

    /// Declared width; 0 for the last column.
    pub width: usize,
}

fn write_padded<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    if width == 0 {
        writeln!(out, "{text}")
    } else {
        write!(out, "{text:<width$}")
    }
}

/// Writer for tabular output over a declared column layout.
pub struct TableWriter<'a, W: Write> {
    out: &'a mut W,
    columns: &'a [ColumnSpec],
}

impl<'a, W: Write> TableWriter<'a, W> {
    /// Creates a writer over the given output and column layout.
    pub fn new(out: &'a mut W, columns: &'a [ColumnSpec]) -> Self {
        Self { out, columns }
    }

    /// Writes a leading blank line, the header row, and the dash separator.
    ///
    /// The separator spans the sum of the declared widths plus the length of
    /// the last column's header.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        let mut line_len = 0;
        for column in self.columns {
            write_padded(self.out, column.header, column.width)?;
            line_len += if column.width == 0 {
                column.header.len()
            } else {
                column.width
            };
        }
        writeln!(self.out, "{}", "-".repeat(line_len))
    }

    /// Writes one row of cells. The cell count must equal the column count.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn row(&mut self, cells: &[Cell]) -> io::Result<()> {
        debug_assert_eq!(cells.len(), self.columns.len());
        for (cell, column) in cells.iter().zip(self.columns) {
            write_padded(self.out, &cell.render(), column.width)?;
        }
        Ok(())
    }
}

/// Writer for key/value detail output with a fixed label width.
pub struct DetailWriter<'a, W: Write> {
    out: &'a mut W,
    label_width: usize,
}

impl<'a, W: Write> DetailWriter<'a, W> {
    /// Creates a writer with the given label column width.
    pub fn new(out: &'a mut W, label_width: usize) -> Self {
        Self { out, label_width }
    }

    /// Writes one `label value` line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn field(&mut self, label: &str, value: &Cell) -> io::Result<()> {
        write_padded(self.out, label, self.label_width)?;
        writeln!(self.out, "{}", value.render())
    }
}

/// Joins list-valued output as a comma-separated sequence with no trailing
/// separator, or a dash when the list is empty.
#[must_use]
pub fn joined_or_dash(items: &[String]) -> Cell {
    if items.is_empty() {
        Cell::Dash
    } else {
        Cell::Text(items.join(","))
    }
}
