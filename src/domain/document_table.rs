use serde::Serialize;

/// Minimum padding added to header cells when rendering pipe tables.
const HEADER_PADDING: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub column_header: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            column_header: false,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            column_header: true,
        }
    }
}

/// A table recognised by the conversion engine, kept as a row-major cell grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTable {
    pub num_rows: usize,
    pub num_cols: usize,
    pub grid: Vec<Vec<TableCell>>,
}

/// Column headers plus data rows of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableFrame {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableProjectionError {
    #[error("row {row} has no cells but the table declares {num_cols} columns")]
    EmptyRow { row: usize, num_cols: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl DocumentTable {
    pub fn from_grid(grid: Vec<Vec<TableCell>>) -> Self {
        let num_rows = grid.len();
        let num_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            num_rows,
            num_cols,
            grid,
        }
    }

    /// Renders the grid as a GitHub pipe table, first row as header.
    ///
    /// Tables with fewer than two rows render as an empty string.
    pub fn to_markdown(&self) -> String {
        if self.grid.len() < 2 || self.grid[0].is_empty() {
            return String::new();
        }

        let rows: Vec<Vec<String>> = self
            .grid
            .iter()
            .map(|row| row.iter().map(|cell| flatten_cell(&cell.text)).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; width];
        for (col, header) in rows[0].iter().enumerate() {
            widths[col] = header.chars().count() + HEADER_PADDING;
        }
        for row in &rows[1..] {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(render_row(&rows[0], &widths));
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        lines.push(format!("|{}|", separator.join("|")));
        for row in &rows[1..] {
            lines.push(render_row(row, &widths));
        }

        lines.join("\n")
    }

    /// Splits the grid into column headers and data rows.
    ///
    /// Leading rows holding at least one column-header cell become the header;
    /// multi-row headers are joined with `.`. Without header rows the column
    /// indices are used as names.
    pub fn to_frame(&self) -> Result<TableFrame, TableProjectionError> {
        if self.num_rows == 0 || self.num_cols == 0 {
            return Ok(TableFrame::default());
        }

        let mut header_rows = 0;
        for (index, row) in self.grid.iter().enumerate() {
            if row.is_empty() {
                return Err(TableProjectionError::EmptyRow {
                    row: index,
                    num_cols: self.num_cols,
                });
            }
            if row.iter().any(|cell| cell.column_header) {
                header_rows += 1;
            } else {
                break;
            }
        }

        let headers = if header_rows > 0 {
            let mut names = vec![String::new(); self.num_cols];
            for (index, row) in self.grid[..header_rows].iter().enumerate() {
                if row.len() != self.num_cols {
                    return Err(TableProjectionError::RaggedRow {
                        row: index,
                        expected: self.num_cols,
                        found: row.len(),
                    });
                }
                for (col, cell) in row.iter().enumerate() {
                    if !names[col].is_empty() {
                        names[col].push('.');
                    }
                    names[col].push_str(&cell.text);
                }
            }
            names
        } else {
            (0..self.num_cols).map(|col| col.to_string()).collect()
        };

        let mut rows = Vec::with_capacity(self.grid.len() - header_rows);
        for (offset, row) in self.grid[header_rows..].iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableProjectionError::RaggedRow {
                    row: header_rows + offset,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            rows.push(row.iter().map(|cell| cell.text.clone()).collect());
        }

        Ok(TableFrame { headers, rows })
    }
}

fn flatten_cell(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            format!(" {cell:<width$} ")
        })
        .collect();
    format!("|{}|", padded.join("|"))
}
