pub use crate::config::*;

/// A builder for assembling an input table row by row.
///
/// The readers in the command line front-end produce rows of varying width
/// (trailing blanks are commonly dropped by spreadsheet exports). The builder
/// normalizes every row to the header width so that the reshaper can rely on
/// positional access.
///
/// ```
/// use sheet_reshape::builder::TableBuilder;
/// use sheet_reshape::Cell;
///
/// let mut builder = TableBuilder::new(&["ID".to_string(), "A1".to_string()]);
/// builder.push_row(vec![Cell::Text("1".to_string())]);
///
/// let table = builder.build();
/// assert_eq!(table.rows, vec![vec![Cell::Text("1".to_string()), Cell::Missing]]);
/// ```
pub struct TableBuilder {
    pub(crate) _columns: Vec<String>,
    pub(crate) _rows: Vec<Vec<Cell>>,
}

impl TableBuilder {
    pub fn new(columns: &[String]) -> TableBuilder {
        TableBuilder {
            _columns: columns.to_vec(),
            _rows: Vec::new(),
        }
    }

    /// Adds a row, padded with missing cells or truncated to the header width.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        let width = self._columns.len();
        let mut row = cells;
        row.truncate(width);
        while row.len() < width {
            row.push(Cell::Missing);
        }
        self._rows.push(row);
    }

    pub fn build(self) -> SheetTable {
        SheetTable {
            columns: self._columns,
            rows: self._rows,
        }
    }
}
