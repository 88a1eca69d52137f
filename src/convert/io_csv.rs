// Primitives for reading and writing CSV tables.

use log::debug;

use sheet_reshape::{Cell, SheetTable, TableBuilder};
use snafu::prelude::*;

use crate::convert::*;

pub fn read_csv_table(path: &str) -> ConvertResult<SheetTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu {
            path: path.to_string(),
        })?;
    read_table(rdr)
}

/// Reads a table from any CSV source. The first record is the header.
///
/// Fields are kept as text; empty fields become missing cells so that the
/// cleaning rule treats them as unanswered.
pub fn read_table<R: std::io::Read>(mut rdr: csv::Reader<R>) -> ConvertResult<SheetTable> {
    let headers = rdr.headers().context(CsvLineParseSnafu {})?.clone();
    let columns: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
    debug!("read_table: header: {:?}", columns);

    let mut builder = TableBuilder::new(&columns);
    for (idx, line_r) in rdr.into_records().enumerate() {
        let line = line_r.context(CsvLineParseSnafu {})?;
        debug!("read_table: line {}: {:?}", idx, line);
        let cells: Vec<Cell> = line
            .iter()
            .map(|s| {
                if s.is_empty() {
                    Cell::Missing
                } else {
                    Cell::Text(s.to_string())
                }
            })
            .collect();
        builder.push_row(cells);
    }
    Ok(builder.build())
}

/// Serializes a table to CSV bytes: header row first, then one record per row.
pub fn write_csv_bytes(table: &SheetTable) -> ConvertResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&table.columns).context(CsvWriteSnafu {})?;
    for row in table.rows.iter() {
        let fields: Vec<String> = row.iter().map(render_cell).collect();
        wtr.write_record(&fields).context(CsvWriteSnafu {})?;
    }
    match wtr.into_inner() {
        Result::Ok(bytes) => Ok(bytes),
        Result::Err(e) => {
            whatever!("Error flushing the CSV output: {}", e)
        }
    }
}

/// Integral numbers are written without a decimal part, the way the question
/// values are expected downstream.
fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Number(x) if x.is_finite() && x.fract() == 0.0 => format!("{}", *x as i64),
        Cell::Number(x) => format!("{}", x),
        Cell::Missing => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_missing() {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader("ID,A1,A2\n7,,3\n".as_bytes());
        let table = read_table(rdr).unwrap();
        assert_eq!(
            table.rows,
            vec![vec![
                Cell::Text("7".to_string()),
                Cell::Missing,
                Cell::Text("3".to_string())
            ]]
        );
    }

    #[test]
    fn short_lines_are_padded() {
        // A flexible reader may produce narrow records; the table keeps the
        // header width.
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader("ID,A1,A2\n7,1\n".as_bytes());
        let table = read_table(rdr).unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][2], Cell::Missing);
    }

    #[test]
    fn render_cells() {
        assert_eq!(render_cell(&Cell::Number(4.0)), "4");
        assert_eq!(render_cell(&Cell::Number(4.5)), "4.5");
        assert_eq!(render_cell(&Cell::Text("x y".to_string())), "x y");
        assert_eq!(render_cell(&Cell::Missing), "");
    }
}
