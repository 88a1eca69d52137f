// Primitives for reading Excel workbooks through calamine.

use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::debug;

use sheet_reshape::{Cell, SheetTable, TableBuilder};
use snafu::prelude::*;

use crate::convert::*;

pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> ConvertResult<SheetTable> {
    let wrange = get_range(path, worksheet_name)?;

    let mut rows = wrange.rows();
    let header = rows.next().context(EmptyExcelSnafu {
        path: path.to_string(),
    })?;
    let columns: Vec<String> = header.iter().map(header_name).collect();
    debug!("read_excel_table: header: {:?}", columns);

    let mut builder = TableBuilder::new(&columns);
    for (idx, row) in rows.enumerate() {
        let cells: Vec<Cell> = row.iter().map(convert_cell).collect();
        debug!("read_excel_table: row {}: {:?}", idx, cells);
        builder.push_row(cells);
    }
    Ok(builder.build())
}

fn get_range(
    path: &str,
    worksheet_name_o: Option<&str>,
) -> ConvertResult<calamine::Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu {
        path: path.to_string(),
    })?;

    // A worksheet name was provided, use it. Otherwise take the first sheet.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(EmptyExcelSnafu {
                path: path.to_string(),
            })?
            .context(OpeningExcelSnafu {
                path: path.to_string(),
            })?;
        Ok(wrange)
    } else {
        let wrange = workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu {
                path: path.to_string(),
            })?
            .context(OpeningExcelSnafu {
                path: path.to_string(),
            })?;
        Ok(wrange)
    }
}

fn header_name(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.trim().to_string(),
        DataType::Int(x) => format!("{}", x),
        DataType::Float(x) => format!("{}", x),
        _ => String::new(),
    }
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::String(s) => Cell::Text(s.clone()),
        DataType::Int(x) => Cell::Number(*x as f64),
        DataType::Float(x) => Cell::Number(*x),
        DataType::Empty => Cell::Missing,
        other => {
            // Booleans and spreadsheet error cells are unanswered slots.
            debug!("convert_cell: unhandled cell content {:?}", other);
            Cell::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_map_to_loader_values() {
        assert_eq!(
            convert_cell(&DataType::String("3".to_string())),
            Cell::Text("3".to_string())
        );
        assert_eq!(convert_cell(&DataType::Int(3)), Cell::Number(3.0));
        assert_eq!(convert_cell(&DataType::Float(3.5)), Cell::Number(3.5));
        assert_eq!(convert_cell(&DataType::Empty), Cell::Missing);
        assert_eq!(convert_cell(&DataType::Bool(true)), Cell::Missing);
    }

    #[test]
    fn header_names_are_trimmed() {
        assert_eq!(header_name(&DataType::String(" Class ".to_string())), "Class");
        assert_eq!(header_name(&DataType::Int(7)), "7");
    }
}
