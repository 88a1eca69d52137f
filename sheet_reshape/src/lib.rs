pub mod builder;
mod config;
pub mod manual;

use log::debug;

pub use crate::builder::TableBuilder;
pub use crate::config::*;

// **** Cleaning ****

/// Cleans one raw answer cell into an integer.
///
/// Textual content is trimmed and parsed as a (float-tolerant) number, then
/// truncated toward zero. Anything that fails to parse, as well as missing
/// cells, yields `0`: zero is the sentinel for "no answer". This function is
/// idempotent over its own output.
pub fn clean(cell: &Cell) -> i64 {
    match cell {
        Cell::Text(s) => match s.trim().parse::<f64>() {
            Ok(x) if x.is_finite() => x as i64,
            _ => 0,
        },
        Cell::Number(x) if x.is_finite() => *x as i64,
        Cell::Number(_) => 0,
        Cell::Missing => 0,
    }
}

// **** Block decomposition ****

/// Slices the cleaned answer sequence into `total_blocks` consecutive blocks
/// of `questions_per_block` values, starting at offset 0.
///
/// Blocks that run past the end of the source values are shorter, possibly
/// empty. This is not an error: sheets are routinely exported with fewer
/// answer columns than the nominal geometry.
fn slice_blocks(answers: &[i64], questions_per_block: usize, total_blocks: usize) -> Vec<Vec<i64>> {
    let mut blocks: Vec<Vec<i64>> = Vec::with_capacity(total_blocks);
    for i in 0..total_blocks {
        let start = (i * questions_per_block).min(answers.len());
        let end = (start + questions_per_block).min(answers.len());
        blocks.push(answers[start..end].to_vec());
    }
    blocks
}

/// 1-based position of the last non-zero value, or 0 for an all-zero block.
///
/// This is a position, not a count: a respondent may skip interior items, and
/// the furthest marked slot is what decides how many positional rows the
/// sheet actually used.
fn last_nonzero_position(block: &[i64]) -> usize {
    block
        .iter()
        .rposition(|v| *v != 0)
        .map(|idx| idx + 1)
        .unwrap_or(0)
}

fn count_nonzero(block: &[i64]) -> usize {
    block.iter().filter(|v| **v != 0).count()
}

/// Number of output rows a respondent produces, given its blocks.
///
/// The KDMC rule only applies when block 18 exists (more than 17 blocks);
/// otherwise the normal rule is used regardless of the requested mode.
fn max_rows(blocks: &[Vec<i64>], case_mode: CaseMode) -> usize {
    match case_mode {
        CaseMode::Kdmc if blocks.len() > 17 => {
            count_nonzero(&blocks[0]) + count_nonzero(&blocks[17])
        }
        _ => blocks
            .iter()
            .map(|b| last_nonzero_position(b))
            .max()
            .unwrap_or(0),
    }
}

// **** Row expansion ****

/// Reshapes a wide-format answer-sheet table into one row per answered slot.
///
/// Every input row is a respondent. Its answer cells (all columns after the
/// metadata prefix) are cleaned, sliced into blocks, and redistributed over
/// `max_rows` output rows: row `i` carries position `i` of every block in
/// columns `Q1..Qn`, with `0` past a block's length. Metadata cells are
/// copied verbatim into each generated row.
///
/// The output table carries the full header even when no respondent produces
/// any row. The only error condition is a metadata column name absent from
/// the input header; it is detected up front and no partial output is
/// returned.
pub fn reshape(table: &SheetTable, options: &ReshapeOptions) -> Result<SheetTable, ReshapeErrors> {
    let mut meta_indices: Vec<usize> = Vec::with_capacity(options.metadata_cols.len());
    let mut missing: Vec<String> = Vec::new();
    for name in options.metadata_cols.iter() {
        match table.columns.iter().position(|c| c == name) {
            Some(idx) => meta_indices.push(idx),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(ReshapeErrors::MissingMetadataColumns(missing));
    }

    let mut out_columns: Vec<String> = options.metadata_cols.clone();
    for j in 0..options.total_blocks {
        out_columns.push(format!("Q{}", j + 1));
    }

    let answer_start = options.metadata_cols.len();
    let mut out_rows: Vec<Vec<Cell>> = Vec::new();
    for (rowno, row) in table.rows.iter().enumerate() {
        let metadata: Vec<Cell> = meta_indices
            .iter()
            .map(|&idx| row.get(idx).cloned().unwrap_or(Cell::Missing))
            .collect();
        let answers: Vec<i64> = row.iter().skip(answer_start).map(clean).collect();
        let blocks = slice_blocks(&answers, options.questions_per_block, options.total_blocks);
        let num_rows = max_rows(&blocks, options.case_mode);
        debug!("reshape: row {}: expanding to {} rows", rowno, num_rows);

        for i in 0..num_rows {
            let mut out_row = metadata.clone();
            for block in blocks.iter() {
                let v = block.get(i).copied().unwrap_or(0);
                out_row.push(Cell::Number(v as f64));
            }
            out_rows.push(out_row);
        }
    }

    Ok(SheetTable {
        columns: out_columns,
        rows: out_rows,
    })
}
