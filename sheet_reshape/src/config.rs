// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A single cell value, as produced by the tabular readers.
///
/// Spreadsheet and CSV loaders emit dynamically typed content. The reshaper
/// never inspects a cell directly: answer cells are only read through
/// [`crate::clean`], and metadata cells are copied verbatim.
#[derive(PartialEq, Debug, Clone)]
pub enum Cell {
    /// Textual content, possibly with surrounding whitespace.
    Text(String),
    /// Numeric content. Spreadsheet numbers are always floats.
    Number(f64),
    /// A blank or otherwise unusable cell.
    Missing,
}

/// A tabular dataset: ordered named columns and ordered rows.
///
/// Column order is significant. The first `metadata_cols.len()` columns are
/// the respondent metadata; all remaining columns, in their left-to-right
/// order, are answer cells.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

// ********* Configuration **********

/// Selects the rule that computes how many output rows a respondent yields.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum CaseMode {
    /// One row per positional slot up to the furthest marked slot of any block.
    Normal,
    /// KDMC sheets: non-zero counts of blocks 1 and 18 added together.
    /// Only meaningful with more than 17 blocks; falls back to `Normal`
    /// otherwise.
    Kdmc,
}

/// The parameters of one reshaping run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReshapeOptions {
    /// Names of the leading columns that identify a respondent. Must all be
    /// present in the input header.
    pub metadata_cols: Vec<String>,
    /// Number of consecutive answer cells per block. At least 1.
    pub questions_per_block: usize,
    /// Number of blocks sliced out of the answer cells, in order. At least 1.
    pub total_blocks: usize,
    pub case_mode: CaseMode,
}

impl ReshapeOptions {
    /// The block geometry of the standard OSCAN export.
    pub const DEFAULT_QUESTIONS_PER_BLOCK: usize = 40;
    pub const DEFAULT_TOTAL_BLOCKS: usize = 31;
}

// ********* Errors **********

/// Errors that prevent the reshaper from completing.
///
/// Per-cell anomalies are never errors: they degrade to `0` through the
/// cleaning rule and processing continues.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ReshapeErrors {
    /// The caller supplied metadata column names that are absent from the
    /// input header. Carries the missing names.
    MissingMetadataColumns(Vec<String>),
}

impl Error for ReshapeErrors {}

impl Display for ReshapeErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReshapeErrors::MissingMetadataColumns(cols) => {
                write!(f, "metadata columns not found in header: {}", cols.join(", "))
            }
        }
    }
}
