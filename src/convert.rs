use log::{info, warn};

use sheet_reshape::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::Write;
use std::path::Path;

use text_diff::print_diff;

use crate::args::Args;

pub mod io_csv;
pub mod io_excel;

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display("Unsupported file type: {path}"))]
    UnsupportedFormat { path: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No usable worksheet in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing CSV line"))]
    CsvLineParse { source: csv::Error },
    #[snafu(display("Error writing the output CSV"))]
    CsvWrite { source: csv::Error },
    #[snafu(display("Error writing the output to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading the reference file {path}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Turns the raw command line arguments into validated reshaping options.
fn validate_options(args: &Args) -> ConvertResult<ReshapeOptions> {
    let metadata_cols: Vec<String> = args
        .metadata_cols
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    if metadata_cols.is_empty() {
        whatever!("at least one metadata column name is required");
    }
    if args.questions_per_block < 1 {
        whatever!("questions-per-block must be at least 1");
    }
    if args.total_blocks < 1 {
        whatever!("total-blocks must be at least 1");
    }
    let case_mode = match args.case_mode.as_str() {
        "normal" => CaseMode::Normal,
        "kdmc" => CaseMode::Kdmc,
        x => {
            whatever!("unknown case mode: {:?} (expected 'normal' or 'kdmc')", x)
        }
    };
    Ok(ReshapeOptions {
        metadata_cols,
        questions_per_block: args.questions_per_block,
        total_blocks: args.total_blocks,
        case_mode,
    })
}

/// Loads the input table, dispatching on the file extension.
fn load_table(path: &str, worksheet_name: Option<&str>) -> ConvertResult<SheetTable> {
    info!("Attempting to read input file {:?}", path);
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => io_csv::read_csv_table(path),
        Some("xlsx") | Some("xls") => io_excel::read_excel_table(path, worksheet_name),
        _ => Err(ConvertError::UnsupportedFormat {
            path: path.to_string(),
        }),
    }
}

pub fn run_conversion(args: &Args) -> ConvertResult<()> {
    let options = validate_options(args)?;
    let table = load_table(&args.input, args.excel_worksheet_name.as_deref())?;
    info!(
        "Loaded {} rows x {} columns from {:?}",
        table.rows.len(),
        table.columns.len(),
        args.input
    );

    let reshaped = match reshape(&table, &options) {
        Result::Ok(t) => t,
        Result::Err(e) => {
            whatever!("Reshape error: {}", e)
        }
    };
    info!("Reshaped into {} rows", reshaped.rows.len());

    let bytes = io_csv::write_csv_bytes(&reshaped)?;

    match args.out.as_deref() {
        None | Some("stdout") => {
            std::io::stdout()
                .write_all(&bytes)
                .context(WritingOutputSnafu {
                    path: "stdout".to_string(),
                })?;
        }
        Some(p) => {
            fs::write(p, &bytes).context(WritingOutputSnafu {
                path: p.to_string(),
            })?;
            info!("Wrote {} rows to {:?}", reshaped.rows.len(), p);
        }
    }

    // The reference output, if provided for comparison
    if let Some(ref_path) = &args.reference {
        let reference = fs::read_to_string(ref_path).context(OpeningReferenceSnafu {
            path: ref_path.clone(),
        })?;
        let reference = reference.replace("\r\n", "\n");
        let produced = String::from_utf8_lossy(&bytes).to_string();
        if reference != produced {
            warn!("Found differences with the reference file");
            print_diff(reference.as_str(), produced.as_str(), "\n");
            whatever!("Difference detected between converted output and reference file")
        }
    }

    Ok(())
}
