use clap::Parser;

/// Converts wide-format OSCAN answer-sheet exports into standard long-format data.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The scanned-answer-sheet export to convert. CSV and Excel (.xlsx, .xls) files
    /// are supported, selected by file extension.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (file path, 'stdout' or empty) Where the converted table is written in CSV format.
    /// Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (list of comma-separated column names) The leading columns that identify a respondent.
    /// They must exist in the input header and are copied unchanged into every generated row.
    #[clap(
        long,
        value_parser,
        default_value = "S.No,File,UDISECODE,TotalStudents,Class,Category"
    )]
    pub metadata_cols: String,

    /// (positive integer) Number of consecutive answer cells per question block.
    #[clap(long, value_parser, default_value_t = 40)]
    pub questions_per_block: usize,

    /// (positive integer) Total number of question blocks sliced out of the answer cells.
    #[clap(long, value_parser, default_value_t = 31)]
    pub total_blocks: usize,

    /// ('normal' or 'kdmc') The rule that decides how many rows a respondent expands to.
    /// See the documentation for the kdmc special case.
    #[clap(long, value_parser, default_value = "normal")]
    pub case_mode: String,

    /// (default first sheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path) A reference CSV containing the expected output. If provided, oscanconv will
    /// check that the converted output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
