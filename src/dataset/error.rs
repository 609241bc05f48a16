//! Error handling for dataset loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file does not exist.
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file extension is not a spreadsheet or CSV format.
    #[error("Unsupported dataset format `{extension}` for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook could not be opened or parsed.
    #[error("Failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no worksheet to read.
    #[error("Workbook {} contains no worksheets", path.display())]
    NoWorksheet { path: PathBuf },

    /// The CSV file could not be parsed.
    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks a required column.
    #[error("Required column `{column}` is missing from the dataset header")]
    MissingColumn { column: String },

    /// A data row has no sentiment label.
    #[error("Row {row} has an empty `{column}` value")]
    EmptySentiment { row: usize, column: String },
}
