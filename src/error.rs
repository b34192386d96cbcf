//! Error types for this crate.
use std::path::PathBuf;

use thiserror::Error;

/// Any kind of error that can happen when deserializing a [crate::SourceTransaction] value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {} fields, found {found}", crate::SOURCE_FIELD_COUNT)]
    FieldCount { line: u64, found: usize },
}

/// A [crate::SourceTransaction] that cannot be mapped to a [crate::DestinationTransaction].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("foreign currency transaction in '{currency}' is missing its {missing}")]
    IncompleteForeignLeg {
        currency: String,
        missing: &'static str,
    },
}

/// Any kind of error in the pipeline N26 CSV parsing -> mapping -> YNAB CSV output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not find input file '{}'", .0.display())]
    InputNotFound(PathBuf),
    #[error("could not read or parse input file: {0}")]
    ParseFailure(#[from] ParseError),
    #[error("transaction {row}: {source}")]
    InvalidRecordState { row: usize, source: MapError },
    #[error("cannot derive an output path from an empty input path")]
    InvalidInputPath,
    #[error("could not write output file '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}
