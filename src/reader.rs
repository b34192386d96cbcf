//! Read N26 CSV exports into [SourceTransaction] values.

use std::path::Path;

use crate::{ConvertError, ParseError, SourceTransaction, SOURCE_FIELD_COUNT};

/// The CSV reader configuration used for N26 exports. The header row is skipped without being
/// checked, and field counts are validated per row instead of by the reader.
pub fn configured_csv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Parse every data row of an N26 export, in file order. A single malformed row fails the whole
/// read.
pub fn parse_transactions<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Vec<SourceTransaction>, ParseError> {
    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != SOURCE_FIELD_COUNT {
            return Err(ParseError::FieldCount {
                line: record.position().map_or(0, |pos| pos.line()),
                found: record.len(),
            });
        }
        transactions.push(record.deserialize(None)?);
    }
    Ok(transactions)
}

/// Read the N26 export found at `path`.
pub fn read_transactions(path: &Path) -> Result<Vec<SourceTransaction>, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    tracing::info!("Trying to parse input file {}", path.display());
    let mut reader = configured_csv_reader_builder()
        .from_path(path)
        .map_err(ParseError::from)?;
    let transactions = parse_transactions(&mut reader)?;
    tracing::info!("Found {} N26 transactions", transactions.len());

    Ok(transactions)
}
