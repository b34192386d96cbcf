//! The full conversion: N26 CSV parsing -> mapping -> YNAB CSV output.

use std::path::PathBuf;

use crate::{convert_transactions, read_transactions, write_transactions, Config, ConvertError};

/// Run a conversion, returning the path the YNAB CSV was written to. Nothing is written unless
/// every transaction was read and converted.
pub fn run(config: &Config) -> Result<PathBuf, ConvertError> {
    tracing::info!("Started conversion");

    let source = read_transactions(&config.input_path)?;
    let destination = convert_transactions(source)?;
    let output_path = config.resolved_output_path()?;
    write_transactions(&destination, &output_path)?;

    tracing::info!(
        "Finished conversion, wrote {} transactions to {}",
        destination.len(),
        output_path.display()
    );
    Ok(output_path)
}
