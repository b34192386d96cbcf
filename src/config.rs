//! Configuration of a conversion run.

use std::path::PathBuf;

use crate::{default_output_path, ConvertError, DEFAULT_SUFFIX};

/// What to convert, and where to write it. Resolved once from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: Option<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path,
        }
    }

    /// The explicit output path if one was given, otherwise one derived from the input path.
    pub fn resolved_output_path(&self) -> Result<PathBuf, ConvertError> {
        match &self.output_path {
            Some(path) => Ok(path.clone()),
            None => {
                let path = default_output_path(&self.input_path, DEFAULT_SUFFIX)?;
                tracing::info!("No output file specified, using: {}", path.display());
                Ok(path)
            }
        }
    }
}
