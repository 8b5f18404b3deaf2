use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageStatsError {
    #[error("Can't open coverage file {path:?}: {source}")]
    FileRead { path: PathBuf, source: io::Error },

    #[error("Malformed line {line_number} in {path:?}: {reason}")]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        reason: String,
    },

    #[error("No coverage records found in {0:?}; mean and median are undefined")]
    EmptyInput(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
