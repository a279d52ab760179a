//! CLI-level errors.

use std::io;
use std::path::PathBuf;

use salidas_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the record store or writing an artifact failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The record store is not a JSON array of material exits.
    #[error("invalid record file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
    /// Every requested category came back empty.
    #[error("nothing exported: {0}")]
    NothingExported(String),
}
