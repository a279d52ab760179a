//! `salidas` command-line front end: JSON record store, directory sink and
//! the `summary` / `export` commands over `salidas_report`.
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod sink;
pub mod store;

pub use commands::{SpecExportOutcome, run_export, run_summary};
pub use error::CliError;
pub use sink::{ArtifactSink, DirectorySink};
pub use store::{JsonFileStore, RecordStore};
