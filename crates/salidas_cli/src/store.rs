//! Record stores feeding the report pipeline.

use std::fs;
use std::path::PathBuf;

use salidas_report::{SpecMaterialExit, order_by_created_desc};
use tracing::debug;

use crate::error::CliError;

/// Source of the full, unfiltered exit collection.
pub trait RecordStore {
    /// All exits, newest `createdAt` first.
    fn fetch_exits(&self) -> Result<Vec<SpecMaterialExit>, CliError>;
}

/// Store backed by a JSON array of camelCase exit objects.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path_file: PathBuf,
}

impl JsonFileStore {
    pub fn new(path_file: impl Into<PathBuf>) -> Self {
        Self {
            path_file: path_file.into(),
        }
    }
}

impl RecordStore for JsonFileStore {
    fn fetch_exits(&self) -> Result<Vec<SpecMaterialExit>, CliError> {
        let v_bytes = fs::read(&self.path_file).map_err(|source| CliError::Io {
            path: self.path_file.clone(),
            source,
        })?;
        let mut records: Vec<SpecMaterialExit> =
            serde_json::from_slice(&v_bytes).map_err(|source| CliError::Json {
                path: self.path_file.clone(),
                source,
            })?;
        order_by_created_desc(&mut records);

        debug!(
            path = %self.path_file.display(),
            n_records = records.len(),
            "loaded material exits"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_and_orders_newest_first() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[
                {{"id":"old","exitDate":"2024-01-02","exitTime":"08:00","materialType":"ERSA",
                 "materialCode":"A","materialName":"A","materialLocation":"L","quantity":1,
                 "remainingStock":1,"personName":"P","personLastName":"Q","area":"X",
                 "createdAt":"2024-01-02T08:00:00Z"}},
                {{"id":"new","exitDate":"2024-01-03","exitTime":"08:00","materialType":"UNBW",
                 "materialCode":"B","materialName":"B","materialLocation":"L","quantity":2,
                 "remainingStock":0,"personName":"P","personLastName":"Q","area":"X",
                 "createdAt":"2024-01-03T08:00:00Z"}}
            ]"#
        )
        .expect("write");

        let records = JsonFileStore::new(file.path()).fetch_exits().expect("fetch");
        let l_ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(l_ids, vec!["new", "old"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = JsonFileStore::new(dir.path().join("nope.json")).fetch_exits();
        assert!(matches!(result, Err(CliError::Io { .. })));
    }

    #[test]
    fn bad_json_is_json_error() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"not": "an array"}}"#).expect("write");
        let result = JsonFileStore::new(file.path()).fetch_exits();
        assert!(matches!(result, Err(CliError::Json { .. })));
    }
}
