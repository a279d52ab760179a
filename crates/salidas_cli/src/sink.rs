//! Download sinks for produced artifacts.

use std::fs;
use std::path::PathBuf;

use salidas_report::SpecArtifact;
use tracing::info;

use crate::error::CliError;

/// Destination for artifact bytes. Shared across export workers.
pub trait ArtifactSink: Sync {
    /// Deliver one artifact under its own file name; returns where it went.
    fn deliver(&self, artifact: &SpecArtifact) -> Result<PathBuf, CliError>;
}

/// Writes `<dir>/<file_name>`, replacing an existing file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    path_dir: PathBuf,
}

impl DirectorySink {
    pub fn new(path_dir: impl Into<PathBuf>) -> Self {
        Self {
            path_dir: path_dir.into(),
        }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: &SpecArtifact) -> Result<PathBuf, CliError> {
        fs::create_dir_all(&self.path_dir).map_err(|source| CliError::Io {
            path: self.path_dir.clone(),
            source,
        })?;
        let path_file = self.path_dir.join(&artifact.file_name);
        fs::write(&path_file, &artifact.bytes).map_err(|source| CliError::Io {
            path: path_file.clone(),
            source,
        })?;

        info!(path = %path_file.display(), n_bytes = artifact.bytes.len(), "wrote artifact");
        Ok(path_file)
    }
}
