//! Save endpoint that appends one JSON object per line to a file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::arrangement::ArrangementParams;

use super::{Result, SaveEndpoint};

pub struct JsonLinesSaveEndpoint {
    path: PathBuf,
}

impl JsonLinesSaveEndpoint {
    /// The file and its parent directories are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveEndpoint for JsonLinesSaveEndpoint {
    fn save(&mut self, params: &ArrangementParams) -> Result<()> {
        let mut line = serde_json::to_string(params)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        info!(
            record_id = params.record_id,
            path = %self.path.display(),
            "arrangement saved"
        );
        Ok(())
    }
}
