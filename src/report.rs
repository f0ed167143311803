use crate::{
    error::FatalError,
    inventory::{LoadSummary, OutputFormat, UpdateSummary},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{fs::File, io::Write, path::{Path, PathBuf}};

/// Summary of one load/update/persist run, written as JSON on request.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub inventory_path: PathBuf,
    pub deliveries_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub loaded: usize,
    pub skipped_on_load: usize,
    pub books_after_load: usize,
    pub deliveries_applied: usize,
    pub books_added: usize,
    pub skipped_on_update: usize,
    pub books_after_update: usize,
    pub search_iterations: usize,
}

impl RunReport {
    pub fn new(
        paths: (&Path, &Path, &Path),
        format: OutputFormat,
        load: LoadSummary,
        books_after_load: usize,
        update: UpdateSummary,
        books_after_update: usize,
    ) -> Self {
        let (inventory_path, deliveries_path, output_path) = paths;
        RunReport {
            generated_at: Utc::now(),
            inventory_path: inventory_path.to_path_buf(),
            deliveries_path: deliveries_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            format,
            loaded: load.loaded,
            skipped_on_load: load.skipped,
            books_after_load,
            deliveries_applied: update.restocked,
            books_added: update.added,
            skipped_on_update: update.skipped,
            books_after_update,
            search_iterations: update.iterations,
        }
    }

    pub fn save_as(&self, path: &Path) -> Result<(), FatalError> {
        let failed = |message: String| FatalError::ReportFailed(path.to_path_buf(), message);
        let json = serde_json::to_string_pretty(self).map_err(|e| failed(e.to_string()))?;
        let mut file = File::create(path).map_err(|e| failed(e.to_string()))?;
        file.write_all(json.as_bytes())
            .map_err(|e| failed(e.to_string()))
    }
}
