use anyhow::{Context, Result};
use snipstash_core::{ItemSource, RawRow, RowRef};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `ItemSource` over a JSON array of raw rows on disk — the demo stand-in
/// for the spreadsheet backing store. A missing file reads as an empty
/// library; a stale positional reference is a delete error.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_rows(&self) -> Result<Vec<RawRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(rows)?)
            .with_context(|| format!("writing {}", self.path.display()))
    }

    pub fn append(&self, row: RawRow) -> Result<()> {
        let mut rows = self.read_rows()?;
        rows.push(row);
        debug!(rows = rows.len(), path = %self.path.display(), "library appended");
        self.write_rows(&rows)
    }
}

impl ItemSource for JsonFileSource {
    fn list_rows(&self) -> Result<Vec<RawRow>> {
        self.read_rows()
    }

    fn delete_row(&self, row: RowRef) -> Result<()> {
        let mut rows = self.read_rows()?;
        anyhow::ensure!(
            row.0 < rows.len(),
            "row {row} is not in the library (stale reference?)"
        );
        rows.remove(row.0);
        self.write_rows(&rows)
    }
}
