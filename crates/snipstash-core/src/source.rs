use crate::item::{RawRow, RowRef};
use std::sync::RwLock;

/// Abstract backing store for captured rows. The production system backs
/// this with the Sheets HTTP client; tests and the demo CLI use in-memory
/// and file-backed implementations. Implementations use interior
/// mutability so a shared source can serve reads and deletes.
pub trait ItemSource: Send + Sync {
    /// Fetch the full current backing list.
    fn list_rows(&self) -> anyhow::Result<Vec<RawRow>>;

    /// Remove the row at the given position. Fails when the reference is
    /// stale (row already removed or shifted by another client).
    fn delete_row(&self, row: RowRef) -> anyhow::Result<()>;

    /// Backing position of the first data row. A sheet that keeps a
    /// 1-indexed header row returns 2.
    fn row_base(&self) -> usize {
        0
    }
}

/// In-memory source for tests and simulator-style front ends.
#[derive(Default)]
pub struct MemSource {
    rows: RwLock<Vec<RawRow>>,
    row_base: usize,
}

impl MemSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            row_base: 0,
        }
    }

    pub fn with_row_base(rows: Vec<RawRow>, row_base: usize) -> Self {
        Self {
            rows: RwLock::new(rows),
            row_base,
        }
    }

    pub fn push(&self, row: RawRow) {
        self.rows.write().expect("poisoned").push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.read().expect("poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemSource for MemSource {
    fn list_rows(&self) -> anyhow::Result<Vec<RawRow>> {
        Ok(self.rows.read().expect("poisoned").clone())
    }

    fn delete_row(&self, row: RowRef) -> anyhow::Result<()> {
        let mut rows = self.rows.write().expect("poisoned");
        let idx = row
            .0
            .checked_sub(self.row_base)
            .filter(|i| *i < rows.len())
            .ok_or_else(|| anyhow::anyhow!("row {} is not in the backing list", row))?;
        rows.remove(idx);
        Ok(())
    }

    fn row_base(&self) -> usize {
        self.row_base
    }
}
