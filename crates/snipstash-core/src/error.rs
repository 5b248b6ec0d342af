use crate::item::{ItemId, RowRef};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by [`crate::CollectionView`]. Per-field malformation
/// (bad url, unparsable date) is never an error: those degrade locally at
/// load time and the item stays in the collection.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing store's row listing could not be fetched or decoded.
    /// The previously loaded collection stays intact.
    #[error("failed to load rows from the backing store: {cause}")]
    Load { cause: anyhow::Error },

    /// Delete requested for an id that is no longer in the collection,
    /// which legitimately happens when two deletes race on the same id.
    #[error("item {0} is not in the collection")]
    NotFound(ItemId),

    /// The backing store rejected a positional delete (stale reference or
    /// sink failure). The collection and every derived view are unchanged.
    #[error("backing store rejected delete of row {row}: {cause}")]
    DeleteFailed { row: RowRef, cause: anyhow::Error },
}
