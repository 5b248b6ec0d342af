//! snipstash-core: the collection-view engine behind the snipstash clipper.
//!
//! Captured web snippets are loaded as raw rows from an [`ItemSource`]
//! (a spreadsheet-shaped backing store) and exposed as a filtered,
//! paginated, stats-annotated projection. All list mutation goes through
//! [`CollectionView`]; presentation layers only ever receive owned
//! snapshots.

pub mod debounce;
mod domain;
mod engine;
mod error;
mod filter;
mod item;
mod page;
mod source;
mod stats;
pub mod suggest;
mod tags;

pub use domain::{site_of, UNKNOWN_SITE};
pub use engine::{CollectionView, LoadGen};
pub use error::{Error, Result};
pub use filter::{Criteria, DateRange, FilterPatch, ParseDateRangeError};
pub use item::{load_rows, CapturedItem, ItemId, RawRow, RowRef, UNTITLED};
pub use page::DEFAULT_PAGE_SIZE;
pub use source::{ItemSource, MemSource};
pub use stats::Stats;
pub use tags::derive_tags;
