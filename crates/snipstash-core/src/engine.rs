use crate::error::{Error, Result};
use crate::filter::{self, Criteria, FilterPatch};
use crate::item::{self, CapturedItem, ItemId, RawRow};
use crate::page::{PageWindow, DEFAULT_PAGE_SIZE};
use crate::source::ItemSource;
use crate::stats::{self, Stats};
use crate::tags;
use time::OffsetDateTime;
use tracing::debug;

/// Token identifying one issued load. Results arriving with an older token
/// than the most recently issued one are discarded, so a slow first load
/// can never clobber the result of a reload started after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGen(u64);

/// The collection-view engine: owns the authoritative in-memory list of
/// captured items plus every derived view (tag index, statistics, filtered
/// ids, pagination window), and keeps them mutually consistent across
/// loads, filter changes, and deletes.
///
/// Single-writer by construction: every mutation runs to completion under
/// `&mut self`, so observers can never see a statistics snapshot computed
/// against a store that no longer matches the tag index.
pub struct CollectionView<S> {
    source: S,
    items: Vec<CapturedItem>,
    tag_index: Vec<String>,
    stats: Stats,
    criteria: Criteria,
    filtered: Vec<ItemId>,
    page: PageWindow,
    issued: u64,
}

impl<S: ItemSource> CollectionView<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: S, page_size: usize) -> Self {
        Self {
            source,
            items: Vec::new(),
            tag_index: Vec::new(),
            stats: Stats::default(),
            criteria: Criteria::default(),
            filtered: Vec::new(),
            page: PageWindow::new(page_size),
            issued: 0,
        }
    }

    /// Fetch the backing rows and replace the collection wholesale. On
    /// source failure the last successfully loaded data stays visible.
    pub fn reload(&mut self) -> Result<()> {
        let gen = self.begin_load();
        let rows = self
            .source
            .list_rows()
            .map_err(|cause| Error::Load { cause })?;
        self.apply_rows(gen, rows);
        Ok(())
    }

    /// Start a load without fetching. Event-driven front ends that fetch
    /// rows off the UI loop pair this with [`Self::apply_rows`].
    pub fn begin_load(&mut self) -> LoadGen {
        self.issued += 1;
        LoadGen(self.issued)
    }

    /// Apply rows fetched for `gen`. Returns `false` (and changes nothing)
    /// when a newer load has been issued since: only the most recently
    /// issued load's result ever reaches the collection.
    pub fn apply_rows(&mut self, gen: LoadGen, rows: Vec<RawRow>) -> bool {
        if gen.0 != self.issued {
            debug!(gen = gen.0, newest = self.issued, "discarding superseded load");
            return false;
        }
        let count = rows.len();
        let today = OffsetDateTime::now_utc().date();
        self.items = item::load_rows(rows, self.source.row_base(), today);
        self.resync();
        debug!(count, "collection loaded");
        true
    }

    /// Apply a partial criteria update. The pagination window is reset in
    /// the same operation, so a previous filter's revealed count never
    /// leaks into the new result.
    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.criteria.apply_patch(patch);
        let now = OffsetDateTime::now_utc();
        self.filtered = filter::apply(&self.items, &self.criteria, now);
        self.page.reset(self.filtered.len());
    }

    /// Reveal the next page of the filtered view.
    pub fn load_more(&mut self) {
        self.page.load_more(self.filtered.len());
    }

    /// The currently revealed prefix of the filtered view, as an owned
    /// snapshot in store order.
    pub fn visible_items(&self) -> Vec<CapturedItem> {
        self.filtered
            .iter()
            .take(self.page.revealed())
            .filter_map(|id| self.item(*id))
            .cloned()
            .collect()
    }

    /// Delete one item by identity, translate it to the backing store's
    /// positional reference, and resynchronize every derived view while
    /// preserving the active filter selections.
    pub fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return Err(Error::NotFound(id));
        };
        let row = self.items[pos].row;
        self.source
            .delete_row(row)
            .map_err(|cause| Error::DeleteFailed { row, cause })?;
        self.items.remove(pos);
        // Backing positions above the removed row shift down by one;
        // re-derive the refs so a follow-up delete hits the right row.
        for item in &mut self.items {
            if item.row.0 > row.0 {
                item.row.0 -= 1;
            }
        }
        self.resync();
        debug!(%id, %row, "item deleted");
        Ok(())
    }

    pub fn tags(&self) -> &[String] {
        &self.tag_index
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Number of items in the full (unfiltered) collection.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Length of the filtered view, ignoring pagination.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn item(&self, id: ItemId) -> Option<&CapturedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Recompute every derived view from the current collection in one
    /// step: tag index and stats over the full store, then the filtered
    /// view under the active criteria, then the pagination reset.
    fn resync(&mut self) {
        let now = OffsetDateTime::now_utc();
        self.tag_index = tags::derive_tags(&self.items);
        self.stats = stats::compute(&self.items, now);
        self.filtered = filter::apply(&self.items, &self.criteria, now);
        self.page.reset(self.filtered.len());
    }
}
