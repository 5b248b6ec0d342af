use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

/// Title shown for captures whose source row carried none.
pub const UNTITLED: &str = "Untitled";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Stable identity of an item within one load of the collection.
///
/// Assigned as the zero-based position in the loaded list; a fresh load may
/// reassign ids, but within one load they never change, so delete-by-id is
/// unambiguous even while the display order shifts under filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Positional handle into the backing store. Only the deletion path uses
/// it; it is never shown to the user and never reused across a delete
/// without re-derivation (positions shift).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRef(pub usize);

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One sparse record as the backing store hands it over. Every field is
/// optional; `tags` is the comma-joined form stored in the sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One captured snippet, normalized for the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedItem {
    pub id: ItemId,
    #[serde(skip)]
    pub row: RowRef,
    pub title: String,
    pub content: String,
    pub url: String,
    pub tags: Vec<String>,
    /// ISO calendar date as a display string. Unparsable values are kept
    /// verbatim and simply never match a date-range filter.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CapturedItem {
    /// Calendar date of the capture, when the stored string parses.
    pub fn parsed_date(&self) -> Option<Date> {
        parse_date(&self.date)
    }
}

/// Normalize raw backing rows into captured items.
///
/// Never fails on a malformed row; each field degrades on its own.
/// `row_base` is the backing position of the first data row (a sheet with a
/// 1-indexed header row passes 2), `today` fills in absent dates.
pub fn load_rows(rows: Vec<RawRow>, row_base: usize, today: Date) -> Vec<CapturedItem> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| CapturedItem {
            id: ItemId(i as u32),
            row: RowRef(i + row_base),
            title: row
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            content: row.content.unwrap_or_default(),
            url: row.url.unwrap_or_default(),
            tags: split_tags(row.tags.as_deref().unwrap_or("")),
            date: row
                .date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| today.to_string()),
            image: row.image.filter(|u| !u.trim().is_empty()),
        })
        .collect()
}

/// Split a comma-joined tag field, trimming and dropping empties.
/// Duplicates within one item are preserved; only the cross-item tag index
/// deduplicates.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_date(raw: &str) -> Option<Date> {
    // Accept a bare date or a full timestamp by looking at the date part.
    let head = raw.get(..10).unwrap_or(raw);
    Date::parse(head, DATE_FORMAT).ok()
}
