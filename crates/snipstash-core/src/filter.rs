use crate::item::{CapturedItem, ItemId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use time::{Duration, OffsetDateTime};

/// Date window for the range filter. `Week` is the trailing 7×24h from now
/// (inclusive lower bound), not calendar-week aligned; `Today` and `Month`
/// compare calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
}

#[derive(Debug, Error)]
#[error("expected today, week, or month (got {0:?})")]
pub struct ParseDateRangeError(String);

impl FromStr for DateRange {
    type Err = ParseDateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(ParseDateRangeError(other.to_string())),
        }
    }
}

/// The active filter selections. Empty search and unset tag/range match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub tag: Option<String>,
    pub range: Option<DateRange>,
}

/// Partial update to [`Criteria`]; fields left unset keep their current
/// value. Built with the chaining methods below.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub(crate) search: Option<String>,
    pub(crate) tag: Option<Option<String>>,
    pub(crate) range: Option<Option<DateRange>>,
}

impl FilterPatch {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn range(mut self, range: Option<DateRange>) -> Self {
        self.range = Some(range);
        self
    }
}

impl Criteria {
    pub(crate) fn apply_patch(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag.filter(|t| !t.is_empty());
        }
        if let Some(range) = patch.range {
            self.range = range;
        }
    }
}

/// Run the filter pipeline over the full collection. Pure and
/// order-preserving: the result keeps the store's relative ordering and is
/// always a subset of it. Malformed urls or dates never raise; an
/// unparsable date just matches no range.
pub fn apply(items: &[CapturedItem], criteria: &Criteria, now: OffsetDateTime) -> Vec<ItemId> {
    let needle = criteria.search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(item, &needle))
        .filter(|item| matches_tag(item, criteria.tag.as_deref()))
        .filter(|item| matches_range(item, criteria.range, now))
        .map(|item| item.id)
        .collect()
}

fn matches_search(item: &CapturedItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.content.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

fn matches_tag(item: &CapturedItem, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => item.tags.iter().any(|have| have == tag),
    }
}

fn matches_range(item: &CapturedItem, range: Option<DateRange>, now: OffsetDateTime) -> bool {
    let Some(range) = range else { return true };
    let Some(date) = item.parsed_date() else {
        return false;
    };
    match range {
        DateRange::Today => date == now.date(),
        DateRange::Week => date.midnight().assume_utc() >= now - Duration::days(7),
        DateRange::Month => {
            date.year() == now.date().year() && date.month() == now.date().month()
        }
    }
}
