use crate::domain::site_of;
use crate::item::CapturedItem;
use crate::tags::derive_tags;
use serde::Serialize;
use std::collections::HashSet;
use time::OffsetDateTime;

/// Summary counts over the full (unfiltered) collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_items: usize,
    pub total_tags: usize,
    /// Items whose date falls in the current calendar month and year.
    pub this_month: usize,
    /// Distinct hostnames; every malformed url shares one "Unknown" bucket.
    pub unique_websites: usize,
}

pub fn compute(items: &[CapturedItem], now: OffsetDateTime) -> Stats {
    let today = now.date();
    let sites: HashSet<String> = items.iter().map(|item| site_of(&item.url)).collect();
    let this_month = items
        .iter()
        .filter(|item| {
            item.parsed_date()
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
        })
        .count();
    Stats {
        total_items: items.len(),
        total_tags: derive_tags(items).len(),
        this_month,
        unique_websites: sites.len(),
    }
}
