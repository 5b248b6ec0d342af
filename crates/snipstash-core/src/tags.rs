use crate::item::CapturedItem;
use std::collections::BTreeSet;

/// Every tag appearing in any item, deduplicated, ascending lexicographic.
///
/// Always derived from the full collection rather than the filtered view,
/// so filter choices stay comprehensive regardless of the active filter.
pub fn derive_tags(items: &[CapturedItem]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for item in items {
        for tag in &item.tags {
            set.insert(tag.clone());
        }
    }
    set.into_iter().collect()
}
