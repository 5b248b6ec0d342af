use snipstash_core::{
    CollectionView, Criteria, DateRange, FilterPatch, ItemSource, MemSource, RawRow, RowRef,
};
use std::sync::atomic::{AtomicBool, Ordering};
use time::{Duration, OffsetDateTime};

fn row(title: &str, tags: &str, date: &str) -> RawRow {
    RawRow {
        title: Some(title.into()),
        content: Some(format!("{title} body")),
        url: Some(format!("https://example.com/{}", title.replace(' ', "-"))),
        tags: Some(tags.into()),
        date: Some(date.into()),
        ..RawRow::default()
    }
}

/// Three captures dated today, yesterday, and 40 days ago.
fn seeded_view() -> CollectionView<MemSource> {
    let today = OffsetDateTime::now_utc().date();
    let yesterday = today - Duration::days(1);
    let old = today - Duration::days(40);
    let source = MemSource::new(vec![
        row("fresh", "a", &today.to_string()),
        row("recent", "a, b", &yesterday.to_string()),
        row("ancient", "c", &old.to_string()),
    ]);
    let mut view = CollectionView::new(source);
    view.reload().expect("reload");
    view
}

#[test]
fn week_and_tag_filters_narrow_the_view() {
    let mut view = seeded_view();
    assert_eq!(view.visible_items().len(), 3);

    view.set_filter(FilterPatch::default().range(Some(DateRange::Week)));
    let week = view.visible_items();
    assert_eq!(week.len(), 2);
    assert_eq!(week[0].title, "fresh");
    assert_eq!(week[1].title, "recent");

    view.set_filter(FilterPatch::default().tag(Some("a".into())));
    assert_eq!(view.visible_items().len(), 2);

    assert_eq!(view.tags(), ["a", "b", "c"]);
    let stats = view.stats();
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.total_tags, 3);
}

#[test]
fn visible_items_are_a_subset_of_the_store_by_id() {
    let mut view = seeded_view();
    view.set_filter(FilterPatch::default().search("e"));
    let visible = view.visible_items();
    assert!(visible.len() <= view.total_items());
    // Reapplying identical criteria yields the identical ordered result.
    let ids: Vec<_> = visible.iter().map(|i| i.id).collect();
    view.set_filter(FilterPatch::default().search("e"));
    let again: Vec<_> = view.visible_items().iter().map(|i| i.id).collect();
    assert_eq!(ids, again);
}

#[test]
fn clearing_a_criterion_restores_the_full_view() {
    let mut view = seeded_view();
    view.set_filter(FilterPatch::default().tag(Some("c".into())));
    assert_eq!(view.visible_items().len(), 1);
    view.set_filter(FilterPatch::default().tag(None));
    assert_eq!(view.visible_items().len(), 3);
}

#[test]
fn patch_only_touches_named_fields() {
    let mut view = seeded_view();
    view.set_filter(
        FilterPatch::default()
            .search("recent")
            .range(Some(DateRange::Week)),
    );
    view.set_filter(FilterPatch::default().tag(Some("a".into())));
    assert_eq!(
        view.criteria(),
        &Criteria {
            search: "recent".into(),
            tag: Some("a".into()),
            range: Some(DateRange::Week),
        }
    );
    assert_eq!(view.visible_items().len(), 1);
}

struct FlakySource {
    inner: MemSource,
    fail_lists: AtomicBool,
}

impl ItemSource for FlakySource {
    fn list_rows(&self) -> anyhow::Result<Vec<RawRow>> {
        if self.fail_lists.load(Ordering::SeqCst) {
            anyhow::bail!("backing store unavailable");
        }
        self.inner.list_rows()
    }

    fn delete_row(&self, row: RowRef) -> anyhow::Result<()> {
        self.inner.delete_row(row)
    }
}

#[test]
fn failed_reload_keeps_the_last_loaded_data_visible() {
    let today = OffsetDateTime::now_utc().date().to_string();
    let source = FlakySource {
        inner: MemSource::new(vec![row("keeper", "a", &today)]),
        fail_lists: AtomicBool::new(false),
    };
    let mut view = CollectionView::new(source);
    view.reload().expect("first reload");
    assert_eq!(view.visible_items().len(), 1);

    view.source().fail_lists.store(true, Ordering::SeqCst);
    let err = view.reload().expect_err("second reload must fail");
    assert!(matches!(err, snipstash_core::Error::Load { .. }));
    assert_eq!(view.visible_items().len(), 1);
    assert_eq!(view.stats().total_items, 1);
}
