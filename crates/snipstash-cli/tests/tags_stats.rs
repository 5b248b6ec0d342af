mod common;
use common::TestEnv;

#[test]
fn tags_prints_the_sorted_dedup_index() {
    let t = TestEnv::new();
    t.add("one", &["--tags", "zebra, apple"]);
    t.add("two", &["--tags", "apple, mango"]);

    let out = t.stdout_of(&["tags"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["apple", "mango", "zebra"]);
}

#[test]
fn stats_json_counts_items_tags_and_websites() {
    let t = TestEnv::new();
    t.add("a", &["--tags", "x", "--url", "https://site-a.example.com/1"]);
    t.add("b", &["--tags", "x, y", "--url", "https://site-a.example.com/2"]);
    t.add("c", &["--url", "not a real url"]);

    let out = t.stdout_of(&["stats", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["totalItems"], 3);
    assert_eq!(v["totalTags"], 2);
    // site-a plus the shared Unknown bucket.
    assert_eq!(v["uniqueWebsites"], 2);
    // `add` stamps today's date by default.
    assert_eq!(v["thisMonth"], 3);
}

#[test]
fn suggest_tags_merges_keyword_suggestions_into_the_row() {
    let t = TestEnv::new();
    t.add(
        "A rust borrow checker tutorial",
        &["--tags", "notes", "--suggest-tags"],
    );
    let out = t.stdout_of(&["tags"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["learning", "notes", "programming"]);
}

#[test]
fn suggest_command_reports_matches_and_misses() {
    let t = TestEnv::new();
    let out = t.stdout_of(&["suggest", "a sourdough recipe from github.com"]);
    assert_eq!(out.trim(), "cooking, code");
    let out = t.stdout_of(&["suggest", "nothing matches here"]);
    assert_eq!(out.trim(), "(no suggestions)");
}
