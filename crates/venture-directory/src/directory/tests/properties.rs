use super::common::*;
use crate::directory::{run, DirectoryQuery};

#[test]
fn second_page_of_ten_records_holds_one_item() {
    let records = numbered(10);
    let query = DirectoryQuery::new().page(2);

    let page = run(&SAMPLE_SCHEMA, &records, &query);

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "n9");
}

#[test]
fn equal_ratings_keep_input_order() {
    let mut records = numbered(4);
    records[1].rating = Some(4.8);
    records[1].id = "x".to_string();
    records[3].rating = Some(4.8);
    records[3].id = "y".to_string();

    let page = run(&SAMPLE_SCHEMA, &records, &DirectoryQuery::new().sort_by("rating", None));

    assert_eq!(ids(page.items.iter().copied().take(2)), vec!["x", "y"]);
}

#[test]
fn stability_holds_for_every_tie_under_name_sort() {
    let mut records = numbered(6);
    for record in &mut records {
        record.name = "Same Name".to_string();
    }

    let page = run(&SAMPLE_SCHEMA, &records, &DirectoryQuery::new().sort_by("name", None));

    assert_eq!(
        ids(page.items),
        vec!["n0", "n1", "n2", "n3", "n4", "n5"]
    );
}

#[test]
fn empty_collection_yields_single_empty_page() {
    let records: Vec<Sample> = Vec::new();
    let query = DirectoryQuery::new()
        .search("anything")
        .sort_by("rating", None)
        .page(7);

    let page = run(&SAMPLE_SCHEMA, &records, &query);

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.total_matches, 0);
}

#[test]
fn identical_queries_produce_identical_pages() {
    let records = roster();
    let query = DirectoryQuery::new()
        .filter("tags", ["Climate", "Fintech", "Edtech"])
        .sort_by("rating", None);

    let first = run(&SAMPLE_SCHEMA, &records, &query);
    let second = run(&SAMPLE_SCHEMA, &records, &query);

    assert_eq!(first, second);
}

#[test]
fn clamped_page_stays_within_bounds_for_any_request() {
    let records = numbered(25);
    for requested in [-10, -1, 0, 1, 2, 3, 4, 50, i64::MAX, i64::MIN] {
        let page = run(&SAMPLE_SCHEMA, &records, &DirectoryQuery::new().page(requested));
        assert!(page.page >= 1 && page.page <= page.total_pages, "page {requested}");
        assert!(page.items.len() <= SAMPLE_SCHEMA.page_size, "page {requested}");
    }
}

#[test]
fn adding_filters_never_grows_the_match_count() {
    let records = roster();
    let base = DirectoryQuery::new().search("a");
    let base_count = run(&SAMPLE_SCHEMA, &records, &base).total_matches;

    let narrowed = [
        base.clone().filter("city", ["Nairobi"]),
        base.clone().filter("tags", ["Climate"]),
        base.clone().flag("verified", true),
        base.clone().flag("featured", true),
        base.clone().filter("city", ["Nairobi"]).flag("verified", true),
    ];

    for query in narrowed {
        let count = run(&SAMPLE_SCHEMA, &records, &query).total_matches;
        assert!(count <= base_count, "{query:?} grew matches to {count}");
    }
}
