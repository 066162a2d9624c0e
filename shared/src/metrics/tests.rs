use super::*;
use crate::storage::tests::MemoryStore;

fn fresh(store: &MemoryStore) -> MetricsStore<&MemoryStore> {
    let metrics = MetricsStore::new(store, &SiteConfig::default());
    metrics.init().unwrap();
    metrics
}

#[test]
fn init_seeds_all_three_values() {
    let store = MemoryStore::new();
    let snapshot = fresh(&store).snapshot().unwrap();

    assert_eq!(store.raw(KEY_TOTAL_VISITS).as_deref(), Some("0"));
    assert_eq!(snapshot.total_visits, 0);
    for key in ["v1a_home", "about_me", "comments"] {
        assert_eq!(snapshot.views.get(key), Some(&0));
        assert_eq!(snapshot.likes.get(key), Some(&0));
    }
}

#[test]
fn init_never_overwrites_existing_data() {
    let store = MemoryStore::new();
    store.put_raw(KEY_TOTAL_VISITS, "12");
    store.put_raw(KEY_ARTICLE_VIEWS, r#"{"v1a_home":5}"#);

    let snapshot = fresh(&store).snapshot().unwrap();
    assert_eq!(snapshot.total_visits, 12);
    assert_eq!(snapshot.views.len(), 1);
    assert_eq!(snapshot.views_of("v1a_home"), 5);
    // likes 缺失，按默认值补齐
    assert_eq!(snapshot.likes.len(), 3);
}

#[test]
fn record_view_increments_only_that_key() {
    let store = MemoryStore::new();
    let metrics = fresh(&store);

    assert_eq!(metrics.record_view("v1a_home").unwrap(), 1);
    let snapshot = metrics.snapshot().unwrap();
    assert_eq!(snapshot.views_of("v1a_home"), 1);
    assert_eq!(snapshot.views_of("about_me"), 0);
    assert_eq!(snapshot.views_of("comments"), 0);
    assert_eq!(snapshot.likes_of("v1a_home"), 0);

    assert_eq!(metrics.record_view("v1a_home").unwrap(), 2);
    assert_eq!(metrics.snapshot().unwrap().views_of("v1a_home"), 2);
}

#[test]
fn record_like_creates_unknown_key() {
    let store = MemoryStore::new();
    let metrics = fresh(&store);

    assert_eq!(metrics.record_like("new_post").unwrap(), 1);
    let snapshot = metrics.snapshot().unwrap();
    assert_eq!(snapshot.likes_of("new_post"), 1);
    assert_eq!(snapshot.likes.len(), 4);
}

#[test]
fn increment_without_init_seeds_the_map() {
    let store = MemoryStore::new();
    let metrics = MetricsStore::new(&store, &SiteConfig::default());

    assert_eq!(metrics.record_view("about_me").unwrap(), 1);
    let snapshot = metrics.snapshot().unwrap();
    assert_eq!(snapshot.views.len(), 3);
    assert_eq!(snapshot.views_of("about_me"), 1);
}

#[test]
fn visits_count_up_from_stored_value() {
    let store = MemoryStore::new();
    let metrics = fresh(&store);
    assert_eq!(metrics.record_visit().unwrap(), 1);
    assert_eq!(metrics.record_visit().unwrap(), 2);
    assert_eq!(store.raw(KEY_TOTAL_VISITS).as_deref(), Some("2"));
}

#[test]
fn unparsable_visit_count_reads_as_zero() {
    let store = MemoryStore::new();
    store.put_raw(KEY_TOTAL_VISITS, "NaN");
    let metrics = fresh(&store);
    assert_eq!(metrics.total_visits().unwrap(), 0);
    assert_eq!(metrics.record_visit().unwrap(), 1);
}

#[test]
fn write_failure_is_reported() {
    let store = MemoryStore::new();
    let metrics = fresh(&store);
    store.fail_writes();
    assert!(matches!(
        metrics.record_like("about_me"),
        Err(StorageError::Write(_))
    ));
    assert_eq!(metrics.snapshot().unwrap().likes_of("about_me"), 0);
}
