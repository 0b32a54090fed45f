use crate::store::{
    snapshot::StoreKind,
    table::QTable,
    value::{QFunction, Snapshot},
};

#[test]
fn unseen_pairs_read_as_zero() {
    let mut table: QTable<&str, &str> = QTable::new();
    assert_eq!(table.get(&"s0", &"north"), 0.0);

    table.set("s0", "south", 3.5);
    assert_eq!(table.get(&"s0", &"north"), 0.0);
    assert_eq!(table.get(&"s1", &"south"), 0.0);
    assert_eq!(table.get(&"s0", &"south"), 3.5);
}

#[test]
fn set_overwrites_and_counts_pairs_once() {
    let mut table = QTable::new();
    table.set(1_u32, 'a', 1.0);
    table.set(1_u32, 'a', -2.0);
    table.set(2_u32, 'a', 4.0);

    assert_eq!(table.get(&1, &'a'), -2.0);
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
}

#[test]
fn learn_moves_value_toward_target() {
    let mut table = QTable::new();
    table.set("s", "a", 2.0);

    table.learn(&"s", &"a", 10.0, 0.25);

    // 2 + 0.25 * (10 - 2)
    assert!((table.q_value(&"s", &"a") - 4.0).abs() < 1e-12);
}

#[test]
fn learn_with_unit_step_lands_on_target() {
    let mut table = QTable::new();
    table.learn(&"s", &"a", -7.25, 1.0);
    assert_eq!(table.get(&"s", &"a"), -7.25);
}

#[test]
fn snapshot_lists_entries_sorted_by_key() {
    let mut table = QTable::new();
    table.set("s1", "b", 2.0);
    table.set("s0", "a", 1.0);

    let snapshot = table.snapshot();
    assert_eq!(snapshot.kind, StoreKind::Tabular);
    assert_eq!(snapshot.entry_count, 2);
    assert_eq!(snapshot.entries[0].key, "\"s0\" / \"a\"");
    assert_eq!(snapshot.entries[1].value, 2.0);

    let json = snapshot.to_json().expect("snapshot should serialize");
    assert!(json.contains("\"kind\": \"tabular\""));
}
