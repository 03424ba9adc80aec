use linhash::{Table, TableConfig};
use rand::Rng;
use tempfile::tempdir;

fn fresh_table() -> Table<i64, i64> {
    Table::new(TableConfig::new(16, 1, 0.75))
}

#[test]
fn ascending_insert_then_lookup() {
    let mut table = fresh_table();
    for i in 31..=80 {
        table.put(i, i);
    }
    for i in 31..=80 {
        assert_eq!(table.get(&i), Some(i));
    }
    assert!(!table.has(&30));
    assert!(!table.has(&81));
    assert_eq!(table.len(), 50);
}

#[test]
fn partial_then_full_teardown() {
    let mut table = fresh_table();
    for i in 31..=80 {
        table.put(i, i);
    }
    for i in 31..=39 {
        assert!(table.delete(&i));
    }
    assert_eq!(table.len(), 41);
    for i in 40..=80 {
        assert!(table.delete(&i));
    }
    assert_eq!(table.len(), 0);
    assert_eq!(table.capacity(), 16);
    assert_eq!(table.split_pointer(), 0);
    assert_eq!(table.directory_len(), 16);
}

/// Four rounds of put/get/delete/get-miss over a large random key set,
/// checking the directory against a `HashMap` model after every round.
#[test]
fn random_churn_rounds() {
    let mut rng = rand::thread_rng();
    let mut table = fresh_table();
    let mut model = std::collections::HashMap::new();

    for _round in 0..4 {
        let mut keys = Vec::with_capacity(25_600);
        for _ in 0..25_600 {
            keys.push(rng.gen_range(0, i64::MAX));
        }

        for &k in &keys {
            let v = rng.gen_range(0, i64::MAX);
            table.put(k, v);
            model.insert(k, v);
        }
        for (&k, &v) in model.iter() {
            assert_eq!(table.get(&k), Some(v));
        }
        for &k in &keys {
            table.delete(&k);
            model.remove(&k);
        }
        for &k in &keys {
            assert!(!table.has(&k));
            assert_eq!(table.get(&k), None);
        }
    }

    assert_eq!(table.len(), model.len());
}

#[test]
fn marshal_unmarshal_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.bin");

    let mut table = fresh_table();
    for i in 0..2000 {
        table.put(i, i * 3);
    }
    for i in 0..2000 {
        if i % 7 == 0 {
            table.delete(&i);
        }
    }
    table.marshal(&path).unwrap();

    let mut restored = fresh_table();
    restored.unmarshal(&path).unwrap();

    assert_eq!(restored.len(), table.len());
    for i in 0..2000 {
        assert_eq!(restored.get(&i), table.get(&i));
    }
}

#[test]
fn overwrite_is_last_write_wins() {
    let mut table = fresh_table();
    table.put(5, 100);
    table.put(5, 200);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&5), Some(200));
}
