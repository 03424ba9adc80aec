use criterion::{criterion_group, criterion_main, Bencher, Criterion, Throughput};
use linhash::{Table, TableConfig};
use once_cell::sync::Lazy;
use rand::Rng;

const INSERT_COUNT: u64 = 1000;

static RANDOM_INDEXES: Lazy<Vec<u64>> = Lazy::new(|| {
    let mut rng = rand::thread_rng();
    let mut indexes = Vec::with_capacity(INSERT_COUNT as usize);
    for _i in 0..INSERT_COUNT {
        indexes.push(rng.gen_range(0, INSERT_COUNT));
    }
    indexes
});

fn table() -> Table<u64, u64> {
    Table::new(TableConfig::new(16, 1, 0.75))
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(INSERT_COUNT));
    group.bench_function("random range insert", random_range_insert);
    group.bench_function("ordered insert", ordered_insert);
    group.bench_function("ordered rmw", rmw_ordered);
    group.bench_function("random rmw", rmw_random);
    group.bench_function("ordered delete", ordered_delete);
    group.finish()
}

fn random_range_insert(b: &mut Bencher) {
    let mut t = table();
    b.iter(|| {
        for id in RANDOM_INDEXES.iter() {
            t.put(*id, 1000);
        }
    });
}

fn ordered_insert(b: &mut Bencher) {
    let mut t = table();
    b.iter(|| {
        for i in 0..INSERT_COUNT {
            t.put(i, 1000);
        }
    });
}

fn rmw_ordered(b: &mut Bencher) {
    let mut t = table();
    for i in 0..INSERT_COUNT {
        t.put(i, 1000);
    }
    b.iter(|| {
        for i in 0..INSERT_COUNT {
            if let Some(val) = t.get(&i) {
                t.put(i, val + 10);
            }
        }
    });
}

fn rmw_random(b: &mut Bencher) {
    let mut t = table();
    for i in 0..INSERT_COUNT {
        t.put(i, 1000);
    }
    b.iter(|| {
        for id in RANDOM_INDEXES.iter() {
            if let Some(val) = t.get(id) {
                t.put(*id, val + 10);
            }
        }
    });
}

fn ordered_delete(b: &mut Bencher) {
    b.iter(|| {
        let mut t = table();
        for i in 0..INSERT_COUNT {
            t.put(i, 1000);
        }
        for i in 0..INSERT_COUNT {
            t.delete(&i);
        }
    });
}

criterion_group!(benches, insert);
criterion_main!(benches);
