use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use polyjson::{Generator, Object, Record, ToJsonValue, Value};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

#[derive(Debug, Clone)]
struct Row {
    id: u32,
    name: String,
    active: bool,
}

impl Record for Row {
    fn pk(&self) -> Value {
        Value::from(self.id)
    }
}

impl Object for Row {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
struct Described(Row);

impl ToJsonValue for Described {
    fn to_json_value(&self) -> Value {
        Value::map([
            ("id", Value::from(self.0.id)),
            ("name", Value::from(self.0.name.as_str())),
            ("active", Value::from(self.0.active)),
        ])
    }
}

impl Object for Described {
    fn as_json_value(&self) -> Option<&dyn ToJsonValue> {
        Some(self)
    }
}

fn gen_rows(n: usize) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n as u32)
        .map(|id| Row {
            id,
            name: (0..8).map(|_| (b'a' + rng.gen_range(0..26u8)) as char).collect(),
            active: rng.gen_bool(0.5),
        })
        .collect()
}

pub fn resolve_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &n in &[100, 1_000, 10_000] {
        let rows = gen_rows(n);
        let records: Value = rows.iter().cloned().map(Value::object).collect();
        let described: Value = rows.iter().cloned().map(|r| Value::object(Described(r))).collect();
        group.bench_function(format!("records::{n}"), |b| {
            b.iter(|| black_box(polyjson::dumps(&records, false).unwrap()))
        });
        group.bench_function(format!("self_describing::{n}"), |b| {
            b.iter(|| black_box(polyjson::dumps(&described, false).unwrap()))
        });
        group.bench_function(format!("generator::{n}"), |b| {
            b.iter_batched(
                || Value::from(Generator::new((0..n).map(Value::from))),
                |g| black_box(polyjson::dumps(&g, false).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, resolve_benchmarks);
criterion_main!(benches);
