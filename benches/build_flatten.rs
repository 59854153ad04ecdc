use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formtree::{from_entries_with_options, to_entries, BuildOptions};

fn order_form(rows: usize) -> Vec<(String, String)> {
    let mut entries = vec![
        ("order[id]".to_string(), "1001".to_string()),
        ("order[customer][name]".to_string(), "Alice".to_string()),
        ("order[customer][email]".to_string(), "alice@example.com".to_string()),
    ];
    for i in 0..rows {
        entries.push(("order[items][][sku]".to_string(), format!("SKU-{}", i)));
        entries.push(("order[items][][qty]".to_string(), format!("{}", i % 7 + 1)));
        entries.push(("order[items][][price]".to_string(), format!("{}.99", i)));
    }
    entries
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let options = BuildOptions::new().with_parse_all(true);

    for rows in [10, 50, 100, 500].iter() {
        let entries = order_form(*rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, _| {
            b.iter(|| from_entries_with_options(black_box(entries.clone()), &options))
        });
    }
    group.finish();
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    let options = BuildOptions::new().with_parse_all(true);

    for rows in [10, 50, 100, 500].iter() {
        let value = from_entries_with_options(order_form(*rows), &options).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, _| {
            b.iter(|| to_entries(black_box(&value)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_flatten);
criterion_main!(benches);
