use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use csvsync::{Field, Options};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn gen_rows(n: usize) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let s = (0..8)
                .map(|_| match rng.random_range(0..29u8) {
                    0 => '"',
                    1 => ',',
                    2 => '\n',
                    k => (b'a' + k - 3) as char,
                })
                .collect::<String>();
            vec![i.to_string(), s, rng.random_bool(0.5).to_string()]
        })
        .collect()
}

pub fn stringify_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    for &n in &[100, 1_000, 10_000] {
        let rows = gen_rows(n);
        let out_sz = csvsync::stringify(&rows, &Options::default()).unwrap().len() as u64;
        group.throughput(Throughput::Bytes(out_sz));
        group.bench_function(format!("text::{n}"), |b| {
            b.iter(|| black_box(csvsync::stringify(&rows, &Options::default()).unwrap()))
        });
        let fields: Vec<Vec<Field>> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| vec![Field::from(i as u64), Field::from(r[1].as_str()), Field::Bool(i % 2 == 0)])
            .collect();
        group.bench_function(format!("fields::{n}"), |b| {
            b.iter_batched(
                || fields.clone(),
                |f| black_box(csvsync::stringify_fields(&f, &Options::default()).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, stringify_benchmarks);
criterion_main!(benches);
