use criterion::{Criterion, black_box, criterion_group, criterion_main};
use enosc_tables::*;

fn bench_generators(c: &mut Criterion) {
    c.bench_function("sine_table", |b| b.iter(|| black_box(generators::sine())));
    c.bench_function("cheby_table", |b| {
        b.iter(|| black_box(generators::cheby()))
    });
    c.bench_function("fold_table", |b| b.iter(|| black_box(generators::fold())));

    let fold = generators::fold();
    c.bench_function("fold_max_table", |b| {
        b.iter(|| black_box(generators::fold_max(black_box(&fold))))
    });
    c.bench_function("triangles_table", |b| {
        b.iter(|| black_box(generators::triangles()))
    });
}

fn bench_emit_cc(c: &mut Criterion) {
    let tables = Tables::generate();
    let config = Config::default();
    c.bench_function("emit_cc", |b| {
        let mut out = Vec::with_capacity(1 << 20);
        b.iter(|| {
            out.clear();
            write_tables(black_box(&tables), &config, &mut out).unwrap();
            black_box(out.len());
        });
    });
}

criterion_group!(benches, bench_generators, bench_emit_cc);
criterion_main!(benches);
