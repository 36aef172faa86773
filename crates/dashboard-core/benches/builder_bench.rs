// File: crates/dashboard-core/benches/builder_bench.rs
// Summary: Parse + build throughput over multi-year daily tables.

use dashboard_core::{DisplayParams, RawTable, SeriesBuilder};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_csv(days: usize, columns: usize) -> String {
    let mut out = String::from("query");
    for c in 0..columns {
        out.push_str(&format!(",S-label-{c}|Label {c}"));
    }
    out.push('\n');
    for d in 0..days {
        out.push_str(&format!("day-{d}"));
        for c in 0..columns {
            out.push_str(&format!(",{}", (d * 7 + c * 13) % 97));
        }
        out.push('\n');
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &days in &[365usize, 3_650usize] {
        let text = gen_csv(days, 8);
        group.bench_with_input(BenchmarkId::from_parameter(format!("d{days}")), &text, |b, t| {
            b.iter(|| { let _ = black_box(RawTable::parse(t)); });
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let table = RawTable::parse(&gen_csv(3_650, 8)).expect("parse");
    let builder = SeriesBuilder::default();
    for &window in &[30usize, 365usize, 5_000usize] {
        for relative in [false, true] {
            let params = DisplayParams::new(window, relative);
            group.bench_with_input(BenchmarkId::from_parameter(format!("w{window}_rel{relative}")), &params, |b, &p| {
                b.iter(|| { let _ = black_box(builder.build(&table, p)); });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_build);
criterion_main!(benches);
