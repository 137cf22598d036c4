// benches/report.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tba_scrape::report;

fn synth_rows() -> Vec<(String, String)> {
    let awards = [
        "Regional Winner",
        "Engineering Inspiration",
        "Imagery Award in honor of Jack Kamen",
        "Rookie All Star",
    ];
    (0..10_000)
        .map(|i| {
            (
                format!("frc{}", i % 300),
                awards[i % awards.len()].to_string(),
            )
        })
        .collect()
}

fn bench_report(c: &mut Criterion) {
    let rows = synth_rows();

    c.bench_function("tally_imagery", |b| {
        b.iter(|| {
            let pairs = rows.iter().map(|(t, a)| (t.as_str(), a.as_str()));
            let tallies = report::tally(black_box(pairs), black_box("imagery"));
            black_box(tallies.len())
        })
    });

    c.bench_function("tally_then_top30", |b| {
        b.iter(|| {
            let pairs = rows.iter().map(|(t, a)| (t.as_str(), a.as_str()));
            black_box(report::top(report::tally(pairs, "award"), 30))
        })
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
