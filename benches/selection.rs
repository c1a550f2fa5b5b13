//! Performance measurement for photo selection at varying catalog sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use inkframe::catalog::PhotoRecord;
use inkframe::io::configuration::RotationConfig;
use inkframe::selection::SelectionEngine;
use std::hint::black_box;

fn synthetic_catalog(size: usize) -> Vec<PhotoRecord> {
    let now = Utc::now();
    (0..size)
        .map(|index| {
            let record = PhotoRecord::new(format!("photo_{index}.jpg"), 4000, 3000);
            if index % 7 == 0 {
                record
            } else {
                record.with_capture_time(now - Duration::days((index as i64 * 13) % 1500))
            }
        })
        .collect()
}

/// Measures pick cost as the catalog grows past the history capacity
fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");

    for &size in &[10, 100, 1000] {
        let catalog = synthetic_catalog(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            let Ok(mut engine) = SelectionEngine::new(RotationConfig::default(), 12345) else {
                return;
            };
            b.iter(|| black_box(engine.pick(catalog)));
        });
    }

    group.finish();
}

/// Measures traversal cost against a saturated navigation history
fn bench_navigation(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let Ok(mut engine) = SelectionEngine::new(RotationConfig::default(), 12345) else {
        return;
    };
    for _ in 0..100 {
        engine.pick(&catalog);
    }

    c.bench_function("navigate_previous_next", |b| {
        b.iter(|| {
            black_box(engine.previous());
            black_box(engine.next());
        });
    });
}

criterion_group!(benches, bench_pick, bench_navigation);
criterion_main!(benches);
