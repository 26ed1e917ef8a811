//! End-to-end report generation benchmarks
//!
//! Measures the complete pipeline with varying:
//! - Metric and row counts (1, 10, 100, 1000)
//! - Batch sizes on the sync and rayon executors
//!
//! Run benchmarks: `cargo bench --bench pipeline_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio::{ExecutorImpl, GeneratorBuilder, ReportOptions, SyncExecutor};
use serde_json::{Map, Value, json};
use std::hint::black_box;

/// Legacy-dialect input with `count` metrics and table rows.
fn generate_input(count: usize) -> Value {
    let metrics: Map<String, Value> = (0..count)
        .map(|i| {
            (
                format!("metric_{i}"),
                json!({"value": i * 1000, "delta": (i as f64) - (count as f64) / 2.0}),
            )
        })
        .collect();
    let rows: Vec<Value> = (0..count)
        .map(|i| json!([format!("Record {i}"), i * 100]))
        .collect();
    json!({
        "metrics": metrics,
        "time_series": {
            "labels": (0..12).map(|m| format!("M{m}")).collect::<Vec<_>>(),
            "datasets": [{"label": "Volume", "data": (0..12).collect::<Vec<_>>()}]
        },
        "table": {"columns": ["name", "value"], "rows": rows},
        "insights": [{"headline": "Steady", "body": "Nothing unusual"}]
    })
}

fn benchmark_pipeline_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_throughput");
    let generator = GeneratorBuilder::new()
        .build()
        .expect("Failed to build generator");
    let options = ReportOptions::new("Benchmark");

    for count in [1, 10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        let input = generate_input(count);
        group.bench_with_input(BenchmarkId::new("records", count), &input, |b, input| {
            b.iter(|| {
                let html = generator
                    .generate(black_box(input), &options)
                    .expect("generation succeeds");
                black_box(html)
            });
        });
    }
    group.finish();
}

fn benchmark_batch_executors(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_executor");
    let executors = [
        ExecutorImpl::Sync(SyncExecutor::new()),
        ExecutorImpl::default(),
    ];

    for executor in executors {
        let name = folio::Executor::name(&executor);
        let generator = GeneratorBuilder::new()
            .with_executor(executor)
            .build()
            .expect("Failed to build generator");

        for batch in [8, 64] {
            group.throughput(Throughput::Elements(batch as u64));
            group.bench_with_input(BenchmarkId::new(name, batch), &batch, |b, &batch| {
                b.iter(|| {
                    let jobs = (0..batch)
                        .map(|i| (generate_input(20), ReportOptions::new(format!("Report {i}"))))
                        .collect();
                    black_box(generator.generate_batch(jobs))
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_pipeline_throughput, benchmark_batch_executors);
criterion_main!(benches);
