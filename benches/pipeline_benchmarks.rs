//! Criterion benchmarks for logpipe

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logpipe::config::PipelineConfig;
use logpipe::core::Filter;
use logpipe::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

/// Succeeds without doing any work; isolates pipeline overhead.
struct NullHandler;

impl Handler for NullHandler {
    fn handle(&self, _text: &str) -> Delivery {
        Delivery::Delivered
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Pipeline Creation Benchmarks
// ============================================================================

fn bench_pipeline_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("empty", |b| {
        b.iter(|| {
            let logger = Logger::builder().build();
            black_box(logger)
        });
    });

    group.bench_function("two_filters_two_handlers", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .filter(SubstringFilter::new(black_box("ERROR")))
                .filter(RegexFilter::new(black_box(r"\d+")).unwrap())
                .handler(NullHandler)
                .handler(NullHandler)
                .build();
            black_box(logger)
        });
    });

    group.bench_function("from_shared_snapshots", |b| {
        let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(SubstringFilter::new("ERROR"))];
        let handlers: Vec<Arc<dyn Handler>> = vec![Arc::new(NullHandler)];

        b.iter(|| {
            let logger = Logger::new(black_box(&filters), black_box(&handlers));
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Admission Benchmarks
// ============================================================================

fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .filter(SubstringFilter::new("ERROR"))
        .filter(RegexFilter::new(r"\d+").unwrap())
        .handler(NullHandler)
        .build();

    group.bench_function("accepted", |b| {
        b.iter(|| {
            logger.log(black_box("ERROR: connection 42 reset"));
        });
    });

    group.bench_function("rejected_first_filter", |b| {
        b.iter(|| {
            logger.log(black_box("INFO: nothing to see"));
        });
    });

    group.bench_function("rejected_second_filter", |b| {
        b.iter(|| {
            logger.log(black_box("ERROR: but no digits"));
        });
    });

    group.finish();
}

fn bench_filter_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_direct");
    group.throughput(Throughput::Elements(1));

    let line = "ERROR: Database connection failed (code 500)";

    let substring = SubstringFilter::new("ERROR");
    group.bench_function("substring", |b| {
        b.iter(|| black_box(substring.matches(black_box(line))));
    });

    let pattern = RegexFilter::new(r"\d+").unwrap();
    group.bench_function("regex", |b| {
        b.iter(|| black_box(pattern.matches(black_box(line))));
    });

    let level = LevelFilter::new("error").unwrap();
    group.bench_function("level", |b| {
        b.iter(|| black_box(level.matches(black_box(line))));
    });

    group.finish();
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fanout_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout_modes");
    group.throughput(Throughput::Elements(1));

    let sequential = Logger::builder()
        .handler(NullHandler)
        .handler(NullHandler)
        .handler(NullHandler)
        .handler(NullHandler)
        .build();

    group.bench_function("sequential_4_handlers", |b| {
        b.iter(|| {
            sequential.log(black_box("fan this out"));
        });
    });

    let concurrent = Logger::builder()
        .handler(NullHandler)
        .handler(NullHandler)
        .handler(NullHandler)
        .handler(NullHandler)
        .fanout(FanoutMode::Concurrent)
        .build();

    group.bench_function("concurrent_4_handlers", |b| {
        b.iter(|| {
            concurrent.log(black_box("fan this out"));
        });
    });

    group.finish();
}

// ============================================================================
// Delivery Benchmarks
// ============================================================================

fn bench_file_delivery(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_delivery");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .handler(FileHandler::new(&temp_dir.path().join("bench.log")).unwrap())
        .build();

    group.bench_function("stamped_append", |b| {
        b.iter(|| {
            logger.log(black_box("benchmark line with a typical payload size"));
        });
    });

    group.finish();
}

// ============================================================================
// Configuration Benchmarks
// ============================================================================

fn bench_config_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_build");
    group.throughput(Throughput::Elements(1));

    let json = r#"{
        "filters": [
            { "type": "substring", "pattern": "ERROR" },
            { "type": "regex", "pattern": "\\d+" }
        ],
        "handlers": [{ "type": "syslog" }]
    }"#;

    group.bench_function("parse", |b| {
        b.iter(|| {
            let config = PipelineConfig::from_json(black_box(json)).unwrap();
            black_box(config)
        });
    });

    let config = PipelineConfig::from_json(json).unwrap();
    group.bench_function("build", |b| {
        b.iter(|| {
            let logger = config.build().unwrap();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_pipeline_creation,
    bench_admission,
    bench_filter_direct,
    bench_fanout_modes,
    bench_file_delivery,
    bench_config_build
);

criterion_main!(benches);
