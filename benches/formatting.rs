use criterion::{Criterion, criterion_group, criterion_main};
use linelog::{Color, Level, LineMode, Logger, bound, info};
use std::hint::black_box;
use std::io;
use std::sync::Mutex;

fn sink_logger(mode: LineMode, colorize: bool) -> Logger<Mutex<io::Sink>> {
    Logger::builder()
        .verbosity(Level::Info)
        .colorize(colorize)
        .area_name("bench")
        .line_mode(mode)
        .destination(Mutex::new(io::sink()))
        .build()
        .unwrap()
}

fn bench_disabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled");

    let logger = sink_logger(LineMode::Immediate, false);
    group.bench_function("runtime_threshold", |b| {
        b.iter(|| logger.debug().append(black_box(42)).append(" items"));
    });

    let bounded = Logger::builder()
        .verbosity(Level::All)
        .destination(Mutex::new(io::sink()))
        .bound::<bound::Warn>()
        .build()
        .unwrap();
    group.bench_function("static_bound", |b| {
        b.iter(|| bounded.info().append(black_box(42)).append(" items"));
    });

    group.bench_function("macro", |b| {
        b.iter(|| info!(bounded, black_box(42), " items"));
    });

    group.finish();
}

fn bench_enabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("enabled");

    let plain = sink_logger(LineMode::Immediate, false);
    group.bench_function("immediate", |b| {
        b.iter(|| plain.info().append(black_box(42)).append(" items"));
    });

    let buffered = sink_logger(LineMode::Buffered, false);
    group.bench_function("buffered", |b| {
        b.iter(|| buffered.info().append(black_box(42)).append(" items"));
    });

    let colored = sink_logger(LineMode::Immediate, true);
    group.bench_function("colorized", |b| {
        b.iter(|| {
            colored
                .info()
                .append("count ")
                .color(Color::Cyan)
                .append(black_box(42))
                .append(" items")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_disabled, bench_enabled);
criterion_main!(benches);
