//! Benchmarks for splitrs.
//!
//! Run with:
//!     cargo bench

use std::cell::Cell;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use splitrs::{LineBuffer, Separator, lines};

/// Deterministic synthetic log: lines of varying width, LF-terminated.
fn log_text(total: usize) -> String {
    let mut text = String::with_capacity(total + 80);
    let mut i = 0usize;
    while text.len() < total {
        let width = 20 + (i * 7 + 13) % 60;
        for j in 0..width {
            let c = b'a' + ((i + j * 3) % 26) as u8;
            text.push(c as char);
        }
        text.push('\n');
        i += 1;
    }
    text
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let text = log_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(format!("literal_{}kb", size / 1024), &text, |b, text| {
            b.iter(|| {
                let count = Cell::new(0usize);
                let mut buffer =
                    LineBuffer::with_separator(|_line: &str| count.set(count.get() + 1), "\n");
                buffer.append(black_box(text.as_str()));
                buffer.flush();
                black_box(count.get())
            });
        });

        group.bench_with_input(format!("pattern_{}kb", size / 1024), &text, |b, text| {
            b.iter(|| {
                let count = Cell::new(0usize);
                let mut buffer = LineBuffer::new(|_line: &str| count.set(count.get() + 1));
                buffer.append(black_box(text.as_str()));
                buffer.flush();
                black_box(count.get())
            });
        });
    }

    group.finish();
}

fn bench_chunk_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("granularity");
    let text = log_text(1024 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    // Same input fed in differently sized chunks; output is identical, only
    // the per-call overhead varies.
    for chunk_size in [16usize, 256, 4096, 64 * 1024] {
        group.bench_with_input(
            format!("pattern_chunks_{}b", chunk_size),
            &text,
            |b, text| {
                b.iter(|| {
                    let count = Cell::new(0usize);
                    let mut buffer = LineBuffer::new(|_line: &str| count.set(count.get() + 1));
                    for chunk in text.as_bytes().chunks(chunk_size) {
                        buffer.append(black_box(chunk));
                    }
                    buffer.flush();
                    black_box(count.get())
                });
            },
        );
    }

    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");
    let text = log_text(1024 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("iterator", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(text.as_bytes()));
            let mut count = 0usize;
            for line in lines(cursor, Separator::default()) {
                let _ = line.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_strategies,
    bench_chunk_granularity,
    bench_reader
);
criterion_main!(benches);
