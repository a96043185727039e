//! ByteBuffer benchmarks.
//!
//! Run with:
//!     cargo bench --bench buffer_bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use nodebuf::ByteBuffer;

fn bench_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc");

    for size in [1024, 64 * 1024, 1024 * 1024] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("zeroed_{}kb", size / 1024), |b| {
            b.iter(|| black_box(ByteBuffer::alloc(black_box(size)).unwrap()));
        });

        group.bench_function(format!("fill_int_{}kb", size / 1024), |b| {
            b.iter(|| black_box(ByteBuffer::alloc_with(size, 0x5a, None).unwrap()));
        });

        group.bench_function(format!("fill_hex_{}kb", size / 1024), |b| {
            b.iter(|| black_box(ByteBuffer::alloc_with(size, "64656e6f", Some("hex")).unwrap()));
        });
    }

    group.finish();
}

fn bench_encodings(c: &mut Criterion) {
    let mut group = c.benchmark_group("encodings");
    let size = 64 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    let buf = ByteBuffer::from(data);

    group.throughput(Throughput::Bytes(size as u64));
    for encoding in ["hex", "base64", "utf8"] {
        let text = buf.to_string_with(Some(encoding)).unwrap();

        group.bench_function(format!("encode_{encoding}"), |b| {
            b.iter(|| black_box(buf.to_string_with(Some(encoding)).unwrap()));
        });

        group.bench_function(format!("decode_{encoding}"), |b| {
            b.iter(|| black_box(ByteBuffer::from_text(black_box(&text), Some(encoding)).unwrap()));
        });
    }

    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");
    let parts: Vec<ByteBuffer> = (0..64).map(|_| ByteBuffer::alloc(16 * 1024).unwrap()).collect();
    let total: usize = parts.iter().map(|p| p.len()).sum();

    group.throughput(Throughput::Bytes(total as u64));
    group.bench_function("64x16kb", |b| {
        b.iter(|| black_box(ByteBuffer::concat(black_box(&parts), None).unwrap()));
    });
    group.bench_function("64x16kb_padded", |b| {
        b.iter(|| black_box(ByteBuffer::concat(&parts, Some(total * 2)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_alloc, bench_encodings, bench_concat);
criterion_main!(benches);
