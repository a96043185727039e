//! Hash provider benchmarks.
//!
//! Run with:
//!     cargo bench --bench hash_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use nodebuf::ByteBuffer;
use nodebuf::hash::{Algorithm, Backend, create_provider};

fn backends() -> Vec<Backend> {
    [Backend::Native, Backend::Portable]
        .into_iter()
        .filter(|backend| backend.is_available())
        .collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    for backend in backends() {
        let mut group = c.benchmark_group(format!("hash_{backend}"));
        group.throughput(Throughput::Bytes(size as u64));

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::from_parameter(algorithm),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut provider = create_provider(backend, algorithm).unwrap();
                        provider.update(black_box(data));
                        black_box(provider.digest())
                    });
                },
            );
        }

        group.finish();
    }
}

fn bench_update_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_buffer");
    let size = 1024 * 1024;
    let buf = ByteBuffer::alloc_with(size, "nodebuf", None).unwrap();
    let view = buf.slice(Some(1), Some(-1));

    group.throughput(Throughput::Bytes(view.len() as u64));
    for backend in backends() {
        group.bench_function(backend.name(), |b| {
            b.iter(|| {
                let mut provider = create_provider(backend, Algorithm::Sha256).unwrap();
                provider.update_buffer(black_box(&view));
                black_box(provider.digest())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_update_buffer);
criterion_main!(benches);
