//! Checksum throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use segcheck::{calculate_checksum, validate, Ipv4Addr};

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_checksum");
    // Minimum segment, classic 576-byte datagram, Ethernet MSS, maximum.
    for size in [20usize, 576, 1460, 65535] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_checksum(black_box(data)))
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let src = Ipv4Addr::new(192, 168, 1, 1);
    let dst = Ipv4Addr::new(192, 168, 1, 2);
    let mut segment = vec![0u8; 1460];
    // Embed the true checksum so the bench walks the passing path.
    let checksum = validate::segment_checksum(src, dst, &segment).unwrap();
    segment[16..18].copy_from_slice(&checksum.to_be_bytes());

    c.bench_function("verify_1460_byte_segment", |b| {
        b.iter(|| validate::verify(black_box(src), black_box(dst), black_box(&segment)))
    });
}

criterion_group!(benches, bench_calculate, bench_verify);
criterion_main!(benches);
