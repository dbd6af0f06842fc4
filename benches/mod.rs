use criterion::{criterion_group, criterion_main};

mod at;

criterion_group!(
    benches,
    at::ipd::bench_drain_single_delivery,
    at::ipd::bench_drain_byte_deliveries
);
criterion_main!(benches);
