use criterion::{Criterion, Throughput};
use libespat::at::{FrameDecoder, RESPONSE_CAPACITY};
use rand::Rng;

/// Builds a framed session stream: `frames` `+IPD` lines of random payload,
/// terminated by the close marker.
fn framed_stream(frames: usize, payload_len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut stream = Vec::new();
    for _ in 0..frames {
        stream.extend_from_slice(format!("+IPD{}:", payload_len).as_bytes());
        for _ in 0..payload_len {
            stream.push(rng.gen_range(b'a'..=b'z'));
        }
        stream.push(b'\n');
    }
    stream.extend_from_slice(b"CLOSED\n");
    stream
}

fn drain(stream: &[u8], chunk: usize) -> usize {
    let mut decoder = FrameDecoder::new();
    let mut body: heapless::Vec<u8, RESPONSE_CAPACITY> = heapless::Vec::new();
    for piece in stream.chunks(chunk) {
        decoder.extend(piece).expect("stream fits the inbound buffer");
        decoder.drain_into(&mut body).expect("body fits");
    }
    assert!(decoder.closed());
    body.len()
}

pub fn bench_drain_single_delivery(c: &mut Criterion) {
    let stream = framed_stream(16, 96);
    let mut group = c.benchmark_group("ipd_drain");
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("single_delivery", |b| {
        b.iter(|| drain(&stream, stream.len()))
    });
    group.finish();
}

pub fn bench_drain_byte_deliveries(c: &mut Criterion) {
    let stream = framed_stream(16, 96);
    let mut group = c.benchmark_group("ipd_drain");
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("byte_deliveries", |b| b.iter(|| drain(&stream, 1)));
    group.finish();
}
