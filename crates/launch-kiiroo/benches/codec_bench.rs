//! Benchmarks for Kiiroo codec operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use launch_kiiroo::{Event, Events};

fn script(len: u64) -> Events {
    (0..len)
        .map(|i| Event::from_millis((len - i) * 10, (i % 5) as u8).unwrap())
        .collect()
}

fn bench_event_decode(c: &mut Criterion) {
    c.bench_function("event_decode", |b| {
        b.iter(|| Event::decode(black_box("12.34:3")))
    });
}

fn bench_event_encode(c: &mut Criterion) {
    let event = Event::from_millis(12_340, 3).unwrap();

    c.bench_function("event_encode", |b| b.iter(|| black_box(event).encode()));
}

fn bench_events_decode(c: &mut Criterion) {
    let text = script(1000).encode().unwrap();

    c.bench_function("events_decode_1000", |b| {
        b.iter(|| Events::decode(black_box(&text)))
    });
}

fn bench_events_encode(c: &mut Criterion) {
    let events = script(1000);

    c.bench_function("events_encode_1000", |b| {
        b.iter(|| black_box(&events).encode())
    });
}

fn bench_events_sorted(c: &mut Criterion) {
    let events = script(1000);

    c.bench_function("events_sorted_1000", |b| {
        b.iter(|| black_box(events.clone()).sorted())
    });
}

criterion_group!(
    benches,
    bench_event_decode,
    bench_event_encode,
    bench_events_decode,
    bench_events_encode,
    bench_events_sorted,
);
criterion_main!(benches);
