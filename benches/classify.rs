//! Benchmarks for entry classification and trace decoding.
//!
//! - Per-code predicates over the full code range, including unknown codes
//! - Decoding and summarising a synthetic trace

extern crate pathflip;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use pathflip::{
    classify::{flags_for_code, is_interpretable_code, is_reversible_code, EntryKind},
    protocol::{ConstraintKind, TraceEntryTag},
    trace::{DecodeConfig, Trace, TraceWriter},
};
use std::hint::black_box;
use strum::IntoEnumIterator;

/// Classify every code from 0 to 63, covering catalogued, reserved and unknown codes.
fn bench_classify_codes(c: &mut Criterion) {
    c.bench_function("classify_codes_0_63", |b| {
        b.iter(|| {
            let mut candidates = 0u32;
            for code in 0..64u32 {
                let code = black_box(code);
                if is_interpretable_code(code) && is_reversible_code(0, code) {
                    candidates += 1;
                }
                black_box(flags_for_code(code));
            }
            black_box(candidates)
        });
    });
}

/// Build a trace that cycles through the whole catalogue with both entry kinds.
fn build_trace(entries: usize) -> Vec<u8> {
    let mut writer = TraceWriter::new();
    let tags: Vec<TraceEntryTag> = TraceEntryTag::iter().collect();
    let payload = [0xAB; 12];

    for i in 0..entries {
        let tag = tags[i % tags.len()];
        let kind = if i % 3 == 0 {
            EntryKind::from(ConstraintKind::True)
        } else {
            EntryKind::Event
        };
        writer.push(kind, tag, &payload).unwrap();
    }
    writer.finish()
}

/// Decode and summarise a 10,000 entry trace.
fn bench_trace_summary(c: &mut Criterion) {
    let data = build_trace(10_000);
    let trace = Trace::from_mem(data).unwrap();

    let mut group = c.benchmark_group("trace");
    group.throughput(Throughput::Bytes(trace.len() as u64));
    group.bench_function("summary_lenient", |b| {
        b.iter(|| black_box(trace.summary(DecodeConfig::lenient()).unwrap()));
    });
    group.bench_function("summary_strict", |b| {
        b.iter(|| black_box(trace.summary(DecodeConfig::strict()).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_classify_codes, bench_trace_summary);
criterion_main!(benches);
