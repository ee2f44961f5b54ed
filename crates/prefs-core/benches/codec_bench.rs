//! Criterion benchmarks for the playerPrefs text codec.
//!
//! Run with:
//! ```bash
//! cargo bench --package prefs-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prefs_core::{decode, encode, Record};

const SAMPLE: &str = "Bob,1,2,0,True,False,True,0,False,True,30,100,100,0,0,3,0,True,0,False,0,0";

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode/sample", |b| {
        b.iter(|| decode(black_box(SAMPLE)).expect("decode"))
    });

    // Rejection path: the last field is bad, so every earlier token is parsed.
    let (head, _) = SAMPLE.rsplit_once(',').expect("sample has fields");
    let bad = format!("{head},x");
    c.bench_function("decode/reject_last_field", |b| {
        b.iter(|| decode(black_box(&bad)).unwrap_err())
    });
}

fn bench_encode(c: &mut Criterion) {
    let record: Record = SAMPLE.parse().expect("sample");
    c.bench_function("encode/sample", |b| b.iter(|| encode(black_box(&record))));
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
