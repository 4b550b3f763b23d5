use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tagson::from_str;

const SIMPLE: &str = "<employee><name>Alex</name></employee>";
const ATTRS: &str = "<employee id=\"12345\" building=\"1\" geo=\"US\"><name>Alex</name></employee>";
const FOREST: &str = "<employee id=\"1\"><name>Alex</name></employee><employee id=\"2\"><name>Jon</name></employee><role>Software Dev</role>";

fn bench_simple(c: &mut Criterion) {
    c.bench_function("tagson_parse_simple", |b| {
        b.iter(|| from_str(black_box(SIMPLE)))
    });
}

fn bench_attrs(c: &mut Criterion) {
    c.bench_function("tagson_parse_attrs", |b| {
        b.iter(|| from_str(black_box(ATTRS)))
    });
}

fn bench_forest(c: &mut Criterion) {
    c.bench_function("tagson_parse_forest", |b| {
        b.iter(|| from_str(black_box(FOREST)))
    });
}

criterion_group!(benches, bench_simple, bench_attrs, bench_forest);
criterion_main!(benches);
