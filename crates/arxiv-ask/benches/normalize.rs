//! Normalization throughput for each response shape.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Map, Value, json};

use arxiv_ask::normalize::{extract_identifier, normalize_response};

fn array_response(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "title": format!("Paper {i}"),
                    "authors": ["A. Author", "B. Author"],
                    "summary": "An abstract of moderate length describing the work.",
                    "entry_id": format!("http://arxiv.org/abs/2101.{i:05}v1"),
                    "primary_category": "cs.LG",
                    "published": "2021-01-04 18:59:59+00:00"
                })
            })
            .collect(),
    )
}

fn keyed_response(n: usize) -> Value {
    let answer: Map<String, Value> = (0..n)
        .map(|i| {
            (
                format!("http://arxiv.org/pdf/2101.{i:05}v1"),
                json!({"title": format!("Paper {i}"), "authors": ["A. Author"]}),
            )
        })
        .collect();
    json!({ "answer": answer })
}

fn url_list_response(n: usize) -> Value {
    let answer: Vec<String> = (0..n).map(|i| format!("http://arxiv.org/pdf/2101.{i:05}v1.pdf")).collect();
    json!({ "answer": answer })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_response");

    let array = array_response(100);
    group.bench_function("array_of_objects_100", |b| b.iter(|| normalize_response(black_box(&array))));

    let keyed = keyed_response(100);
    group.bench_function("keyed_answer_100", |b| b.iter(|| normalize_response(black_box(&keyed))));

    let urls = url_list_response(100);
    group.bench_function("url_list_100", |b| b.iter(|| normalize_response(black_box(&urls))));

    group.finish();
}

fn bench_identifier(c: &mut Criterion) {
    c.bench_function("extract_identifier", |b| {
        b.iter(|| extract_identifier(black_box("https://arxiv.org/pdf/2006.08233v3.pdf.pdf")));
    });
}

criterion_group!(benches, bench_normalize, bench_identifier);
criterion_main!(benches);
