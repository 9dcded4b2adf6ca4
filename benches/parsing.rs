use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inidoc::{parse_str, Document};

const SMALL_CONFIG: &str = "\
; application configuration
[server]
host = localhost
port = 8080
threads = 4

[database]
url = postgres://localhost/app
pool = 16
timeout = 30

[log]
level = info
file = /var/log/app.log
";

fn synth_config(sections: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("[section{i}]\n"));
        text.push_str(&format!("host = node{i}.internal\n"));
        text.push_str(&format!("port = {}\n", 8000 + i));
        text.push_str(&format!("weight = {}.5\n", i % 10));
        text.push_str("enabled = true\n\n");
    }
    text
}

fn benchmark_parse_small(c: &mut Criterion) {
    c.bench_function("parse_small_config", |b| {
        b.iter(|| parse_str(black_box(SMALL_CONFIG)))
    });
}

fn benchmark_format_small(c: &mut Criterion) {
    let doc = parse_str(SMALL_CONFIG).unwrap();

    c.bench_function("format_small_config", |b| {
        b.iter(|| black_box(&doc).to_string())
    });
}

fn benchmark_parse_by_section_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sections");

    for size in [10, 50, 100, 500].iter() {
        let text = synth_config(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_format_by_section_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_sections");

    for size in [10, 50, 100, 500].iter() {
        let doc = parse_str(&synth_config(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(doc).to_string())
        });
    }
    group.finish();
}

fn benchmark_parse_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_features");

    let plain = "[s]\nkey = a plain value with several words\n";
    let quoted = "[s]\nkey = \"  a quoted value ; with = specials  \"\n";
    let escaped = "[s]\nkey = first\\nsecond\\tthird\\rfourth\n";
    let multiline = "[s]\nkey = one \\\ntwo \\\nthree\n";

    group.bench_function("plain", |b| b.iter(|| parse_str(black_box(plain))));
    group.bench_function("quoted", |b| b.iter(|| parse_str(black_box(quoted))));
    group.bench_function("escaped", |b| b.iter(|| parse_str(black_box(escaped))));
    group.bench_function("multiline", |b| b.iter(|| parse_str(black_box(multiline))));

    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let base = parse_str(&synth_config(50)).unwrap();
    let mut layer = Document::new();
    for i in 0..50 {
        layer.set(&format!("section{i}"), "port", "9090");
        layer.set(&format!("section{i}"), "extra", "added");
    }

    c.bench_function("merge_50_sections", |b| {
        b.iter(|| base.merged(black_box(&layer)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let doc = parse_str(SMALL_CONFIG).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("ini_format", |b| b.iter(|| black_box(&doc).to_string()));

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&doc)))
    });

    let ini_text = doc.to_string();
    let json_text = serde_json::to_string(&doc).unwrap();

    group.bench_function("ini_parse", |b| {
        b.iter(|| parse_str(black_box(&ini_text)))
    });

    group.bench_function("json_parse", |b| {
        b.iter(|| serde_json::from_str::<Document>(black_box(&json_text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_small_config", |b| {
        b.iter(|| {
            let doc = parse_str(black_box(SMALL_CONFIG)).unwrap();
            let _text = doc.to_string();
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_format_small,
    benchmark_parse_by_section_count,
    benchmark_format_by_section_count,
    benchmark_parse_features,
    benchmark_merge,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
