use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jsonlex_scanner::scan;

// A medium-size JSON document with every token kind
const JSON_SOURCE: &str = r#"
{
    "users": [
        {
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "age": 36,
            "score": -12.75e-2,
            "active": true,
            "manager": null,
            "preferences": {
                "theme": "dark",
                "notifications": false,
                "language": "en-GB",
                "tags": ["math", "engines", "notes\u00e9"]
            }
        },
        {
            "id": 2,
            "name": "Charles \"Engine\" Babbage",
            "email": "charles@example.com",
            "age": 79,
            "score": 4.2E+3,
            "active": false,
            "manager": 1,
            "preferences": {
                "theme": "light",
                "notifications": true,
                "language": "en",
                "tags": []
            }
        }
    ],
    "matrix": [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [-1.5, 2.25, 3e10, 0.001]],
    "paths": ["C:\\Windows\\System32", "/usr/local/bin", "~\/home"],
    "meta": {"version": "1.0.0", "generated": "2026-10-18T09:25:00Z", "count": 2}
}
"#;

fn string_heavy_source() -> String {
    let mut source = String::from("[");
    for i in 0..256 {
        if i > 0 {
            source.push(',');
        }
        source.push_str(r#""Lorem ipsum dolor sit amet, consectetur adipiscing elit \"quoted\" \\ done""#);
    }
    source.push(']');
    source
}

fn bench_scan_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(JSON_SOURCE.len() as u64));
    group.bench_function("document_medium", |b| {
        b.iter(|| {
            let count = scan(black_box(JSON_SOURCE)).count();
            black_box(count);
        });
    });
    group.finish();
}

fn bench_scan_strings(c: &mut Criterion) {
    let source = string_heavy_source();
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("strings_heavy", |b| {
        b.iter(|| {
            let count = scan(black_box(source.as_str())).count();
            black_box(count);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scan_document, bench_scan_strings);
criterion_main!(benches);
