use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lsd::LSD;

/// Builds a synthetic LSD document with `levels` nested key path segments
/// and `siblings` leaf entries at the deepest level, plus one list of
/// `siblings` quoted values. Large enough inputs exercise the lexer's
/// concatenation path and the grammar's merge algorithm the way a real
/// config tree with many repeated dotted prefixes would.
fn synthetic_document(levels: usize, siblings: usize) -> String {
    let mut out = String::new();
    let prefix: Vec<String> = (0..levels).map(|i| format!("section{i}")).collect();
    let path = prefix.join(".");

    for i in 0..siblings {
        out.push_str(&format!("{path}.key{i} \"value number {i}\" and some text\n"));
    }

    out.push_str("items [\n");
    for i in 0..siblings {
        out.push_str(&format!("  \"item {i}\" {i}\n"));
    }
    out.push_str("]\n");

    out
}

fn parse_nested_levels(c: &mut Criterion) {
    let doc = synthetic_document(4, 200);
    c.bench_function("nested_levels_4x200", |b| {
        b.iter(|| LSD::parse_str(black_box(&doc)).unwrap());
    });
}

fn parse_flat_levels(c: &mut Criterion) {
    let doc = synthetic_document(1, 2000);
    c.bench_function("flat_level_2000_keys", |b| {
        b.iter(|| LSD::parse_str(black_box(&doc)).unwrap());
    });
}

fn parse_escape_heavy(c: &mut Criterion) {
    let mut doc = String::new();
    for i in 0..500 {
        doc.push_str(&format!(
            "key{i} \"caf\\xc3\\xa9 \\u00e9 \\t\\n\\\"quoted\\\"\"\n"
        ));
    }
    c.bench_function("escape_heavy_500_keys", |b| {
        b.iter(|| LSD::parse_str(black_box(&doc)).unwrap());
    });
}

criterion_group!(parsing, parse_nested_levels, parse_flat_levels, parse_escape_heavy);
criterion_main!(parsing);
