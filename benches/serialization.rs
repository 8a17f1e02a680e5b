use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serial_value::{
    from_binary, from_json_str, from_value, to_binary, to_json_string, to_value, Binary, Format,
    Json, Value,
};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: i32,
}

fn user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn nested() -> NestedData {
    NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: -3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    }
}

fn benchmark_to_value(c: &mut Criterion) {
    let user = user();
    c.bench_function("to_value_simple_struct", |b| {
        b.iter(|| to_value(black_box(&user)))
    });

    let value = to_value(&user).unwrap();
    c.bench_function("from_value_simple_struct", |b| {
        b.iter(|| from_value::<User>(black_box(value.clone())))
    });
}

fn benchmark_json_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_array");

    for size in [10, 50, 100, 500].iter() {
        let value = to_value(&products(*size)).unwrap();
        let text = value.to_string();

        group.bench_with_input(BenchmarkId::new("write", size), &value, |b, value| {
            b.iter(|| Json::new().to_vec(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("read", size), &text, |b, text| {
            b.iter(|| from_json_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_binary_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_array");

    for size in [10, 50, 100, 500].iter() {
        let value = to_value(&products(*size)).unwrap();
        let bytes = Binary::new().to_vec(&value).unwrap();

        group.bench_with_input(BenchmarkId::new("write", size), &value, |b, value| {
            b.iter(|| Binary::new().to_vec(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("read", size), &bytes, |b, bytes| {
            b.iter(|| from_binary(black_box(bytes)))
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let data = nested();
    let text = to_json_string(&data).unwrap();
    let bytes = to_binary(&data).unwrap();

    let mut group = c.benchmark_group("nested_struct");
    group.bench_function("json_serialize", |b| {
        b.iter(|| to_json_string(black_box(&data)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| from_json_str(black_box(&text)).and_then(from_value::<NestedData>))
    });
    group.bench_function("binary_serialize", |b| {
        b.iter(|| to_binary(black_box(&data)))
    });
    group.bench_function("binary_deserialize", |b| {
        b.iter(|| from_binary(black_box(&bytes)).and_then(from_value::<NestedData>))
    });
    group.finish();
}

fn benchmark_string_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_strings");

    let plain = Value::from("This is a medium length string with some content");
    let escaped = Value::from("line one\nline \"two\"\ttabbed \\ and \u{1} control");
    let unicode = Value::from("caf\u{e9} \u{1F980} na\u{ef}ve");

    for (name, value) in [("plain", &plain), ("escaped", &escaped), ("unicode", &unicode)] {
        let text = value.to_string();
        group.bench_function(format!("{}_write", name), |b| {
            b.iter(|| black_box(value).to_string())
        });
        group.bench_function(format!("{}_read", name), |b| {
            b.iter(|| from_json_str(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_coercion(c: &mut Criterion) {
    let mut group = c.benchmark_group("coercion");

    let numeric_text = Value::from(" 123456789 ");
    let word = Value::from("yes");
    let float = Value::Float(42.75);
    let mut indexed = to_value(&(0..100).collect::<Vec<u32>>()).unwrap();
    indexed.get_object_mut().unwrap();

    group.bench_function("string_to_unsigned", |b| {
        b.iter(|| black_box(&numeric_text).get_unsigned())
    });
    group.bench_function("string_to_bool", |b| b.iter(|| black_box(&word).get_bool()));
    group.bench_function("float_to_string", |b| {
        b.iter(|| black_box(&float).get_string().map(|s| s.len()))
    });
    group.bench_function("indexed_object_to_array", |b| {
        b.iter(|| black_box(&indexed).get_array().map(|items| items.len()))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = user();
    let mut group = c.benchmark_group("comparison");

    group.bench_function("value_json_serialize", |b| {
        b.iter(|| to_json_string(black_box(&user)))
    });

    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let text = to_json_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("value_json_deserialize", |b| {
        b.iter(|| from_json_str(black_box(&text)).and_then(from_value::<User>))
    });

    group.bench_function("serde_json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let user = user();

    c.bench_function("roundtrip_binary", |b| {
        b.iter(|| {
            let bytes = to_binary(black_box(&user)).unwrap();
            let _back: User = from_value(from_binary(black_box(&bytes)).unwrap()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_to_value,
    benchmark_json_array,
    benchmark_binary_array,
    benchmark_nested,
    benchmark_string_escaping,
    benchmark_coercion,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
