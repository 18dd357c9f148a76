//! Benchmarks for schema compilation and the record walk
//!
//! Compilation happens once per type in real use; the walk runs per record.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fieldcheck::prelude::*;
use fieldcheck::validate_record;

#[derive(Record)]
struct Order {
    #[validate("string,min=1,max=64", label = "Customer")]
    customer: String,

    #[validate("email")]
    email: String,

    #[validate("number,min=1,max=999")]
    quantity: u32,

    #[validate("number,min=0,max=100000")]
    unit_price: f64,

    #[validate("regex,[A-Z]{3}-\\d{4}", rename = "sku_code")]
    sku: String,

    #[validate("-")]
    notes: String,
}

fn valid_order() -> Order {
    Order {
        customer: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        quantity: 3,
        unit_price: 19.99,
        sku: "ABC-1234".into(),
        notes: String::new(),
    }
}

fn invalid_order() -> Order {
    Order {
        customer: String::new(),
        email: "ada at example".into(),
        quantity: 0,
        unit_price: -1.0,
        sku: "abc1234".into(),
        notes: "left blank".into(),
    }
}

// ============================================================================
// Schema compilation
// ============================================================================

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_schema_lenient", |b| {
        b.iter(|| black_box(Schema::new(Order::fields())));
    });

    let strict = ValidatorConfig::strict();
    c.bench_function("compile_schema_strict", |b| {
        b.iter(|| black_box(Schema::with_config(Order::fields(), &strict)));
    });
}

// ============================================================================
// Record walk
// ============================================================================

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_record");
    for (name, order) in [("valid", valid_order()), ("invalid", invalid_order())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &order, |b, order| {
            b.iter(|| black_box(validate_record(black_box(order))));
        });
    }
    group.finish();

    let order = invalid_order();
    c.bench_function("validate_report_only", |b| {
        b.iter(|| black_box(black_box(&order).validate()));
    });
    black_box(&order.notes);
}

criterion_group!(benches, bench_compile, bench_validate);
criterion_main!(benches);
