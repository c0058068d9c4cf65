extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cssheet_lib::StyleSheet;

fn build_sheet(classes: usize) -> StyleSheet {
    let mut sheet = StyleSheet::new();
    for i in 0..classes {
        sheet
            .add_rule(&format!("class-{}", i))
            .add_property("color", ["black"])
            .add_property("margin", ["10px"]);
    }
    sheet
}

fn bench_generate(c: &mut Criterion) {
    let sheet = build_sheet(100);

    c.bench_function("generate_100_classes", |b| {
        b.iter(|| black_box(&sheet).generate())
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_1000_classes", |b| b.iter(|| build_sheet(black_box(1000))));
}

fn bench_duplicate_properties(c: &mut Criterion) {
    c.bench_function("duplicate_properties", |b| {
        b.iter(|| {
            let mut sheet = StyleSheet::new();
            let rule = sheet.add_rule(".dup");
            for i in 0..50 {
                rule.add_property("margin", [format!("{}px", i % 10)]);
            }
            sheet
        })
    });
}

criterion_group!(benches, bench_generate, bench_build, bench_duplicate_properties);
criterion_main!(benches);
