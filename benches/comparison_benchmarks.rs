use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use solar_compare::{
    derive_view, filter_by_category, CatalogStore, CategoryFilter, Product, Selection,
};

fn synthetic_catalog(size: usize) -> CatalogStore {
    let categories = ["hybrid-inverter", "microinverter", "string-inverter", "solar-panel", "battery"];
    let products = (0..size)
        .map(|i| {
            let mut builder = Product::builder(
                format!("product-{i}"),
                format!("Product {i}"),
                categories[i % categories.len()],
            );
            for key in 0..12 {
                builder = builder.spec(format!("Spec {}", (i + key) % 20), format!("{key}"));
            }
            builder.build()
        })
        .collect();
    CatalogStore::new(products).unwrap()
}

fn benchmark_derive_view(c: &mut Criterion) {
    let catalog = CatalogStore::embedded().unwrap();
    let selection = Selection::new()
        .toggled("fronius-symo-gen24-plus")
        .toggled("byd-battery-box-hvs-10")
        .toggled("meyer-burger-black-400");

    c.bench_function("derive_view_embedded", |b| {
        b.iter(|| derive_view(black_box(&catalog), black_box(&selection)))
    });
}

fn benchmark_filter_by_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_category");

    for size in [10, 100, 1_000].iter() {
        let catalog = synthetic_catalog(*size);
        let filter = CategoryFilter::only("battery");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_by_category(black_box(catalog.get_all()), black_box(&filter)))
        });
    }

    group.finish();
}

fn benchmark_toggle_cycle(c: &mut Criterion) {
    c.bench_function("toggle_cycle", |b| {
        b.iter(|| {
            let mut selection = Selection::new();
            for id in ["a", "b", "c", "d", "b", "b", "a"] {
                selection.toggle(black_box(id));
            }
            selection
        })
    });
}

criterion_group!(
    benches,
    benchmark_derive_view,
    benchmark_filter_by_category,
    benchmark_toggle_cycle
);

criterion_main!(benches);
