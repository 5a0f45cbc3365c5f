//! Criterion benchmarks for rendering and validating a document.
//!
//! Run with:
//! ```bash
//! cargo bench --package hyper-core --bench render_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyper_core::keymap::KeyCode;
use hyper_core::layers::{app, HyperLayers, HyperSide};
use hyper_core::{render, validate, Document, Global, Profile};

/// A document with `layers` sublayers of 26 bindings each.
fn document(layers: usize) -> Document {
    let letters: Vec<KeyCode> = KeyCode::ALL
        .iter()
        .copied()
        .filter(|k| k.name().len() == 1 && k.name().chars().all(|c| c.is_ascii_lowercase()))
        .collect();

    let set = letters
        .iter()
        .take(layers)
        .fold(HyperLayers::new(HyperSide::Left), |acc, &layer| {
            let bound = letters.clone();
            acc.sublayer(layer, move |mut l| {
                for k in bound.into_iter().filter(|k| *k != layer) {
                    l = l.bind(k, app("Finder"));
                }
                l
            })
        });

    // Letters are distinct and every sublayer has bindings.
    let rules = set.build().unwrap_or_default();
    Document::single_profile(Global::default(), Profile::new("Default", rules))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    for layers in [1usize, 6, 12] {
        let doc = document(layers);
        group.bench_with_input(BenchmarkId::new("render", layers), &doc, |b, doc| {
            b.iter(|| render(black_box(doc)))
        });
        group.bench_with_input(BenchmarkId::new("validate", layers), &doc, |b, doc| {
            b.iter(|| validate(black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
