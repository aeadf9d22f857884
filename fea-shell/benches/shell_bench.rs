//! Benchmarks for shell element kernels

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fea_shell::prelude::*;

fn create_skewed_element() -> ShellElement {
    ShellElement::quad(
        [
            ElementNode::new("A", 0.0, 0.0, 0.0),
            ElementNode::new("B", 1200.0, 80.0, 60.0),
            ElementNode::new("C", 1300.0, 720.0, 540.0),
            ElementNode::new("D", -100.0, 640.0, 480.0),
        ],
        200.0,
        ShellMaterial::concrete(25_000.0).unwrap(),
    )
    .unwrap()
}

fn create_slab(nx: usize, ny: usize) -> Vec<ShellElement> {
    let material = ShellMaterial::concrete(30_000.0).unwrap();
    let size = 500.0;
    let node = |i: usize, j: usize| {
        ElementNode::new(&format!("N{}_{}", i, j), i as f64 * size, j as f64 * size, 0.0)
    };

    let mut elements = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let corners = [node(i, j), node(i + 1, j), node(i + 1, j + 1), node(i, j + 1)];
            elements.push(ShellElement::quad(corners, 250.0, material).unwrap());
        }
    }
    elements
}

fn benchmark_element_stiffness(c: &mut Criterion) {
    let element = create_skewed_element();
    let options = ShellOptions::default();
    c.bench_function("element_stiffness_skewed", |b| {
        b.iter(|| {
            let k = element_stiffness(black_box(&element), &options).unwrap();
            black_box(k);
        })
    });
}

fn benchmark_recovery(c: &mut Criterion) {
    let element = create_skewed_element();
    let options = ShellOptions::default();
    let u: Vec<f64> = (0..24).map(|i| (i as f64 * 0.37).sin() * 1e-3).collect();
    c.bench_function("recover_shell_forces", |b| {
        b.iter(|| {
            let f = recover_shell_forces(black_box(&element), black_box(&u), &options).unwrap();
            black_box(f);
        })
    });
}

fn benchmark_area_loads(c: &mut Criterion) {
    let slab = create_slab(40, 40);
    let load = AreaLoad::gravity(0.005);

    c.bench_function("accumulate_area_loads_40x40_parallel", |b| {
        let options = ShellOptions::default();
        b.iter(|| {
            let f = accumulate_area_loads(black_box(&slab), &load, &options).unwrap();
            black_box(f);
        })
    });

    c.bench_function("accumulate_area_loads_40x40_sequential", |b| {
        let options = ShellOptions::default().sequential();
        b.iter(|| {
            let f = accumulate_area_loads(black_box(&slab), &load, &options).unwrap();
            black_box(f);
        })
    });
}

criterion_group!(
    benches,
    benchmark_element_stiffness,
    benchmark_recovery,
    benchmark_area_loads,
);

criterion_main!(benches);
