//! Cantilever wall under an out-of-plane tip load
//!
//! Wall 5 m wide, 10 m tall, 200 mm thick, E = 25000 MPa, nu = 0.2, fixed at
//! the base, 100 kN horizontal (global Y) load at the top center.
//! Beam theory: delta = P L^3 / (3 E I), sigma = M c / I with I = B t^3 / 12.
//!
//! Units: N, mm, MPa.

use std::collections::HashMap;

use approx::assert_relative_eq;
use fea_shell::prelude::*;
use nalgebra::{DMatrix, DVector};

const WIDTH: f64 = 5000.0;
const HEIGHT: f64 = 10_000.0;
const THICKNESS: f64 = 200.0;
const E: f64 = 25_000.0;
const NU: f64 = 0.2;
const P: f64 = 100_000.0;
const NX: usize = 4;
const NZ: usize = 20;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn node_name(i: usize, j: usize) -> String {
    format!("N{}_{}", i, j)
}

struct WallModel {
    elements: Vec<ShellElement>,
    dof_map: HashMap<String, usize>,
}

fn build_wall() -> WallModel {
    let material = ShellMaterial::new(E, NU).unwrap();
    let dx = WIDTH / NX as f64;
    let dz = HEIGHT / NZ as f64;

    let mut dof_map = HashMap::new();
    for j in 0..=NZ {
        for i in 0..=NX {
            let idx = j * (NX + 1) + i;
            dof_map.insert(node_name(i, j), idx * DOF_PER_NODE);
        }
    }

    let node =
        |i: usize, j: usize| ElementNode::new(&node_name(i, j), i as f64 * dx, 0.0, j as f64 * dz);

    let mut elements = Vec::new();
    for j in 0..NZ {
        for i in 0..NX {
            let el = ShellElement::quad(
                [node(i, j), node(i + 1, j), node(i + 1, j + 1), node(i, j + 1)],
                THICKNESS,
                material,
            )
            .unwrap();
            elements.push(el);
        }
    }

    WallModel { elements, dof_map }
}

fn element_dofs(el: &ShellElement, dof_map: &HashMap<String, usize>) -> Vec<usize> {
    el.nodes()
        .iter()
        .flat_map(|n| {
            let start = dof_map[&n.name];
            start..start + DOF_PER_NODE
        })
        .collect()
}

/// Dense global assembly, fixed base, LU solve
fn solve(model: &WallModel, options: &ShellOptions, f: &DVector<f64>) -> DVector<f64> {
    let n = model.dof_map.len() * DOF_PER_NODE;
    let mut k = DMatrix::<f64>::zeros(n, n);

    for el in &model.elements {
        let report = validate_element(el, options);
        assert!(report.is_valid, "{:?}", report.messages());

        let ke = element_stiffness(el, options).unwrap().into_result().unwrap();
        let dofs = element_dofs(el, &model.dof_map);
        for (a, &ga) in dofs.iter().enumerate() {
            for (b, &gb) in dofs.iter().enumerate() {
                k[(ga, gb)] += ke[(a, b)];
            }
        }
    }

    let fixed: Vec<usize> = (0..=NX)
        .flat_map(|i| {
            let start = model.dof_map[&node_name(i, 0)];
            start..start + DOF_PER_NODE
        })
        .collect();
    let free: Vec<usize> = (0..n).filter(|d| !fixed.contains(d)).collect();

    let kff = DMatrix::from_fn(free.len(), free.len(), |r, c| k[(free[r], free[c])]);
    let ff = DVector::from_fn(free.len(), |r, _| f[free[r]]);
    let uf = kff.lu().solve(&ff).expect("stiffness matrix is singular");

    let mut u = DVector::zeros(n);
    for (r, &d) in free.iter().enumerate() {
        u[d] = uf[r];
    }
    u
}

fn second_moment() -> f64 {
    WIDTH * THICKNESS.powi(3) / 12.0
}

#[test]
fn test_cantilever_wall_tip_deflection() {
    init_logger();
    let model = build_wall();
    let options = ShellOptions::default().with_drilling_stabilization(1e-3);

    let tip = node_name(NX / 2, NZ);
    let loads = [NodeLoad::force(&tip, 0.0, P, 0.0)];
    let f = assemble_load_vector(&loads, &[], &model.dof_map, 1.0, &options).unwrap();
    let u = solve(&model, &options, &f);

    let expected = P * HEIGHT.powi(3) / (3.0 * E * second_moment());
    assert_relative_eq!(expected, 400.0, max_relative = 1e-9);

    // Mean out-of-plane deflection along the free edge
    let top_row: Vec<f64> = (0..=NX).map(|i| u[model.dof_map[&node_name(i, NZ)] + 1]).collect();
    let top = top_row.iter().sum::<f64>() / top_row.len() as f64;
    assert!(
        (top - expected).abs() / expected < 0.05,
        "tip deflection {:.2} mm vs beam theory {:.2} mm",
        top,
        expected
    );

    // Load point moves the same way
    let at_load = u[model.dof_map[&tip] + 1];
    assert!(at_load > 0.0);
}

#[test]
fn test_cantilever_wall_base_stress() {
    init_logger();
    let model = build_wall();
    let options = ShellOptions::default().with_drilling_stabilization(1e-3);

    let tip = node_name(NX / 2, NZ);
    let loads = [NodeLoad::force(&tip, 0.0, P, 0.0)];
    let f = assemble_load_vector(&loads, &[], &model.dof_map, 1.0, &options).unwrap();
    let u = solve(&model, &options, &f);

    // Bottom row of elements
    let mut m22 = 0.0;
    let mut sigma = 0.0;
    for el in &model.elements[..NX] {
        let ue: Vec<f64> = element_dofs(el, &model.dof_map).iter().map(|&d| u[d]).collect();
        let forces = recover_shell_forces(el, &ue, &options)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(forces.v13, 0.0);
        m22 += forces.m22.abs();

        let s = forces.surface_stresses(THICKNESS).unwrap();
        sigma += s.top.sy.abs().max(s.bottom.sy.abs());
    }
    m22 /= NX as f64;
    sigma /= NX as f64;

    let expected = P * HEIGHT * (THICKNESS / 2.0) / second_moment();
    assert_relative_eq!(expected, 30.0, max_relative = 1e-9);

    let from_moment = 6.0 * m22 / THICKNESS.powi(2);
    assert!(
        (from_moment - expected).abs() / expected < 0.10,
        "base stress {:.2} MPa vs M c / I = {:.2} MPa",
        from_moment,
        expected
    );
    assert_relative_eq!(sigma, from_moment, max_relative = 1e-4);
}

#[test]
fn test_unloaded_wall_stays_at_rest() {
    init_logger();
    let model = build_wall();
    let options = ShellOptions::default().with_drilling_stabilization(1e-3);
    let f = assemble_load_vector(&[], &[], &model.dof_map, 1.0, &options).unwrap();
    let u = solve(&model, &options, &f);
    assert!(u.iter().all(|&v| v == 0.0));

    let el = &model.elements[0];
    let ue: Vec<f64> = element_dofs(el, &model.dof_map).iter().map(|&d| u[d]).collect();
    let forces = recover_shell_forces(el, &ue, &options).unwrap().into_inner();
    assert_eq!(forces, ShellForces::default());
}
