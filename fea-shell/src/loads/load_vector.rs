//! Dense global load vector assembly

use std::collections::HashMap;

use super::{NodalForceMap, NodeLoad};
use crate::error::{ShellError, ShellResult};
use crate::math::DVec;
use crate::options::ShellOptions;
use crate::stiffness::DOF_PER_NODE;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Assemble nodal and distributed loads into one global vector
///
/// `dof_map` gives the first global DOF index of each node; the vector has
/// `dof_map.len() * 6` entries. Every contribution is multiplied by `factor`
/// (a load combination factor). Nodes without load keep exact zeros.
/// Distributed maps are summed with rayon when `options.parallel` is set.
pub fn assemble_load_vector(
    nodal_loads: &[NodeLoad],
    distributed: &[NodalForceMap],
    dof_map: &HashMap<String, usize>,
    factor: f64,
    options: &ShellOptions,
) -> ShellResult<DVec> {
    if !factor.is_finite() {
        return Err(ShellError::InvalidParameter {
            name: "factor",
            value: factor,
            reason: "must be finite",
        });
    }

    let n = dof_map.len() * DOF_PER_NODE;
    let mut f = DVec::zeros(n);

    for load in nodal_loads {
        scatter(&mut f, dof_map, &load.node, &load.as_array(), factor)?;
    }

    f += reduce_distributed(distributed, dof_map, factor, n, options.parallel)?;
    Ok(f)
}

/// Add one node's six components at its DOF offset
fn scatter(
    f: &mut DVec,
    dof_map: &HashMap<String, usize>,
    node: &str,
    components: &[f64; 6],
    factor: f64,
) -> ShellResult<()> {
    let start = *dof_map
        .get(node)
        .ok_or_else(|| ShellError::NodeNotFound(node.to_string()))?;
    if start + DOF_PER_NODE > f.len() {
        return Err(ShellError::DimensionMismatch {
            expected: f.len(),
            found: start + DOF_PER_NODE,
        });
    }
    for (k, c) in components.iter().enumerate() {
        if *c != 0.0 {
            f[start + k] += c * factor;
        }
    }
    Ok(())
}

fn scatter_map(
    f: &mut DVec,
    dof_map: &HashMap<String, usize>,
    map: &NodalForceMap,
    factor: f64,
) -> ShellResult<()> {
    for (node, components) in map.iter() {
        scatter(f, dof_map, node, components, factor)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn reduce_distributed(
    distributed: &[NodalForceMap],
    dof_map: &HashMap<String, usize>,
    factor: f64,
    n: usize,
    parallel: bool,
) -> ShellResult<DVec> {
    if !parallel {
        return reduce_sequential(distributed, dof_map, factor, n);
    }
    // Per-thread partial vectors, summed at the end
    distributed
        .par_iter()
        .try_fold(
            || DVec::zeros(n),
            |mut partial, map| -> ShellResult<DVec> {
                scatter_map(&mut partial, dof_map, map, factor)?;
                Ok(partial)
            },
        )
        .try_reduce(|| DVec::zeros(n), |a, b| Ok(a + b))
}

#[cfg(not(feature = "parallel"))]
fn reduce_distributed(
    distributed: &[NodalForceMap],
    dof_map: &HashMap<String, usize>,
    factor: f64,
    n: usize,
    _parallel: bool,
) -> ShellResult<DVec> {
    reduce_sequential(distributed, dof_map, factor, n)
}

fn reduce_sequential(
    distributed: &[NodalForceMap],
    dof_map: &HashMap<String, usize>,
    factor: f64,
    n: usize,
) -> ShellResult<DVec> {
    let mut f = DVec::zeros(n);
    for map in distributed {
        scatter_map(&mut f, dof_map, map, factor)?;
    }
    Ok(f)
}
