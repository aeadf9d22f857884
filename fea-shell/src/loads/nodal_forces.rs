//! Node force maps and their accumulation across elements

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{distribute_area_load, AreaLoad};
use crate::elements::ShellElement;
use crate::error::{ShellError, ShellResult};
use crate::math::Vec3;
use crate::options::ShellOptions;
use crate::outcome::Checked;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Node name -> [FX, FY, FZ, MX, MY, MZ]; absent nodes read as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodalForceMap {
    forces: HashMap<String, [f64; 6]>,
}

impl NodalForceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add six components to a node
    pub fn add(&mut self, node: &str, force: [f64; 6]) {
        self.forces
            .entry(node.to_string())
            .and_modify(|f| {
                for (a, b) in f.iter_mut().zip(force.iter()) {
                    *a += b;
                }
            })
            .or_insert(force);
    }

    /// Add a force (no moment) to a node
    pub fn add_force(&mut self, node: &str, force: &Vec3) {
        self.add(node, [force.x, force.y, force.z, 0.0, 0.0, 0.0]);
    }

    /// Components at a node, zeros if the node carries nothing
    pub fn get(&self, node: &str) -> [f64; 6] {
        self.forces.get(node).copied().unwrap_or([0.0; 6])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.forces.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &[f64; 6])> {
        self.forces.iter()
    }

    /// Sum every node of `other` into `self`
    pub fn merge_from(&mut self, other: &NodalForceMap) {
        for (node, force) in &other.forces {
            self.add(node, *force);
        }
    }

    /// Component-wise sum of two maps; nodes present in only one pass through
    pub fn merge(a: &NodalForceMap, b: &NodalForceMap) -> NodalForceMap {
        let mut out = a.clone();
        out.merge_from(b);
        out
    }

    /// Resultant force over all nodes
    pub fn total_force(&self) -> Vec3 {
        self.forces
            .values()
            .fold(Vec3::zeros(), |acc, f| acc + Vec3::new(f[0], f[1], f[2]))
    }
}

/// Distribute one area load over many elements and sum the nodal forces
///
/// Fails with [`ShellError::DegenerateElement`] naming the lowest index whose
/// geometry was degenerate.
pub fn accumulate_area_loads(
    elements: &[ShellElement],
    load: &AreaLoad,
    options: &ShellOptions,
) -> ShellResult<NodalForceMap> {
    let per_element = distribute_each(elements, load, options);

    let mut maps = Vec::with_capacity(per_element.len());
    for (index, result) in per_element.into_iter().enumerate() {
        match result? {
            Checked::Valid(map) => maps.push(map),
            Checked::Degenerate { reason, .. } => {
                return Err(ShellError::DegenerateElement { index, reason });
            }
        }
    }

    Ok(reduce_maps(maps, options))
}

#[cfg(feature = "parallel")]
fn distribute_each(
    elements: &[ShellElement],
    load: &AreaLoad,
    options: &ShellOptions,
) -> Vec<ShellResult<Checked<NodalForceMap>>> {
    if options.parallel {
        elements
            .par_iter()
            .map(|e| distribute_area_load(e, load, options))
            .collect()
    } else {
        elements
            .iter()
            .map(|e| distribute_area_load(e, load, options))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn distribute_each(
    elements: &[ShellElement],
    load: &AreaLoad,
    options: &ShellOptions,
) -> Vec<ShellResult<Checked<NodalForceMap>>> {
    elements
        .iter()
        .map(|e| distribute_area_load(e, load, options))
        .collect()
}

#[cfg(feature = "parallel")]
fn reduce_maps(maps: Vec<NodalForceMap>, options: &ShellOptions) -> NodalForceMap {
    if options.parallel {
        maps.par_iter()
            .fold(NodalForceMap::new, |mut acc, m| {
                acc.merge_from(m);
                acc
            })
            .reduce(NodalForceMap::new, |a, b| NodalForceMap::merge(&a, &b))
    } else {
        sequential_reduce(&maps)
    }
}

#[cfg(not(feature = "parallel"))]
fn reduce_maps(maps: Vec<NodalForceMap>, _options: &ShellOptions) -> NodalForceMap {
    sequential_reduce(&maps)
}

fn sequential_reduce(maps: &[NodalForceMap]) -> NodalForceMap {
    maps.iter().fold(NodalForceMap::new(), |mut acc, m| {
        acc.merge_from(m);
        acc
    })
}
