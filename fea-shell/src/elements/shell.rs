//! Shell element - planar quadrilateral (or degenerate triangular) wall/slab element

use serde::{Deserialize, Serialize};

use super::{ElementNode, ShellMaterial};
use crate::error::{require_positive, ShellError, ShellResult};
use crate::math::{LocalFrame, Vec3};

/// A planar shell element with membrane and plate bending action
///
/// 3 or 4 nodes with 6 DOFs per node (DX, DY, DZ, RX, RY, RZ). Nodes are
/// ordered counter-clockwise when viewed along the intended positive normal.
/// A three-node element is handled as a quad whose fourth corner coincides
/// with the third.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShellElementDef")]
pub struct ShellElement {
    nodes: Vec<ElementNode>,
    thickness: f64,
    material: ShellMaterial,
}

#[derive(Deserialize)]
struct ShellElementDef {
    nodes: Vec<ElementNode>,
    thickness: f64,
    material: ShellMaterial,
}

impl TryFrom<ShellElementDef> for ShellElement {
    type Error = ShellError;

    fn try_from(def: ShellElementDef) -> ShellResult<Self> {
        Self::new(def.nodes, def.thickness, def.material)
    }
}

impl ShellElement {
    /// Create a new shell element from 3 or 4 ordered nodes
    pub fn new(
        nodes: Vec<ElementNode>,
        thickness: f64,
        material: ShellMaterial,
    ) -> ShellResult<Self> {
        if nodes.len() != 3 && nodes.len() != 4 {
            return Err(ShellError::InvalidGeometry(format!(
                "shell element requires 3 or 4 nodes, got {}",
                nodes.len()
            )));
        }
        if let Some(bad) = nodes.iter().find(|n| !n.position.is_finite()) {
            return Err(ShellError::InvalidGeometry(format!(
                "node '{}' has non-finite coordinates",
                bad.name
            )));
        }
        require_positive("thickness", thickness)?;

        Ok(Self {
            nodes,
            thickness,
            material,
        })
    }

    /// Create a four-node element
    pub fn quad(
        nodes: [ElementNode; 4],
        thickness: f64,
        material: ShellMaterial,
    ) -> ShellResult<Self> {
        Self::new(nodes.into(), thickness, material)
    }

    /// Create a three-node element
    pub fn triangle(
        nodes: [ElementNode; 3],
        thickness: f64,
        material: ShellMaterial,
    ) -> ShellResult<Self> {
        Self::new(nodes.into(), thickness, material)
    }

    pub fn nodes(&self) -> &[ElementNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_triangle(&self) -> bool {
        self.nodes.len() == 3
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn material(&self) -> &ShellMaterial {
        &self.material
    }

    /// Same element with another thickness
    pub fn with_thickness(&self, thickness: f64) -> ShellResult<Self> {
        Self::new(self.nodes.clone(), thickness, self.material)
    }

    /// Same element with another material
    pub fn with_material(&self, material: ShellMaterial) -> Self {
        Self {
            material,
            ..self.clone()
        }
    }

    /// The four corner positions, repeating the third corner for triangles
    pub fn corners(&self) -> [Vec3; 4] {
        let p = |i: usize| self.nodes[i].position.to_vector();
        let last = if self.is_triangle() { p(2) } else { p(3) };
        [p(0), p(1), p(2), last]
    }

    /// Local frame of the element, rebuilt from the current corners
    pub fn local_frame(&self) -> LocalFrame {
        LocalFrame::from_corners(&self.corners())
    }
}
