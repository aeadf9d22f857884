//! Node coordinates

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// A point in global 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Node3D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Node3D {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position vector
    pub fn to_vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node3D) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A named corner of a shell element
///
/// The name is the node id shared between elements; force maps and DOF maps
/// are keyed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: String,
    pub position: Node3D,
}

impl ElementNode {
    pub fn new(name: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.to_string(),
            position: Node3D::new(x, y, z),
        }
    }
}
