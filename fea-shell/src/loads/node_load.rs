//! Node loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A load applied directly to a named node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Node the load acts on
    pub node: String,
    /// Force in X direction (N)
    pub fx: f64,
    /// Force in Y direction (N)
    pub fy: f64,
    /// Force in Z direction (N)
    pub fz: f64,
    /// Moment about X axis (N·mm)
    pub mx: f64,
    /// Moment about Y axis (N·mm)
    pub my: f64,
    /// Moment about Z axis (N·mm)
    pub mz: f64,
}

impl NodeLoad {
    /// Create a new node load with all components
    pub fn new(node: &str, fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self {
            node: node.to_string(),
            fx,
            fy,
            fz,
            mx,
            my,
            mz,
        }
    }

    /// Create a force-only node load
    pub fn force(node: &str, fx: f64, fy: f64, fz: f64) -> Self {
        Self::new(node, fx, fy, fz, 0.0, 0.0, 0.0)
    }

    /// Create a moment-only node load
    pub fn moment(node: &str, mx: f64, my: f64, mz: f64) -> Self {
        Self::new(node, 0.0, 0.0, 0.0, mx, my, mz)
    }

    /// Get the load as an array [FX, FY, FZ, MX, MY, MZ]
    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }
}
