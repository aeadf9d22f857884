//! Uniform area loads on shell elements

use serde::{Deserialize, Serialize};

use super::NodeLoad;
use crate::math::{LocalFrame, Vec3};

/// Direction of an area load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadDirection {
    /// Global -Z (self weight, superimposed dead load)
    Gravity,
    /// X axis (global or element local, see [`AreaLoad::global`])
    X,
    /// Y axis (global or element local)
    Y,
    /// Z axis (global or element local)
    Z,
    /// Element normal ez
    LocalNormal,
}

/// A uniform load per unit area over a shell element
///
/// Positive intensity acts along the direction; negative intensity reverses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaLoad {
    /// Force per unit area (N/mm²)
    pub intensity: f64,
    pub direction: LoadDirection,
    /// X/Y/Z refer to global axes when true, element axes otherwise
    pub global: bool,
}

impl AreaLoad {
    pub fn new(intensity: f64, direction: LoadDirection, global: bool) -> Self {
        Self {
            intensity,
            direction,
            global,
        }
    }

    /// Downward load in global -Z
    pub fn gravity(intensity: f64) -> Self {
        Self::new(intensity, LoadDirection::Gravity, true)
    }

    /// Pressure along the element normal
    pub fn normal(intensity: f64) -> Self {
        Self::new(intensity, LoadDirection::LocalNormal, false)
    }

    /// Load along a global axis
    pub fn global(intensity: f64, direction: LoadDirection) -> Self {
        Self::new(intensity, direction, true)
    }

    /// Load along an element axis
    pub fn local(intensity: f64, direction: LoadDirection) -> Self {
        Self::new(intensity, direction, false)
    }

    /// Unit direction in global components
    pub fn direction_vector(&self, frame: &LocalFrame) -> Vec3 {
        match (self.direction, self.global) {
            (LoadDirection::Gravity, _) => -Vec3::z(),
            (LoadDirection::LocalNormal, _) => frame.ez,
            (LoadDirection::X, true) => Vec3::x(),
            (LoadDirection::Y, true) => Vec3::y(),
            (LoadDirection::Z, true) => Vec3::z(),
            (LoadDirection::X, false) => frame.ex,
            (LoadDirection::Y, false) => frame.ey,
            (LoadDirection::Z, false) => frame.ez,
        }
    }
}

/// Any load the kernel can turn into nodal forces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Load {
    Nodal(NodeLoad),
    Area(AreaLoad),
}

impl From<NodeLoad> for Load {
    fn from(load: NodeLoad) -> Self {
        Load::Nodal(load)
    }
}

impl From<AreaLoad> for Load {
    fn from(load: AreaLoad) -> Self {
        Load::Area(load)
    }
}
