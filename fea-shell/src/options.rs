//! Kernel options

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShellResult;

/// Tolerances and switches shared by every kernel operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// |det J| below this is treated as singular
    pub singular_tolerance: f64,
    /// Edge length ratio at which the validator warns
    pub max_aspect_ratio: f64,
    /// Smallest acceptable corner angle in degrees
    pub min_corner_angle: f64,
    /// Largest acceptable corner angle in degrees
    pub max_corner_angle: f64,
    /// Fraction of the smallest rotational bending stiffness added to each
    /// drilling DOF. 0.0 leaves the drilling DOF without stiffness.
    pub drilling_stiffness_factor: f64,
    /// Use rayon for multi-element loops
    pub parallel: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-10,
            max_aspect_ratio: 10.0,
            min_corner_angle: 30.0,
            max_corner_angle: 150.0,
            drilling_stiffness_factor: 0.0,
            parallel: true,
        }
    }
}

impl ShellOptions {
    /// Parse options from a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> ShellResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> ShellResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Stabilize the drilling DOF with a weak spring
    pub fn with_drilling_stabilization(mut self, factor: f64) -> Self {
        self.drilling_stiffness_factor = factor;
        self
    }

    /// Set the singular Jacobian tolerance
    pub fn with_singular_tolerance(mut self, tol: f64) -> Self {
        self.singular_tolerance = tol;
        self
    }

    /// Set the aspect ratio warning limit
    pub fn with_max_aspect_ratio(mut self, ratio: f64) -> Self {
        self.max_aspect_ratio = ratio;
        self
    }

    /// Set the acceptable corner angle range (degrees)
    pub fn with_corner_angles(mut self, min: f64, max: f64) -> Self {
        self.min_corner_angle = min;
        self.max_corner_angle = max;
        self
    }

    /// Run element loops on the calling thread only
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
