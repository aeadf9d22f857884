//! Result types for shell element recovery

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, ShellResult};
use crate::math::Vec3;

/// Internal forces of a shell element in its local frame, per unit length
///
/// Membrane forces f11, f22, f12 (N/mm), bending moments m11, m22, m12
/// (N·mm/mm), transverse shears v13, v23 (N/mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellForces {
    pub f11: f64,
    pub f22: f64,
    pub f12: f64,
    pub m11: f64,
    pub m22: f64,
    pub m12: f64,
    /// Always 0: the Kirchhoff bending formulation has no transverse shear strain
    pub v13: f64,
    /// Always 0, see `v13`
    pub v23: f64,
}

impl ShellForces {
    /// Build from membrane force and moment resultants
    pub fn from_resultants(membrane: &Vec3, bending: &Vec3) -> Self {
        Self {
            f11: membrane.x,
            f22: membrane.y,
            f12: membrane.z,
            m11: bending.x,
            m22: bending.y,
            m12: bending.z,
            v13: 0.0,
            v23: 0.0,
        }
    }

    /// Stresses on the top (+z local) and bottom faces: sigma = f/t +/- 6 m / t^2
    pub fn surface_stresses(&self, thickness: f64) -> ShellResult<SurfaceStresses> {
        require_positive("thickness", thickness)?;
        let t = thickness;
        let s = |f: f64, m: f64, sign: f64| f / t + sign * 6.0 * m / (t * t);

        let top = PlateStress::from_components(
            s(self.f11, self.m11, 1.0),
            s(self.f22, self.m22, 1.0),
            s(self.f12, self.m12, 1.0),
        );
        let bottom = PlateStress::from_components(
            s(self.f11, self.m11, -1.0),
            s(self.f22, self.m22, -1.0),
            s(self.f12, self.m12, -1.0),
        );
        Ok(SurfaceStresses { top, bottom })
    }

    /// Largest von Mises stress of the two faces
    pub fn max_von_mises(&self, thickness: f64) -> ShellResult<f64> {
        let s = self.surface_stresses(thickness)?;
        Ok(s.top.von_mises.max(s.bottom.von_mises))
    }
}

/// Stress state at one face of a shell element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateStress {
    /// Normal stress in local x direction
    pub sx: f64,
    /// Normal stress in local y direction
    pub sy: f64,
    /// Shear stress xy
    pub txy: f64,
    /// Von Mises equivalent stress
    pub von_mises: f64,
    /// Maximum principal stress
    pub s1: f64,
    /// Minimum principal stress
    pub s2: f64,
}

impl PlateStress {
    /// Create from stress components
    pub fn from_components(sx: f64, sy: f64, txy: f64) -> Self {
        let von_mises = (sx.powi(2) - sx * sy + sy.powi(2) + 3.0 * txy.powi(2)).sqrt();

        // Principal stresses
        let s_avg = (sx + sy) / 2.0;
        let r = ((sx - sy).powi(2) / 4.0 + txy.powi(2)).sqrt();

        Self {
            sx,
            sy,
            txy,
            von_mises,
            s1: s_avg + r,
            s2: s_avg - r,
        }
    }
}

/// Top and bottom face stresses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStresses {
    pub top: PlateStress,
    pub bottom: PlateStress,
}
