//! Isotropic elastic material

use serde::{Deserialize, Serialize};

use crate::error::{require_poisson, require_positive, ShellError, ShellResult};

/// Linear elastic isotropic material for shell elements
///
/// Units are whatever the caller uses consistently (the tests use N and mm,
/// so `e` is in MPa).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialDef")]
pub struct ShellMaterial {
    e: f64,
    nu: f64,
}

#[derive(Deserialize)]
struct MaterialDef {
    e: f64,
    nu: f64,
}

impl TryFrom<MaterialDef> for ShellMaterial {
    type Error = ShellError;

    fn try_from(def: MaterialDef) -> ShellResult<Self> {
        Self::new(def.e, def.nu)
    }
}

impl ShellMaterial {
    /// Create a material, rejecting `e <= 0` and `|nu| >= 1`
    pub fn new(e: f64, nu: f64) -> ShellResult<Self> {
        require_positive("e", e)?;
        require_poisson(nu)?;
        Ok(Self { e, nu })
    }

    /// Normal-weight concrete with the given modulus (nu = 0.2)
    pub fn concrete(e: f64) -> ShellResult<Self> {
        Self::new(e, 0.2)
    }

    /// Modulus of elasticity
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Poisson's ratio
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Shear modulus G = E / (2 (1 + nu))
    pub fn g(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.nu))
    }
}
