//! Tagged results for computations that can silently degrade on bad geometry
//!
//! Near-zero Jacobians and collapsed element normals do not abort a
//! computation; the affected integration points contribute nothing and the
//! result is returned as [`Checked::Degenerate`] together with the reason.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Why a computation was degraded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Degeneracy {
    /// The diagonal cross product vanished, so no element normal exists
    CollapsedNormal,
    /// |det J| fell below the tolerance at these Gauss points (indices 0..4)
    SingularJacobian { gauss_points: Vec<usize> },
    /// det J was negative at these Gauss points
    InvertedJacobian { gauss_points: Vec<usize> },
    /// |det J| fell below the tolerance at the element centroid
    SingularCentroid,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::CollapsedNormal => {
                write!(f, "element normal is undefined (colinear nodes)")
            }
            Degeneracy::SingularJacobian { gauss_points } => {
                write!(f, "singular Jacobian at Gauss points {:?}", gauss_points)
            }
            Degeneracy::InvertedJacobian { gauss_points } => {
                write!(f, "negative Jacobian at Gauss points {:?}", gauss_points)
            }
            Degeneracy::SingularCentroid => write!(f, "singular Jacobian at element centroid"),
        }
    }
}

/// A value that is either trustworthy or was computed on degenerate geometry
#[must_use = "a degenerate result must be inspected before it is used"]
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    Valid(T),
    Degenerate { value: T, reason: Degeneracy },
}

impl<T> Checked<T> {
    /// Tag `value` as degenerate when `reason` is present
    pub fn from_parts(value: T, reason: Option<Degeneracy>) -> Self {
        match reason {
            Some(reason) => Checked::Degenerate { value, reason },
            None => Checked::Valid(value),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Checked::Valid(_))
    }

    pub fn is_degenerate(&self) -> bool {
        !self.is_valid()
    }

    /// The value only if it is valid
    pub fn valid(&self) -> Option<&T> {
        match self {
            Checked::Valid(v) => Some(v),
            Checked::Degenerate { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&Degeneracy> {
        match self {
            Checked::Valid(_) => None,
            Checked::Degenerate { reason, .. } => Some(reason),
        }
    }

    /// Strict conversion: a degenerate value becomes `ShellError::Degenerate`
    pub fn into_result(self) -> ShellResult<T> {
        match self {
            Checked::Valid(v) => Ok(v),
            Checked::Degenerate { reason, .. } => Err(ShellError::Degenerate(reason)),
        }
    }

    /// Take the value regardless of its tag (the degraded value for degenerate input)
    pub fn into_inner(self) -> T {
        match self {
            Checked::Valid(v) | Checked::Degenerate { value: v, .. } => v,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Checked<U> {
        match self {
            Checked::Valid(v) => Checked::Valid(f(v)),
            Checked::Degenerate { value, reason } => Checked::Degenerate {
                value: f(value),
                reason,
            },
        }
    }
}
