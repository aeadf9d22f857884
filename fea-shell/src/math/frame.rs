//! Element local coordinate frame
//!
//! The local system of a shell element is:
//! - origin: centroid of the four corners
//! - z-axis: normal from the cross product of the diagonals (p3 - p1) x (p4 - p2)
//! - x-axis: edge p1 -> p2 with its normal component removed
//! - y-axis: z cross x

use super::{Mat3, Vec2, Vec3};

/// Below this length the diagonal cross product is treated as zero
const COLLAPSE_TOLERANCE: f64 = 1e-12;

/// Orthonormal right-handed frame attached to a shell element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub origin: Vec3,
    pub ex: Vec3,
    pub ey: Vec3,
    pub ez: Vec3,
}

impl LocalFrame {
    /// Build the frame from four ordered corners
    ///
    /// Colinear corners give a zero normal. No error is raised; the frame
    /// then has zero axes and [`LocalFrame::is_degenerate`] returns true.
    pub fn from_corners(corners: &[Vec3; 4]) -> Self {
        let origin = (corners[0] + corners[1] + corners[2] + corners[3]) / 4.0;

        let normal = (corners[2] - corners[0]).cross(&(corners[3] - corners[1]));
        let ez = normalize_or_zero(normal);

        let edge = corners[1] - corners[0];
        let ex = normalize_or_zero(edge - ez * edge.dot(&ez));
        let ey = ez.cross(&ex);

        Self { origin, ex, ey, ez }
    }

    /// True when the element normal could not be determined
    pub fn is_degenerate(&self) -> bool {
        self.ez.norm_squared() < 0.5 || self.ex.norm_squared() < 0.5
    }

    /// Direction cosine matrix; rows are the local axes in global components
    ///
    /// `local = R * global` for any vector quantity.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rows(&[self.ex.transpose(), self.ey.transpose(), self.ez.transpose()])
    }

    /// In-plane local coordinates of a global point
    pub fn to_local(&self, p: &Vec3) -> Vec2 {
        let d = p - self.origin;
        Vec2::new(d.dot(&self.ex), d.dot(&self.ey))
    }

    /// Global components of a direction given in local components
    pub fn to_global_direction(&self, v: &Vec3) -> Vec3 {
        self.ex * v.x + self.ey * v.y + self.ez * v.z
    }

    /// In-plane local coordinates of all four corners
    pub fn local_corners(&self, corners: &[Vec3; 4]) -> [Vec2; 4] {
        [
            self.to_local(&corners[0]),
            self.to_local(&corners[1]),
            self.to_local(&corners[2]),
            self.to_local(&corners[3]),
        ]
    }
}

fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len < COLLAPSE_TOLERANCE {
        Vec3::zeros()
    } else {
        v / len
    }
}
