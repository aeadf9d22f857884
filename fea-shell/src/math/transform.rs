//! Local/global transformation for 24-DOF shell quantities
//!
//! The full transformation is block diagonal: eight copies of the 3x3 direction
//! cosine matrix R (translations and rotations of each of the four nodes).
//! It is applied block by block instead of building the 24x24 matrix.

use super::frame::LocalFrame;
use super::{Mat24, Mat3, Vec24, Vec3};

/// Number of 3-component blocks in a 24-DOF element vector
const BLOCKS: usize = 8;

/// Block-diagonal rotation built from a [`LocalFrame`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalRotation {
    r: Mat3,
}

impl NodalRotation {
    pub fn new(frame: &LocalFrame) -> Self {
        Self { r: frame.rotation() }
    }

    /// The 3x3 direction cosine block
    pub fn block(&self) -> &Mat3 {
        &self.r
    }

    /// [Kg] = [T]^T [Kl] [T], one 3x3 block at a time
    pub fn to_global_stiffness(&self, k_local: &Mat24) -> Mat24 {
        let rt = self.r.transpose();
        let mut k_global = Mat24::zeros();
        for a in 0..BLOCKS {
            for b in 0..BLOCKS {
                let sub: Mat3 = k_local.fixed_view::<3, 3>(3 * a, 3 * b).into_owned();
                let rotated = rt * sub * self.r;
                k_global.fixed_view_mut::<3, 3>(3 * a, 3 * b).copy_from(&rotated);
            }
        }
        k_global
    }

    /// {d_local} = [T] {d_global}
    pub fn to_local_vector(&self, global: &Vec24) -> Vec24 {
        self.apply(&self.r, global)
    }

    /// {f_global} = [T]^T {f_local}
    pub fn to_global_vector(&self, local: &Vec24) -> Vec24 {
        self.apply(&self.r.transpose(), local)
    }

    fn apply(&self, m: &Mat3, v: &Vec24) -> Vec24 {
        let mut out = Vec24::zeros();
        for a in 0..BLOCKS {
            let part: Vec3 = m * v.fixed_rows::<3>(3 * a);
            out.fixed_rows_mut::<3>(3 * a).copy_from(&part);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn skewed_frame() -> LocalFrame {
        LocalFrame::from_corners(&[
            Vec3::new(0.1, 0.3, 0.0),
            Vec3::new(2.0, 0.5, 1.0),
            Vec3::new(2.4, 2.0, 1.5),
            Vec3::new(-0.2, 1.6, 0.4),
        ])
    }

    fn dense_transform(r: &Mat3) -> Mat24 {
        let mut t = Mat24::zeros();
        for a in 0..BLOCKS {
            t.fixed_view_mut::<3, 3>(3 * a, 3 * a).copy_from(r);
        }
        t
    }

    #[test]
    fn test_blockwise_matches_dense_product() {
        let rot = NodalRotation::new(&skewed_frame());
        let k = Mat24::from_fn(|i, j| {
            ((i * 7 + j * 3) % 11) as f64 + if i == j { 20.0 } else { 0.0 }
        });
        let k = k + k.transpose();

        let t = dense_transform(rot.block());
        let expected = t.transpose() * k * t;
        assert_relative_eq!(rot.to_global_stiffness(&k), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_vector_round_trip() {
        let rot = NodalRotation::new(&skewed_frame());
        let v = Vec24::from_fn(|i, _| i as f64 * 0.5 - 3.0);
        let back = rot.to_global_vector(&rot.to_local_vector(&v));
        assert_relative_eq!(back, v, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_frame_is_no_op() {
        let frame = LocalFrame::from_corners(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]);
        let rot = NodalRotation::new(&frame);
        let k = Mat24::from_fn(|i, j| (i + j) as f64);
        assert_relative_eq!(rot.to_global_stiffness(&k), k, epsilon = 1e-12);
    }
}
