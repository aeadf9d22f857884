//! Mathematical building blocks for shell element calculations

pub mod constitutive;
pub mod frame;
pub mod jacobian;
pub mod shape;
pub mod strain;
pub mod transform;

use nalgebra::{DVector, Matrix2, Matrix3, SMatrix, SVector, Vector2, Vector3};

pub use constitutive::{plane_stress, plate_bending};
pub use frame::LocalFrame;
pub use jacobian::Jacobian;
pub use shape::GAUSS_POINTS_2X2;
pub use strain::{bending_b, membrane_b};
pub use transform::NodalRotation;

pub type DVec = DVector<f64>;
pub type Mat2 = Matrix2<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;

/// Membrane strain-displacement matrix (3 strains x 4 nodes x 2 DOFs)
pub type Mat3x8 = SMatrix<f64, 3, 8>;
/// Bending strain-displacement matrix (3 curvatures x 4 nodes x 3 DOFs)
pub type Mat3x12 = SMatrix<f64, 3, 12>;
pub type Mat8 = SMatrix<f64, 8, 8>;
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 24x24 matrix for shell stiffness
pub type Mat24 = SMatrix<f64, 24, 24>;
/// 24-element vector for shell forces/displacements
pub type Vec24 = SVector<f64, 24>;
