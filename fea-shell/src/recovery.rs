//! Internal force recovery from solved displacements

use nalgebra::SVector;

use crate::elements::ShellElement;
use crate::error::{ShellError, ShellResult};
use crate::math::{
    bending_b, membrane_b, plane_stress, plate_bending, Jacobian, NodalRotation, Vec24, Vec3,
};
use crate::options::ShellOptions;
use crate::outcome::{Checked, Degeneracy};
use crate::results::ShellForces;
use crate::stiffness::DOF_PER_NODE;

/// Element length of the displacement vector
const ELEMENT_DOFS: usize = 24;

/// Recover membrane forces and bending moments at the element centroid
///
/// `displacements` holds the 24 global DOFs of the element in node-major
/// order [DX, DY, DZ, RX, RY, RZ]. For a three-node element the fourth block
/// is ignored and node 3 is used in its place.
///
/// det J at the centroid is a quarter of the diagonal cross product, so it is
/// positive even when a concave element is inverted at a Gauss point.
pub fn recover_shell_forces(
    element: &ShellElement,
    displacements: &[f64],
    options: &ShellOptions,
) -> ShellResult<Checked<ShellForces>> {
    if displacements.len() != ELEMENT_DOFS {
        return Err(ShellError::DimensionMismatch {
            expected: ELEMENT_DOFS,
            found: displacements.len(),
        });
    }

    let material = element.material();
    let t = element.thickness();
    let dm = plane_stress(material.e(), material.nu(), t)?;
    let db = plate_bending(material.e(), material.nu(), t)?;

    let frame = element.local_frame();
    if frame.is_degenerate() {
        log::warn!("Shell recovery: element normal is undefined");
        return Ok(Checked::Degenerate {
            value: ShellForces::default(),
            reason: Degeneracy::CollapsedNormal,
        });
    }

    let mut u_global = Vec24::from_column_slice(displacements);
    if element.is_triangle() {
        for d in 0..DOF_PER_NODE {
            u_global[3 * DOF_PER_NODE + d] = u_global[2 * DOF_PER_NODE + d];
        }
    }
    let u = NodalRotation::new(&frame).to_local_vector(&u_global);

    let local = frame.local_corners(&element.corners());
    let jac = Jacobian::at(&local, 0.0, 0.0, options.singular_tolerance);
    if jac.is_singular() {
        log::warn!("Shell recovery: singular Jacobian at centroid (det J = {:e})", jac.det);
        return Ok(Checked::Degenerate {
            value: ShellForces::default(),
            reason: Degeneracy::SingularCentroid,
        });
    }

    let mut um = SVector::<f64, 8>::zeros();
    let mut ub = SVector::<f64, 12>::zeros();
    for n in 0..4 {
        um[2 * n] = u[DOF_PER_NODE * n];
        um[2 * n + 1] = u[DOF_PER_NODE * n + 1];
        ub[3 * n] = u[DOF_PER_NODE * n + 2];
        ub[3 * n + 1] = u[DOF_PER_NODE * n + 3];
        ub[3 * n + 2] = u[DOF_PER_NODE * n + 4];
    }

    let membrane: Vec3 = dm * (membrane_b(&jac, 0.0, 0.0) * um);
    let bending: Vec3 = db * (bending_b(&local, &jac, 0.0, 0.0) * ub);

    Ok(Checked::Valid(ShellForces::from_resultants(&membrane, &bending)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementNode, ShellMaterial};
    use approx::assert_relative_eq;

    fn wall() -> ShellElement {
        ShellElement::quad(
            [
                ElementNode::new("N1", 0.0, 0.0, 0.0),
                ElementNode::new("N2", 1000.0, 0.0, 0.0),
                ElementNode::new("N3", 1000.0, 0.0, 500.0),
                ElementNode::new("N4", 0.0, 0.0, 500.0),
            ],
            200.0,
            ShellMaterial::concrete(25_000.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_displacement_gives_exact_zero() {
        let r = recover_shell_forces(&wall(), &[0.0; 24], &ShellOptions::default()).unwrap();
        assert!(r.is_valid());
        assert_eq!(r.into_inner(), ShellForces::default());
    }

    #[test]
    fn test_rigid_translation_is_stress_free() {
        let mut u = [0.0; 24];
        for n in 0..4 {
            u[6 * n] = 3.0;
            u[6 * n + 1] = -1.0;
            u[6 * n + 2] = 7.0;
        }
        let f = recover_shell_forces(&wall(), &u, &ShellOptions::default())
            .unwrap()
            .into_inner();
        for v in [f.f11, f.f22, f.f12, f.m11, f.m22, f.m12] {
            assert!(v.abs() < 1e-6, "spurious force {}", v);
        }
    }

    #[test]
    fn test_uniform_stretch_along_local_x() {
        // DX = 0.001 * X on a wall in the XZ plane (local x = global X)
        let el = wall();
        let mut u = [0.0; 24];
        for (n, node) in el.nodes().iter().enumerate() {
            u[6 * n] = 1e-3 * node.position.x;
        }
        let f = recover_shell_forces(&el, &u, &ShellOptions::default())
            .unwrap()
            .into_inner();
        let d = plane_stress(25_000.0, 0.2, 200.0).unwrap();
        assert_relative_eq!(f.f11, d[(0, 0)] * 1e-3, max_relative = 1e-9);
        assert_relative_eq!(f.f22, d[(1, 0)] * 1e-3, max_relative = 1e-9);
        assert_relative_eq!(f.f12, 0.0, epsilon = 1e-9);
        assert_eq!(f.v13, 0.0);
        assert_eq!(f.v23, 0.0);
    }

    #[test]
    fn test_singular_centroid_is_tagged() {
        // det J at the centroid of the 1000 x 500 wall is 1.25e5
        let opts = ShellOptions::default().with_singular_tolerance(1.0e6);
        let mut u = [0.0; 24];
        u[0] = 1.0;
        let r = recover_shell_forces(&wall(), &u, &opts).unwrap();
        assert_eq!(r.reason(), Some(&Degeneracy::SingularCentroid));
        assert_eq!(r.into_inner(), ShellForces::default());
    }

    #[test]
    fn test_concave_element_recovers_at_centroid() {
        let el = ShellElement::quad(
            [
                ElementNode::new("N1", 0.0, 0.0, 0.0),
                ElementNode::new("N2", 2000.0, 0.0, 0.0),
                ElementNode::new("N3", 200.0, 200.0, 0.0),
                ElementNode::new("N4", 0.0, 2000.0, 0.0),
            ],
            200.0,
            ShellMaterial::concrete(25_000.0).unwrap(),
        )
        .unwrap();
        // Equal biaxial stretch is the same in any in-plane axes
        let eps = 1e-3;
        let mut u = [0.0; 24];
        for (n, node) in el.nodes().iter().enumerate() {
            u[6 * n] = eps * node.position.x;
            u[6 * n + 1] = eps * node.position.y;
        }
        let r = recover_shell_forces(&el, &u, &ShellOptions::default()).unwrap();
        assert!(r.is_valid());
        let f = r.into_inner();
        let d = plane_stress(25_000.0, 0.2, 200.0).unwrap();
        let expected = (d[(0, 0)] + d[(0, 1)]) * eps;
        assert_relative_eq!(f.f11, expected, max_relative = 1e-9);
        assert_relative_eq!(f.f22, expected, max_relative = 1e-9);
        assert!(f.f12.abs() < 1e-9 * expected);
        assert!(f.m11.abs() < 1e-9 && f.m22.abs() < 1e-9);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = recover_shell_forces(&wall(), &[0.0; 18], &ShellOptions::default()).unwrap_err();
        assert!(matches!(err, ShellError::DimensionMismatch { expected: 24, found: 18 }));
    }
}
