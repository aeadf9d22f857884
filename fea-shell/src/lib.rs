//! FEA Shell - planar shell element kernel for walls and slabs
//!
//! This library computes, for four-node (and degenerate three-node) flat
//! shell elements in arbitrary 3D orientation:
//! - the 24x24 elastic stiffness (plane stress membrane + DKQ plate bending)
//! - consistent nodal loads for uniform area loads, and global load vectors
//! - membrane forces and bending moments from solved displacements
//! - a geometric quality report
//!
//! Assembly of the global system and its solution are left to the caller.
//!
//! ## Example
//! ```rust
//! use fea_shell::prelude::*;
//!
//! let concrete = ShellMaterial::new(25_000.0, 0.2).unwrap();
//! let wall = ShellElement::quad(
//!     [
//!         ElementNode::new("N1", 0.0, 0.0, 0.0),
//!         ElementNode::new("N2", 1000.0, 0.0, 0.0),
//!         ElementNode::new("N3", 1000.0, 0.0, 1000.0),
//!         ElementNode::new("N4", 0.0, 0.0, 1000.0),
//!     ],
//!     200.0,
//!     concrete,
//! )
//! .unwrap();
//!
//! let options = ShellOptions::default();
//! assert!(validate_element(&wall, &options).is_valid);
//!
//! let k = element_stiffness(&wall, &options).unwrap().into_result().unwrap();
//! assert!(k[(0, 0)] > 0.0);
//!
//! let forces = distribute_area_load(&wall, &AreaLoad::normal(0.005), &options).unwrap();
//! assert!(forces.is_valid());
//! ```

pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod options;
pub mod outcome;
pub mod quality;
pub mod recovery;
pub mod results;
pub mod stiffness;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{ElementNode, Node3D, ShellElement, ShellMaterial};
    pub use crate::error::{ShellError, ShellResult};
    pub use crate::loads::{
        accumulate_area_loads, assemble_load_vector, distribute_area_load, element_area, AreaLoad,
        Load, LoadDirection, NodalForceMap, NodeLoad,
    };
    pub use crate::math::{LocalFrame, Mat24, Vec24};
    pub use crate::options::ShellOptions;
    pub use crate::outcome::{Checked, Degeneracy};
    pub use crate::quality::{validate_element, QualityReport, QualityWarning};
    pub use crate::recovery::recover_shell_forces;
    pub use crate::results::{PlateStress, ShellForces, SurfaceStresses};
    pub use crate::stiffness::{element_local_stiffness, element_stiffness, DOF_PER_NODE};
}
