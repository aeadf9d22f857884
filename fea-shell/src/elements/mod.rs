//! Shell element data model

mod material;
mod node;
mod shell;

pub use material::ShellMaterial;
pub use node::{ElementNode, Node3D};
pub use shell::ShellElement;
