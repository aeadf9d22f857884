//! Loads on shell elements and their conversion to nodal forces

mod area_load;
mod distribute;
mod load_vector;
mod nodal_forces;
mod node_load;

pub use area_load::{AreaLoad, Load, LoadDirection};
pub use distribute::{distribute_area_load, element_area};
pub use load_vector::assemble_load_vector;
pub use nodal_forces::{accumulate_area_loads, NodalForceMap};
pub use node_load::NodeLoad;
