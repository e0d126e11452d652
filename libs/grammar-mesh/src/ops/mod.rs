//! # Mesh Operations
//!
//! Operations on meshes, currently the boolean difference (CSG) used to
//! carve openings into solids.

pub mod boolean;

pub use boolean::difference;
