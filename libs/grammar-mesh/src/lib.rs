//! # Grammar Mesh
//!
//! Geometry kernel for the building-grammar pipeline.
//! Provides the triangle mesh the rule catalogue composes, the boolean
//! difference used to carve openings, and the primitives the asset
//! vocabulary is authored from.
//!
//! ## Architecture
//!
//! ```text
//! grammar-mesh (kernel) → grammar-scene (shapes) → grammar-rules (catalogue)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Boolean Difference**: BSP trees (csg.js algorithm)
//! - **Primitives**: Direct mesh construction (box, extruded prism)
//! - **Measures**: Divergence-theorem volume, vertex-mean median

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{Axis, Mesh};
pub use ops::boolean::difference;
