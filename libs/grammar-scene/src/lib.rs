//! # Grammar Scene
//!
//! Shapes and the working set for the building-grammar pipeline.
//!
//! The host content-creation environment keeps generated objects in a
//! global scene graph with hidden selection state; here that becomes an
//! explicit [`Scene`] value owned by the pipeline run. Shapes are addressed
//! by stable numeric ids; the human-readable name is a working-set key and
//! debug label that rules reassign to signal pipeline stage.
//!
//! ## Architecture
//!
//! ```text
//! grammar-mesh (kernel) → grammar-scene (shapes) → grammar-rules (catalogue)
//! ```

pub mod error;
pub mod library;
pub mod scene;
pub mod shape;

pub use error::SceneError;
pub use library::{standard_library, AssetLibrary, MemoryLibrary};
pub use scene::Scene;
pub use shape::{Shape, ShapeId, Transform};
