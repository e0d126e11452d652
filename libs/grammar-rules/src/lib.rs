//! # Grammar Rules
//!
//! The rule/transform composition engine of the building-grammar pipeline.
//!
//! A fixed catalogue of named rules, each a composition of primitive
//! geometric operators (boolean cut, mirror-and-merge, rigid recompose,
//! origin re-anchoring, array replicate) plus, for some rules, an asset
//! library fetch. The pipeline driver threads the shape produced by each
//! rule into the next, building the compound building mesh in fourteen
//! deterministic stages.
//!
//! ## Architecture
//!
//! ```text
//! grammar-mesh (kernel) → grammar-scene (shapes) → grammar-rules (catalogue)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grammar_rules::pipeline::generate;
//! use grammar_scene::{standard_library, Scene};
//!
//! let library = standard_library()?;
//! let mut scene = Scene::new();
//! let final_shape = generate(&mut scene, &library)?;
//! ```

pub mod error;
pub mod ops;
pub mod pipeline;
pub mod rules;

pub use error::RuleError;
pub use pipeline::{generate, generate_batch};

#[cfg(test)]
mod tests;
