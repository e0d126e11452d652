//! # Config Crate
//!
//! Centralized configuration constants for the building-grammar pipeline.
//! All magic numbers of the rule catalogue (angles, offsets, anchor
//! coordinates) and numeric tolerances are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MODULE_HEIGHT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Use MODULE_HEIGHT for vertical stacking offsets
//! let two_floors = 2.0 * MODULE_HEIGHT;
//! assert!(two_floors > MODULE_HEIGHT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Domain Data, Not Configuration**: the catalogue angles describe one
//!   specific building and are not tunable parameters
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
