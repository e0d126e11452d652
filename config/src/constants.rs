//! # Configuration Constants
//!
//! Centralized constants for the building-grammar pipeline. All geometric
//! tolerances and the fixed architectural constants of the rule catalogue
//! are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Catalogue**: Fixed angles and offsets used by the generation rules
//! - **Placement**: World-space anchor coordinates
//!
//! The catalogue values are empirical constants of one specific building.
//! They were fitted against the asset vocabulary and must not be derived
//! from one another.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON * 10.0);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// CATALOGUE CONSTANTS
// =============================================================================

/// Height of one architectural module (one floor) in scene length units.
///
/// Vertical stacking rules offset the shape by an integer multiple of this
/// value. It equals the height of every mesh in the asset vocabulary.
///
/// # Examples
/// ```
/// use config::constants::MODULE_HEIGHT;
/// assert!(MODULE_HEIGHT > 1.0 && MODULE_HEIGHT < 1.1);
/// ```
pub const MODULE_HEIGHT: f64 = 1.04587;

/// Z-axis symmetry angle, in degrees, applied to mirrored duplicates of the
/// footprint wing.
///
/// # Examples
/// ```
/// use config::constants::SYMMETRY_ANGLE_DEG;
/// assert!(SYMMETRY_ANGLE_DEG.to_radians() < 0.0);
/// ```
pub const SYMMETRY_ANGLE_DEG: f64 = -51.0;

/// Z-axis orientation, in degrees, of the secondary facade piece before it
/// is merged into the compound shape.
///
/// # Examples
/// ```
/// use config::constants::FACADE_ANGLE_DEG;
/// assert!(FACADE_ANGLE_DEG > 0.0);
/// ```
pub const FACADE_ANGLE_DEG: f64 = 83.4;

/// Closing angle, in radians, imposed after the first side piece is merged.
///
/// Empirically fitted to the asset vocabulary; not derived from the
/// symmetry or facade angles.
///
/// # Examples
/// ```
/// use config::constants::SIDE_CLOSING_ANGLE_RAD;
/// assert!(SIDE_CLOSING_ANGLE_RAD < 0.0);
/// ```
pub const SIDE_CLOSING_ANGLE_RAD: f64 = -3.20139;

/// Closing angle, in radians, imposed after the core volume is merged.
///
/// Empirically fitted to the asset vocabulary; not derived from the
/// symmetry or facade angles.
///
/// # Examples
/// ```
/// use config::constants::CORE_CLOSING_ANGLE_RAD;
/// assert!(CORE_CLOSING_ANGLE_RAD > 0.0);
/// ```
pub const CORE_CLOSING_ANGLE_RAD: f64 = 1.51093;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// World-space X coordinate of the anchored compound shape.
///
/// # Examples
/// ```
/// use config::constants::WORLD_ANCHOR_X;
/// assert!(WORLD_ANCHOR_X < 0.0);
/// ```
pub const WORLD_ANCHOR_X: f64 = -2.216;

/// World-space Y coordinate of the anchored compound shape.
///
/// # Examples
/// ```
/// use config::constants::WORLD_ANCHOR_Y;
/// assert!(WORLD_ANCHOR_Y < 0.0);
/// ```
pub const WORLD_ANCHOR_Y: f64 = -2.213;
