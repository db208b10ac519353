//! Dimensionless units.
//!
//! Dimensionless units may still carry a scale: `50 %` is the plain number `0.5`.
//!
//! ```rust
//! use csiquant_core::si::unitless::{PERCENT, UNITY};
//!
//! assert_eq!((50.0 * PERCENT).get_as(UNITY).unwrap(), 0.5);
//! ```

use crate::Unit;

/// The dimensionless base unit.
pub const UNITY: Unit = Unit::UNITY;
/// Percent (`1e-2`).
pub const PERCENT: Unit = UNITY.scaled(1e-2);
/// Parts per million (`1e-6`).
pub const PARTS_PER_MILLION: Unit = UNITY.scaled(1e-6);
