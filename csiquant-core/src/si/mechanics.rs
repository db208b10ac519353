//! Mechanical derived units: velocity, force, energy, power and pressure.
//!
//! All base units here are coherent SI units (`scale == 1.0`), so products and quotients of them land exactly on
//! the matching catalog constant:
//!
//! ```rust
//! use csiquant_core::si::{JOULES, METERS, NEWTONS, PASCALS, SQUARE_METERS};
//!
//! assert_eq!((NEWTONS * METERS)?, JOULES);
//! assert_eq!((NEWTONS / SQUARE_METERS)?, PASCALS);
//! # Ok::<(), csiquant_core::QuantityError>(())
//! ```

use crate::{Dimension, Unit};

/// Metre per second.
pub const METERS_PER_SECOND: Unit = Unit::new(Dimension::VELOCITY, 1.0);

/// Newton (`kg·m/s²`).
pub const NEWTONS: Unit = Unit::new(Dimension::FORCE, 1.0);
/// Kilonewton.
pub const KILONEWTONS: Unit = NEWTONS.scaled(1e3);

/// Joule (`N·m`).
pub const JOULES: Unit = Unit::new(Dimension::ENERGY, 1.0);
/// Kilojoule.
pub const KILOJOULES: Unit = JOULES.scaled(1e3);

/// Watt (`J/s`).
pub const WATTS: Unit = Unit::new(Dimension::POWER, 1.0);
/// Kilowatt.
pub const KILOWATTS: Unit = WATTS.scaled(1e3);
/// Megawatt.
pub const MEGAWATTS: Unit = WATTS.scaled(1e6);
/// Gigawatt.
pub const GIGAWATTS: Unit = WATTS.scaled(1e9);

/// Pascal (`N/m²`).
pub const PASCALS: Unit = Unit::new(Dimension::PRESSURE, 1.0);
/// Kilopascal.
pub const KILOPASCALS: Unit = PASCALS.scaled(1e3);
/// Megapascal.
pub const MEGAPASCALS: Unit = PASCALS.scaled(1e6);
/// Gigapascal.
pub const GIGAPASCALS: Unit = PASCALS.scaled(1e9);
