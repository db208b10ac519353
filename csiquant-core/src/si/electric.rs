//! Electromagnetic units.

use crate::{Dimension, Unit};

/// Ampere (SI base unit).
pub const AMPERES: Unit = Unit::new(Dimension::CURRENT, 1.0);
/// Milliampere (`1e-3 A`).
pub const MILLIAMPERES: Unit = Unit::new(Dimension::CURRENT, 1e-3);

/// Volt (`W/A`).
pub const VOLTS: Unit = Unit::new(Dimension::VOLTAGE, 1.0);
/// Millivolt (`1e-3 V`).
pub const MILLIVOLTS: Unit = Unit::new(Dimension::VOLTAGE, 1e-3);
/// Kilovolt (`1e3 V`).
pub const KILOVOLTS: Unit = Unit::new(Dimension::VOLTAGE, 1e3);

/// Ohm (`V/A`).
pub const OHMS: Unit = Unit::new(Dimension::RESISTANCE, 1.0);
/// Coulomb (`A·s`).
pub const COULOMBS: Unit = Unit::new(Dimension::CHARGE, 1.0);
