//! Temperature and amount of substance.
//!
//! Only the absolute kelvin scale is modelled; offset scales such as Celsius are not multiplicative units.

use crate::{Dimension, Unit};

/// Kelvin (SI base unit).
pub const KELVIN: Unit = Unit::new(Dimension::TEMPERATURE, 1.0);
/// Mole (SI base unit).
pub const MOLES: Unit = Unit::new(Dimension::AMOUNT, 1.0);
/// Millimole (`1e-3 mol`).
pub const MILLIMOLES: Unit = Unit::new(Dimension::AMOUNT, 1e-3);
