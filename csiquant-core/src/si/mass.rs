//! Mass units.
//!
//! The base unit is the [`KILOGRAMS`] (the coherent SI mass unit), so grams carry `scale == 1e-3`.

use crate::{Dimension, Unit};

/// Kilogram (SI base unit).
pub const KILOGRAMS: Unit = Unit::new(Dimension::MASS, 1.0);
/// Gram (`1e-3 kg`).
pub const GRAMS: Unit = Unit::new(Dimension::MASS, 1e-3);
/// Milligram (`1e-6 kg`).
pub const MILLIGRAMS: Unit = Unit::new(Dimension::MASS, 1e-6);
/// Microgram (`1e-9 kg`).
pub const MICROGRAMS: Unit = Unit::new(Dimension::MASS, 1e-9);
/// Tonne (`1e3 kg`).
pub const TONNES: Unit = Unit::new(Dimension::MASS, 1e3);
