//! Luminous intensity.

use crate::{Dimension, Unit};

/// Candela (SI base unit).
pub const CANDELAS: Unit = Unit::new(Dimension::LUMINOUS_INTENSITY, 1.0);
