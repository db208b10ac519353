//! Length units, plus area and volume.
//!
//! The base unit for this dimension is [`METERS`] (`scale == 1.0`). Prefixed units scale it by a power of ten,
//! either as a literal or through [`Unit::scaled`].
//!
//! ```rust
//! use csiquant_core::si::length::{KILOMETERS, METERS};
//!
//! let d = 1.25 * KILOMETERS;
//! assert_eq!(d.get_as(METERS).unwrap(), 1250.0);
//! ```

use crate::{Dimension, Unit};

/// Metre (SI base unit).
pub const METERS: Unit = Unit::new(Dimension::LENGTH, 1.0);
/// Kilometre (`1e3 m`).
pub const KILOMETERS: Unit = METERS.scaled(1e3);
/// Centimetre (`1e-2 m`).
pub const CENTIMETERS: Unit = Unit::new(Dimension::LENGTH, 1e-2);
/// Millimetre (`1e-3 m`).
pub const MILLIMETERS: Unit = Unit::new(Dimension::LENGTH, 1e-3);
/// Micrometre (`1e-6 m`).
pub const MICROMETERS: Unit = Unit::new(Dimension::LENGTH, 1e-6);
/// Nanometre (`1e-9 m`).
pub const NANOMETERS: Unit = Unit::new(Dimension::LENGTH, 1e-9);

/// Square metre.
pub const SQUARE_METERS: Unit = Unit::new(Dimension::AREA, 1.0);
/// Cubic metre.
pub const CUBIC_METERS: Unit = Unit::new(Dimension::VOLUME, 1.0);
/// Litre (`1e-3 m³`).
pub const LITERS: Unit = Unit::new(Dimension::VOLUME, 1e-3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn prefixes() {
        assert_eq!(KILOMETERS.scale(), 1000.0);
        assert_relative_eq!(MILLIMETERS.conversion_factor(&MICROMETERS), 1000.0);
        assert!(NANOMETERS.is_commensurable(&KILOMETERS));
    }

    #[test]
    fn litre_is_cubic_decimetre() {
        let dm3 = CENTIMETERS.scaled(10.0).power(3).unwrap();
        assert!(dm3.is_commensurable(&LITERS));
        assert_relative_eq!(dm3.scale(), LITERS.scale());
    }
}
