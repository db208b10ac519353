//! Time and frequency units.
//!
//! The base unit is [`SECONDS`]. A day is exactly `86_400 s`.

use crate::{Dimension, Unit};

/// Second (SI base unit).
pub const SECONDS: Unit = Unit::new(Dimension::TIME, 1.0);
/// Millisecond (`1e-3 s`).
pub const MILLISECONDS: Unit = Unit::new(Dimension::TIME, 1e-3);
/// Microsecond (`1e-6 s`).
pub const MICROSECONDS: Unit = Unit::new(Dimension::TIME, 1e-6);
/// Minute (`60 s`).
pub const MINUTES: Unit = Unit::new(Dimension::TIME, 60.0);
/// Hour (`3600 s`).
pub const HOURS: Unit = Unit::new(Dimension::TIME, 3_600.0);
/// Day (`86400 s`).
pub const DAYS: Unit = Unit::new(Dimension::TIME, 86_400.0);

/// Hertz (`s⁻¹`).
pub const HERTZ: Unit = Unit::new(Dimension::FREQUENCY, 1.0);
/// Kilohertz (`1e3 Hz`).
pub const KILOHERTZ: Unit = HERTZ.scaled(1e3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_units() {
        assert_eq!((1.0 * DAYS).get_as(HOURS).unwrap(), 24.0);
        assert_eq!((90.0 * MINUTES).get_as(HOURS).unwrap(), 1.5);
    }

    #[test]
    fn hertz_is_reciprocal_second() {
        assert_eq!(SECONDS.invert(), Ok(HERTZ));
        assert_eq!((1.0 / (1.0 * MILLISECONDS)).unwrap().get_as(KILOHERTZ).unwrap(), 1.0);
    }
}
