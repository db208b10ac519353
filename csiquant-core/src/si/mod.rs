//! Predefined SI units, grouped by dimension.
//!
//! Every unit is a process-wide `const` [`Unit`]; nothing here is initialized at runtime or ever mutated.
//! Scales are relative to the coherent SI unit of each dimension (metre, kilogram, second, ampere, kelvin, mole,
//! candela and their products).
//!
//! ## Modules
//!
//! - [`unitless`]: unity and dimensionless ratios.
//! - [`length`]: metres with prefixes, area and volume.
//! - [`mass`]: kilogram (base) and the gram ladder.
//! - [`time`]: seconds through days, and frequency.
//! - [`electric`]: current, voltage, resistance, charge.
//! - [`thermodynamic`]: temperature and amount of substance.
//! - [`photometric`]: luminous intensity.
//! - [`mechanics`]: velocity, force, energy, power, pressure.
//!
//! Everything is also re-exported flat, so `si::METERS` and `si::length::METERS` are the same constant.

use crate::Unit;

pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod photometric;
pub mod thermodynamic;
pub mod time;
pub mod unitless;

pub use electric::*;
pub use length::*;
pub use mass::*;
pub use mechanics::*;
pub use photometric::*;
pub use thermodynamic::*;
pub use time::*;
pub use unitless::*;

/// Every catalog unit, keyed by its constant name in lowercase.
pub const CATALOG: &[(&str, Unit)] = &[
    ("unity", UNITY),
    ("percent", PERCENT),
    ("parts_per_million", PARTS_PER_MILLION),
    ("meters", METERS),
    ("kilometers", KILOMETERS),
    ("centimeters", CENTIMETERS),
    ("millimeters", MILLIMETERS),
    ("micrometers", MICROMETERS),
    ("nanometers", NANOMETERS),
    ("square_meters", SQUARE_METERS),
    ("cubic_meters", CUBIC_METERS),
    ("liters", LITERS),
    ("kilograms", KILOGRAMS),
    ("grams", GRAMS),
    ("milligrams", MILLIGRAMS),
    ("micrograms", MICROGRAMS),
    ("tonnes", TONNES),
    ("seconds", SECONDS),
    ("milliseconds", MILLISECONDS),
    ("microseconds", MICROSECONDS),
    ("minutes", MINUTES),
    ("hours", HOURS),
    ("days", DAYS),
    ("hertz", HERTZ),
    ("kilohertz", KILOHERTZ),
    ("amperes", AMPERES),
    ("milliamperes", MILLIAMPERES),
    ("volts", VOLTS),
    ("millivolts", MILLIVOLTS),
    ("kilovolts", KILOVOLTS),
    ("ohms", OHMS),
    ("coulombs", COULOMBS),
    ("kelvin", KELVIN),
    ("moles", MOLES),
    ("millimoles", MILLIMOLES),
    ("candelas", CANDELAS),
    ("meters_per_second", METERS_PER_SECOND),
    ("newtons", NEWTONS),
    ("kilonewtons", KILONEWTONS),
    ("joules", JOULES),
    ("kilojoules", KILOJOULES),
    ("watts", WATTS),
    ("kilowatts", KILOWATTS),
    ("megawatts", MEGAWATTS),
    ("gigawatts", GIGAWATTS),
    ("pascals", PASCALS),
    ("kilopascals", KILOPASCALS),
    ("megapascals", MEGAPASCALS),
    ("gigapascals", GIGAPASCALS),
];

/// Looks up a catalog unit by its exact lowercase name.
///
/// This is a table lookup, not a unit-expression parser: `"kilometers"` resolves, `"km"` does not.
///
/// ```rust
/// use csiquant_core::si;
///
/// assert_eq!(si::lookup("kilometers"), Some(si::KILOMETERS));
/// assert_eq!(si::lookup("furlongs"), None);
/// ```
pub fn lookup(name: &str) -> Option<Unit> {
    let found = CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, unit)| *unit);
    if found.is_none() {
        log::debug!("no catalog unit named {name:?}");
    }
    found
}
