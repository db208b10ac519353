//! Physical quantities with runtime-checked dimensions and explicit conversions.
//!
//! `csiquant` is the user-facing crate in this workspace. It re-exports the full API from `csiquant-core` together
//! with the predefined SI catalog.
//!
//! The core idea is: a value is always a [`Quantity`], an `f64` magnitude tagged with a [`Unit`]. Units carry a
//! [`Dimension`] and a scale, so conversions, comparisons and arithmetic are checked for commensurability at runtime
//! and report problems as [`QuantityError`] instead of silently producing nonsense.
//!
//! # What this crate solves
//!
//! - Refuses to mix incompatible dimensions (you can't add metres to seconds; you get an error).
//! - Makes unit conversion explicit (`get_as`, `cvt_to`, `round_to`).
//! - Provides relative, absolute and quantized tolerance comparisons across units.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking.
//! - Parsing or pretty-printing unit expressions.
//! - Exact arithmetic: magnitudes are `f64`.
//!
//! # Quick start
//!
//! Convert between commensurable units:
//!
//! ```rust
//! use csiquant::prelude::*;
//!
//! let d = 1000.0 * METERS;
//! assert_eq!(d.get_as(KILOMETERS)?, 1.0);
//! assert_eq!(d.cvt_to(MILLIMETERS)?.magnitude(), 1_000_000.0);
//! # Ok::<(), csiquant::QuantityError>(())
//! ```
//!
//! Compare with a tolerance:
//!
//! ```rust
//! use csiquant::prelude::*;
//!
//! let gpa = 210.0 * GIGAPASCALS;
//! let kpa = 210_000_002.0 * KILOPASCALS;
//! assert!(!gpa.r_approx(&kpa)?);
//! assert!(gpa.r_approx_with(&kpa, 1e-8)?);
//! # Ok::<(), csiquant::QuantityError>(())
//! ```
//!
//! # Incorrect usage (runtime error)
//!
//! ```rust
//! use csiquant::prelude::*;
//!
//! let d = 1.0 * KILOMETERS;
//! let t = 1.0 * SECONDS;
//! assert!((d + t).unwrap_err().is_dimension_mismatch());
//! assert!(d.get_as(t).unwrap_err().is_type_error());
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under [`si`] (also re-exported flat as `si::*` and through the [`prelude`]):
//!
//! - `csiquant::si::length` (metres with prefixes, area, volume)
//! - `csiquant::si::mass` (kilograms, grams, tonnes)
//! - `csiquant::si::time` (seconds through days, hertz)
//! - `csiquant::si::electric` (amperes, volts, ohms, coulombs)
//! - `csiquant::si::thermodynamic` (kelvin, moles)
//! - `csiquant::si::photometric` (candelas)
//! - `csiquant::si::mechanics` (newtons, joules, watts, pascals)
//! - `csiquant::si::unitless` (unity, percent, ppm)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `csiquant-core`.
//! - `serde`: enables `serde` support for the core types.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! csiquant = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`]; the error tells a wrong argument kind apart from a dimensional mismatch.
//! Multiplying, dividing, raising or inverting quantities and units also returns a [`Result`], failing when the
//! combined unit scale overflows or underflows or when an exponent leaves the `i32` range.
//!
//! The `const` constructors [`Unit::new`], [`Unit::scaled`] and [`Rational::new`] panic on invalid input, so a bad
//! catalog constant fails to compile. Use [`Unit::try_new`], [`Unit::try_scaled`] and [`Rational::checked_new`] for
//! values known only at runtime.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use csiquant_core::*;

/// Everything needed for day-to-day use: the core types and every catalog unit.
pub mod prelude {
    pub use csiquant_core::si::*;
    pub use csiquant_core::{Dimension, Operand, Quantity, QuantityError, Rational, Unit};
}
