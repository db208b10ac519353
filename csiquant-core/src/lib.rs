//! Core model for dynamically checked physical quantities.
//!
//! `csiquant-core` provides a small, runtime-checked units model:
//!
//! - A [`Dimension`] is a vector of rational exponents over the seven SI base dimensions.
//! - A [`Unit`] pairs a dimension with a positive scale factor relative to the SI base unit.
//! - A [`Quantity`] is an `f64` magnitude tagged with a unit, built as `magnitude * unit`.
//!
//! Most users should depend on `csiquant` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Explicit conversion between commensurable units ([`Quantity::get_as`], [`Quantity::cvt_to`],
//!   [`Quantity::round_to`]).
//! - Tolerance comparisons in three flavours: relative, absolute and quantized.
//! - Dimensional bookkeeping through `*`, `/` and powers, including fractional exponents.
//! - Value semantics: equality across units, hashing consistent with equality, copies that never alias.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking; every check happens at runtime and is reported as [`QuantityError`].
//! - Parsing unit strings; the [`si`] catalog is looked up by exact name only.
//! - Affine units (degrees Celsius and the like); every unit is a pure scale.
//!
//! # Quick start
//!
//! ```rust
//! use csiquant_core::si::{KILOMETERS, METERS, SECONDS, VOLTS};
//!
//! let d = 1250.0 * METERS;
//! assert_eq!(d.get_as(KILOMETERS).unwrap(), 1.25);
//!
//! let v = (d / (50.0 * SECONDS)).unwrap();
//! assert_eq!(v.magnitude(), 25.0);
//!
//! assert!(d.get_as(VOLTS).unwrap_err().is_dimension_mismatch());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `csiquant-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! csiquant-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Rational`], [`Dimension`], [`Unit`] and [`Quantity`]. Deserializing a
//!   unit validates its scale.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] and fail before any numeric work is done. Products, quotients, powers and
//! reciprocals are fallible too: a unit scale that overflows or underflows is [`QuantityError::InvalidScale`] and an
//! exponent outside the `i32` range is [`QuantityError::ExponentOverflow`].
//!
//! The panicking constructors are the `const` ones meant for catalog constants, where a bad value is a compile-time
//! error: [`Unit::new`], [`Unit::scaled`] and [`Rational::new`]. Each has a fallible twin for runtime values
//! ([`Unit::try_new`], [`Unit::try_scaled`], [`Rational::checked_new`]). The `+ - *` operators of [`Rational`] panic
//! on overflow like integer operators; the `checked_*` methods do not. Magnitude arithmetic follows IEEE-754
//! behavior (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod math;
mod operand;
mod quantity;
mod rational;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension, BASE_COUNT};
pub use error::{QuantityError, Result};
pub use operand::Operand;
pub use quantity::{Quantity, DEFAULT_ATOL, DEFAULT_RTOL};
pub use rational::Rational;
pub use unit::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined units
// ─────────────────────────────────────────────────────────────────────────────

pub mod si;
