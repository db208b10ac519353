//! Unit type: a dimension paired with a scale factor.

use crate::dimension::Dimension;
use crate::error::{QuantityError, Result};
use crate::math;
use crate::rational::Rational;
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit of measure.
///
/// * `scale` is the conversion factor from this unit to the *base unit* of the same dimension (the coherent SI
///   unit). Example: metres are the base length unit (`scale == 1.0`), so kilometres have `scale == 1000.0` because
///   `1 km = 1000 m`.
///
/// * `dimension` ties the unit to its [`Dimension`].
///
/// Units compare equal only when both the dimension and the scale match; two units with the same dimension but
/// different scales are unequal yet *commensurable* (mutually convertible).
///
/// # Invariants
///
/// - `scale` is finite and strictly positive. Unit algebra re-checks it, so a product whose scale overflows to
///   infinity or underflows to zero is an [`QuantityError::InvalidScale`] error rather than a broken unit.
///
/// ```rust
/// use csiquant_core::si::{KILOMETERS, METERS};
///
/// assert_ne!(KILOMETERS, METERS);
/// assert!(KILOMETERS.is_commensurable(&METERS));
/// assert_eq!(KILOMETERS.conversion_factor(&METERS), 1000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawUnit"))]
pub struct Unit {
    dimension: Dimension,
    scale: f64,
}

impl Unit {
    /// The dimensionless unit with scale one.
    pub const UNITY: Unit = Unit::new(Dimension::DIMENSIONLESS, 1.0);

    /// Creates a unit. Intended for `const` catalog definitions.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not finite and strictly positive (in a `const` item this is a compile-time error).
    /// Use [`Unit::try_new`] for values computed at runtime.
    pub const fn new(dimension: Dimension, scale: f64) -> Self {
        assert!(
            scale > 0.0 && scale < f64::INFINITY,
            "unit scale must be finite and strictly positive"
        );
        Self { dimension, scale }
    }

    /// Creates a unit, rejecting scales that are not finite and strictly positive.
    ///
    /// ```rust
    /// use csiquant_core::{Dimension, Unit};
    ///
    /// assert!(Unit::try_new(Dimension::LENGTH, 0.3048).is_ok());
    /// assert!(Unit::try_new(Dimension::LENGTH, 0.0).is_err());
    /// assert!(Unit::try_new(Dimension::LENGTH, f64::NAN).is_err());
    /// ```
    pub fn try_new(dimension: Dimension, scale: f64) -> Result<Self> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self { dimension, scale })
        } else {
            Err(QuantityError::InvalidScale(scale))
        }
    }

    /// Derives a new unit of the same dimension, `factor` times larger. Intended for `const` catalog definitions.
    ///
    /// # Panics
    ///
    /// Panics, like [`Unit::new`], if the resulting scale is not finite and strictly positive (a negative, zero or
    /// NaN `factor`, or one that overflows). Use [`Unit::try_scaled`] for factors computed at runtime.
    ///
    /// ```rust
    /// use csiquant_core::si::METERS;
    ///
    /// let km = METERS.scaled(1e3);
    /// assert_eq!(km.scale(), 1000.0);
    /// assert_eq!(km.dimension(), METERS.dimension());
    /// ```
    pub const fn scaled(self, factor: f64) -> Self {
        Self::new(self.dimension, self.scale * factor)
    }

    /// Fallible [`Unit::scaled`].
    ///
    /// ```rust
    /// use csiquant_core::si::METERS;
    ///
    /// assert_eq!(METERS.try_scaled(0.3048).unwrap().scale(), 0.3048);
    /// assert!(METERS.try_scaled(-1.0).unwrap_err().is_invalid_scale());
    /// ```
    pub fn try_scaled(self, factor: f64) -> Result<Self> {
        Self::try_new(self.dimension, self.scale * factor)
    }

    /// Dimension of this unit.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Factor converting one of this unit into the base unit.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// `true` if this unit is dimensionless (its scale may still differ from one, e.g. percent).
    #[inline]
    pub fn is_unity(&self) -> bool {
        self.dimension.is_unity()
    }

    /// Product of two units.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::InvalidScale`] if the product of the scales overflows or underflows.
    /// - [`QuantityError::ExponentOverflow`] if a dimension exponent leaves the `i32` range.
    pub fn multiply(&self, other: &Unit) -> Result<Unit> {
        Unit::try_new(self.dimension.multiply(&other.dimension)?, self.scale * other.scale)
    }

    /// Quotient of two units. Fails like [`Unit::multiply`].
    pub fn divide(&self, other: &Unit) -> Result<Unit> {
        Unit::try_new(self.dimension.divide(&other.dimension)?, self.scale / other.scale)
    }

    /// This unit raised to `n`; `n` may be fractional. Fails like [`Unit::multiply`].
    ///
    /// ```rust
    /// use csiquant_core::si::{CENTIMETERS, METERS, SQUARE_METERS};
    ///
    /// let cm2 = CENTIMETERS.power(2)?;
    /// assert!(cm2.is_commensurable(&SQUARE_METERS));
    /// assert!((cm2.scale() - 1e-4).abs() < 1e-18);
    /// assert!(METERS.scaled(1e200).power(2).unwrap_err().is_invalid_scale());
    /// # Ok::<(), csiquant_core::QuantityError>(())
    /// ```
    pub fn power(&self, n: impl Into<Rational>) -> Result<Unit> {
        let n = n.into();
        let scale = if n.is_integer() {
            math::powi(self.scale, n.numer())
        } else {
            math::powf(self.scale, n.to_f64())
        };
        Unit::try_new(self.dimension.power(n)?, scale)
    }

    /// Reciprocal unit. Fails like [`Unit::multiply`] (a subnormal scale inverts to infinity).
    pub fn invert(&self) -> Result<Unit> {
        Unit::try_new(self.dimension.invert()?, 1.0 / self.scale)
    }

    /// `true` when both units share a dimension.
    #[inline]
    pub fn is_commensurable(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor converting a magnitude in `self` into a magnitude in `to`.
    ///
    /// Callers check commensurability first; this is plain scale arithmetic.
    #[inline]
    pub fn conversion_factor(&self, to: &Unit) -> f64 {
        self.scale / to.scale
    }
}

impl Mul for Unit {
    type Output = Result<Unit>;
    #[inline]
    fn mul(self, rhs: Unit) -> Result<Unit> {
        self.multiply(&rhs)
    }
}

impl Div for Unit {
    type Output = Result<Unit>;
    #[inline]
    fn div(self, rhs: Unit) -> Result<Unit> {
        self.divide(&rhs)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawUnit {
    dimension: Dimension,
    scale: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawUnit> for Unit {
    type Error = QuantityError;

    fn try_from(raw: RawUnit) -> Result<Self> {
        Unit::try_new(raw.dimension, raw.scale)
    }
}
