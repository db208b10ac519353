//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::{QuantityError, Result};
use crate::math;
use crate::operand::Operand;
use crate::rational::Rational;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default relative tolerance of [`Quantity::r_approx`].
pub const DEFAULT_RTOL: f64 = 1e-9;

/// Default absolute tolerance of [`Quantity::a_approx`] (exact match).
pub const DEFAULT_ATOL: f64 = 0.0;

/// A magnitude tagged with a [`Unit`].
///
/// Quantities are immutable `Copy` values: every operation returns a new quantity, so a copy is always an
/// independent, equal value. The magnitude is stored verbatim in the unit it was created with; there is no implicit
/// normalization to base units.
///
/// The only way to build one is to multiply a number by a unit:
///
/// ```rust
/// use csiquant_core::si::{KILOMETERS, METERS, MILLIMETERS};
///
/// let d = 1000.0 * METERS;
/// assert_eq!(d.get_as(KILOMETERS).unwrap(), 1.0);
/// assert_eq!(d.get_as(MILLIMETERS).unwrap(), 1_000_000.0);
/// assert_eq!(d, 1.0 * KILOMETERS);
/// ```
///
/// # Errors
///
/// Operations that need two commensurable operands fail with [`QuantityError::DimensionMismatch`]; kind-checked
/// operations fail with [`QuantityError::WrongKind`] when handed the wrong kind of [`Operand`]. Products, quotients
/// and powers carry the unit algebra's errors: [`QuantityError::InvalidScale`] when the combined unit scale overflows
/// or underflows, [`QuantityError::ExponentOverflow`] when an exponent leaves the `i32` range. Scaling by a number,
/// negation, equality and hashing never fail: incommensurable quantities are simply unequal.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    #[inline]
    pub(crate) const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// The stored magnitude, expressed in [`Quantity::unit`].
    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit the magnitude is expressed in.
    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Dimension of the unit.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// `true` if this quantity is dimensionless.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_unity()
    }

    /// `true` when both quantities share a dimension.
    #[inline]
    pub fn is_commensurable(&self, other: &Quantity) -> bool {
        self.unit.is_commensurable(&other.unit)
    }

    /// Magnitude expressed in the base unit of this dimension.
    #[inline]
    pub fn to_base(&self) -> f64 {
        self.magnitude * self.unit.scale()
    }

    fn require_dimension(&self, other: Dimension) -> Result<()> {
        if self.dimension() == other {
            Ok(())
        } else {
            Err(QuantityError::mismatch(self.dimension(), other))
        }
    }

    /// `other`'s magnitude expressed in `self`'s unit.
    #[inline]
    fn in_own_unit(&self, other: &Quantity) -> f64 {
        other.magnitude * other.unit.conversion_factor(&self.unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the magnitude expressed in `target`.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::WrongKind`] if `target` is not a unit (even a quantity of the same dimension).
    /// - [`QuantityError::DimensionMismatch`] if `target` is not commensurable.
    ///
    /// ```rust
    /// use csiquant_core::si::{KILOMETERS, METERS, VOLTS};
    ///
    /// let d = 1000.0 * METERS;
    /// assert_eq!(d.get_as(KILOMETERS).unwrap(), 1.0);
    /// assert!(d.get_as(VOLTS).unwrap_err().is_dimension_mismatch());
    /// assert!(d.get_as(d).unwrap_err().is_type_error());
    /// ```
    pub fn get_as(&self, target: impl Into<Operand>) -> Result<f64> {
        let target = target.into().into_unit()?;
        self.require_dimension(target.dimension())?;
        Ok(self.magnitude * self.unit.conversion_factor(&target))
    }

    /// Converts into a quantity expressed in `target`.
    ///
    /// Fails exactly like [`Quantity::get_as`].
    ///
    /// ```rust
    /// use csiquant_core::si::{METERS, MILLIMETERS};
    ///
    /// let mm = (1000.0 * METERS).cvt_to(MILLIMETERS).unwrap();
    /// assert_eq!(mm.magnitude(), 1_000_000.0);
    /// assert_eq!(mm.unit(), MILLIMETERS);
    /// ```
    pub fn cvt_to(&self, target: impl Into<Operand>) -> Result<Quantity> {
        let target = target.into().into_unit()?;
        let magnitude = self.get_as(target)?;
        Ok(magnitude * target)
    }

    /// Converts into `target` and rounds the magnitude to the nearest integer in that unit.
    ///
    /// Ties round half away from zero. Fails exactly like [`Quantity::get_as`].
    ///
    /// ```rust
    /// use csiquant_core::si::{KILOMETERS, METERS, MILLIMETERS};
    ///
    /// let d = 1001.0 * METERS;
    /// assert_eq!(d.round_to(MILLIMETERS).unwrap().magnitude(), 1_001_000.0);
    /// assert_eq!(d.round_to(KILOMETERS).unwrap().magnitude(), 1.0);
    /// ```
    pub fn round_to(&self, target: impl Into<Operand>) -> Result<Quantity> {
        let target = target.into().into_unit()?;
        let magnitude = self.get_as(target)?;
        Ok(math::round(magnitude) * target)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tolerance comparisons
    // ─────────────────────────────────────────────────────────────────────────

    /// Relative comparison at [`DEFAULT_RTOL`].
    ///
    /// ```rust
    /// use csiquant_core::si::{GIGAPASCALS, KILOPASCALS, PASCALS};
    ///
    /// let gpa = 210.0 * GIGAPASCALS;
    /// assert!(gpa.r_approx(&(210_000_000_002.0 * PASCALS)).unwrap());
    /// assert!(!gpa.r_approx(&(210_000_002.0 * KILOPASCALS)).unwrap());
    /// assert!(gpa.r_approx_with(&(210_000_002.0 * KILOPASCALS), 1e-8).unwrap());
    /// ```
    pub fn r_approx(&self, other: &Quantity) -> Result<bool> {
        self.r_approx_with(other, DEFAULT_RTOL)
    }

    /// `true` iff `|a - b| <= rtol * max(|a|, |b|)`, both sides in base units.
    ///
    /// Symmetric in its operands and monotonic in `rtol`.
    pub fn r_approx_with(&self, other: &Quantity, rtol: f64) -> Result<bool> {
        self.require_dimension(other.dimension())?;
        let a = self.to_base();
        let b = other.to_base();
        Ok((a - b).abs() <= rtol * a.abs().max(b.abs()))
    }

    /// Absolute comparison at [`DEFAULT_ATOL`] (exact match in `self`'s unit).
    pub fn a_approx(&self, other: &Quantity) -> Result<bool> {
        self.a_approx_with(other, DEFAULT_ATOL)
    }

    /// `true` iff `|a - b| <= atol`, where `b` is `other` converted to `self`'s unit and `atol` is read in that
    /// unit too.
    ///
    /// ```rust
    /// use csiquant_core::si::{GIGAPASCALS, GIGAWATTS, PASCALS};
    ///
    /// let gpa = 210.0 * GIGAPASCALS;
    /// let pa = 210_000_000_001.0 * PASCALS;
    /// assert!(pa.a_approx_with(&gpa, 1.0).unwrap());
    /// assert!(!pa.a_approx(&gpa).unwrap());
    /// assert!(gpa.a_approx_with(&(210.0 * GIGAWATTS), 1e9).is_err());
    /// ```
    pub fn a_approx_with(&self, other: &Quantity, atol: f64) -> Result<bool> {
        self.require_dimension(other.dimension())?;
        Ok((self.magnitude - self.in_own_unit(other)).abs() <= atol)
    }

    /// `true` iff `|a - b| <= |quantum|`, all three expressed in `self`'s unit.
    ///
    /// `other` and `quantum` are amounts: a quantity, a unit (read as one of it) or a number (dimensionless).
    /// The quantum is validated first, so a quantum of the wrong dimension is reported regardless of `other`.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::DimensionMismatch`] if `quantum` or `other` is not commensurable with `self`.
    /// - [`QuantityError::WrongKind`] if either argument is a dimension or absent.
    ///
    /// ```rust
    /// use csiquant_core::si::{KILOMETERS, MICROMETERS, MILLIMETERS, MILLIVOLTS};
    ///
    /// let mm = 1_000_001.0 * MILLIMETERS;
    /// let km = 1.0 * KILOMETERS;
    /// assert!(mm.q_approx(km, 2.0 * MILLIMETERS).unwrap());
    /// assert!(!mm.q_approx(km, MICROMETERS).unwrap());
    /// assert!(km.q_approx(mm, MILLIVOLTS).unwrap_err().is_dimension_mismatch());
    /// ```
    pub fn q_approx(&self, other: impl Into<Operand>, quantum: impl Into<Operand>) -> Result<bool> {
        let quantum = quantum.into().into_quantity()?;
        self.require_dimension(quantum.dimension())?;
        let other = other.into().into_quantity()?;
        self.require_dimension(other.dimension())?;
        let diff = (self.magnitude - self.in_own_unit(&other)).abs();
        Ok(diff <= self.in_own_unit(&quantum).abs())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dimension introspection
    // ─────────────────────────────────────────────────────────────────────────

    /// `true` iff this quantity has the given dimension; an absent argument (`None`) checks for dimensionless.
    ///
    /// # Errors
    ///
    /// [`QuantityError::WrongKind`] if the argument is neither a dimension nor absent.
    ///
    /// ```rust
    /// use csiquant_core::si::{METERS, MILLIGRAMS, UNITY};
    /// use csiquant_core::Operand;
    ///
    /// let d = 1000.0 * METERS;
    /// assert!(d.is_of(METERS.dimension()).unwrap());
    /// assert!(!d.is_of(MILLIGRAMS.dimension()).unwrap());
    /// assert!(!d.is_of(Operand::Absent).unwrap());
    /// assert!((1000.0 * UNITY).is_of(Operand::Absent).unwrap());
    /// assert!(d.is_of(1).unwrap_err().is_type_error());
    /// ```
    pub fn is_of(&self, dimension: impl Into<Operand>) -> Result<bool> {
        let dimension = dimension.into().into_dimension()?;
        Ok(self.dimension() == dimension)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum expressed in `self`'s unit.
    ///
    /// ```rust
    /// use csiquant_core::si::{KILOMETERS, METERS, SECONDS};
    ///
    /// let sum = (1.0 * KILOMETERS).try_add(&(500.0 * METERS)).unwrap();
    /// assert_eq!(sum.magnitude(), 1.5);
    /// assert_eq!(sum.unit(), KILOMETERS);
    /// assert!((1.0 * KILOMETERS).try_add(&(1.0 * SECONDS)).is_err());
    /// ```
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity> {
        self.require_dimension(other.dimension())?;
        Ok(Quantity::new(self.magnitude + self.in_own_unit(other), self.unit))
    }

    /// Difference expressed in `self`'s unit.
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity> {
        self.require_dimension(other.dimension())?;
        Ok(Quantity::new(self.magnitude - self.in_own_unit(other), self.unit))
    }

    /// Raises magnitude and unit to `n`; `n` may be fractional.
    ///
    /// ```rust
    /// use csiquant_core::si::{METERS, SQUARE_METERS};
    /// use csiquant_core::Rational;
    ///
    /// let side = (16.0 * SQUARE_METERS).pow(Rational::new(1, 2))?;
    /// assert_eq!(side, 4.0 * METERS);
    /// assert!((2.0 * METERS).pow(65_536)?.pow(65_536).is_err());
    /// # Ok::<(), csiquant_core::QuantityError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails like [`Unit::power`] when the resulting unit is not representable.
    pub fn pow(&self, n: impl Into<Rational>) -> Result<Quantity> {
        let n = n.into();
        let magnitude = if n.is_integer() {
            math::powi(self.magnitude, n.numer())
        } else {
            math::powf(self.magnitude, n.to_f64())
        };
        Ok(Quantity::new(magnitude, self.unit.power(n)?))
    }

    /// Integer power.
    #[inline]
    pub fn powi(&self, n: i32) -> Result<Quantity> {
        self.pow(n)
    }

    /// Reciprocal: inverted magnitude and unit. Fails like [`Unit::invert`].
    #[inline]
    pub fn invert(&self) -> Result<Quantity> {
        Ok(Quantity::new(1.0 / self.magnitude, self.unit.invert()?))
    }

    /// Absolute value, same unit.
    #[inline]
    pub fn abs(&self) -> Quantity {
        Quantity::new(self.magnitude.abs(), self.unit)
    }

    /// `true` iff the magnitude is non-zero, whatever the dimension.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.magnitude != 0.0
    }

    /// The value as a plain number, expressed in the dimensionless base unit.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] unless the quantity is dimensionless.
    ///
    /// ```rust
    /// use csiquant_core::si::{METERS, MILLIMETERS, PERCENT};
    ///
    /// assert_eq!((50.0 * PERCENT).to_f64().unwrap(), 0.5);
    /// assert_eq!(((3.0 * METERS) / (1.0 * MILLIMETERS)).unwrap().to_f64().unwrap(), 3000.0);
    /// assert!((3.0 * METERS).to_f64().is_err());
    /// ```
    pub fn to_f64(&self) -> Result<f64> {
        self.require_dimension(Dimension::DIMENSIONLESS)?;
        Ok(self.to_base())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────

    /// Compares in base units; `Ok(None)` when either side is NaN.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] for incommensurable operands.
    pub fn try_partial_cmp(&self, other: &Quantity) -> Result<Option<Ordering>> {
        self.require_dimension(other.dimension())?;
        Ok(self.to_base().partial_cmp(&other.to_base()))
    }

    /// `self < other`.
    ///
    /// ```rust
    /// use csiquant_core::si::{KILOMETERS, METERS, SECONDS};
    ///
    /// assert!((999.0 * METERS).try_lt(&(1.0 * KILOMETERS)).unwrap());
    /// assert!((1.0 * METERS).try_lt(&(1.0 * SECONDS)).is_err());
    /// ```
    pub fn try_lt(&self, other: &Quantity) -> Result<bool> {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Less)))
    }

    /// `self <= other`.
    pub fn try_le(&self, other: &Quantity) -> Result<bool> {
        Ok(matches!(
            self.try_partial_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    /// `self > other`.
    pub fn try_gt(&self, other: &Quantity) -> Result<bool> {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Greater)))
    }

    /// `self >= other`.
    pub fn try_ge(&self, other: &Quantity) -> Result<bool> {
        Ok(matches!(
            self.try_partial_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality and hashing
// ─────────────────────────────────────────────────────────────────────────────

// Zero of either sign and every NaN collapse to one bit pattern, so equality is a lawful equivalence.
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

/// Commensurable and equal once both are expressed in base units; never fails.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.is_commensurable(other)
            && canonical_bits(self.to_base()) == canonical_bits(other.to_base())
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension().hash(state);
        canonical_bits(self.to_base()).hash(state);
    }
}

impl TryFrom<Quantity> for f64 {
    type Error = QuantityError;

    fn try_from(q: Quantity) -> Result<f64> {
        q.to_f64()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul<Unit> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self, rhs)
    }
}

impl Mul<f64> for Unit {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(rhs, self)
    }
}

impl Add for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn add(self, rhs: Quantity) -> Result<Quantity> {
        self.try_add(&rhs)
    }
}

impl Sub for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn sub(self, rhs: Quantity) -> Result<Quantity> {
        self.try_sub(&rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.magnitude * rhs, self.unit)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.magnitude / rhs, self.unit)
    }
}

impl Div<Quantity> for f64 {
    type Output = Result<Quantity>;
    #[inline]
    fn div(self, rhs: Quantity) -> Result<Quantity> {
        Ok(rhs.invert()? * self)
    }
}

// Anything that combines two units can fail in the unit algebra, so these return `Result` like `Add` and `Sub`.

impl Mul for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn mul(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity::new(self.magnitude * rhs.magnitude, self.unit.multiply(&rhs.unit)?))
    }
}

impl Div for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn div(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity::new(self.magnitude / rhs.magnitude, self.unit.divide(&rhs.unit)?))
    }
}

impl Mul<Unit> for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn mul(self, rhs: Unit) -> Result<Quantity> {
        Ok(Quantity::new(self.magnitude, self.unit.multiply(&rhs)?))
    }
}

impl Div<Unit> for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn div(self, rhs: Unit) -> Result<Quantity> {
        Ok(Quantity::new(self.magnitude, self.unit.divide(&rhs)?))
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit)
    }
}
