//! Dimension vectors over the SI base quantities.

use crate::error::{QuantityError, Result as QResult};
use crate::rational::Rational;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of base dimensions tracked by [`Dimension`].
pub const BASE_COUNT: usize = 7;

/// The seven SI base quantities, in the order used by [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Length `L` (metre).
    Length,
    /// Mass `M` (kilogram).
    Mass,
    /// Time `T` (second).
    Time,
    /// Electric current `I` (ampere).
    Current,
    /// Thermodynamic temperature `Θ` (kelvin).
    Temperature,
    /// Amount of substance `N` (mole).
    Amount,
    /// Luminous intensity `J` (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in vector order.
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Conventional dimension symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// An immutable vector of exponents, one per [`BaseDimension`].
///
/// A dimension tells *what kind* of quantity a value is. Two dimensions are equal iff every exponent matches; the
/// all-zero vector is the dimensionless (unity) dimension.
///
/// The algebra is exact, so its only failure is an exponent leaving the `i32` range
/// ([`QuantityError::ExponentOverflow`]).
///
/// ```rust
/// use csiquant_core::Dimension;
///
/// let velocity = (Dimension::LENGTH / Dimension::TIME)?;
/// assert_eq!(velocity, Dimension::VELOCITY);
/// assert!(velocity.divide(&velocity)?.is_unity());
/// # Ok::<(), csiquant_core::QuantityError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    exponents: [Rational; BASE_COUNT],
}

impl Dimension {
    /// Dimensionless (all exponents zero).
    pub const DIMENSIONLESS: Self = Self::from_integers([0, 0, 0, 0, 0, 0, 0]);
    /// Length `L`.
    pub const LENGTH: Self = Self::from_integers([1, 0, 0, 0, 0, 0, 0]);
    /// Mass `M`.
    pub const MASS: Self = Self::from_integers([0, 1, 0, 0, 0, 0, 0]);
    /// Time `T`.
    pub const TIME: Self = Self::from_integers([0, 0, 1, 0, 0, 0, 0]);
    /// Electric current `I`.
    pub const CURRENT: Self = Self::from_integers([0, 0, 0, 1, 0, 0, 0]);
    /// Temperature `Θ`.
    pub const TEMPERATURE: Self = Self::from_integers([0, 0, 0, 0, 1, 0, 0]);
    /// Amount of substance `N`.
    pub const AMOUNT: Self = Self::from_integers([0, 0, 0, 0, 0, 1, 0]);
    /// Luminous intensity `J`.
    pub const LUMINOUS_INTENSITY: Self = Self::from_integers([0, 0, 0, 0, 0, 0, 1]);

    /// Area `L²`.
    pub const AREA: Self = Self::from_integers([2, 0, 0, 0, 0, 0, 0]);
    /// Volume `L³`.
    pub const VOLUME: Self = Self::from_integers([3, 0, 0, 0, 0, 0, 0]);
    /// Frequency `T⁻¹`.
    pub const FREQUENCY: Self = Self::from_integers([0, 0, -1, 0, 0, 0, 0]);
    /// Velocity `L T⁻¹`.
    pub const VELOCITY: Self = Self::from_integers([1, 0, -1, 0, 0, 0, 0]);
    /// Acceleration `L T⁻²`.
    pub const ACCELERATION: Self = Self::from_integers([1, 0, -2, 0, 0, 0, 0]);
    /// Force `M L T⁻²`.
    pub const FORCE: Self = Self::from_integers([1, 1, -2, 0, 0, 0, 0]);
    /// Energy `M L² T⁻²`.
    pub const ENERGY: Self = Self::from_integers([2, 1, -2, 0, 0, 0, 0]);
    /// Power `M L² T⁻³`.
    pub const POWER: Self = Self::from_integers([2, 1, -3, 0, 0, 0, 0]);
    /// Pressure `M L⁻¹ T⁻²`.
    pub const PRESSURE: Self = Self::from_integers([-1, 1, -2, 0, 0, 0, 0]);
    /// Electric charge `I T`.
    pub const CHARGE: Self = Self::from_integers([0, 0, 1, 1, 0, 0, 0]);
    /// Voltage `M L² T⁻³ I⁻¹`.
    pub const VOLTAGE: Self = Self::from_integers([2, 1, -3, -1, 0, 0, 0]);
    /// Electric resistance `M L² T⁻³ I⁻²`.
    pub const RESISTANCE: Self = Self::from_integers([2, 1, -3, -2, 0, 0, 0]);

    /// Builds a dimension from exponents given in [`BaseDimension::ALL`] order.
    pub const fn new(exponents: [Rational; BASE_COUNT]) -> Self {
        Self { exponents }
    }

    /// Builds a dimension from integer exponents given in [`BaseDimension::ALL`] order.
    pub const fn from_integers(exponents: [i32; BASE_COUNT]) -> Self {
        let mut out = [Rational::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = Rational::integer(exponents[i]);
            i += 1;
        }
        Self { exponents: out }
    }

    /// The dimension of a single base quantity (exponent one, all others zero).
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [Rational::ZERO; BASE_COUNT];
        exponents[base.index()] = Rational::ONE;
        Self { exponents }
    }

    /// Exponent of one base quantity.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> Rational {
        self.exponents[base.index()]
    }

    /// All exponents, in [`BaseDimension::ALL`] order.
    #[inline]
    pub const fn exponents(&self) -> &[Rational; BASE_COUNT] {
        &self.exponents
    }

    /// Pairwise exponent sum (the dimension of a product).
    pub fn multiply(&self, other: &Dimension) -> QResult<Dimension> {
        self.zip_with(other, Rational::checked_add)
    }

    /// Pairwise exponent difference (the dimension of a quotient).
    pub fn divide(&self, other: &Dimension) -> QResult<Dimension> {
        self.zip_with(other, Rational::checked_sub)
    }

    /// Every exponent scaled by `n`; `n` may be fractional.
    ///
    /// ```rust
    /// use csiquant_core::{Dimension, Rational};
    ///
    /// let side = Dimension::AREA.power(Rational::new(1, 2))?;
    /// assert_eq!(side, Dimension::LENGTH);
    /// assert!(Dimension::LENGTH.power(65_536)?.power(65_536).is_err());
    /// # Ok::<(), csiquant_core::QuantityError>(())
    /// ```
    pub fn power(&self, n: impl Into<Rational>) -> QResult<Dimension> {
        let n = n.into();
        self.map(|e| e.checked_mul(n))
    }

    /// Every exponent negated.
    pub fn invert(&self) -> QResult<Dimension> {
        self.map(Rational::checked_neg)
    }

    /// `true` for the all-zero (dimensionless) vector.
    pub fn is_unity(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    fn map(&self, f: impl Fn(Rational) -> Option<Rational>) -> QResult<Dimension> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = f(*e).ok_or(QuantityError::ExponentOverflow)?;
        }
        Ok(Dimension { exponents })
    }

    fn zip_with(
        &self,
        other: &Dimension,
        f: impl Fn(Rational, Rational) -> Option<Rational>,
    ) -> QResult<Dimension> {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents.iter()) {
            *e = f(*e, *o).ok_or(QuantityError::ExponentOverflow)?;
        }
        Ok(Dimension { exponents })
    }
}

impl Mul for Dimension {
    type Output = QResult<Dimension>;
    #[inline]
    fn mul(self, rhs: Dimension) -> QResult<Dimension> {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = QResult<Dimension>;
    #[inline]
    fn div(self, rhs: Dimension) -> QResult<Dimension> {
        self.divide(&rhs)
    }
}

/// Formats non-zero exponents as `L·T^-2`; the dimensionless vector prints as `1`.
impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_unity() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if e != Rational::ONE {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_dimension() -> impl Strategy<Value = Dimension> {
        proptest::array::uniform7(-4i32..=4).prop_map(Dimension::from_integers)
    }

    #[test]
    fn default_is_dimensionless() {
        assert_eq!(Dimension::default(), Dimension::DIMENSIONLESS);
        assert!(Dimension::DIMENSIONLESS.is_unity());
        assert!(!Dimension::LENGTH.is_unity());
    }

    #[test]
    fn base_matches_named_constants() {
        assert_eq!(Dimension::base(BaseDimension::Length), Dimension::LENGTH);
        assert_eq!(Dimension::base(BaseDimension::Mass), Dimension::MASS);
        assert_eq!(Dimension::base(BaseDimension::LuminousIntensity), Dimension::LUMINOUS_INTENSITY);
    }

    #[test]
    fn derived_constants_compose() {
        assert_eq!(Dimension::MASS * Dimension::ACCELERATION, Ok(Dimension::FORCE));
        assert_eq!(Dimension::FORCE / Dimension::AREA, Ok(Dimension::PRESSURE));
        assert_eq!(Dimension::ENERGY / Dimension::TIME, Ok(Dimension::POWER));
        assert_eq!(Dimension::POWER / Dimension::CURRENT, Ok(Dimension::VOLTAGE));
        assert_eq!(Dimension::VOLTAGE / Dimension::CURRENT, Ok(Dimension::RESISTANCE));
        assert_eq!(Dimension::TIME.invert(), Ok(Dimension::FREQUENCY));
    }

    #[test]
    fn power_scales_exponents() {
        assert_eq!(Dimension::LENGTH.power(3), Ok(Dimension::VOLUME));
        assert_eq!(Dimension::VOLUME.power(Rational::new(1, 3)), Ok(Dimension::LENGTH));
        let half = Dimension::LENGTH.power(Rational::new(1, 2)).unwrap();
        assert_eq!(half.exponent(BaseDimension::Length), Rational::new(1, 2));
        assert!(Dimension::FORCE.power(0).unwrap().is_unity());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Exponent overflow
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn chained_powers_overflow_into_error() {
        let huge = Dimension::LENGTH.power(65_536).unwrap();
        assert_eq!(huge.power(65_536), Err(QuantityError::ExponentOverflow));
        let max = Dimension::LENGTH.power(i32::MAX).unwrap();
        assert_eq!(max.multiply(&Dimension::LENGTH), Err(QuantityError::ExponentOverflow));
        let per_metre = Dimension::LENGTH.invert().unwrap();
        assert_eq!(max.divide(&per_metre), Err(QuantityError::ExponentOverflow));
    }

    #[test]
    fn invert_rejects_minimum_exponent() {
        let mut exponents = [Rational::ZERO; BASE_COUNT];
        exponents[0] = Rational::integer(i32::MIN);
        let min = Dimension::new(exponents);
        assert_eq!(min.invert(), Err(QuantityError::ExponentOverflow));
        assert!(min.power(Rational::new(1, 2)).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::ACCELERATION), "L·T^-2");
        assert_eq!(format!("{}", Dimension::LENGTH.power(Rational::new(1, 2)).unwrap()), "L^1/2");
    }

    proptest! {
        #[test]
        fn prop_divide_by_self_is_unity(d in arb_dimension()) {
            prop_assert!(d.divide(&d).unwrap().is_unity());
        }

        #[test]
        fn prop_invert_matches_power_minus_one(d in arb_dimension()) {
            prop_assert_eq!(d.invert(), d.power(-1));
            prop_assert_eq!(d.invert().unwrap().invert(), Ok(d));
        }

        #[test]
        fn prop_multiply_commutes(a in arb_dimension(), b in arb_dimension()) {
            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!((a * b).unwrap() / b, Ok(a));
        }
    }
}
