//! Exact rational exponents.
//!
//! Dimension exponents are usually small integers, but raising a unit to a fractional power (a square root, for
//! instance) must stay exact so that dimensions can still be compared and hashed structurally. [`Rational`] keeps
//! every value in lowest terms with a strictly positive denominator, which makes the derived `PartialEq`/`Hash`
//! structural equality coincide with numeric equality.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rational number `num / den`, always normalized.
///
/// # Invariants
///
/// - `den > 0`
/// - `gcd(|num|, den) == 1`, and zero is stored as `0/1`
///
/// ```rust
/// use csiquant_core::Rational;
///
/// assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
/// assert_eq!(Rational::new(1, -2), Rational::new(-1, 2));
/// assert_eq!(Rational::new(1, 2) + Rational::new(1, 3), Rational::new(5, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRational", into = "RawRational"))]
pub struct Rational {
    num: i32,
    den: i32,
}

impl Rational {
    /// Zero (`0/1`).
    pub const ZERO: Self = Self::integer(0);

    /// One (`1/1`).
    pub const ONE: Self = Self::integer(1);

    /// Creates a rational in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0` or if the reduced value does not fit in `i32` (`i32::MIN / -1`, for
    /// instance). Use [`Rational::checked_new`] for untrusted input.
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "rational denominator must be non-zero");
        match Self::checked_new(num, den) {
            Some(r) => r,
            None => panic!("rational out of i32 range"),
        }
    }

    /// Creates a rational in lowest terms, or `None` if `den == 0` or the reduced value does not fit in `i32`.
    ///
    /// ```rust
    /// use csiquant_core::Rational;
    ///
    /// assert_eq!(Rational::checked_new(4, -6), Some(Rational::new(-2, 3)));
    /// assert_eq!(Rational::checked_new(1, 0), None);
    /// assert_eq!(Rational::checked_new(i32::MIN, -1), None);
    /// ```
    pub const fn checked_new(num: i32, den: i32) -> Option<Self> {
        reduce(num as i64, den as i64)
    }

    /// Creates the integer rational `n/1`.
    #[inline]
    pub const fn integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numer(self) -> i32 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(self) -> i32 {
        self.den
    }

    /// `true` for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// `self + rhs`, or `None` on `i32` overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.sum(rhs.num as i64, rhs.den)
    }

    /// `self - rhs`, or `None` on `i32` overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.sum(-(rhs.num as i64), rhs.den)
    }

    // |num| <= 2^31 and both denominators < 2^31, so every intermediate fits in i64.
    fn sum(self, num: i64, den: i32) -> Option<Self> {
        let g = gcd(self.den as u64, den as u64) as i64;
        let (ld, rd) = (self.den as i64 / g, den as i64 / g);
        reduce(self.num as i64 * rd + num * ld, ld * den as i64)
    }

    /// `self * rhs`, or `None` on `i32` overflow.
    ///
    /// Factors are cross-reduced first, so products whose result fits never overflow on the way.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let g1 = gcd(self.num.unsigned_abs() as u64, rhs.den as u64).max(1) as i64;
        let g2 = gcd(rhs.num.unsigned_abs() as u64, self.den as u64).max(1) as i64;
        let num = (self.num as i64 / g1) * (rhs.num as i64 / g2);
        let den = (self.den as i64 / g2) * (rhs.den as i64 / g1);
        reduce(num, den)
    }

    /// `-self`, or `None` for a numerator of `i32::MIN`.
    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            num: self.num.checked_neg()?,
            den: self.den,
        })
    }

    /// Lossy conversion to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

// Operands are widened to i64 first; every product of two i32 values fits.
const fn reduce(num: i64, den: i64) -> Option<Rational> {
    if den == 0 {
        return None;
    }
    if num == 0 {
        return Some(Rational::ZERO);
    }
    let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
    let (mut num, mut den) = (num / g, den / g);
    if den < 0 {
        num = -num;
        den = -den;
    }
    if num < i32::MIN as i64 || num > i32::MAX as i64 || den > i32::MAX as i64 {
        return None;
    }
    Some(Rational {
        num: num as i32,
        den: den as i32,
    })
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

// The operators panic on overflow like the integer operators do; fallible callers use the `checked_*` forms.

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(r) => r,
            None => panic!("rational addition overflowed"),
        }
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Some(r) => r,
            None => panic!("rational subtraction overflowed"),
        }
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(r) => r,
            None => panic!("rational multiplication overflowed"),
        }
    }
}

impl Neg for Rational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        match self.checked_neg() {
            Some(r) => r,
            None => panic!("rational negation overflowed"),
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// Serialized as a `[num, den]` pair and re-normalized on the way back in.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawRational(i32, i32);

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = &'static str;

    fn try_from(raw: RawRational) -> core::result::Result<Self, Self::Error> {
        if raw.1 == 0 {
            return Err("rational denominator must be non-zero");
        }
        Self::checked_new(raw.0, raw.1).ok_or("rational out of i32 range")
    }
}

#[cfg(feature = "serde")]
impl From<Rational> for RawRational {
    fn from(r: Rational) -> Self {
        RawRational(r.num, r.den)
    }
}
