//! Closed set of argument kinds accepted by kind-checked quantity operations.
//!
//! Methods such as [`Quantity::get_as`] take `impl Into<Operand>` and match on it exhaustively: the right kind
//! proceeds, any other kind is rejected with [`QuantityError::WrongKind`] before numeric work starts.

use crate::dimension::Dimension;
use crate::error::{QuantityError, Result};
use crate::quantity::Quantity;
use crate::unit::Unit;

/// An argument to a kind-checked operation.
///
/// ```rust
/// use csiquant_core::si::METERS;
/// use csiquant_core::Operand;
///
/// assert_eq!(Operand::from(METERS).kind_name(), "unit");
/// assert_eq!(Operand::from(2.0).kind_name(), "number");
/// assert_eq!(Operand::from(Some(METERS.dimension())).kind_name(), "dimension");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// No value (the "check for dimensionless" argument of [`Quantity::is_of`]).
    Absent,
    /// A bare number.
    Number(f64),
    /// A dimension vector.
    Dimension(Dimension),
    /// A unit.
    Unit(Unit),
    /// A quantity.
    Quantity(Quantity),
}

impl Operand {
    /// Human-readable name of the kind, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Operand::Absent => "none",
            Operand::Number(_) => "number",
            Operand::Dimension(_) => "dimension",
            Operand::Unit(_) => "unit",
            Operand::Quantity(_) => "quantity",
        }
    }

    /// Accepts only a unit.
    pub fn into_unit(self) -> Result<Unit> {
        match self {
            Operand::Unit(u) => Ok(u),
            other @ (Operand::Absent
            | Operand::Number(_)
            | Operand::Dimension(_)
            | Operand::Quantity(_)) => Err(QuantityError::wrong_kind("unit", other.kind_name())),
        }
    }

    /// Accepts a dimension, or `Absent` standing for the dimensionless vector.
    pub fn into_dimension(self) -> Result<Dimension> {
        match self {
            Operand::Dimension(d) => Ok(d),
            Operand::Absent => Ok(Dimension::DIMENSIONLESS),
            other @ (Operand::Number(_) | Operand::Unit(_) | Operand::Quantity(_)) => Err(
                QuantityError::wrong_kind("dimension or none", other.kind_name()),
            ),
        }
    }

    /// Accepts anything that denotes an amount: a quantity as is, a unit as one of that unit, a number as a
    /// dimensionless quantity.
    pub fn into_quantity(self) -> Result<Quantity> {
        match self {
            Operand::Quantity(q) => Ok(q),
            Operand::Unit(u) => Ok(1.0 * u),
            Operand::Number(n) => Ok(n * Unit::UNITY),
            other @ (Operand::Absent | Operand::Dimension(_)) => {
                Err(QuantityError::wrong_kind("quantity", other.kind_name()))
            }
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<Dimension> for Operand {
    fn from(d: Dimension) -> Self {
        Operand::Dimension(d)
    }
}

impl From<Option<Dimension>> for Operand {
    fn from(d: Option<Dimension>) -> Self {
        d.map_or(Operand::Absent, Operand::Dimension)
    }
}

impl From<Unit> for Operand {
    fn from(u: Unit) -> Self {
        Operand::Unit(u)
    }
}

impl From<Quantity> for Operand {
    fn from(q: Quantity) -> Self {
        Operand::Quantity(q)
    }
}

impl From<&Quantity> for Operand {
    fn from(q: &Quantity) -> Self {
        Operand::Quantity(*q)
    }
}
