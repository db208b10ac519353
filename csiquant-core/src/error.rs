//! Error types for quantity operations.

use crate::dimension::Dimension;

/// Result type for quantity operations.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Error type for quantity operations.
///
/// Errors are raised before any numeric work is done and are never recovered internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// An argument of the wrong kind was supplied, e.g. a quantity where a unit is required.
    #[error("type error: expected {expected}, found {found}")]
    WrongKind {
        /// Kind the operation accepts.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// The operands are of the right kind but not commensurable.
    #[error("dimension mismatch: [{left}] is not commensurable with [{right}]")]
    DimensionMismatch {
        /// Dimension of the receiver.
        left: Dimension,
        /// Dimension of the argument.
        right: Dimension,
    },

    /// A unit scale that is not finite and strictly positive, given directly or produced by unit algebra.
    #[error("invalid unit scale {0}: must be finite and > 0")]
    InvalidScale(f64),

    /// A dimension exponent that no longer fits in the exact `i32` rational representation.
    #[error("dimension exponent overflow")]
    ExponentOverflow,
}

impl QuantityError {
    pub(crate) fn wrong_kind(expected: &'static str, found: &'static str) -> Self {
        QuantityError::WrongKind { expected, found }
    }

    pub(crate) fn mismatch(left: Dimension, right: Dimension) -> Self {
        QuantityError::DimensionMismatch { left, right }
    }

    /// `true` for the wrong-kind (type) error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, QuantityError::WrongKind { .. })
    }

    /// `true` for the dimensional-mismatch error.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, QuantityError::DimensionMismatch { .. })
    }

    /// `true` when unit algebra or construction produced an unusable scale.
    pub fn is_invalid_scale(&self) -> bool {
        matches!(self, QuantityError::InvalidScale(_))
    }
}
