//! Error kinds shared by every realizr crate.
//!
//! All of these are deterministic precondition failures: the same input always
//! produces the same error, so callers should surface them instead of retrying.
//! Numeric singularities (evaluating a transfer function at a pole) are *not*
//! errors and propagate as `inf`/`NaN` values.

use core::fmt;

/// Which coefficient set of a polynomial was empty when splitting it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("even"),
            Parity::Odd => f.write_str("odd"),
        }
    }
}

/// Errors raised by polynomial analysis and transfer-function construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RealizrError {
    /// `continued_fractions` was called with `deg(num) < deg(den)`.
    #[error("numerator degree {num_degree} is lower than denominator degree {den_degree}")]
    InvalidDegreeOrder { num_degree: usize, den_degree: usize },

    /// An intermediate denominator vanished before the expansion finished.
    #[error("denominator became the zero polynomial at step {step} of {expected}")]
    DegenerateInput { step: usize, expected: usize },

    /// The polynomial has no nonzero coefficient of the given parity.
    #[error("polynomial has no nonzero {missing}-indexed coefficient")]
    DegenerateSplit { missing: Parity },

    /// A degree-sensitive operation received an all-zero polynomial.
    #[error("polynomial has no nonzero coefficient")]
    ZeroPolynomial,

    /// Polynomial long division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Denominator length does not match `order + 1`.
    #[error("filter order {order} needs {} denominator coefficients, got {len}", .order.saturating_add(1))]
    OrderMismatch { order: usize, len: usize },

    /// A coefficient sequence that must carry at least one entry was empty.
    #[error("{0} coefficients are empty")]
    EmptyCoefficients(&'static str),
}

/// Convenience alias used across the workspace.
pub type Result<T> = core::result::Result<T, RealizrError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn messages_carry_context() {
        let e = RealizrError::OrderMismatch { order: 3, len: 2 };
        assert_eq!(e.to_string(), "filter order 3 needs 4 denominator coefficients, got 2");

        let e = RealizrError::OrderMismatch { order: usize::MAX, len: 0 };
        let max = usize::MAX;
        assert_eq!(
            e.to_string(),
            format!("filter order {max} needs {max} denominator coefficients, got 0")
        );

        let e = RealizrError::DegenerateSplit { missing: Parity::Odd };
        assert_eq!(e.to_string(), "polynomial has no nonzero odd-indexed coefficient");
    }
}
