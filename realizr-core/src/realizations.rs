//! Continued-fraction expansion and the Hurwitz stability test.
//!
//! A real polynomial `p(s)` is Hurwitz (all roots in the open left half-plane)
//! iff the continued-fraction expansion of the ratio of its even and odd parts
//! has only strictly positive partial coefficients:
//!
//! ```text
//!  num     1
//!  --- = a1 s + -----------------
//!  den           a2 s + 1 / (...)
//! ```
//!
//! Each step divides `num` by `den`, records the linear coefficient of the
//! quotient and continues with `(den, remainder)`.
//!
//! The expansion always runs exactly `deg(num)` steps. A denominator that
//! vanishes earlier is reported as [`RealizrError::DegenerateInput`], which
//! callers should read as "not strictly Hurwitz" but which stays distinct from
//! a completed expansion.

use alloc::vec::Vec;
use core::fmt::Debug;

use num_traits::Float;

use crate::error::{Parity, RealizrError, Result};
use crate::poly::Polynomial;

/// Tuning knobs for the expansion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpansionConfig<T> {
    /// Remainder coefficients with `|c| <= zero_tolerance` are dropped when
    /// trimming. Zero keeps exact semantics.
    pub zero_tolerance: T,
}

impl<T: Float> Default for ExpansionConfig<T> {
    fn default() -> Self {
        Self { zero_tolerance: T::zero() }
    }
}

/// Partial coefficients `a1, a2, ...` of a continued-fraction expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuedFraction<T> {
    alphas: Vec<T>,
}

impl<T: Float> ContinuedFraction<T> {
    #[inline] pub fn alphas(&self) -> &[T] { &self.alphas }
    #[inline] pub fn len(&self) -> usize { self.alphas.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.alphas.is_empty() }
    #[inline] pub fn into_vec(self) -> Vec<T> { self.alphas }
    #[inline] pub fn iter(&self) -> core::slice::Iter<'_, T> { self.alphas.iter() }

    /// Every coefficient strictly positive (vacuously true when empty).
    pub fn all_positive(&self) -> bool {
        self.alphas.iter().all(|&a| a > T::zero())
    }
}

/// Outcome of [`is_hurwitz`].
#[derive(Clone, Debug, PartialEq)]
pub struct HurwitzResult<T> {
    pub stable: bool,
    /// Present only when the expansion was requested.
    pub expansion: Option<ContinuedFraction<T>>,
}

/// Expand `num / den` into a continued fraction.
///
/// Requires `deg(num) >= deg(den)`; runs `deg(num)` division steps and
/// returns one partial coefficient per step.
///
/// # Errors
/// - [`RealizrError::ZeroPolynomial`] if `num` is all zeros
/// - [`RealizrError::InvalidDegreeOrder`] if `deg(num) < deg(den)`
/// - [`RealizrError::DegenerateInput`] if `den` (initial or intermediate)
///   becomes the zero polynomial before the last step
pub fn continued_fractions<T>(num: &Polynomial<T>, den: &Polynomial<T>) -> Result<ContinuedFraction<T>>
where
    T: Float + Debug,
{
    continued_fractions_with(num, den, &ExpansionConfig::default())
}

/// [`continued_fractions`] with an explicit [`ExpansionConfig`].
pub fn continued_fractions_with<T>(
    num: &Polynomial<T>,
    den: &Polynomial<T>,
    cfg: &ExpansionConfig<T>,
) -> Result<ContinuedFraction<T>>
where
    T: Float + Debug,
{
    let tol = cfg.zero_tolerance.abs();
    let steps = num.try_degree()?;
    let mut den = den.trimmed_with(tol);
    let den_degree = den
        .degree()
        .ok_or(RealizrError::DegenerateInput { step: 0, expected: steps })?;
    if den_degree > steps {
        return Err(RealizrError::InvalidDegreeOrder { num_degree: steps, den_degree });
    }

    let mut num = num.trimmed();
    let mut alphas = Vec::with_capacity(steps);
    for step in 0..steps {
        if den.is_zero() {
            log::debug!("continued fraction: denominator vanished at step {step}/{steps}");
            return Err(RealizrError::DegenerateInput { step, expected: steps });
        }
        let (quo, rem) = num.div_rem_with(&den, tol)?;
        let alpha = quo.coeff(1);
        log::trace!("continued fraction step {step}: quotient={quo:?} alpha={alpha:?}");
        alphas.push(alpha);
        num = den;
        den = rem;
    }

    log::debug!("continued fraction alphas: {alphas:?}");
    Ok(ContinuedFraction { alphas })
}

/// Hurwitz stability test.
///
/// Splits `pol` into even and odd parts; the part of strictly higher degree is
/// the numerator (ties go to the odd part), and the polynomial is stable iff
/// every partial coefficient of their continued fraction is strictly positive.
/// With `return_expansion` the coefficients are returned too.
///
/// # Errors
/// - [`RealizrError::DegenerateSplit`] if `pol` has no nonzero odd- or
///   even-indexed coefficient
/// - anything [`continued_fractions`] reports
pub fn is_hurwitz<T>(pol: &Polynomial<T>, return_expansion: bool) -> Result<HurwitzResult<T>>
where
    T: Float + Debug,
{
    is_hurwitz_with(pol, return_expansion, &ExpansionConfig::default())
}

/// [`is_hurwitz`] with an explicit [`ExpansionConfig`].
pub fn is_hurwitz_with<T>(
    pol: &Polynomial<T>,
    return_expansion: bool,
    cfg: &ExpansionConfig<T>,
) -> Result<HurwitzResult<T>>
where
    T: Float + Debug,
{
    let (even, odd) = pol.split_parity();
    let n = odd
        .degree()
        .ok_or(RealizrError::DegenerateSplit { missing: Parity::Odd })?;
    let m = even
        .degree()
        .ok_or(RealizrError::DegenerateSplit { missing: Parity::Even })?;

    let (num, den) = if m > n { (even, odd) } else { (odd, even) };
    let expansion = continued_fractions_with(&num, &den, cfg)?;
    let stable = expansion.all_positive();
    log::debug!("hurwitz test: even degree {m}, odd degree {n}, stable={stable}");

    Ok(HurwitzResult {
        stable,
        expansion: return_expansion.then_some(expansion),
    })
}

impl<T: Float + Debug> Polynomial<T> {
    /// Shorthand for `is_hurwitz(self, false)?.stable`.
    pub fn is_hurwitz_stable(&self) -> Result<bool> {
        is_hurwitz(self, false).map(|r| r.stable)
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::Poly64;

    fn assert_alphas(got: &ContinuedFraction<f64>, want: &[f64]) {
        assert_eq!(got.len(), want.len(), "alphas={:?}", got.alphas());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-12, "alphas={:?} want={:?}", got.alphas(), want);
        }
    }

    #[test]
    fn cubic_with_roots_one_two_three_is_stable() {
        let pol = Poly64::from_slice(&[6.0, 11.0, 6.0, 1.0]);
        let res = is_hurwitz(&pol, true).unwrap();
        assert!(res.stable);
        assert_alphas(res.expansion.as_ref().unwrap(), &[1.0 / 6.0, 0.6, 10.0 / 6.0]);
    }

    #[test]
    fn negative_alpha_is_unstable() {
        let pol = Poly64::from_slice(&[1.0, 1.0, 1.0, 2.0]);
        let res = is_hurwitz(&pol, true).unwrap();
        assert!(!res.stable);
        assert_alphas(res.expansion.as_ref().unwrap(), &[2.0, -1.0, -1.0]);
    }

    #[test]
    fn third_order_butterworth_is_stable() {
        let pol = Poly64::from_slice(&[1.0, 2.0, 2.0, 1.0]);
        let res = is_hurwitz(&pol, true).unwrap();
        assert!(res.stable);
        assert_alphas(res.expansion.as_ref().unwrap(), &[0.5, 4.0 / 3.0, 1.5]);
    }

    #[test]
    fn expansion_is_omitted_unless_requested() {
        let pol = Poly64::from_slice(&[6.0, 11.0, 6.0, 1.0]);
        let res = is_hurwitz(&pol, false).unwrap();
        assert!(res.stable);
        assert!(res.expansion.is_none());
        assert_eq!(pol.is_hurwitz_stable(), Ok(true));
    }

    #[test]
    fn even_numerator_when_even_degree_is_higher() {
        // (s + 1)^4
        let pol = Poly64::from_slice(&[1.0, 4.0, 6.0, 4.0, 1.0]);
        let res = is_hurwitz(&pol, true).unwrap();
        assert!(res.stable);
        assert_alphas(res.expansion.as_ref().unwrap(), &[0.25, 0.8, 1.5625, 3.2]);
    }

    #[test]
    fn explicit_even_over_odd_expansion() {
        let num = Poly64::from_slice(&[6.0, 0.0, 8.0, 0.0, 2.0]);
        let den = Poly64::from_slice(&[0.0, 2.0, 0.0, 1.0, 0.0]);
        let cf = continued_fractions(&num, &den).unwrap();
        assert_alphas(&cf, &[2.0, 0.25, 8.0, 0.5 / 6.0]);
    }

    #[test]
    fn lower_degree_numerator_is_rejected() {
        let num = Poly64::from_slice(&[0.0, 1.0]);
        let den = Poly64::from_slice(&[1.0, 1.0, 1.0]);
        assert_eq!(
            continued_fractions(&num, &den),
            Err(RealizrError::InvalidDegreeOrder { num_degree: 1, den_degree: 2 })
        );
    }

    #[test]
    fn imaginary_axis_roots_are_degenerate() {
        // (s + 1)(s^2 + 1): odd part is s * even part
        let pol = Poly64::from_slice(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            is_hurwitz(&pol, false),
            Err(RealizrError::DegenerateInput { step: 1, expected: 3 })
        );
    }

    #[test]
    fn zero_denominator_is_degenerate_at_step_zero() {
        let num = Poly64::from_slice(&[0.0, 1.0]);
        let den = Poly64::from_slice(&[0.0, 0.0]);
        assert_eq!(
            continued_fractions(&num, &den),
            Err(RealizrError::DegenerateInput { step: 0, expected: 1 })
        );
    }

    #[test]
    fn zero_numerator_is_rejected() {
        let num = Poly64::from_slice(&[0.0, 0.0]);
        let den = Poly64::from_slice(&[1.0]);
        assert_eq!(continued_fractions(&num, &den), Err(RealizrError::ZeroPolynomial));
    }

    #[test]
    fn missing_parity_is_a_split_error() {
        let only_even = Poly64::from_slice(&[1.0, 0.0, 1.0]);
        assert_eq!(
            is_hurwitz(&only_even, false),
            Err(RealizrError::DegenerateSplit { missing: Parity::Odd })
        );
        let only_odd = Poly64::from_slice(&[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(
            is_hurwitz(&only_odd, false),
            Err(RealizrError::DegenerateSplit { missing: Parity::Even })
        );
        let constant = Poly64::from_slice(&[5.0]);
        assert!(matches!(is_hurwitz(&constant, false), Err(RealizrError::DegenerateSplit { .. })));
    }

    #[test]
    fn equal_degrees_record_zero_linear_term() {
        // quotient of equal-degree polynomials is a constant: no linear term
        let num = Poly64::from_slice(&[1.0, 2.0]);
        let den = Poly64::from_slice(&[1.0, 1.0]);
        let cf = continued_fractions(&num, &den).unwrap();
        assert_eq!(cf.alphas(), &[0.0]);
        assert!(!cf.all_positive());
    }

    #[test]
    fn tolerance_turns_residue_into_degeneracy() {
        let num = Poly64::from_slice(&[0.0, 1.0, 0.0, 1.0]);
        let den = Poly64::from_slice(&[1.0 + 1e-14, 0.0, 1.0]);
        // exact: the tiny residue keeps the expansion going
        assert!(continued_fractions(&num, &den).is_ok());
        let cfg = ExpansionConfig { zero_tolerance: 1e-9 };
        assert_eq!(
            continued_fractions_with(&num, &den, &cfg),
            Err(RealizrError::DegenerateInput { step: 1, expected: 3 })
        );
    }

    #[test]
    fn single_precision_works_too() {
        let pol = Polynomial::<f32>::from_slice(&[6.0, 11.0, 6.0, 1.0]);
        assert_eq!(pol.is_hurwitz_stable(), Ok(true));
    }
}
