//! Transfer-function pipeline stages.
//!
//! ```text
//! coefficients ──► hs(s) ──► hw(w) = hs(jw) ──► |hw(w)|        (Magnitude)
//!                                         ├──► arg hw(w) [deg] (Phase)
//!                                         └──► (Re, Im)        (Nyquist)
//! ```
//!
//! Every stage captures its inputs at construction time and is immutable
//! afterwards. Build the chain once and reuse it; nothing is cached behind the
//! caller's back.
//!
//! Poles are not special-cased: evaluating `hs` at a root of the denominator
//! yields `inf`/`NaN` components, following IEEE division. Filter such
//! frequencies out before sampling if that matters.

use num_complex::Complex64;
use realizr_core::math::phase_deg;
use realizr_core::{Poly64, RealizrError, Result};

use crate::response::Response;

/// s-domain transfer function `hs(s) = N(s) / D(s)`.
///
/// Both coefficient sequences are given highest power first. A single
/// numerator entry is a plain gain.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    numerator: Poly64,
    denominator: Poly64,
}

impl TransferFunction {
    /// See [`coefficients_to_transfer_function`].
    pub fn new(numerator: &[f64], denominator: &[f64], order: usize) -> Result<Self> {
        if numerator.is_empty() {
            return Err(RealizrError::EmptyCoefficients("numerator"));
        }
        if denominator.len().checked_sub(1) != Some(order) {
            return Err(RealizrError::OrderMismatch { order, len: denominator.len() });
        }
        Ok(Self {
            numerator: Poly64::from_descending(numerator),
            denominator: Poly64::from_descending(denominator),
        })
    }

    /// Numerator, ascending powers.
    #[inline] pub fn numerator(&self) -> &Poly64 { &self.numerator }
    /// Denominator, ascending powers.
    #[inline] pub fn denominator(&self) -> &Poly64 { &self.denominator }
    /// Filter order, one less than the denominator length.
    #[inline] pub fn order(&self) -> usize { self.denominator.len() - 1 }
}

impl Response<Complex64> for TransferFunction {
    type Output = Complex64;

    #[inline]
    fn eval(&self, s: Complex64) -> Complex64 {
        self.numerator.eval_at(s) / self.denominator.eval_at(s)
    }
}

/// Frequency-domain transfer function `hw(w) = hs(jw)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyDomain<H> {
    hs: H,
}

impl<H> FrequencyDomain<H> {
    #[inline] pub fn inner(&self) -> &H { &self.hs }
}

impl<H> Response<f64> for FrequencyDomain<H>
where
    H: Response<Complex64, Output = Complex64>,
{
    type Output = Complex64;

    #[inline]
    fn eval(&self, w: f64) -> Complex64 {
        self.hs.eval(Complex64::new(0.0, w))
    }
}

/// Magnitude response `|hw(w)|`.
#[derive(Clone, Debug, PartialEq)]
pub struct Magnitude<H> {
    hw: H,
}

impl<H> Magnitude<H> {
    #[inline] pub fn inner(&self) -> &H { &self.hw }
}

impl<H> Response<f64> for Magnitude<H>
where
    H: Response<f64, Output = Complex64>,
{
    type Output = f64;

    #[inline]
    fn eval(&self, w: f64) -> f64 {
        self.hw.eval(w).norm()
    }
}

/// Phase response `arg hw(w)` in degrees, within (−180°, 180°].
#[derive(Clone, Debug, PartialEq)]
pub struct Phase<H> {
    hw: H,
}

impl<H> Phase<H> {
    #[inline] pub fn inner(&self) -> &H { &self.hw }
}

impl<H> Response<f64> for Phase<H>
where
    H: Response<f64, Output = Complex64>,
{
    type Output = f64;

    #[inline]
    fn eval(&self, w: f64) -> f64 {
        phase_deg(self.hw.eval(w).arg())
    }
}

/// Nyquist curve point `(Re hw(w), Im hw(w))`.
#[derive(Clone, Debug, PartialEq)]
pub struct Nyquist<H> {
    hw: H,
}

impl<H> Nyquist<H> {
    #[inline] pub fn inner(&self) -> &H { &self.hw }
}

impl<H> Response<f64> for Nyquist<H>
where
    H: Response<f64, Output = Complex64>,
{
    type Output = (f64, f64);

    #[inline]
    fn eval(&self, w: f64) -> (f64, f64) {
        let h = self.hw.eval(w);
        (h.re, h.im)
    }
}

// --------------------------------- Stage builders --------------------------------

/// Build `hs(s) = N(s) / Σ_{k=0}^{order} denominator[order - k] s^k`.
///
/// # Errors
/// - [`RealizrError::OrderMismatch`] unless `denominator.len() == order + 1`
/// - [`RealizrError::EmptyCoefficients`] for an empty numerator
#[inline]
pub fn coefficients_to_transfer_function(
    numerator: &[f64],
    denominator: &[f64],
    order: usize,
) -> Result<TransferFunction> {
    TransferFunction::new(numerator, denominator, order)
}

/// Substitute the imaginary axis: `hw(w) = hs(jw)`.
#[inline]
pub fn s_domain_to_frequency_domain<H>(hs: H) -> FrequencyDomain<H>
where
    H: Response<Complex64, Output = Complex64>,
{
    FrequencyDomain { hs }
}

/// `hwmag(w) = |hw(w)|`.
#[inline]
pub fn frequency_domain_to_magnitude<H>(hw: H) -> Magnitude<H>
where
    H: Response<f64, Output = Complex64>,
{
    Magnitude { hw }
}

/// `hwphase(w) = arg hw(w) * 180 / π`.
#[inline]
pub fn frequency_domain_to_phase<H>(hw: H) -> Phase<H>
where
    H: Response<f64, Output = Complex64>,
{
    Phase { hw }
}

/// `(Re hw(w), Im hw(w))`, the points of a Nyquist plot.
#[inline]
pub fn frequency_domain_to_nyquist<H>(hw: H) -> Nyquist<H>
where
    H: Response<f64, Output = Complex64>,
{
    Nyquist { hw }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::from_fn;
    use core::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn order_zero_is_a_constant_gain() {
        let hs = coefficients_to_transfer_function(&[-2.5], &[1.0], 0).unwrap();
        for s in [Complex64::new(0.0, 0.0), Complex64::new(3.0, -1.0), Complex64::new(-7.0, 2.0)] {
            assert_eq!(hs.eval(s), Complex64::new(-2.5, 0.0));
        }
        let mag = frequency_domain_to_magnitude(s_domain_to_frequency_domain(hs));
        for w in [0.0, 0.1, 1.0, 1e6] {
            assert_eq!(mag.eval(w), 2.5);
        }
    }

    #[test]
    fn first_order_lowpass() {
        // H(s) = 1 / (s + 1)
        let hw = s_domain_to_frequency_domain(
            coefficients_to_transfer_function(&[1.0], &[1.0, 1.0], 1).unwrap(),
        );
        let mag = frequency_domain_to_magnitude(&hw);
        let phase = frequency_domain_to_phase(&hw);
        assert!((mag.eval(0.0) - 1.0).abs() < 1e-12);
        assert!((mag.eval(1.0) - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((phase.eval(1.0) + 45.0).abs() < 1e-12);
        assert!(phase.eval(0.0).abs() < 1e-12);
    }

    #[test]
    fn denominator_is_highest_power_first() {
        // D(s) = 2 s^2 + 3 s + 5
        let hs = coefficients_to_transfer_function(&[1.0], &[2.0, 3.0, 5.0], 2).unwrap();
        assert_eq!(hs.denominator().coeffs(), &[5.0, 3.0, 2.0]);
        let s = Complex64::new(2.0, 0.0);
        assert_eq!(hs.eval(s), Complex64::new(1.0 / 19.0, 0.0));
    }

    #[test]
    fn order_must_match_denominator_length() {
        assert_eq!(
            coefficients_to_transfer_function(&[1.0], &[1.0, 2.0], 2),
            Err(RealizrError::OrderMismatch { order: 2, len: 2 })
        );
        assert_eq!(
            coefficients_to_transfer_function(&[], &[1.0], 0),
            Err(RealizrError::EmptyCoefficients("numerator"))
        );
    }

    #[test]
    fn huge_order_is_a_mismatch_not_an_overflow() {
        assert_eq!(
            coefficients_to_transfer_function(&[1.0], &[], usize::MAX),
            Err(RealizrError::OrderMismatch { order: usize::MAX, len: 0 })
        );
        assert_eq!(
            coefficients_to_transfer_function(&[1.0], &[1.0, 2.0], usize::MAX),
            Err(RealizrError::OrderMismatch { order: usize::MAX, len: 2 })
        );
        let hs = coefficients_to_transfer_function(&[1.0], &[1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(hs.order(), 2);
    }

    #[test]
    fn pole_on_the_axis_is_not_an_error() {
        // H(s) = 1 / (s^2 + 1) has poles at ±j
        let hw = s_domain_to_frequency_domain(
            coefficients_to_transfer_function(&[1.0], &[1.0, 0.0, 1.0], 2).unwrap(),
        );
        let h = hw.eval(1.0);
        assert!(!h.re.is_finite() || !h.im.is_finite());
        assert!(!frequency_domain_to_magnitude(&hw).eval(1.0).is_finite());
    }

    #[test]
    fn negative_real_response_reports_plus_180() {
        let hw = from_fn(|_w: f64| Complex64::new(-1.0, -0.0));
        assert_eq!(frequency_domain_to_phase(hw).eval(0.0), 180.0);
    }

    #[test]
    fn nyquist_returns_real_and_imaginary_parts() {
        let hw = s_domain_to_frequency_domain(
            coefficients_to_transfer_function(&[1.0], &[1.0, 1.0], 1).unwrap(),
        );
        let (re, im) = frequency_domain_to_nyquist(hw).eval(1.0);
        assert!((re - 0.5).abs() < 1e-12);
        assert!((im + 0.5).abs() < 1e-12);
    }

    #[test]
    fn custom_s_domain_closures_compose() {
        let hs = from_fn(|s: Complex64| Complex64::new(1.0, 0.0) / (s + 2.0));
        let mag = frequency_domain_to_magnitude(s_domain_to_frequency_domain(hs));
        assert!((mag.eval(0.0) - 0.5).abs() < 1e-12);
    }
}
