//! Dense real polynomials in ascending-power order.
//!
//! `coeffs[k]` is the coefficient of `x^k`. This is the arithmetic primitive the
//! continued-fraction expansion is built on: degree bookkeeping, even/odd
//! splitting and long division with quotient and remainder.
//!
//! Notes
//! - The zero polynomial has no degree; [`Polynomial::degree`] returns `None`
//!   and [`Polynomial::try_degree`] fails with [`RealizrError::ZeroPolynomial`].
//! - Trimming always keeps at least one coefficient, so the trimmed zero
//!   polynomial is `[0]`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul};

use num_traits::{Float, Zero};

use crate::error::{RealizrError, Result};

/// Real polynomial, ascending powers.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

/// Double-precision polynomial, the common case.
pub type Poly64 = Polynomial<f64>;

impl<T: Float> Polynomial<T> {
    #[inline]
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    #[inline]
    pub fn from_slice(coeffs: &[T]) -> Self {
        Self { coeffs: coeffs.to_vec() }
    }

    /// Build from a highest-power-first sequence (the usual filter-design layout).
    pub fn from_descending(coeffs: &[T]) -> Self {
        Self { coeffs: coeffs.iter().rev().copied().collect() }
    }

    /// Monic polynomial with the given real roots: `∏ (x - r)`.
    pub fn from_roots(roots: &[T]) -> Self {
        roots.iter().fold(Self::new(vec![T::one()]), |acc, &r| {
            &acc * &Self::new(vec![-r, T::one()])
        })
    }

    /// The zero polynomial `[0]`.
    #[inline]
    pub fn zero() -> Self {
        Self { coeffs: vec![T::zero()] }
    }

    #[inline] pub fn coeffs(&self) -> &[T] { &self.coeffs }
    #[inline] pub fn len(&self) -> usize { self.coeffs.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.coeffs.is_empty() }
    #[inline] pub fn into_vec(self) -> Vec<T> { self.coeffs }

    /// Coefficient of `x^k`; zero past the stored length.
    #[inline]
    pub fn coeff(&self, k: usize) -> T {
        self.coeffs.get(k).copied().unwrap_or_else(T::zero)
    }

    /// True when every coefficient is zero (or there are none).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Index of the highest nonzero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Like [`degree`](Self::degree), but the zero polynomial is an error.
    pub fn try_degree(&self) -> Result<usize> {
        self.degree().ok_or(RealizrError::ZeroPolynomial)
    }

    /// Drop trailing zero coefficients, keeping at least one entry.
    pub fn trimmed(&self) -> Self {
        self.trimmed_with(T::zero())
    }

    /// Drop trailing coefficients with `|c| <= tol`, keeping at least one entry.
    pub fn trimmed_with(&self, tol: T) -> Self {
        match self.coeffs.iter().rposition(|c| c.abs() > tol) {
            Some(last) => Self { coeffs: self.coeffs[..=last].to_vec() },
            None => Self::zero(),
        }
    }

    /// Same-length polynomial holding only the even-power coefficients.
    pub fn even_part(&self) -> Self {
        self.keep_parity(0)
    }

    /// Same-length polynomial holding only the odd-power coefficients.
    pub fn odd_part(&self) -> Self {
        self.keep_parity(1)
    }

    /// `(even_part, odd_part)`; their sum is `self`.
    pub fn split_parity(&self) -> (Self, Self) {
        (self.even_part(), self.odd_part())
    }

    fn keep_parity(&self, rem: usize) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| if k % 2 == rem { c } else { T::zero() })
            .collect();
        Self { coeffs }
    }

    /// Evaluate at a real point (Horner).
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.eval_at(x)
    }

    /// Evaluate at any point type that multiplies with itself and accepts a
    /// real offset, e.g. `num_complex::Complex<T>`.
    #[inline]
    pub fn eval_at<X>(&self, x: X) -> X
    where
        X: Zero + Copy + Mul<Output = X> + Add<T, Output = X>,
    {
        self.coeffs.iter().rev().fold(X::zero(), |acc, &c| acc * x + c)
    }

    /// Long division: `self = quotient * divisor + remainder`.
    ///
    /// - a constant divisor yields remainder `[0]`
    /// - a divisor of higher degree yields quotient `[0]` and `self` as remainder
    /// - the remainder is trimmed
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.div_rem_with(divisor, T::zero())
    }

    /// [`div_rem`](Self::div_rem) with a magnitude `tol` below which remainder
    /// coefficients count as zero when trimming.
    pub fn div_rem_with(&self, divisor: &Self, tol: T) -> Result<(Self, Self)> {
        let den_deg = divisor.degree().ok_or(RealizrError::DivisionByZero)?;
        let den = &divisor.coeffs[..=den_deg];
        let lead = den[den_deg];

        let mut rem = self.trimmed().coeffs;
        if rem.len() <= den_deg {
            return Ok((Self::zero(), Self { coeffs: rem }));
        }

        let mut quo = vec![T::zero(); rem.len() - den_deg];
        for k in (0..quo.len()).rev() {
            let q = rem[k + den_deg] / lead;
            quo[k] = q;
            for (i, &d) in den.iter().enumerate() {
                rem[k + i] = rem[k + i] - q * d;
            }
        }
        rem.truncate(den_deg);

        Ok((Self { coeffs: quo }, Self { coeffs: rem }.trimmed_with(tol)))
    }
}

impl<T: Float> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Float> From<&[T]> for Polynomial<T> {
    fn from(coeffs: &[T]) -> Self {
        Self::from_slice(coeffs)
    }
}

impl<T: Float> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Polynomial<T> {
        if self.is_empty() || rhs.is_empty() {
            return Polynomial::zero();
        }
        let mut out = vec![T::zero(); self.len() + rhs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Polynomial::new(out)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let (sign, mag) = if *c < T::zero() { ("-", c.abs()) } else { ("+", *c) };
            if first {
                if sign == "-" { f.write_str("-")?; }
            } else {
                write!(f, " {sign} ")?;
            }
            match k {
                0 => write!(f, "{mag}")?,
                _ if mag == T::one() => {}
                _ => write!(f, "{mag}")?,
            }
            match k {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{k}")?,
            }
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

// ------------------------------------ Tests --------------------------------------
