//! Scalar math helpers shared by the analyzer and the response pipeline.
//!
//! Design goals:
//! - `no_std` ready (guarded by the crate feature `no-std`)
//! - Math backend selection that works in both `std` and `no_std` contexts
//! - Clean, side-effect free helpers that are easy to test
//!
//! Conventions:
//! - Angles are radians unless the name says `deg`.
//! - All functions are `#[inline]` where useful to help the optimizer.

use core::f64::consts::PI;

use cfg_if::cfg_if;

// ----------------------------- Math backend selection -----------------------------

cfg_if! {
    // libm (C math) in no_std
    if #[cfg(all(feature = "no-std", not(feature = "std")))] {
        #[inline] pub(crate) fn m_fabs(x: f64) -> f64 { libm::fabs(x) }
        #[inline] pub(crate) fn m_sqrt(x: f64) -> f64 { libm::sqrt(x) }
        #[inline] pub(crate) fn m_cos(x: f64) -> f64 { libm::cos(x) }
        #[inline] pub(crate) fn m_acos(x: f64) -> f64 { libm::acos(x) }
        #[inline] pub(crate) fn m_cosh(x: f64) -> f64 { libm::cosh(x) }
        #[inline] pub(crate) fn m_acosh(x: f64) -> f64 { libm::acosh(x) }
        #[inline] pub(crate) fn m_powf(x: f64, y: f64) -> f64 { libm::pow(x, y) }
    // std backend
    } else {
        #[inline] pub(crate) fn m_fabs(x: f64) -> f64 { x.abs() }
        #[inline] pub(crate) fn m_sqrt(x: f64) -> f64 { x.sqrt() }
        #[inline] pub(crate) fn m_cos(x: f64) -> f64 { x.cos() }
        #[inline] pub(crate) fn m_acos(x: f64) -> f64 { x.acos() }
        #[inline] pub(crate) fn m_cosh(x: f64) -> f64 { x.cosh() }
        #[inline] pub(crate) fn m_acosh(x: f64) -> f64 { x.acosh() }
        #[inline] pub(crate) fn m_powf(x: f64, y: f64) -> f64 { x.powf(y) }
    }
}

// --------------------------------- Constants -------------------------------------

/// Degrees per radian.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Radians per degree.
pub const DEG_TO_RAD: f64 = PI / 180.0;

// --------------------------------- Angles ----------------------------------------

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// Convert an `atan2` angle to degrees in the half-open range (−180°, 180°].
///
/// `atan2` can return exactly −π (negative zero imaginary part on the negative
/// real axis); that point is reported as +180°.
#[inline]
pub fn phase_deg(rad: f64) -> f64 {
    let d = rad_to_deg(rad);
    if d <= -180.0 { d + 360.0 } else { d }
}

// --------------------------------- dB --------------------------------------------

/// Power ratio for a level in dB: `10^(db/10)`.
#[inline]
pub fn db_to_power(db: f64) -> f64 {
    m_powf(10.0, db / 10.0)
}

// --------------------------------- Tests (std only) ------------------------------
