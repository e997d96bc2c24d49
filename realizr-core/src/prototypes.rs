//! Closed-form magnitude responses of the normalized low-pass prototypes.
//!
//! Both prototypes have a 1 rad/s cutoff. They are the ideal curves a sampled
//! pipeline response (built from externally designed coefficients) is compared
//! against.
//!
//! - Butterworth: `|H(jw)| = 1 / sqrt(1 + w^(2n))`
//! - Chebyshev type I: `|H(jw)| = 1 / sqrt(1 + (eps * T_n(w))^2)`,
//!   `eps = sqrt(10^(ripple_db / 10) - 1)`

use crate::math::{db_to_power, m_acos, m_acosh, m_cos, m_cosh, m_fabs, m_powf, m_sqrt};

/// Butterworth magnitude of order `order` at angular frequency `w`.
#[inline]
pub fn butterworth_magnitude(w: f64, order: u32) -> f64 {
    1.0 / m_sqrt(1.0 + m_powf(w * w, f64::from(order)))
}

/// Ripple factor `eps` for a pass-band ripple given in dB.
#[inline]
pub fn ripple_epsilon(ripple_db: f64) -> f64 {
    m_sqrt(db_to_power(ripple_db) - 1.0)
}

/// Chebyshev polynomial of the first kind, `T_n(w)`.
///
/// Uses the trigonometric form inside `[-1, 1]` and the hyperbolic form
/// outside; for `w < -1` the parity `T_n(-w) = (-1)^n T_n(w)` is applied.
pub fn chebyshev_t(w: f64, order: u32) -> f64 {
    let n = f64::from(order);
    let a = m_fabs(w);
    if a <= 1.0 {
        m_cos(n * m_acos(w))
    } else {
        let t = m_cosh(n * m_acosh(a));
        if w < 0.0 && order % 2 == 1 { -t } else { t }
    }
}

/// Chebyshev type I magnitude of order `order` with `ripple_db` pass-band ripple.
#[inline]
pub fn chebyshev_magnitude(w: f64, order: u32, ripple_db: f64) -> f64 {
    let et = ripple_epsilon(ripple_db) * chebyshev_t(w, order);
    1.0 / m_sqrt(1.0 + et * et)
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn butterworth_half_power_at_cutoff() {
        for n in 1..8 {
            let m = butterworth_magnitude(1.0, n);
            assert!((m - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12, "n={} m={}", n, m);
        }
        assert_eq!(butterworth_magnitude(0.0, 4), 1.0);
        assert!(butterworth_magnitude(10.0, 4) < 1e-3);
    }

    #[test]
    fn chebyshev_t_matches_recurrence() {
        // T0 = 1, T1 = w, T_{n+1} = 2 w T_n - T_{n-1}
        for &w in &[-2.5, -1.0, -0.3, 0.0, 0.7, 1.0, 3.0] {
            let (mut prev, mut cur) = (1.0, w);
            for n in 1..6u32 {
                let t = chebyshev_t(w, n);
                assert!((t - cur).abs() < 1e-9 * cur.abs().max(1.0), "w={} n={} t={} want={}", w, n, t, cur);
                let next = 2.0 * w * cur - prev;
                prev = cur;
                cur = next;
            }
        }
    }

    #[test]
    fn chebyshev_ripple_floor_in_passband() {
        let ripple = 0.5;
        let floor = 1.0 / (1.0 + ripple_epsilon(ripple).powi(2)).sqrt();
        for i in 0..=100 {
            let w = f64::from(i) / 100.0;
            let m = chebyshev_magnitude(w, 4, ripple);
            assert!(m <= 1.0 + 1e-12 && m >= floor - 1e-12, "w={} m={}", w, m);
        }
        // magnitude at the cutoff sits on the ripple floor
        assert!((chebyshev_magnitude(1.0, 3, ripple) - floor).abs() < 1e-12);
    }
}
