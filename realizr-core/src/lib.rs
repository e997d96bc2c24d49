#![cfg_attr(not(feature = "std"), no_std)]
//! Realizr Core — polynomial analysis for analog filter realizability (no_std-ready, needs `alloc`).
//!
//! Features
//! - `std`    : (default) use the Rust standard library
//! - `no-std` : build with `#![no_std]` and use `libm` as the math backend
//!
//! Modules
//! - [`poly`]         : ascending-power polynomials, parity split, long division
//! - [`realizations`] : continued-fraction expansion and the Hurwitz test
//! - [`prototypes`]   : closed-form Butterworth / Chebyshev magnitudes
//! - [`math`]         : math backend, angle and dB helpers
//! - [`error`]        : the shared [`RealizrError`]
//!
//! ```
//! use realizr_core::prelude::*;
//!
//! // (s + 1)(s + 2)(s + 3)
//! let pol = Poly64::from_slice(&[6.0, 11.0, 6.0, 1.0]);
//! let res = is_hurwitz(&pol, true).unwrap();
//! assert!(res.stable);
//! assert_eq!(res.expansion.unwrap().len(), 3);
//! ```

extern crate alloc;

pub mod error;
pub mod math;
pub mod poly;
pub mod prototypes;
pub mod realizations;

pub use error::{Parity, RealizrError, Result};
pub use poly::{Poly64, Polynomial};

/// Commonly used types/functions for convenience:
pub mod prelude {
    pub use crate::error::{Parity, RealizrError};
    pub use crate::math::{deg_to_rad, phase_deg, rad_to_deg};
    pub use crate::poly::{Poly64, Polynomial};
    pub use crate::prototypes::{butterworth_magnitude, chebyshev_magnitude, ripple_epsilon};
    pub use crate::realizations::{
        continued_fractions, continued_fractions_with, is_hurwitz, is_hurwitz_with,
        ContinuedFraction, ExpansionConfig, HurwitzResult,
    };
}

#[cfg(test)]
mod smoke {

    #[test]
    fn prelude_exists() {
        use crate::prelude::*;
        let _ = butterworth_magnitude(1.0, 3);
        let pol = Poly64::from_slice(&[1.0, 2.0, 2.0, 1.0]);
        let (even, odd) = pol.split_parity();
        let _ = continued_fractions(&odd, &even);
        assert_eq!(pol.is_hurwitz_stable(), Ok(true));
    }
}
