//! Realizr Response — analog filter frequency responses as composable pure stages.
//!
//! Crate layout:
//! - [`response`] : the `Response` trait, closure adapter, batched evaluation
//! - [`transfer`] : `hs` → `hw` → magnitude / phase / Nyquist stages
//! - [`sweep`]    : frequency grids and whole-sweep evaluation
//!
//! Coefficients come from an external filter-design routine; this crate only
//! turns them into functions a plotting front end can sample. Stages hold no
//! mutable state: build the chain once, then evaluate it as often as needed,
//! from as many threads as needed.
//!
//! ```
//! use realizr_response::prelude::*;
//!
//! // 3rd-order Butterworth: 1 / (s^3 + 2 s^2 + 2 s + 1)
//! let hs = coefficients_to_transfer_function(&[1.0], &[1.0, 2.0, 2.0, 1.0], 3).unwrap();
//! let hw = s_domain_to_frequency_domain(hs);
//! let mag = frequency_domain_to_magnitude(&hw);
//! assert!((mag.eval(1.0) - 0.5f64.sqrt()).abs() < 1e-12);
//! ```

pub mod response;
pub mod sweep;
pub mod transfer;

// Re-export some commonly used items to make downstream imports ergonomic.
pub use response::{from_fn, FnResponse, Response};
pub use sweep::{freqs, sweep, FrequencyGrid, FrequencyResponse};
pub use transfer::{
    coefficients_to_transfer_function, frequency_domain_to_magnitude, frequency_domain_to_nyquist,
    frequency_domain_to_phase, s_domain_to_frequency_domain, FrequencyDomain, Magnitude, Nyquist,
    Phase, TransferFunction,
};

/// Commonly used types/functions for convenience:
pub mod prelude {
    pub use crate::response::{from_fn, Response};
    pub use crate::sweep::{freqs, sweep, FrequencyGrid, FrequencyResponse};
    pub use crate::transfer::{
        coefficients_to_transfer_function, frequency_domain_to_magnitude,
        frequency_domain_to_nyquist, frequency_domain_to_phase, s_domain_to_frequency_domain,
        TransferFunction,
    };
    pub use num_complex::Complex64;
    pub use realizr_core::RealizrError;
}
