//! Frequency grids and batched sweeps.
//!
//! A plotting front end samples the pipeline over a grid of angular
//! frequencies and redraws; this module produces those grids and evaluates
//! a whole sweep at once.

use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;
use realizr_core::math::phase_deg;

use crate::response::Response;
use crate::transfer::s_domain_to_frequency_domain;

/// Sampled angular-frequency domain (rad/s).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FrequencyGrid {
    /// `points` evenly spaced values from `start` to `stop` inclusive.
    Linear { start: f64, stop: f64, points: usize },
    /// `points` values from `10^start_decade` to `10^stop_decade`, evenly
    /// spaced in log scale.
    Log { start_decade: f64, stop_decade: f64, points: usize },
}

impl Default for FrequencyGrid {
    fn default() -> Self {
        FrequencyGrid::Linear { start: 0.0, stop: 5.0, points: 1000 }
    }
}

impl FrequencyGrid {
    #[inline]
    pub fn points(&self) -> usize {
        match *self {
            FrequencyGrid::Linear { points, .. } | FrequencyGrid::Log { points, .. } => points,
        }
    }

    /// Materialize the grid.
    pub fn samples(&self) -> Array1<f64> {
        match *self {
            FrequencyGrid::Linear { start, stop, points } => Array1::linspace(start, stop, points),
            FrequencyGrid::Log { start_decade, stop_decade, points } => {
                Array1::logspace(10.0, start_decade, stop_decade, points)
            }
        }
    }
}

/// Complex frequency response sampled on a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyResponse {
    /// Angular frequencies (rad/s).
    pub w: Array1<f64>,
    /// `hs(jw)` at each frequency.
    pub h: Array1<Complex64>,
}

impl FrequencyResponse {
    /// `|h|` per sample.
    pub fn magnitude(&self) -> Array1<f64> {
        self.h.mapv(|z| z.norm())
    }

    /// `arg h` in degrees per sample, within (−180°, 180°].
    pub fn phase_deg(&self) -> Array1<f64> {
        self.h.mapv(|z| phase_deg(z.arg()))
    }

    /// `(Re h, Im h)` as two arrays, ready for a Nyquist plot.
    pub fn nyquist(&self) -> (Array1<f64>, Array1<f64>) {
        (self.h.mapv(|z| z.re), self.h.mapv(|z| z.im))
    }

    #[inline] pub fn len(&self) -> usize { self.w.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.w.is_empty() }
}

/// Evaluate `hs(jw)` for every `w`.
pub fn freqs<H>(hs: &H, w: ArrayView1<'_, f64>) -> FrequencyResponse
where
    H: Response<Complex64, Output = Complex64>,
{
    let h = s_domain_to_frequency_domain(hs).eval_many(w);
    log::debug!("sampled frequency response at {} points", w.len());
    FrequencyResponse { w: w.to_owned(), h }
}

/// [`freqs`] over a [`FrequencyGrid`].
pub fn sweep<H>(hs: &H, grid: &FrequencyGrid) -> FrequencyResponse
where
    H: Response<Complex64, Output = Complex64>,
{
    let w = grid.samples();
    freqs(hs, w.view())
}
