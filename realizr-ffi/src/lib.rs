//! C ABI wrapper for realizr.
//!
//! Exposes the Hurwitz test, the continued-fraction expansion and a
//! transfer-function handle that samples magnitude / phase responses, so a
//! plotting front end written in any language can drive the core.
//!
//! ABI notes
//! - All functions are `extern "C"` and `#[no_mangle]`.
//! - Coefficient arrays are `(pointer, length)` pairs of `double`, ascending
//!   powers for polynomials, highest power first for transfer functions.
//! - Status codes: `0` is success, negative values are [`RealizrStatus`].
//! - Opaque handle type: `RealizrTransfer` (heap-allocated; you own/delete it).
//!
//! Threading
//! - Every function is pure apart from writing caller buffers. A transfer
//!   handle may be sampled from several threads at once.
//!
//! Entry points stay safe `extern "C"` functions: every pointer is null-checked
//! and the remaining contracts are listed under `# Safety` on each one.

#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ptr;
use std::slice;

use ndarray::ArrayView1;
use realizr_core::realizations::{continued_fractions, is_hurwitz};
use realizr_core::{Poly64, RealizrError};
use realizr_response::{
    coefficients_to_transfer_function, frequency_domain_to_magnitude, frequency_domain_to_phase,
    s_domain_to_frequency_domain, FrequencyDomain, Response, TransferFunction,
};

/// Status codes shared by every entry point.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RealizrStatus {
    Ok = 0,
    NullPointer = -1,
    BufferTooSmall = -2,
    InvalidDegreeOrder = -3,
    DegenerateInput = -4,
    DegenerateSplit = -5,
    ZeroPolynomial = -6,
    DivisionByZero = -7,
    OrderMismatch = -8,
    EmptyCoefficients = -9,
}

impl From<&RealizrError> for RealizrStatus {
    fn from(e: &RealizrError) -> Self {
        match e {
            RealizrError::InvalidDegreeOrder { .. } => RealizrStatus::InvalidDegreeOrder,
            RealizrError::DegenerateInput { .. } => RealizrStatus::DegenerateInput,
            RealizrError::DegenerateSplit { .. } => RealizrStatus::DegenerateSplit,
            RealizrError::ZeroPolynomial => RealizrStatus::ZeroPolynomial,
            RealizrError::DivisionByZero => RealizrStatus::DivisionByZero,
            RealizrError::OrderMismatch { .. } => RealizrStatus::OrderMismatch,
            RealizrError::EmptyCoefficients(_) => RealizrStatus::EmptyCoefficients,
        }
    }
}

fn fail(e: &RealizrError) -> i32 {
    log::debug!("realizr-ffi: {e}");
    RealizrStatus::from(e) as i32
}

/// View a caller array; a null pointer is only accepted for an empty array.
unsafe fn input<'a>(data: *const f64, len: usize) -> Option<&'a [f64]> {
    match (data.is_null(), len) {
        (true, 0) => Some(&[][..]),
        (true, _) => None,
        (false, _) => Some(slice::from_raw_parts(data, len)),
    }
}

/// Copy `values` into an optional output buffer, always reporting the length.
unsafe fn write_out(values: &[f64], out: *mut f64, cap: usize, out_len: *mut usize) -> RealizrStatus {
    if !out_len.is_null() {
        *out_len = values.len();
    }
    if out.is_null() {
        return RealizrStatus::Ok;
    }
    if cap < values.len() {
        return RealizrStatus::BufferTooSmall;
    }
    slice::from_raw_parts_mut(out, values.len()).copy_from_slice(values);
    RealizrStatus::Ok
}

// --- Polynomial analysis ---------------------------------------------------------

/// Hurwitz test for the ascending-power polynomial `coeffs[0..len]`.
///
/// Returns `1` if stable, `0` if not, or a negative status. When `alphas_out`
/// is non-null the expansion coefficients are copied into it (`alphas_cap`
/// entries available); `alphas_len` (nullable) receives their count.
///
/// # Safety
/// `coeffs` must point to `len` readable `double`s (null only when `len == 0`).
/// A non-null `alphas_out` must have room for `alphas_cap` writes and a
/// non-null `alphas_len` must be writable.
#[no_mangle]
pub extern "C" fn realizr_is_hurwitz(
    coeffs: *const f64,
    len: usize,
    alphas_out: *mut f64,
    alphas_cap: usize,
    alphas_len: *mut usize,
) -> i32 {
    let Some(coeffs) = (unsafe { input(coeffs, len) }) else {
        return RealizrStatus::NullPointer as i32;
    };
    let res = match is_hurwitz(&Poly64::from_slice(coeffs), true) {
        Ok(res) => res,
        Err(e) => return fail(&e),
    };
    let alphas = res.expansion.as_ref().map_or(&[][..], |cf| cf.alphas());
    match unsafe { write_out(alphas, alphas_out, alphas_cap, alphas_len) } {
        RealizrStatus::Ok => i32::from(res.stable),
        status => status as i32,
    }
}

/// Continued-fraction expansion of `num / den` (ascending powers).
///
/// Writes the coefficients to `out` (capacity `cap`) and their count to
/// `out_len` (nullable). Returns `0` or a negative status.
///
/// # Safety
/// `num` and `den` must point to `num_len` / `den_len` readable `double`s
/// (null only for a zero length). A non-null `out` must have room for `cap`
/// writes and a non-null `out_len` must be writable.
#[no_mangle]
pub extern "C" fn realizr_continued_fractions(
    num: *const f64,
    num_len: usize,
    den: *const f64,
    den_len: usize,
    out: *mut f64,
    cap: usize,
    out_len: *mut usize,
) -> i32 {
    let (Some(num), Some(den)) = (unsafe { input(num, num_len) }, unsafe { input(den, den_len) }) else {
        return RealizrStatus::NullPointer as i32;
    };
    match continued_fractions(&Poly64::from_slice(num), &Poly64::from_slice(den)) {
        Ok(cf) => unsafe { write_out(cf.alphas(), out, cap, out_len) as i32 },
        Err(e) => fail(&e),
    }
}

// --- Transfer functions ------------------------------------------------------------

/// Opaque frequency-domain transfer function handed to C.
pub struct RealizrTransfer {
    hw: FrequencyDomain<TransferFunction>,
}

/// Create `hw(w) = hs(jw)` from highest-power-first coefficients.
///
/// `denominator` must hold `order + 1` entries. Returns null on error and, if
/// `status` is non-null, stores the status there.
///
/// # Safety
/// `numerator` and `denominator` must point to that many readable `double`s
/// (null only for a zero length). A non-null `status` must be writable. The
/// returned handle is owned by the caller until `realizr_transfer_destroy`.
#[no_mangle]
pub extern "C" fn realizr_transfer_create(
    numerator: *const f64,
    numerator_len: usize,
    denominator: *const f64,
    denominator_len: usize,
    order: usize,
    status: *mut i32,
) -> *mut RealizrTransfer {
    let report = |code: i32| {
        if !status.is_null() {
            unsafe { *status = code; }
        }
    };
    let (Some(num), Some(den)) = (
        unsafe { input(numerator, numerator_len) },
        unsafe { input(denominator, denominator_len) },
    ) else {
        report(RealizrStatus::NullPointer as i32);
        return ptr::null_mut();
    };
    match coefficients_to_transfer_function(num, den, order) {
        Ok(hs) => {
            report(RealizrStatus::Ok as i32);
            let handle = RealizrTransfer { hw: s_domain_to_frequency_domain(hs) };
            Box::into_raw(Box::new(handle))
        }
        Err(e) => {
            report(fail(&e));
            ptr::null_mut()
        }
    }
}

/// Destroy a handle previously returned by `realizr_transfer_create`.
///
/// # Safety
/// `handle` must be null or a live handle from `realizr_transfer_create`;
/// it must not be used again afterwards.
#[no_mangle]
pub extern "C" fn realizr_transfer_destroy(handle: *mut RealizrTransfer) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)); }
    }
}

fn sample<R>(response: &R, w: *const f64, n: usize, out: *mut f64) -> usize
where
    R: Response<f64, Output = f64>,
{
    if w.is_null() || out.is_null() || n == 0 {
        return 0;
    }
    let w = unsafe { slice::from_raw_parts(w, n) };
    let out = unsafe { slice::from_raw_parts_mut(out, n) };
    let values = response.eval_many(ArrayView1::from(w));
    for (dst, v) in out.iter_mut().zip(values.iter()) {
        *dst = *v;
    }
    n
}

/// Sample `|hw(w)|` at `n` frequencies into `out`.
/// Returns the number of samples written (0 on error).
///
/// # Safety
/// `handle` must be null or live. `w` must point to `n` readable `double`s
/// and `out` to `n` writable ones; `w` and `out` must not overlap.
#[no_mangle]
pub extern "C" fn realizr_transfer_magnitude(
    handle: *const RealizrTransfer,
    w: *const f64,
    n: usize,
    out: *mut f64,
) -> usize {
    if handle.is_null() { return 0; }
    let h = unsafe { &*handle };
    sample(&frequency_domain_to_magnitude(&h.hw), w, n, out)
}

/// Sample the phase of `hw(w)` in degrees, within (−180°, 180°].
/// Returns the number of samples written (0 on error).
///
/// # Safety
/// Same contract as `realizr_transfer_magnitude`.
#[no_mangle]
pub extern "C" fn realizr_transfer_phase(
    handle: *const RealizrTransfer,
    w: *const f64,
    n: usize,
    out: *mut f64,
) -> usize {
    if handle.is_null() { return 0; }
    let h = unsafe { &*handle };
    sample(&frequency_domain_to_phase(&h.hw), w, n, out)
}

// ------------------------------------ Tests --------------------------------------
