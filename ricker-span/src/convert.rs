//! Closed-form conversions between Ricker wavelet parameterizations.
//!
//! With `r(t) = (1 - 2 pi^2 f^2 t^2) exp(-pi^2 f^2 t^2)`, the zero crossings
//! around the center sit at `t = ±1 / (pi f sqrt(2))`, so
//!
//! - `L = sqrt(2) / (pi f)` and `f = sqrt(2) / (pi L)`
//! - `half_ms = 1000 sqrt(2) / (2 pi f)` and `f = 1000 sqrt(2) / (2 pi half_ms)`
//!
//! Each function accepts anything implementing [`Elementwise`]: a scalar, a
//! slice, a `Vec`, a fixed array or an ndarray of any dimension.

use crate::elementwise::Elementwise;
use crate::error::Result;
use crate::quantity::Quantity;
use std::f64::consts::{PI, SQRT_2, TAU};

/// `1000 * sqrt(2)`, numerator of the half-span relation.
const HALF_SPAN_NUMERATOR: f64 = 1000.0 * SQRT_2;

#[inline]
fn reciprocal_span(x: f64) -> f64 {
    SQRT_2 / (PI * x)
}

#[inline]
fn reciprocal_half_span_ms(x: f64) -> f64 {
    HALF_SPAN_NUMERATOR / (TAU * x)
}

/// Zero-crossing length in seconds for peak frequency `f` in Hz.
///
/// # Errors
/// [`ConversionError::InvalidArgument`](crate::ConversionError) if any
/// element of `f` is not strictly positive and finite, or converts to a
/// length that is not (overflow or underflow). No output is produced in that
/// case.
///
/// ```
/// let l = ricker_span::length_from_frequency(30.0_f64).unwrap();
/// assert!((l - 0.015005).abs() < 1e-6);
/// ```
pub fn length_from_frequency<I: Elementwise>(f: I) -> Result<I::Output> {
    f.map_positive(Quantity::Frequency, reciprocal_span)
}

/// Peak frequency in Hz for zero-crossing length `length` in seconds.
///
/// The inverse of [`length_from_frequency`]; the relation is its own inverse.
pub fn frequency_from_length<I: Elementwise>(length: I) -> Result<I::Output> {
    length.map_positive(Quantity::ZeroCrossingLength, reciprocal_span)
}

/// Half of the zero-crossing span, in milliseconds, for peak frequency `f`.
///
/// Computed directly as `1000 sqrt(2) / (2 pi f)` rather than through
/// [`length_from_frequency`].
pub fn half_span_ms_from_frequency<I: Elementwise>(f: I) -> Result<I::Output> {
    f.map_positive(Quantity::Frequency, reciprocal_half_span_ms)
}

/// Peak frequency in Hz for a half zero-crossing span in milliseconds.
pub fn frequency_from_half_span_ms<I: Elementwise>(half_ms: I) -> Result<I::Output> {
    half_ms.map_positive(Quantity::HalfSpanMs, reciprocal_half_span_ms)
}
