//! Ricker Span - conversions between Ricker wavelet parameterizations.
//!
//! A Ricker wavelet `r(t) = (1 - 2 pi^2 f^2 t^2) exp(-pi^2 f^2 t^2)` can be
//! described by any of three equivalent quantities:
//! - `f`: peak (dominant) frequency in Hz
//! - `L`: time between the two zero crossings around t=0, in seconds
//! - `half_ms`: half of `L`, in milliseconds
//!
//! # Usage
//! ```
//! use ricker_span::{frequency_from_length, length_from_frequency, RickerSpan};
//!
//! let l = length_from_frequency(30.0_f64).unwrap();
//! let f = frequency_from_length(l).unwrap();
//! assert!((f - 30.0).abs() < 1e-9);
//!
//! // Slices, Vecs and ndarrays keep their shape
//! let lengths = length_from_frequency(&[10.0_f64, 20.0, 40.0]).unwrap();
//! assert_eq!(lengths.len(), 3);
//!
//! let span = RickerSpan::from_frequency(30.0).unwrap();
//! assert!((span.half_span_ms - 7.502636).abs() < 1e-6);
//! ```

pub mod convert;
pub mod elementwise;
pub mod error;
pub mod quantity;
pub mod span;

// Re-exports
pub use convert::{
    frequency_from_half_span_ms, frequency_from_length, half_span_ms_from_frequency,
    length_from_frequency,
};
pub use elementwise::{Elementwise, PARALLEL_THRESHOLD};
pub use error::{ConversionError, Result};
pub use quantity::Quantity;
pub use span::RickerSpan;
