//! All three parameterizations of a single wavelet.

use crate::convert::{
    frequency_from_half_span_ms, frequency_from_length, half_span_ms_from_frequency,
    length_from_frequency,
};
use crate::error::{ConversionError, Result};
use crate::quantity::Quantity;
use serde::Serialize;

/// A Ricker wavelet described by frequency, zero-crossing length and half span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RickerSpan {
    pub frequency_hz: f64,
    pub length_s: f64,
    pub half_span_ms: f64,
}

/// Report a failed follow-up conversion against the value the caller supplied.
fn attribute_to(quantity: Quantity, value: f64) -> impl Fn(ConversionError) -> ConversionError {
    move |_| ConversionError::InvalidArgument {
        quantity,
        value,
        index: None,
    }
}

impl RickerSpan {
    /// Derive length and half span from a peak frequency in Hz.
    pub fn from_frequency(frequency_hz: f64) -> Result<Self> {
        Ok(Self {
            frequency_hz,
            length_s: length_from_frequency(frequency_hz)?,
            half_span_ms: half_span_ms_from_frequency(frequency_hz)?,
        })
    }

    /// Derive frequency and half span from a zero-crossing length in seconds.
    ///
    /// Half span is derived from the recovered frequency, not from `length_s`.
    /// A failure in that second step is reported against `length_s`.
    pub fn from_length(length_s: f64) -> Result<Self> {
        let frequency_hz = frequency_from_length(length_s)?;
        let half_span_ms = half_span_ms_from_frequency(frequency_hz)
            .map_err(attribute_to(Quantity::ZeroCrossingLength, length_s))?;
        Ok(Self {
            frequency_hz,
            length_s,
            half_span_ms,
        })
    }

    /// Derive frequency and length from a half zero-crossing span in ms.
    ///
    /// Length is derived from the recovered frequency; a failure there is
    /// reported against `half_span_ms`.
    pub fn from_half_span_ms(half_span_ms: f64) -> Result<Self> {
        let frequency_hz = frequency_from_half_span_ms(half_span_ms)?;
        let length_s = length_from_frequency(frequency_hz)
            .map_err(attribute_to(Quantity::HalfSpanMs, half_span_ms))?;
        Ok(Self {
            frequency_hz,
            length_s,
            half_span_ms,
        })
    }

    /// Build from whichever quantity the caller has.
    pub fn from_quantity(quantity: Quantity, value: f64) -> Result<Self> {
        tracing::debug!(%quantity, value, "deriving ricker span");
        match quantity {
            Quantity::Frequency => Self::from_frequency(value),
            Quantity::ZeroCrossingLength => Self::from_length(value),
            Quantity::HalfSpanMs => Self::from_half_span_ms(value),
        }
    }

    /// The value of `quantity` for this wavelet.
    #[inline]
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Frequency => self.frequency_hz,
            Quantity::ZeroCrossingLength => self.length_s,
            Quantity::HalfSpanMs => self.half_span_ms,
        }
    }

    /// The two quantities derived from `input`, in reporting order.
    ///
    /// Frequency reports length then half span; the other two report
    /// frequency first, then the remaining span quantity.
    pub const fn derived_order(input: Quantity) -> [Quantity; 2] {
        match input {
            Quantity::Frequency => [Quantity::ZeroCrossingLength, Quantity::HalfSpanMs],
            Quantity::ZeroCrossingLength => [Quantity::Frequency, Quantity::HalfSpanMs],
            Quantity::HalfSpanMs => [Quantity::Frequency, Quantity::ZeroCrossingLength],
        }
    }
}
