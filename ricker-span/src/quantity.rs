//! The three interchangeable Ricker wavelet parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parameterization of a Ricker wavelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Peak (dominant) frequency in Hz.
    Frequency,
    /// Time between the two zero crossings around t=0, in seconds.
    ZeroCrossingLength,
    /// Half of the zero-crossing length, in milliseconds.
    HalfSpanMs,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [
        Quantity::Frequency,
        Quantity::ZeroCrossingLength,
        Quantity::HalfSpanMs,
    ];

    /// Unit symbol.
    pub const fn unit(&self) -> &'static str {
        match self {
            Quantity::Frequency => "Hz",
            Quantity::ZeroCrossingLength => "s",
            Quantity::HalfSpanMs => "ms",
        }
    }

    /// Short label used in validation messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Quantity::Frequency => "Frequency",
            Quantity::ZeroCrossingLength => "Length",
            Quantity::HalfSpanMs => "Half-span",
        }
    }

    /// Human description including the unit, e.g. `Zero-crossing length L (s)`.
    pub const fn description(&self) -> &'static str {
        match self {
            Quantity::Frequency => "Frequency (Hz)",
            Quantity::ZeroCrossingLength => "Zero-crossing length L (s)",
            Quantity::HalfSpanMs => "Half zero-crossing span (ms)",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}
