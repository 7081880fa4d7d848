use crate::quantity::Quantity;
use thiserror::Error;

/// Failure raised by every conversion in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// An input element was zero, negative, NaN or infinite, or its converted
    /// value overflowed to infinity or underflowed to zero.
    #[error("{} values must be positive and in range (got {}{})", .quantity.label(), .value, fmt_index(.index))]
    InvalidArgument {
        quantity: Quantity,
        value: f64,
        /// Flat row-major index of the first offending element, `None` for scalars.
        index: Option<usize>,
    },
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
