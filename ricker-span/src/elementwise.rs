//! Shape-preserving elementwise application of a conversion.
//!
//! Every input is validated as a whole before any element is converted, so a
//! collection with a single bad element yields an error and no output. An
//! element is bad when it is not finite and positive, or when its converted
//! value would not be (overflow to infinity, underflow to zero).
//! Collections of at least [`PARALLEL_THRESHOLD`] elements are mapped on the
//! rayon pool.

use crate::error::{ConversionError, Result};
use crate::quantity::Quantity;
use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension};
use rayon::prelude::*;

/// Element count at which mapping switches to rayon.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// A scalar or collection of `f64` that a conversion can be broadcast over.
///
/// `Output` has the same shape as the input: a scalar maps to a scalar, a
/// slice or `Vec` to a `Vec` of equal length, an n-dimensional array to an
/// array of identical dimensions.
pub trait Elementwise {
    type Output;

    /// Validate every element as a `quantity`, then apply `op` to each one.
    ///
    /// An element whose image under `op` is not finite and positive is
    /// rejected as if the element itself were invalid.
    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Self::Output>;
}

/// A value is accepted iff it is finite and strictly greater than zero.
#[inline]
pub fn is_valid(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[inline]
fn converts_cleanly(value: f64, op: fn(f64) -> f64) -> bool {
    is_valid(value) && is_valid(op(value))
}

/// Check a single scalar and its converted value.
pub fn check_scalar(quantity: Quantity, value: f64, op: fn(f64) -> f64) -> Result<()> {
    if converts_cleanly(value, op) {
        return Ok(());
    }
    tracing::debug!(%quantity, value, "rejected scalar input");
    Err(ConversionError::InvalidArgument {
        quantity,
        value,
        index: None,
    })
}

/// Check every element and its converted value, reporting the first
/// offending input by flat index.
pub fn check_all<'a, I>(quantity: Quantity, values: I, op: fn(f64) -> f64) -> Result<()>
where
    I: IntoIterator<Item = &'a f64>,
{
    match values
        .into_iter()
        .enumerate()
        .find(|(_, v)| !converts_cleanly(**v, op))
    {
        None => Ok(()),
        Some((index, &value)) => {
            tracing::debug!(%quantity, value, index, "rejected collection input");
            Err(ConversionError::InvalidArgument {
                quantity,
                value,
                index: Some(index),
            })
        }
    }
}

fn map_in_place(values: &mut [f64], op: fn(f64) -> f64) {
    if values.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = values.len(), "parallel elementwise map");
        values.par_iter_mut().for_each(|v| *v = op(*v));
    } else {
        values.iter_mut().for_each(|v| *v = op(*v));
    }
}

fn map_array_in_place<D: Dimension>(values: &mut Array<f64, D>, op: fn(f64) -> f64) {
    if values.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = values.len(), shape = ?values.shape(), "parallel array map");
        values.par_map_inplace(|v| *v = op(*v));
    } else {
        values.map_inplace(|v| *v = op(*v));
    }
}

impl Elementwise for f64 {
    type Output = f64;

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<f64> {
        check_scalar(quantity, self, op)?;
        Ok(op(self))
    }
}

impl Elementwise for &[f64] {
    type Output = Vec<f64>;

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Vec<f64>> {
        check_all(quantity, self, op)?;
        let mut out = self.to_vec();
        map_in_place(&mut out, op);
        Ok(out)
    }
}

impl Elementwise for Vec<f64> {
    type Output = Vec<f64>;

    fn map_positive(mut self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Vec<f64>> {
        check_all(quantity, &self, op)?;
        map_in_place(&mut self, op);
        Ok(self)
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    type Output = [f64; N];

    fn map_positive(mut self, quantity: Quantity, op: fn(f64) -> f64) -> Result<[f64; N]> {
        check_all(quantity, &self, op)?;
        map_in_place(&mut self, op);
        Ok(self)
    }
}

impl Elementwise for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Vec<f64>> {
        self.as_slice().map_positive(quantity, op)
    }
}

impl<const N: usize> Elementwise for &[f64; N] {
    type Output = [f64; N];

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<[f64; N]> {
        (*self).map_positive(quantity, op)
    }
}

impl<D: Dimension> Elementwise for Array<f64, D> {
    type Output = Array<f64, D>;

    fn map_positive(mut self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Array<f64, D>> {
        check_all(quantity, self.iter(), op)?;
        map_array_in_place(&mut self, op);
        Ok(self)
    }
}

impl<D: Dimension> Elementwise for ArrayView<'_, f64, D> {
    type Output = Array<f64, D>;

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Array<f64, D>> {
        check_all(quantity, self.iter(), op)?;
        let mut out = self.to_owned();
        map_array_in_place(&mut out, op);
        Ok(out)
    }
}

impl<S, D> Elementwise for &ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn map_positive(self, quantity: Quantity, op: fn(f64) -> f64) -> Result<Array<f64, D>> {
        // Validate on the borrowed view so a rejected input is never copied.
        check_all(quantity, self.iter(), op)?;
        let mut out = self.to_owned();
        map_array_in_place(&mut out, op);
        Ok(out)
    }
}
