//! Reductions of symbolic arrays to concrete numbers.

use autosched_ir::{IterVar, PrimExpr};
use snafu::OptionExt;
use tracing::trace;

use crate::error::{MissingIntegerSnafu, NotFloatImmSnafu, NotIntImmSnafu, OrFatal, Result};

/// Returned by [`axis_length_prod`] when the product cannot be determined statically.
pub const UNKNOWN_EXTENT: i64 = -1;

pub fn try_get_int_imm(expr: &PrimExpr) -> Result<i64> {
    expr.as_int_imm().with_context(|| NotIntImmSnafu { expr: expr.clone() })
}

/// Value of an integer immediate.
///
/// # Panics
///
/// If `expr` is not an integer immediate.
#[track_caller]
pub fn get_int_imm(expr: &PrimExpr) -> i64 {
    try_get_int_imm(expr).or_fatal()
}

/// Product of the extents of `axes`.
///
/// Gives up with [`UNKNOWN_EXTENT`] at the first extent that is not an integer
/// immediate, and when the product overflows `i64`. An empty slice yields `1`.
///
/// ```rust
/// # use autosched_ir::{IterVar, PrimExpr};
/// # use autosched_schedule::{UNKNOWN_EXTENT, axis_length_prod};
/// let i = IterVar::new("i", PrimExpr::int(4));
/// let j = IterVar::new("j", PrimExpr::int(8));
/// assert_eq!(axis_length_prod(&[i.clone(), j]), 32);
///
/// let n = IterVar::new("n", PrimExpr::var("batch"));
/// assert_eq!(axis_length_prod(&[i, n]), UNKNOWN_EXTENT);
/// ```
pub fn axis_length_prod(axes: &[IterVar]) -> i64 {
    let mut prod: i64 = 1;
    for axis in axes {
        let Some(extent) = axis.extent().as_int_imm() else {
            trace!(axis = %axis.name, extent = %axis.extent(), "symbolic extent, axis product unknown");
            return UNKNOWN_EXTENT;
        };
        let Some(next) = prod.checked_mul(extent) else {
            trace!(axis = %axis.name, prod, extent, "axis product overflows i64");
            return UNKNOWN_EXTENT;
        };
        prod = next;
    }
    prod
}

pub fn try_float_array_mean(values: &[PrimExpr]) -> Result<f64> {
    if values.is_empty() {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for value in values {
        sum += value.as_float_imm().with_context(|| NotFloatImmSnafu { expr: value.clone() })?;
    }
    Ok(sum / values.len() as f64)
}

/// Arithmetic mean of float immediates, `0.0` for an empty slice.
///
/// # Panics
///
/// If any element is not a float immediate.
#[track_caller]
pub fn float_array_mean(values: &[PrimExpr]) -> f64 {
    try_float_array_mean(values).or_fatal()
}

pub fn try_int_array_to_vec(data: &[PrimExpr]) -> Result<Vec<i64>> {
    data.iter().map(try_get_int_imm).collect()
}

/// Concrete values of an integer-immediate array.
///
/// # Panics
///
/// If any element is not an integer immediate.
#[track_caller]
pub fn int_array_to_vec(data: &[PrimExpr]) -> Vec<i64> {
    try_int_array_to_vec(data).or_fatal()
}

pub fn try_optional_int_array_to_vec(data: &[Option<PrimExpr>]) -> Result<Vec<i64>> {
    data.iter()
        .enumerate()
        .map(|(index, item)| item.as_ref().context(MissingIntegerSnafu { index }).and_then(try_get_int_imm))
        .collect()
}

/// Concrete values of an array whose entries may be undefined.
///
/// # Panics
///
/// If any entry is `None` or not an integer immediate.
#[track_caller]
pub fn optional_int_array_to_vec(data: &[Option<PrimExpr>]) -> Vec<i64> {
    try_optional_int_array_to_vec(data).or_fatal()
}
