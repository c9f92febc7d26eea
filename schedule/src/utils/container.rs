//! Lookup and comparison over ordered sequences.

use autosched_ir::PrimExpr;
use smallvec::SmallVec;
use snafu::OptionExt;

use super::numeric::try_get_int_imm;
use crate::error::{ItemNotFoundSnafu, OrFatal, Result};

/// Index of the first element equal to `to_locate`.
pub fn try_get_index<T: PartialEq>(array: &[T], to_locate: &T) -> Result<usize> {
    array.iter().position(|item| item == to_locate).context(ItemNotFoundSnafu { len: array.len() })
}

/// Index of the first element equal to `to_locate`.
///
/// # Panics
///
/// If `to_locate` is not in `array`. Callers are expected to guarantee membership.
///
/// ```rust
/// # use autosched_schedule::get_index;
/// assert_eq!(get_index(&["i", "j", "i"], &"i"), 0);
/// ```
#[track_caller]
pub fn get_index<T: PartialEq>(array: &[T], to_locate: &T) -> usize {
    try_get_index(array, to_locate).or_fatal()
}

/// First-appearance index in `array` of every element of `to_locate`, in order.
pub fn try_get_indices<T: PartialEq>(array: &[T], to_locate: &[T]) -> Result<SmallVec<[usize; 4]>> {
    to_locate.iter().map(|item| try_get_index(array, item)).collect()
}

/// First-appearance index in `array` of every element of `to_locate`, in order.
///
/// # Panics
///
/// If any element of `to_locate` is not in `array`.
#[track_caller]
pub fn get_indices<T: PartialEq>(array: &[T], to_locate: &[T]) -> SmallVec<[usize; 4]> {
    try_get_indices(array, to_locate).or_fatal()
}

/// Remove the first occurrence of `to_delete`, keeping the order of the rest.
///
/// Returns whether an element was removed; absent values are not an error.
pub fn find_and_delete_item<T: PartialEq>(array: &mut Vec<T>, to_delete: &T) -> bool {
    match array.iter().position(|item| item == to_delete) {
        Some(pos) => {
            array.remove(pos);
            true
        }
        None => false,
    }
}

/// Elementwise equality of two integer-immediate arrays.
///
/// Arrays of different length are unequal without inspecting their elements.
/// Otherwise pairs are compared front to back and the first difference stops
/// the walk, so elements past it are never checked.
pub fn try_int_array_equal(arr1: &[PrimExpr], arr2: &[PrimExpr]) -> Result<bool> {
    if arr1.len() != arr2.len() {
        return Ok(false);
    }

    for (lhs, rhs) in arr1.iter().zip(arr2) {
        if try_get_int_imm(lhs)? != try_get_int_imm(rhs)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Elementwise equality of two integer-immediate arrays.
///
/// # Panics
///
/// If a compared element is not an integer immediate.
#[track_caller]
pub fn int_array_equal(arr1: &[PrimExpr], arr2: &[PrimExpr]) -> bool {
    try_int_array_equal(arr1, arr2).or_fatal()
}
