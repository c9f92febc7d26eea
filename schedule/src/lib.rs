//! Scheduling utilities for the autosched tensor-program auto-scheduler.
//!
//! A collection of stateless helpers used by search policies, cost models and
//! state printers: locating elements in ordered expression sequences, reducing
//! symbolic arrays to concrete numbers, normalizing generated names, and
//! verbosity-gated diagnostic output.
//!
//! # Module Organization
//!
//! - [`utils::container`] - Index lookup, deletion, elementwise comparison
//! - [`utils::numeric`] - Immediate extraction, extent products, means
//! - [`utils::string`] - Substring replacement and identifier cleaning
//! - [`utils::diagnostic`] - Output sink selection and section titles
//! - [`config`] - Diagnostic configuration
//! - [`error`] - Precondition errors and the fatal path
//!
//! # Error Policy
//!
//! Lookups and immediate extraction treat a miss as a violated precondition and
//! panic. Each such function has a `try_` twin returning [`Error`] for callers
//! that cannot establish the precondition up front. [`axis_length_prod`] is the
//! exception: a symbolic extent is an expected outcome, reported as
//! [`UNKNOWN_EXTENT`].

pub mod config;
pub mod error;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use config::DiagnosticConfig;
pub use error::{Error, OrFatal, Result};
pub use utils::container::{
    find_and_delete_item, get_index, get_indices, int_array_equal, try_get_index, try_get_indices, try_int_array_equal,
};
pub use utils::diagnostic::{
    DEFAULT_VERBOSITY_THRESHOLD, DiagnosticContext, NullStream, Output, chars, print_title, select_output, std_out,
};
pub use utils::numeric::{
    UNKNOWN_EXTENT, axis_length_prod, float_array_mean, get_int_imm, int_array_to_vec, optional_int_array_to_vec,
    try_float_array_mean, try_get_int_imm, try_int_array_to_vec, try_optional_int_array_to_vec,
};
pub use utils::string::{clean_name, str_replace};
