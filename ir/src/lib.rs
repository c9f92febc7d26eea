//! Intermediate representation consumed by the autosched utilities.
//!
//! This crate only carries what scheduling helpers need to inspect: symbolic
//! expressions that may or may not be immediates, and iteration domains whose
//! extents are such expressions. Simplification and lowering live elsewhere.
//!
//! # Module Organization
//!
//! - [`types`] - Operation kinds shared by expression nodes
//! - [`expr`] - [`PrimExpr`] symbolic expression and its node variants
//! - [`iter_var`] - [`IterVar`] iteration domains and their [`Range`]

pub mod expr;
pub mod iter_var;
pub mod types;


pub use expr::{ExprNode, PrimExpr};
pub use iter_var::{IterVar, Range};
pub use types::BinaryOp;
