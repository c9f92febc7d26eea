//! Iteration domains.

use std::fmt;

use crate::PrimExpr;

/// Half-open interval `[min, min + extent)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub min: PrimExpr,
    pub extent: PrimExpr,
}

impl Range {
    pub fn new(min: PrimExpr, extent: PrimExpr) -> Self {
        Self { min, extent }
    }

    /// Range starting at zero.
    pub fn from_extent(extent: PrimExpr) -> Self {
        Self { min: PrimExpr::int(0), extent }
    }
}

/// A named loop variable together with the domain it iterates over.
///
/// The extent may be symbolic (e.g. a batch dimension bound at run time).
///
/// ```rust
/// # use autosched_ir::{IterVar, PrimExpr};
/// let i = IterVar::new("i", PrimExpr::int(16));
/// assert_eq!(i.extent().as_int_imm(), Some(16));
///
/// let n = IterVar::new("n", PrimExpr::var("batch"));
/// assert_eq!(n.extent().as_int_imm(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IterVar {
    pub name: String,
    pub dom: Range,
}

impl IterVar {
    /// Loop variable over `[0, extent)`.
    pub fn new(name: impl Into<String>, extent: PrimExpr) -> Self {
        Self { name: name.into(), dom: Range::from_extent(extent) }
    }

    pub fn with_range(name: impl Into<String>, dom: Range) -> Self {
        Self { name: name.into(), dom }
    }

    pub fn extent(&self) -> &PrimExpr {
        &self.dom.extent
    }
}

impl fmt::Display for IterVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}, {} + {})", self.name, self.dom.min, self.dom.min, self.dom.extent)
    }
}
