//! Operation kinds for symbolic expressions.

/// Binary arithmetic over index expressions.
///
/// Division and modulo follow floor semantics, which is what loop extents and
/// split factors are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    /// Floor division: a // b
    #[strum(serialize = "//")]
    FloorDiv,
    /// Floor modulo: result has the sign of the divisor.
    #[strum(serialize = "%")]
    FloorMod,
    #[strum(serialize = "min")]
    Min,
    #[strum(serialize = "max")]
    Max,
}

impl BinaryOp {
    /// Whether the operation renders as a function call rather than an infix operator.
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Min | Self::Max)
    }
}
