//! Symbolic expressions.
//!
//! A [`PrimExpr`] is an immutable, reference-counted node. It is either an
//! immediate (a literal already known at inspection time) or something that
//! still depends on a variable. Equality is structural, so two separately built
//! `n * 4` trees compare equal.

use std::fmt;
use std::sync::Arc;

use crate::types::BinaryOp;

/// Node variants of a symbolic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// Integer immediate.
    IntImm(i64),
    /// Floating-point immediate.
    FloatImm(f64),
    /// Named free variable.
    Var(String),
    /// Binary arithmetic over two subexpressions.
    Binary(BinaryOp, PrimExpr, PrimExpr),
}

/// Shared handle to an expression node.
///
/// Cloning is cheap: the node itself lives behind an [`Arc`].
#[derive(Clone, PartialEq)]
pub struct PrimExpr(Arc<ExprNode>);

impl PrimExpr {
    pub fn new(node: ExprNode) -> Self {
        Self(Arc::new(node))
    }

    /// Integer immediate.
    ///
    /// ```rust
    /// # use autosched_ir::PrimExpr;
    /// assert_eq!(PrimExpr::int(8).as_int_imm(), Some(8));
    /// ```
    pub fn int(value: i64) -> Self {
        Self::new(ExprNode::IntImm(value))
    }

    /// Floating-point immediate.
    pub fn float(value: f64) -> Self {
        Self::new(ExprNode::FloatImm(value))
    }

    /// Free variable. Never reduces to an immediate.
    ///
    /// ```rust
    /// # use autosched_ir::PrimExpr;
    /// let n = PrimExpr::var("n");
    /// assert!(!n.is_imm());
    /// assert_eq!(n.as_int_imm(), None);
    /// ```
    pub fn var(name: impl Into<String>) -> Self {
        Self::new(ExprNode::Var(name.into()))
    }

    pub fn binary(op: BinaryOp, lhs: PrimExpr, rhs: PrimExpr) -> Self {
        Self::new(ExprNode::Binary(op, lhs, rhs))
    }

    pub fn node(&self) -> &ExprNode {
        &self.0
    }

    /// Value of an integer immediate, `None` for anything else.
    ///
    /// No folding happens here: `2 * 3` is a binary node, not an immediate.
    pub fn as_int_imm(&self) -> Option<i64> {
        match self.node() {
            ExprNode::IntImm(v) => Some(*v),
            _ => None,
        }
    }

    /// Value of a float immediate, `None` for anything else.
    pub fn as_float_imm(&self) -> Option<f64> {
        match self.node() {
            ExprNode::FloatImm(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_imm(&self) -> bool {
        matches!(self.node(), ExprNode::IntImm(_) | ExprNode::FloatImm(_))
    }

    /// Short node kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self.node() {
            ExprNode::IntImm(_) => "IntImm",
            ExprNode::FloatImm(_) => "FloatImm",
            ExprNode::Var(_) => "Var",
            ExprNode::Binary(..) => "Binary",
        }
    }
}

impl fmt::Display for PrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            ExprNode::IntImm(v) => write!(f, "{v}"),
            ExprNode::FloatImm(v) => write!(f, "{v:?}f"),
            ExprNode::Var(name) => f.write_str(name),
            ExprNode::Binary(op, lhs, rhs) if op.is_call() => write!(f, "{op}({lhs}, {rhs})"),
            ExprNode::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

impl fmt::Debug for PrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.kind())
    }
}

impl From<i64> for PrimExpr {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<f64> for PrimExpr {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

macro_rules! impl_binary_operator {
    ($($trait:ident::$method:ident => $op:expr),* $(,)?) => {
        $(impl std::ops::$trait for PrimExpr {
            type Output = PrimExpr;

            fn $method(self, rhs: PrimExpr) -> PrimExpr {
                PrimExpr::binary($op, self, rhs)
            }
        })*
    };
}

impl_binary_operator! {
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::FloorDiv,
    Rem::rem => BinaryOp::FloorMod,
}
