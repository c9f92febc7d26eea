use test_case::test_case;

use crate::{BinaryOp, ExprNode, PrimExpr};

#[test]
fn test_int_imm() {
    let e = PrimExpr::int(42);
    assert_eq!(e.as_int_imm(), Some(42));
    assert_eq!(e.as_float_imm(), None);
    assert!(e.is_imm());
    assert_eq!(e.kind(), "IntImm");
}

#[test]
fn test_float_imm() {
    let e = PrimExpr::from(2.5);
    assert_eq!(e.as_float_imm(), Some(2.5));
    assert_eq!(e.as_int_imm(), None);
    assert!(e.is_imm());
}

#[test]
fn test_binary_of_immediates_is_not_folded() {
    let e = PrimExpr::int(2) * PrimExpr::int(3);
    assert!(!e.is_imm());
    assert_eq!(e.as_int_imm(), None);
    assert!(matches!(e.node(), ExprNode::Binary(BinaryOp::Mul, ..)));
}

#[test]
fn test_structural_equality() {
    let a = PrimExpr::var("n") * PrimExpr::int(4);
    let b = PrimExpr::var("n") * PrimExpr::int(4);
    assert_eq!(a, b);
    assert_ne!(a, PrimExpr::var("n") * PrimExpr::int(8));
    assert_ne!(PrimExpr::int(1), PrimExpr::float(1.0));
}

#[test_case(PrimExpr::int(-3), "-3" ; "int")]
#[test_case(PrimExpr::float(0.5), "0.5f" ; "float")]
#[test_case(PrimExpr::var("n") + PrimExpr::int(1), "(n + 1)" ; "add")]
#[test_case(PrimExpr::var("n") / PrimExpr::int(4), "(n // 4)" ; "floor_div")]
#[test_case(PrimExpr::binary(BinaryOp::Max, PrimExpr::var("a"), PrimExpr::int(0)), "max(a, 0)" ; "max")]
fn test_display(expr: PrimExpr, expected: &str) {
    assert_eq!(expr.to_string(), expected);
}

#[test]
fn test_debug_includes_kind() {
    assert_eq!(format!("{:?}", PrimExpr::var("k")), "Var(k)");
}
