use proptest::prelude::*;

use super::generators::*;
use crate::PrimExpr;

proptest! {
    #[test]
    fn int_imm_roundtrips(value in any::<i64>()) {
        let expr = PrimExpr::int(value);
        prop_assert_eq!(expr.as_int_imm(), Some(value));
        prop_assert_eq!(expr.as_float_imm(), None);
    }

    #[test]
    fn symbolic_is_never_an_immediate(expr in arb_symbolic()) {
        prop_assert!(!expr.is_imm());
        prop_assert_eq!(expr.as_int_imm(), None);
        prop_assert_eq!(expr.as_float_imm(), None);
    }

    #[test]
    fn equality_is_structural(expr in arb_expr()) {
        // Rebuild from the node so the two handles do not share an allocation.
        let rebuilt = PrimExpr::new(expr.node().clone());
        prop_assert_eq!(&rebuilt, &expr);
    }
}
