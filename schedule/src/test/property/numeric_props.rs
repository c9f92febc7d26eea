use proptest::prelude::*;

use autosched_ir::test::property::generators::{arb_concrete_iter_var, arb_symbolic_iter_var};
use autosched_ir::{IterVar, PrimExpr};

use crate::{UNKNOWN_EXTENT, axis_length_prod, float_array_mean};

proptest! {
    #[test]
    fn axis_length_prod_is_product(axes in prop::collection::vec(arb_concrete_iter_var(), 0..6)) {
        let expected: i64 = axes.iter().map(|a| a.extent().as_int_imm().unwrap()).product();
        prop_assert_eq!(axis_length_prod(&axes), expected);
    }

    /// One symbolic extent anywhere makes the whole product unknown.
    #[test]
    fn axis_length_prod_symbolic_anywhere(
        axes in prop::collection::vec(arb_concrete_iter_var(), 0..6),
        symbolic in arb_symbolic_iter_var(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut axes: Vec<IterVar> = axes;
        let pos = at.index(axes.len() + 1);
        axes.insert(pos, symbolic);
        prop_assert_eq!(axis_length_prod(&axes), UNKNOWN_EXTENT);
    }

    #[test]
    fn float_array_mean_is_bounded(values in prop::collection::vec(-100.0f64..100.0, 1..16)) {
        let exprs: Vec<PrimExpr> = values.iter().copied().map(PrimExpr::float).collect();
        let mean = float_array_mean(&exprs);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
    }
}
