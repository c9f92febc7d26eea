use proptest::prelude::*;

use autosched_ir::PrimExpr;
use autosched_ir::test::property::generators::{arb_int_imm, arb_symbolic};

use crate::{find_and_delete_item, get_index, get_indices, int_array_equal, try_get_index, try_int_array_equal};

proptest! {
    /// The returned index holds the value and nothing before it does.
    #[test]
    fn get_index_is_first_match(array in prop::collection::vec(0u8..8, 1..32), pick in any::<prop::sample::Index>()) {
        let value = array[pick.index(array.len())];
        let idx = get_index(&array, &value);
        prop_assert_eq!(array[idx], value);
        prop_assert!(!array[..idx].contains(&value));
    }

    #[test]
    fn absent_value_is_not_found(array in prop::collection::vec(0u8..8, 0..32)) {
        prop_assert!(try_get_index(&array, &8).is_err());
    }

    #[test]
    fn get_indices_matches_get_index(array in prop::collection::vec(0u8..8, 1..16), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8)) {
        let needles: Vec<u8> = picks.iter().map(|p| array[p.index(array.len())]).collect();
        let indices = get_indices(&array, &needles);
        prop_assert_eq!(indices.len(), needles.len());
        for (idx, needle) in indices.iter().zip(&needles) {
            prop_assert_eq!(*idx, get_index(&array, needle));
        }
    }

    /// Deleting removes exactly the first occurrence and keeps the rest in order.
    #[test]
    fn delete_removes_first_occurrence(array in prop::collection::vec(0u8..6, 0..32), value in 0u8..8) {
        let mut after = array.clone();
        let removed = find_and_delete_item(&mut after, &value);

        match array.iter().position(|v| *v == value) {
            Some(pos) => {
                prop_assert!(removed);
                let mut expected = array.clone();
                expected.remove(pos);
                prop_assert_eq!(after, expected);
            }
            None => {
                prop_assert!(!removed);
                prop_assert_eq!(after, array);
            }
        }
    }

    #[test]
    fn int_array_equal_agrees_with_values(lhs in prop::collection::vec(-4i64..4, 0..8), rhs in prop::collection::vec(-4i64..4, 0..8)) {
        let to_exprs = |v: &[i64]| v.iter().copied().map(PrimExpr::int).collect::<Vec<_>>();
        prop_assert_eq!(int_array_equal(&to_exprs(&lhs), &to_exprs(&rhs)), lhs == rhs);
    }

    #[test]
    fn int_array_equal_rejects_symbolic(prefix in prop::collection::vec(arb_int_imm(), 0..4), symbolic in arb_symbolic()) {
        let mut lhs = prefix.clone();
        lhs.push(symbolic);
        let mut rhs = prefix;
        rhs.push(PrimExpr::int(0));
        prop_assert!(try_int_array_equal(&lhs, &rhs).is_err());
    }
}
