//! Thinning regression test
//!
//! Runs the full iteration loop on random binary noise and holds the
//! two classification backends to bit-identical output, the skeleton
//! to a subset of the input foreground, and the fixed point to
//! idempotence.

use skeletonize_core::compare::count_differing;
use skeletonize_morph::{
    thin_guo_hall_with, thin_guo_hall_with_tables, DecisionTables, ThinMethod, ThinOptions,
};
use skeletonize_test::random_binary;

#[test]
fn thin_reg() {
    let by_rule = ThinOptions {
        method: ThinMethod::Rule,
        ..ThinOptions::default()
    };
    let by_table = ThinOptions::default();

    for (i, &density) in [0.2, 0.5, 0.8].iter().enumerate() {
        let src = random_binary(256, 256, 0xD1CE + i as u64, density);

        let rule = thin_guo_hall_with(&src, &by_rule).unwrap();
        let table = thin_guo_hall_with(&src, &by_table).unwrap();
        assert_eq!(
            count_differing(&rule, &table).unwrap(),
            0,
            "backends diverge at density {density}"
        );

        // thinning only ever clears pixels
        assert!(table.count_nonzero() <= src.count_nonzero());
        let grew = table
            .data()
            .iter()
            .zip(src.data())
            .any(|(&out, &inp)| out != 0 && inp == 0);
        assert!(!grew, "skeleton left the input foreground at density {density}");

        // a skeleton is already at the fixed point
        let again = thin_guo_hall_with(&table, &by_table).unwrap();
        assert_eq!(count_differing(&table, &again).unwrap(), 0);
    }
}

#[test]
fn thin_shared_tables_match_per_call_build() {
    let tables = DecisionTables::build();
    for seed in [1u64, 2, 3] {
        let src = random_binary(96, 64, seed, 0.5);
        let shared = thin_guo_hall_with_tables(&src, &tables, 0).unwrap();
        let fresh = thin_guo_hall_with(&src, &ThinOptions::default()).unwrap();
        assert_eq!(count_differing(&shared, &fresh).unwrap(), 0);
    }
}
