//! Ratio list properties.

use keyramp::{distribute_evenly, distribute_luminosity, next_ratio, sort_by_value};
use proptest::prelude::*;

fn ratio_list() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..21.0, 2..12)
}

proptest! {
    #[test]
    fn distribute_keeps_length_and_pins_ends(values in ratio_list()) {
        let spread = distribute_evenly(&values);
        prop_assert_eq!(spread.len(), values.len());

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((spread[0] - min).abs() <= 0.005 + 1e-9);
        prop_assert!((spread[spread.len() - 1] - max).abs() <= 0.005 + 1e-9);
        prop_assert!(spread.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn luminosity_spread_is_reversed(values in prop::collection::vec(0.0f64..100.0, 2..12)) {
        let mut forward = distribute_evenly(&values);
        forward.reverse();
        prop_assert_eq!(distribute_luminosity(&values), forward);
    }

    #[test]
    fn sort_is_ascending_permutation(values in ratio_list()) {
        let sorted = sort_by_value(&values);
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn next_ratio_never_exceeds_21(values in ratio_list()) {
        prop_assert!(next_ratio(&values) <= 21.0);
    }
}

#[test]
fn next_ratio_at_the_boundary() {
    assert_eq!(next_ratio(&[20.0]), 21.0);
    assert_eq!(next_ratio(&[21.0]), 20.0);
    assert_eq!(next_ratio(&[20.5]), 21.0);
}
