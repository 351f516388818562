use naruse_coeff::domain::analysis::{descents, local_dips, order_relations, relation_symbol};
use naruse_coeff::domain::coefficient::{configuration_sum, trailing_factor};
use naruse_coeff::{
    IndexSet, RibbonShape, compute_coefficients, compute_coefficients_parallel,
};
use num_bigint::BigUint;
use rand::Rng;
use rand::seq::SliceRandom;

fn set(elements: &[u32]) -> IndexSet {
    IndexSet::new(elements.to_vec()).unwrap()
}

fn big(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

fn chain(values: &[BigUint]) -> String {
    order_relations(values)
        .into_iter()
        .map(relation_symbol)
        .collect()
}

const GOLDEN: &[(&[u32], &[u64])] = &[
    (&[1], &[1]),
    (&[4], &[1, 1, 2, 6]),
    (&[1, 2], &[1]),
    (&[1, 3], &[1, 1]),
    (&[2, 3], &[4, 2]),
    (&[2, 4], &[5, 5, 3]),
    (&[3, 4], &[18, 12, 12]),
    (&[2, 5], &[6, 6, 12, 8]),
    (&[3, 6], &[38, 38, 76, 64, 80]),
    (&[1, 3, 5], &[6, 6, 3]),
    (&[2, 5, 7], &[1352, 1352, 1032, 1104, 576]),
    (&[1, 5, 7], &[195, 195, 165, 240, 360]),
    (&[4, 6, 7], &[184320, 86400, 63360, 74880, 86400]),
    (&[1, 4, 9], &[74, 74, 148, 444, 1776, 1584, 2016]),
    (&[1, 2, 4, 7], &[8, 8, 16, 8]),
    (&[3, 5, 6, 7], &[972000, 270000, 140400, 86400]),
    (&[2, 3, 8, 9], &[242688, 191616, 281088, 536832, 921600, 322560]),
    (&[1, 2, 3, 4, 5, 6, 7], &[1]),
];

#[test]
fn test_golden_values() {
    for &(elements, expected) in GOLDEN {
        let coefficients = compute_coefficients(&set(elements));
        assert_eq!(
            coefficients.values(),
            big(expected).as_slice(),
            "I = {:?}",
            elements
        );
    }
}

#[test]
fn test_golden_values_parallel() {
    for &(elements, expected) in GOLDEN {
        let coefficients = compute_coefficients_parallel(&set(elements));
        assert_eq!(
            coefficients.values(),
            big(expected).as_slice(),
            "I = {:?}",
            elements
        );
    }
}

#[test]
fn test_singleton_is_factorials() {
    for k in 1..=20u32 {
        let coefficients = compute_coefficients(&set(&[k]));
        assert_eq!(coefficients.last_index(), (k - 1) as usize);

        let mut factorial = BigUint::from(1u32);
        for (i, value) in coefficients.values().iter().enumerate() {
            if i > 0 {
                factorial *= i as u64;
            }
            assert_eq!(value, &factorial, "I = {{{}}}, i = {}", k, i);
        }
    }
}

#[test]
fn test_two_element_set_with_single_coefficient() {
    // {1, 2}: both rows have length 1, one configuration with an empty product
    let coefficients = compute_coefficients(&set(&[1, 2]));
    assert_eq!(coefficients.last_index(), 0);
    assert_eq!(coefficients.values(), big(&[1]).as_slice());
    assert!(chain(coefficients.values()).is_empty());
}

#[test]
fn test_order_chains() {
    let cases: &[(&[u32], &str)] = &[
        (&[4], "=<<"),
        (&[2, 4], "=>"),
        (&[3, 6], "=<><"),
        (&[2, 5, 7], "=><>"),
        (&[4, 6, 7], ">><<"),
        (&[1, 4, 9], "=<<<><"),
    ];

    for &(elements, expected) in cases {
        let coefficients = compute_coefficients(&set(elements));
        assert_eq!(chain(coefficients.values()), expected, "I = {:?}", elements);
    }
}

#[test]
fn test_unimodality_of_golden_sets() {
    let c = compute_coefficients(&set(&[2, 5, 7]));
    assert!(!c.is_unimodal());
    assert_eq!(local_dips(c.values()), vec![2]);
    assert_eq!(descents(c.values()), vec![1, 3]);

    let c = compute_coefficients(&set(&[1, 4, 9]));
    assert!(!c.is_unimodal());
    assert_eq!(local_dips(c.values()), vec![5]);

    let c = compute_coefficients(&set(&[2, 3, 8, 9]));
    assert!(!c.is_unimodal());

    assert!(compute_coefficients(&set(&[3, 5, 6, 7])).is_unimodal());
    assert!(compute_coefficients(&set(&[2, 5])).is_unimodal());
    assert!(!compute_coefficients(&set(&[1, 5, 7])).is_unimodal());
}

#[test]
fn test_first_coefficient_has_no_trailing_factor() {
    for &(elements, _) in GOLDEN {
        let s = set(elements);
        let shape = RibbonShape::new(&s);
        assert_eq!(trailing_factor(&shape, 0), BigUint::from(1u32));
        if shape.num_rows() > 1 {
            assert_eq!(
                compute_coefficients(&s).values()[0],
                configuration_sum(&shape, 0)
            );
        }
    }
}

#[test]
fn test_length_is_last_row_index_plus_one() {
    for &(elements, _) in GOLDEN {
        let s = set(elements);
        let shape = RibbonShape::new(&s);
        let coefficients = compute_coefficients(&s);
        assert_eq!(coefficients.len() as i64, -shape.neg_lengths()[0]);
    }
}

#[test]
fn test_random_sets_parallel_matches_sequential() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let mut pool: Vec<u32> = (1..=9).collect();
        pool.shuffle(&mut rng);
        let size = rng.gen_range(1..=4);
        let set = IndexSet::from_unsorted(pool[..size].to_vec()).unwrap();

        let sequential = compute_coefficients(&set);
        let parallel = compute_coefficients_parallel(&set);
        assert_eq!(sequential, parallel, "I = {}", set);
        assert!(sequential.values().iter().all(|v| *v > BigUint::from(0u32)));
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let mut rng = rand::thread_rng();
    let mut elements = vec![2u32, 5, 7];
    let expected = compute_coefficients(&set(&elements));

    for _ in 0..5 {
        elements.shuffle(&mut rng);
        let shuffled = IndexSet::from_unsorted(elements.clone()).unwrap();
        assert_eq!(compute_coefficients(&shuffled), expected);
    }
}
