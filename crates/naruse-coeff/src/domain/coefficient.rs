//! Coefficient assembly
//!
//! C_i is the sum of hook products over all excited configurations for i,
//! multiplied by the trailing factor `prod_{j < i} hooks[0][L_0 - j - 1]`.

use crate::domain::excited::ExcitedConfigs;
use crate::domain::shape::RibbonShape;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Multiply a sequence of hook lengths into `acc`
///
/// Factors are gathered in a machine word until it would overflow, then
/// folded into the big integer.
fn multiply_hooks(acc: &mut BigUint, hooks: impl IntoIterator<Item = u64>) {
    let mut word: u64 = 1;
    for hook in hooks {
        match word.checked_mul(hook) {
            Some(next) => word = next,
            None => {
                *acc *= word;
                word = hook;
            }
        }
    }
    if word != 1 {
        *acc *= word;
    }
}

/// Hook product of one configuration
///
/// For row j+1 with `config[j]` unmoved cells, the unmoved cells contribute
/// `hooks[j][0..config[j]]` and the excited cells contribute
/// `hooks[j+1][config[j]+1..L_{j+1}]`.
pub fn hook_product(shape: &RibbonShape, config: &[usize]) -> BigUint {
    let mut product = BigUint::one();

    for (j, &unmoved) in config.iter().enumerate() {
        let below = shape.row_length(j + 1);
        multiply_hooks(&mut product, shape.hook_row(j)[..unmoved].iter().copied());
        multiply_hooks(
            &mut product,
            shape.hook_row(j + 1)[unmoved + 1..below].iter().copied(),
        );
    }

    product
}

/// Trailing factor for index i, taken from the tail of the first row
pub fn trailing_factor(shape: &RibbonShape, target: usize) -> BigUint {
    let first = shape.hook_row(0);
    let mut factor = BigUint::one();
    multiply_hooks(&mut factor, first.iter().rev().take(target).copied());
    factor
}

/// Drain `configs` and sum the hook product of every configuration
pub fn sum_hook_products(shape: &RibbonShape, configs: &mut ExcitedConfigs) -> BigUint {
    let mut sum = BigUint::zero();
    let mut count: u64 = 0;

    while let Some(config) = configs.advance() {
        sum += hook_product(shape, config);
        count += 1;
    }

    log::trace!("summed {} configurations", count);
    sum
}

/// Sum of hook products over every configuration for `target`
pub fn configuration_sum(shape: &RibbonShape, target: usize) -> BigUint {
    sum_hook_products(shape, &mut ExcitedConfigs::new(shape, target))
}

/// Coefficient C_i by excited diagram enumeration
pub fn coefficient_at(shape: &RibbonShape, target: usize) -> BigUint {
    configuration_sum(shape, target) * trailing_factor(shape, target)
}

/// Closed form for a single-element set {k}: `C_i = i!` for i in 0..k
pub fn single_row_coefficients(last_index: usize) -> Vec<BigUint> {
    let mut values = Vec::with_capacity(last_index + 1);
    let mut current = BigUint::one();
    values.push(current.clone());

    for i in 1..=last_index {
        current *= i as u64;
        values.push(current.clone());
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::index_set::IndexSet;

    fn shape(elements: &[u32]) -> RibbonShape {
        RibbonShape::new(&IndexSet::new(elements.to_vec()).unwrap())
    }

    #[test]
    fn test_multiply_hooks_overflow_boundary() {
        let mut acc = BigUint::one();
        multiply_hooks(&mut acc, [u64::MAX, 3, u64::MAX]);
        let expected = BigUint::from(u64::MAX) * 3u32 * BigUint::from(u64::MAX);
        assert_eq!(acc, expected);
    }

    #[test]
    fn test_hook_product_all_unmoved() {
        // I = {3, 6}: hooks [[6, 5, 4, 2, 1], [3, 2, 1]]
        let s = shape(&[3, 6]);
        // config [2]: hooks[0][0..2] * hooks[1][3..3]
        assert_eq!(hook_product(&s, &[2]), BigUint::from(30u32));
    }

    #[test]
    fn test_hook_product_all_excited() {
        let s = shape(&[3, 6]);
        // config [0]: hooks[1][1..3] = 2 * 1
        assert_eq!(hook_product(&s, &[0]), BigUint::from(2u32));
        // config [1]: hooks[0][0] * hooks[1][2] = 6 * 1
        assert_eq!(hook_product(&s, &[1]), BigUint::from(6u32));
    }

    #[test]
    fn test_trailing_factor() {
        let s = shape(&[3, 6]);
        assert_eq!(trailing_factor(&s, 0), BigUint::one());
        assert_eq!(trailing_factor(&s, 1), BigUint::from(1u32));
        assert_eq!(trailing_factor(&s, 3), BigUint::from(8u32));
        assert_eq!(trailing_factor(&s, 4), BigUint::from(40u32));
    }

    #[test]
    fn test_configuration_sum() {
        let s = shape(&[3, 6]);
        // 30 + 6 + 2
        assert_eq!(configuration_sum(&s, 0), BigUint::from(38u32));
        // configs [1], [0]: 6 + 2
        assert_eq!(configuration_sum(&s, 3), BigUint::from(8u32));
    }

    #[test]
    fn test_coefficient_at() {
        let s = shape(&[3, 6]);
        let values: Vec<BigUint> = (0..=s.last_index()).map(|i| coefficient_at(&s, i)).collect();
        let expected: Vec<BigUint> = [38u32, 38, 76, 64, 80].into_iter().map(BigUint::from).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_single_row_coefficients() {
        let values = single_row_coefficients(5);
        let expected: Vec<BigUint> = [1u32, 1, 2, 6, 24, 120].into_iter().map(BigUint::from).collect();
        assert_eq!(values, expected);
        assert_eq!(single_row_coefficients(0), vec![BigUint::one()]);
    }

    #[test]
    fn test_general_path_matches_closed_form_for_single_row() {
        for k in 1..=12u32 {
            let s = shape(&[k]);
            let general: Vec<BigUint> = (0..=s.last_index()).map(|i| coefficient_at(&s, i)).collect();
            assert_eq!(general, single_row_coefficients(s.last_index()), "k = {}", k);
        }
    }
}
