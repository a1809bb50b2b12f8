// src/operations/lcm.rs
// Least common multiple of a list

use num_bigint::BigUint;
use serde_json::Value;

use crate::error::{OperationError, Result};
use crate::operations::input::{SequenceRules, integer_sequence};

const RULES: SequenceRules = SequenceRules {
    not_array: "LCM input must be an array",
    max_len: 1000,
};

pub fn handle(value: &Value) -> Result<BigUint> {
    let numbers = integer_sequence(value, &RULES)?;

    if numbers.contains(&0) {
        return Err(OperationError::validation("Cannot calculate LCM with zero"));
    }

    Ok(lcm(&numbers))
}

/// Euclidean gcd over the arbitrary precision accumulator
fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while b != BigUint::ZERO {
        let rem = &a % &b;
        a = b;
        b = rem;
    }
    a
}

/// `|a*b| / gcd(a, b)`; zero if either side is zero
fn lcm_pair(a: &BigUint, b: &BigUint) -> BigUint {
    if *a == BigUint::ZERO || *b == BigUint::ZERO {
        return BigUint::ZERO;
    }
    (a * b) / gcd(a, b)
}

/// Left fold of pairwise lcm starting from `|first|`.
pub fn lcm(numbers: &[i64]) -> BigUint {
    let Some((first, rest)) = numbers.split_first() else {
        return BigUint::ZERO;
    };

    rest.iter().fold(BigUint::from(first.unsigned_abs()), |acc, n| {
        lcm_pair(&acc, &BigUint::from(n.unsigned_abs()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::hcf::gcd as gcd_u64;
    use serde_json::json;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(&[4, 6]), big(12));
        assert_eq!(lcm(&[2, 3, 4]), big(12));
        assert_eq!(lcm(&[-4, 6]), big(12));
        assert_eq!(lcm(&[-7]), big(7));
        assert_eq!(lcm(&[]), BigUint::ZERO);
    }

    #[test]
    fn test_lcm_times_gcd_is_product() {
        let pairs: [(i64, i64); 5] = [(4, 6), (21, 6), (-9, 12), (17, 19), (100, 100)];
        for (a, b) in pairs {
            let l = lcm(&[a, b]);
            let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
            assert_eq!(l * big(g), big(a.unsigned_abs()) * big(b.unsigned_abs()));
        }
    }

    #[test]
    fn test_lcm_does_not_overflow() {
        let primes = [
            1_000_000_007i64,
            998_244_353,
            1_000_000_009,
        ];
        let expected = big(1_000_000_007) * big(998_244_353) * big(1_000_000_009);
        assert_eq!(lcm(&primes), expected);
    }

    #[test]
    fn test_handle() {
        assert_eq!(handle(&json!([4, 6])).unwrap(), big(12));
        assert_eq!(handle(&json!([5])).unwrap(), big(5));
        assert_eq!(handle(&json!(vec![3; 1000])).unwrap(), big(3));
    }

    #[test]
    fn test_handle_rejects_zero() {
        let err = handle(&json!([4, 0])).unwrap_err();
        assert_eq!(err, OperationError::validation("Cannot calculate LCM with zero"));
    }

    #[test]
    fn test_handle_validation_order() {
        let msg = |v: Value| handle(&v).unwrap_err().to_string();
        assert_eq!(msg(json!("4,6")), "LCM input must be an array");
        assert_eq!(msg(json!([])), "Array cannot be empty");
        assert_eq!(msg(json!(vec![0; 1001])), "Array too large");
        // Type check runs before the zero check
        assert_eq!(msg(json!([0, 1.5])), "All elements must be integers");
    }
}
