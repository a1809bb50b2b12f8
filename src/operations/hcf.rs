// src/operations/hcf.rs
// Highest common factor of a list

use serde_json::Value;

use crate::error::Result;
use crate::operations::input::{SequenceRules, integer_sequence};

const RULES: SequenceRules = SequenceRules {
    not_array: "HCF input must be an array",
    max_len: 1000,
};

/// Zero elements are allowed here, unlike LCM.
pub fn handle(value: &Value) -> Result<u64> {
    let numbers = integer_sequence(value, &RULES)?;
    Ok(hcf(&numbers))
}

/// Iterative Euclidean algorithm on absolute values
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Left fold of `gcd`, stopping early once the result reaches 1.
pub fn hcf(numbers: &[i64]) -> u64 {
    let Some((first, rest)) = numbers.split_first() else {
        return 0;
    };

    let mut result = first.unsigned_abs();
    for n in rest {
        result = gcd(result, n.unsigned_abs());
        if result == 1 {
            return 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_hcf_basic() {
        assert_eq!(hcf(&[12, 18, 24]), 6);
        assert_eq!(hcf(&[-12]), 12);
        assert_eq!(hcf(&[4, 0]), 4);
        assert_eq!(hcf(&[0, 0]), 0);
        assert_eq!(hcf(&[]), 0);
        assert_eq!(hcf(&[i64::MIN]), 1u64 << 63);
    }

    #[test]
    fn test_hcf_short_circuits_on_one() {
        assert_eq!(hcf(&[6, 35, 0, 0]), 1);
    }

    #[test]
    fn test_hcf_is_commutative_and_divides_inputs() {
        let pairs: [(i64, i64); 5] = [(12, 18), (-8, 20), (0, 9), (1071, 462), (13, -39)];
        for (a, b) in pairs {
            let g = hcf(&[a, b]);
            assert_eq!(g, hcf(&[b, a]));
            if g != 0 {
                assert_eq!(a.unsigned_abs() % g, 0);
                assert_eq!(b.unsigned_abs() % g, 0);
            }
        }
    }

    #[test]
    fn test_handle() {
        assert_eq!(handle(&json!([12, 18, 24])).unwrap(), 6);
        assert_eq!(handle(&json!([4, 0])).unwrap(), 4);
        assert_eq!(handle(&json!(vec![3; 1000])).unwrap(), 3);
    }

    #[test]
    fn test_handle_validation() {
        let msg = |v: Value| handle(&v).unwrap_err().to_string();
        assert_eq!(msg(json!({"a": 1})), "HCF input must be an array");
        assert_eq!(msg(json!([])), "Array cannot be empty");
        assert_eq!(msg(json!(vec![3; 1001])), "Array too large");
        assert_eq!(msg(json!([3, null])), "All elements must be integers");
    }
}
