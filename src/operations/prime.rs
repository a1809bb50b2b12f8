// src/operations/prime.rs
// Primality filtering

use serde_json::Value;

use crate::error::Result;
use crate::operations::input::{SequenceRules, integer_sequence};

const RULES: SequenceRules = SequenceRules {
    not_array: "Prime input must be an array",
    max_len: 10_000,
};

pub fn handle(value: &Value) -> Result<Vec<i64>> {
    let numbers = integer_sequence(value, &RULES)?;
    Ok(filter_primes(&numbers))
}

/// Prime elements in input order, duplicates kept
pub fn filter_primes(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_prime(n)).collect()
}

/// Trial division by odd divisors up to floor(sqrt(n)).
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    // `divisor <= n / divisor` is `divisor^2 <= n` without overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<i64> = (-10..=30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_and_large() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(is_prime(7919));
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        assert_eq!(filter_primes(&[7, 4, 2, 7, -3, 1, 0, 2]), vec![7, 2, 7, 2]);
    }

    #[test]
    fn test_handle() {
        assert_eq!(handle(&json!([2, 3, 4, 5, 9])).unwrap(), vec![2, 3, 5]);
        assert!(handle(&json!([4, 6, 8])).unwrap().is_empty());
    }

    #[test]
    fn test_handle_validation() {
        let msg = |v: Value| handle(&v).unwrap_err().to_string();
        assert_eq!(msg(json!(7)), "Prime input must be an array");
        assert_eq!(msg(json!([])), "Array cannot be empty");
        assert_eq!(msg(json!(vec![1; 10_001])), "Array too large");
        assert_eq!(msg(json!([2, "3"])), "All elements must be integers");
        assert!(handle(&json!(vec![2; 10_000])).is_ok());
    }
}
