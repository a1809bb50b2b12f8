// src/operations/input.rs
// Shared decoding helpers for raw JSON operation inputs

use serde_json::Value;

use crate::error::{OperationError, Result};

/// Rules for a "sequence of integers" input.
pub struct SequenceRules {
    /// Message when the value is not an array at all
    pub not_array: &'static str,
    /// Maximum accepted element count
    pub max_len: usize,
}

/// Integral value of a JSON number, if it has one.
///
/// Integral floats (`5.0`) count as integers. Floats too large for `i128`
/// saturate, which keeps their sign for range checks.
pub fn integral(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n as i128);
    }
    if let Some(n) = number.as_u64() {
        return Some(n as i128);
    }
    let f = number.as_f64()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i128)
}

/// Integer element of a sequence; must fit in `i64`.
fn element(value: &Value) -> Option<i64> {
    integral(value).and_then(|n| i64::try_from(n).ok())
}

/// Decode an array of integers, applying checks in a fixed order:
/// array, non-empty, length bound, every element integral.
pub fn integer_sequence(value: &Value, rules: &SequenceRules) -> Result<Vec<i64>> {
    let items = value
        .as_array()
        .ok_or_else(|| OperationError::validation(rules.not_array))?;

    if items.is_empty() {
        return Err(OperationError::validation("Array cannot be empty"));
    }
    if items.len() > rules.max_len {
        return Err(OperationError::validation("Array too large"));
    }

    items
        .iter()
        .map(element)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| OperationError::validation("All elements must be integers"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: SequenceRules = SequenceRules {
        not_array: "Thing must be an array",
        max_len: 3,
    };

    fn message(result: Result<Vec<i64>>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_integral_accepts_whole_numbers() {
        assert_eq!(integral(&json!(7)), Some(7));
        assert_eq!(integral(&json!(-7)), Some(-7));
        assert_eq!(integral(&json!(5.0)), Some(5));
        assert_eq!(integral(&json!(u64::MAX)), Some(u64::MAX as i128));
    }

    #[test]
    fn test_integral_rejects_fractions_and_non_numbers() {
        assert_eq!(integral(&json!(2.5)), None);
        assert_eq!(integral(&json!("5")), None);
        assert_eq!(integral(&json!(null)), None);
        assert_eq!(integral(&json!(true)), None);
        assert_eq!(integral(&json!([1])), None);
    }

    #[test]
    fn test_huge_floats_keep_their_sign() {
        assert!(integral(&json!(1e300)).unwrap() > 0);
        assert!(integral(&json!(-1e300)).unwrap() < 0);
    }

    #[test]
    fn test_sequence_ok() {
        assert_eq!(integer_sequence(&json!([1, -2, 3.0]), &RULES).unwrap(), vec![1, -2, 3]);
    }

    #[test]
    fn test_sequence_check_order() {
        assert_eq!(message(integer_sequence(&json!(5), &RULES)), "Thing must be an array");
        assert_eq!(message(integer_sequence(&json!([]), &RULES)), "Array cannot be empty");
        // Length is checked before element types
        assert_eq!(
            message(integer_sequence(&json!(["a", "b", "c", "d"]), &RULES)),
            "Array too large"
        );
        assert_eq!(
            message(integer_sequence(&json!([1, 1.5]), &RULES)),
            "All elements must be integers"
        );
    }

    #[test]
    fn test_sequence_rejects_out_of_range_integers() {
        assert_eq!(
            message(integer_sequence(&json!([u64::MAX]), &RULES)),
            "All elements must be integers"
        );
    }
}
