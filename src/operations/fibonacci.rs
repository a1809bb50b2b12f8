// src/operations/fibonacci.rs
// Fibonacci sequence generation

use num_bigint::BigUint;
use serde_json::Value;

use crate::error::{OperationError, Result};
use crate::operations::input::integral;

/// Largest accepted term count
pub const MAX_TERMS: i128 = 1000;

/// Validate the raw input and produce the requested terms.
pub fn handle(value: &Value) -> Result<Vec<BigUint>> {
    let n = integral(value)
        .ok_or_else(|| OperationError::validation("Fibonacci input must be an integer"))?;

    if n < 0 {
        return Err(OperationError::validation("Input cannot be negative"));
    }
    if n > MAX_TERMS {
        return Err(OperationError::validation("Input too large"));
    }

    Ok(sequence(n as usize))
}

/// First `n` terms of 0, 1, 1, 2, 3, ...
pub fn sequence(n: usize) -> Vec<BigUint> {
    let mut terms: Vec<BigUint> = Vec::with_capacity(n);
    for i in 0..n {
        let next = match i {
            0 => BigUint::ZERO,
            1 => BigUint::from(1u8),
            _ => &terms[i - 1] + &terms[i - 2],
        };
        terms.push(next);
    }
    terms
}
