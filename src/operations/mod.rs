// src/operations/mod.rs
// Operation vocabulary, request classification and results

pub mod ai;
pub mod fibonacci;
pub mod hcf;
pub mod input;
pub mod lcm;
pub mod prime;

use num_bigint::BigUint;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{OperationError, Result};

/// The five mutually exclusive operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl OperationKind {
    /// Every operation, in dispatch order
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Fibonacci,
        OperationKind::Prime,
        OperationKind::Lcm,
        OperationKind::Hcf,
        OperationKind::Ai,
    ];

    /// Payload keys that select this operation
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            OperationKind::Fibonacci => &["fibonacci"],
            OperationKind::Prime => &["prime"],
            OperationKind::Lcm => &["lcm"],
            OperationKind::Hcf => &["hcf"],
            OperationKind::Ai => &["AI", "ai"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Fibonacci => "fibonacci",
            OperationKind::Prime => "prime",
            OperationKind::Lcm => "lcm",
            OperationKind::Hcf => "hcf",
            OperationKind::Ai => "ai",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payload classified down to exactly one operation and its raw input
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub kind: OperationKind,
    pub input: Value,
}

impl OperationRequest {
    /// Classify a raw payload.
    ///
    /// Only key presence counts; a `null` value still selects its operation.
    /// Non-object payloads carry no keys. Each recognized key is counted, so
    /// sending both `AI` and `ai` is ambiguous too.
    pub fn classify(payload: &Value) -> Result<Self> {
        let empty = Map::new();
        let fields = payload.as_object().unwrap_or(&empty);

        let mut requested = OperationKind::ALL.into_iter().flat_map(move |kind| {
            kind.keys()
                .iter()
                .filter_map(move |key| fields.get(*key).map(|input| (kind, input)))
        });

        let (kind, input) = requested
            .next()
            .ok_or_else(|| OperationError::invalid_request("No operation specified"))?;

        if requested.next().is_some() {
            return Err(OperationError::invalid_request(
                "Only one operation allowed per request",
            ));
        }

        Ok(Self {
            kind,
            input: input.clone(),
        })
    }
}

/// Successful outcome of one operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Fibonacci(Vec<BigUint>),
    Primes(Vec<i64>),
    Lcm(BigUint),
    Hcf(u64),
    Answer(String),
}

/// Exact JSON number for an arbitrary precision integer
fn big_number<E: serde::ser::Error>(n: &BigUint) -> std::result::Result<serde_json::Number, E> {
    n.to_string()
        .parse::<serde_json::Number>()
        .map_err(|e| E::custom(format!("unrepresentable integer: {e}")))
}

impl Serialize for OperationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            OperationResult::Fibonacci(terms) => {
                let mut seq = serializer.serialize_seq(Some(terms.len()))?;
                for term in terms {
                    seq.serialize_element(&big_number::<S::Error>(term)?)?;
                }
                seq.end()
            }
            OperationResult::Primes(primes) => primes.serialize(serializer),
            OperationResult::Lcm(value) => big_number::<S::Error>(value)?.serialize(serializer),
            OperationResult::Hcf(value) => value.serialize(serializer),
            OperationResult::Answer(word) => word.serialize(serializer),
        }
    }
}
