// src/dispatch.rs
// Routes a classified payload to its operation handler

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{OperationError, Result};
use crate::llm::AnswerProvider;
use crate::operations::{
    OperationKind, OperationRequest, OperationResult, ai, fibonacci, hcf, lcm, prime,
};

/// Stateless dispatcher; the answer provider is its only collaborator.
#[derive(Clone)]
pub struct Dispatcher {
    provider: Arc<dyn AnswerProvider>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn AnswerProvider>) -> Self {
        Self { provider }
    }

    /// Classify `payload`, validate its input and run the operation.
    pub async fn dispatch(&self, payload: &Value) -> Result<OperationResult> {
        let request = OperationRequest::classify(payload).inspect_err(|e| {
            info!(error = %e, "Rejected payload");
        })?;

        debug!(operation = %request.kind, "Dispatching operation");

        self.run(&request).await.inspect_err(|e| {
            info!(operation = %request.kind, error = %e, "Operation failed");
        })
    }

    async fn run(&self, request: &OperationRequest) -> Result<OperationResult> {
        let input = &request.input;
        match request.kind {
            OperationKind::Fibonacci => {
                offload(input, |v| fibonacci::handle(v).map(OperationResult::Fibonacci)).await
            }
            OperationKind::Prime => {
                offload(input, |v| prime::handle(v).map(OperationResult::Primes)).await
            }
            OperationKind::Lcm => offload(input, |v| lcm::handle(v).map(OperationResult::Lcm)).await,
            OperationKind::Hcf => offload(input, |v| hcf::handle(v).map(OperationResult::Hcf)).await,
            OperationKind::Ai => ai::handle(input, self.provider.as_ref())
                .await
                .map(OperationResult::Answer),
        }
    }
}

/// Run a CPU-bound handler on the blocking pool so trial division over a
/// large array never stalls the async workers.
async fn offload<F>(input: &Value, handler: F) -> Result<OperationResult>
where
    F: FnOnce(&Value) -> Result<OperationResult> + Send + 'static,
{
    let input = input.clone();
    tokio::task::spawn_blocking(move || handler(&input))
        .await
        .map_err(|e| {
            error!(error = %e, "Operation task failed");
            OperationError::Internal
        })?
}
