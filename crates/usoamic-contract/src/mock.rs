//! Mock Node Transport
//!
//! In-memory [`NodeTransport`] for tests. Read responses are registered per
//! function signature and every request is recorded, so tests can assert
//! both what was sent and how many round-trips happened.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{keccak256, Bytes, Selector};
use async_trait::async_trait;
use usoamic_error::{ContractError, ContractResult};

use crate::function::selector_of;
use crate::transport::{CallRequest, NodeTransport};

/// Password accepted by a default mock
pub const MOCK_PASSWORD: &str = "password";

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<Selector, Bytes>,
    calls: Vec<CallRequest>,
    transactions: Vec<CallRequest>,
    rejection: Option<String>,
}

/// Mock implementation of a node transport for testing
#[derive(Debug, Clone)]
pub struct MockTransport {
    password: String,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_password(MOCK_PASSWORD)
    }

    /// Mock whose credentials unlock only with `password`
    pub fn with_password(password: &str) -> Self {
        Self {
            password: password.to_string(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer calls to `signature` with the ABI encoding of `values`
    pub fn respond(&self, signature: &str, values: Vec<DynSolValue>) {
        let encoded = DynSolValue::Tuple(values).abi_encode_params();
        self.respond_raw(signature, Bytes::from(encoded));
    }

    /// Answer calls to `signature` with raw bytes
    pub fn respond_raw(&self, signature: &str, output: Bytes) {
        self.state().responses.insert(selector_of(signature), output);
    }

    /// Make the node reject every following transaction
    pub fn reject_transactions(&self, reason: &str) {
        self.state().rejection = Some(reason.to_string());
    }

    /// Read calls received so far
    pub fn calls(&self) -> Vec<CallRequest> {
        self.state().calls.clone()
    }

    /// Transactions accepted so far
    pub fn transactions(&self) -> Vec<CallRequest> {
        self.state().transactions.clone()
    }

    /// Total number of requests that reached the transport
    pub fn call_count(&self) -> usize {
        let state = self.state();
        state.calls.len() + state.transactions.len()
    }
}

#[async_trait]
impl NodeTransport for MockTransport {
    async fn call(&self, request: CallRequest) -> ContractResult<Bytes> {
        let mut state = self.state();
        let response = request
            .selector()
            .and_then(|selector| state.responses.get(&selector).cloned());
        state.calls.push(request);
        response.ok_or_else(|| ContractError::call_failed("execution reverted"))
    }

    async fn send_transaction(&self, password: &str, request: CallRequest) -> ContractResult<String> {
        let mut state = self.state();
        if password != self.password {
            return Err(ContractError::transaction_failed("invalid account password"));
        }
        if let Some(reason) = &state.rejection {
            return Err(ContractError::transaction_failed(reason.clone()));
        }

        let mut preimage = request.data.to_vec();
        preimage.extend_from_slice(&(state.transactions.len() as u64).to_be_bytes());
        state.transactions.push(request);
        Ok(keccak256(&preimage).to_string())
    }
}
