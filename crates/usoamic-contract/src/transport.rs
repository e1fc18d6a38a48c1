//! Node Transport Interface
//!
//! The boundary between the marshaling layer and the blockchain node. A
//! transport performs exactly one attempt per request; retrying a
//! transaction is left to the caller because resubmission is not idempotent.

use alloy::primitives::{Address, Bytes, Selector};
use async_trait::async_trait;
use usoamic_error::ContractResult;

/// Encoded invocation addressed to the contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Contract address
    pub to: Address,

    /// Selector followed by the ABI-encoded inputs
    pub data: Bytes,
}

impl CallRequest {
    pub fn new(to: Address, data: Bytes) -> Self {
        Self { to, data }
    }

    /// Leading 4-byte function selector, if the payload has one
    pub fn selector(&self) -> Option<Selector> {
        (self.data.len() >= 4).then(|| Selector::from_slice(&self.data[..4]))
    }
}

/// Read and write access to a contract through a node
#[async_trait]
pub trait NodeTransport: Send + Sync {
    /// Execute a read-only call and return the raw ABI-encoded output
    async fn call(&self, request: CallRequest) -> ContractResult<Bytes>;

    /// Unlock credentials with `password`, sign and submit the request once.
    ///
    /// Returns the node-assigned transaction hash as a `0x`-prefixed string.
    async fn send_transaction(&self, password: &str, request: CallRequest) -> ContractResult<String>;
}
