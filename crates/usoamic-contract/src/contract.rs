//! Contract Client
//!
//! [`UsoamicContract`] owns a transport and the contract address and provides
//! the two executors every operation is built on: transaction invocation and
//! read-only call invocation with tuple decoding. The entity operations live
//! in `ideas`, `token` and `purchases`.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{Address, U256};
use tracing::debug;
use usoamic_error::{ContractError, ContractResult};

use crate::config::UsoamicConfig;
use crate::decode::TupleReader;
use crate::encode::parse_address;
use crate::function::ContractFunction;
use crate::http::HttpTransport;
use crate::transport::{CallRequest, NodeTransport};

/// Typed client for the deployed Usoamic contract
#[derive(Debug, Clone)]
pub struct UsoamicContract<T: NodeTransport> {
    transport: T,
    address: Address,
}

impl UsoamicContract<HttpTransport> {
    /// Client over HTTP for the node, keystore and contract in `config`
    pub fn from_config(config: &UsoamicConfig) -> ContractResult<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(config)?;
        Self::new(transport, &config.contract_address)
    }
}

impl<T: NodeTransport> UsoamicContract<T> {
    pub fn new(transport: T, contract_address: &str) -> ContractResult<Self> {
        let address = parse_address(contract_address)?;
        Ok(Self { transport, address })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    //-------------------------------------------------------------------------
    // Executors
    //-------------------------------------------------------------------------

    /// Submit a state-mutating call and return its transaction hash.
    ///
    /// Every failure on this path, including encoding, surfaces as
    /// `TransactionFailed` (or `Timeout`). There is exactly one attempt.
    pub async fn execute_transaction(&self, password: &str, function: ContractFunction) -> ContractResult<String> {
        let data = function
            .encode_call_data()
            .map_err(|e| ContractError::transaction_failed(format!("cannot encode '{}': {}", function.name(), e)))?;

        debug!(function = function.name(), "submitting transaction");
        self.transport
            .send_transaction(password, CallRequest::new(self.address, data))
            .await
            .map_err(|e| match e {
                ContractError::TransactionFailed(_) | ContractError::Timeout(_) => e,
                other => ContractError::transaction_failed(other.to_string()),
            })
    }

    /// Perform a read-only call and decode the positional output tuple
    pub async fn execute_call(&self, function: &ContractFunction) -> ContractResult<Vec<DynSolValue>> {
        let data = function.encode_call_data()?;

        debug!(function = function.name(), "calling");
        let output = self.transport.call(CallRequest::new(self.address, data)).await?;
        function.decode_output(&output)
    }

    /// Call a function returning a single `uint256`
    pub(crate) async fn call_uint256(&self, name: &str, inputs: Vec<DynSolValue>) -> ContractResult<U256> {
        let function = ContractFunction::new(name, inputs, vec![DynSolType::Uint(256)]);
        let values = self.execute_call(&function).await?;
        TupleReader::new(name, &values, 1)?.uint(0)
    }

    /// Call a function returning a single `string`
    pub(crate) async fn call_string(&self, name: &str, inputs: Vec<DynSolValue>) -> ContractResult<String> {
        let function = ContractFunction::new(name, inputs, vec![DynSolType::String]);
        let values = self.execute_call(&function).await?;
        TupleReader::new(name, &values, 1)?.string(0)
    }
}

/// Last id of a collection holding `count` entries.
///
/// Ids are zero-based, so an empty collection has no last id and fails with
/// `EmptyCollection` instead of underflowing.
pub fn last_id(count: U256, collection: &str) -> ContractResult<U256> {
    count
        .checked_sub(U256::from(1))
        .ok_or_else(|| ContractError::empty_collection(format!("no {} yet", collection)))
}
