//! Token Operations
//!
//! Balance, supply and version reads plus the `burn` and `transfer`
//! transactions.

use alloy::primitives::U256;
use usoamic_error::ContractResult;

use crate::contract::UsoamicContract;
use crate::encode;
use crate::function::ContractFunction;
use crate::transport::NodeTransport;

impl<T: NodeTransport> UsoamicContract<T> {
    pub async fn balance_of(&self, address: &str) -> ContractResult<U256> {
        let inputs = vec![encode::address(address)?];
        self.call_uint256("balanceOf", inputs).await
    }

    /// Total token supply
    pub async fn get_supply(&self) -> ContractResult<U256> {
        self.call_uint256("getSupply", Vec::new()).await
    }

    /// Version string reported by the deployed contract
    pub async fn get_version(&self) -> ContractResult<String> {
        self.call_string("getVersion", Vec::new()).await
    }

    pub async fn burn(&self, password: &str, value: U256) -> ContractResult<String> {
        let function = ContractFunction::transaction("burn", vec![encode::uint256(value)]);
        self.execute_transaction(password, function).await
    }

    pub async fn transfer(&self, password: &str, to: &str, value: U256) -> ContractResult<String> {
        let inputs = vec![encode::address(to)?, encode::uint256(value)];
        self.execute_transaction(password, ContractFunction::transaction("transfer", inputs))
            .await
    }
}
