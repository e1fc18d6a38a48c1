//! Token commands

use alloy::primitives::U256;
use usoamic_contract::{NodeTransport, UsoamicContract};

use crate::error::CliResult;
use crate::output::Output;

pub async fn balance<T: NodeTransport>(contract: &UsoamicContract<T>, address: &str) -> CliResult<Output> {
    Ok(Output::Number(contract.balance_of(address).await?))
}

pub async fn supply<T: NodeTransport>(contract: &UsoamicContract<T>) -> CliResult<Output> {
    Ok(Output::Number(contract.get_supply().await?))
}

pub async fn version<T: NodeTransport>(contract: &UsoamicContract<T>) -> CliResult<Output> {
    Ok(Output::Text(contract.get_version().await?))
}

pub async fn burn<T: NodeTransport>(contract: &UsoamicContract<T>, password: &str, value: U256) -> CliResult<Output> {
    Ok(Output::Transaction(contract.burn(password, value).await?))
}

pub async fn transfer<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    password: &str,
    to: &str,
    value: U256,
) -> CliResult<Output> {
    Ok(Output::Transaction(contract.transfer(password, to, value).await?))
}
