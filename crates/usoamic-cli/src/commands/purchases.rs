//! Purchase commands

use alloy::primitives::U256;
use usoamic_contract::{NodeTransport, UsoamicContract};

use crate::cli::PurchaseArgs;
use crate::error::CliResult;
use crate::output::Output;

pub async fn make_purchase<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    password: &str,
    args: PurchaseArgs,
) -> CliResult<Output> {
    let hash = contract
        .make_purchase(password, &args.app_id, &args.purchase_id, args.cost)
        .await?;
    Ok(Output::Transaction(hash))
}

pub async fn get_purchase<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    purchaser: &str,
    id: U256,
) -> CliResult<Output> {
    Ok(Output::Purchase(contract.get_purchase_by_address(purchaser, id).await?))
}

pub async fn number_of_purchases<T: NodeTransport>(contract: &UsoamicContract<T>, purchaser: &str) -> CliResult<Output> {
    Ok(Output::Number(contract.get_number_of_purchases_by_address(purchaser).await?))
}

pub async fn last_purchase_id<T: NodeTransport>(contract: &UsoamicContract<T>, purchaser: &str) -> CliResult<Output> {
    Ok(Output::Number(contract.get_last_purchase_id(purchaser).await?))
}
