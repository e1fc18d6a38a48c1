//! Purchase Operations

use alloy::primitives::U256;
use usoamic_error::ContractResult;
use usoamic_types::Purchase;

use crate::contract::{last_id, UsoamicContract};
use crate::encode;
use crate::function::ContractFunction;
use crate::schema::{build_purchase, purchase_outputs};
use crate::transport::NodeTransport;

impl<T: NodeTransport> UsoamicContract<T> {
    /// Pay `cost` tokens for `purchase_id` of application `app_id`
    pub async fn make_purchase(
        &self,
        password: &str,
        app_id: &str,
        purchase_id: &str,
        cost: U256,
    ) -> ContractResult<String> {
        let inputs = vec![
            encode::string(app_id),
            encode::string(purchase_id),
            encode::uint256(cost),
        ];
        self.execute_transaction(password, ContractFunction::transaction("makePurchase", inputs))
            .await
    }

    pub async fn get_purchase_by_address(&self, purchaser: &str, id: U256) -> ContractResult<Purchase> {
        let name = "getPurchaseByAddress";
        let inputs = vec![encode::address(purchaser)?, encode::uint256(id)];
        let function = ContractFunction::new(name, inputs, purchase_outputs());
        let values = self.execute_call(&function).await?;
        build_purchase(name, &values)
    }

    pub async fn get_number_of_purchases_by_address(&self, purchaser: &str) -> ContractResult<U256> {
        let inputs = vec![encode::address(purchaser)?];
        self.call_uint256("getNumberOfPurchasesByAddress", inputs).await
    }

    /// Id of the purchaser's most recent purchase
    pub async fn get_last_purchase_id(&self, purchaser: &str) -> ContractResult<U256> {
        let count = self.get_number_of_purchases_by_address(purchaser).await?;
        last_id(count, &format!("purchases by {}", purchaser))
    }
}
