// Purchase entity

use alloy::primitives::{Address, U256};
use serde::Serialize;

/// A paid in-app purchase recorded by the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    app_id: String,
    purchase_id: String,
    #[serde(serialize_with = "crate::decimal::serialize")]
    cost: U256,
    purchaser: Address,
    #[serde(serialize_with = "crate::decimal::serialize")]
    id: U256,
}

impl Purchase {
    pub fn new(app_id: String, purchase_id: String, cost: U256, purchaser: Address, id: U256) -> Self {
        Self {
            app_id,
            purchase_id,
            cost,
            purchaser,
            id,
        }
    }

    /// Application identifier chosen by the seller
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Seller-side purchase identifier
    pub fn purchase_id(&self) -> &str {
        &self.purchase_id
    }

    pub fn cost(&self) -> U256 {
        self.cost
    }

    pub fn purchaser(&self) -> Address {
        self.purchaser
    }

    /// Per-purchaser sequence number
    pub fn id(&self) -> U256 {
        self.id
    }
}
