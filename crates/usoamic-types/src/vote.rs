// Vote entity

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::VoteType;

/// One participant's vote on an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    exists: bool,
    #[serde(serialize_with = "crate::decimal::serialize")]
    idea_id: U256,
    #[serde(serialize_with = "crate::decimal::serialize")]
    vote_id: U256,
    voter: Address,
    vote_type: VoteType,
    comment: String,
}

impl Vote {
    pub fn new(
        exists: bool,
        idea_id: U256,
        vote_id: U256,
        voter: Address,
        vote_type: VoteType,
        comment: String,
    ) -> Self {
        Self {
            exists,
            idea_id,
            vote_id,
            voter,
            vote_type,
            comment,
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn idea_id(&self) -> U256 {
        self.idea_id
    }

    pub fn vote_id(&self) -> U256 {
        self.vote_id
    }

    pub fn voter(&self) -> Address {
        self.voter
    }

    pub fn vote_type(&self) -> VoteType {
        self.vote_type
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}
