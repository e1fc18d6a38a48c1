// Idea entity

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::IdeaStatus;

/// Vote counters attached to an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaTally {
    #[serde(serialize_with = "crate::decimal::serialize")]
    pub supporters: U256,
    #[serde(serialize_with = "crate::decimal::serialize")]
    pub abstainers: U256,
    #[serde(serialize_with = "crate::decimal::serialize")]
    pub against: U256,
    #[serde(serialize_with = "crate::decimal::serialize")]
    pub participants: U256,
}

/// A proposal submitted to the contract, as returned by `getIdea`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Idea {
    exists: bool,
    #[serde(serialize_with = "crate::decimal::serialize")]
    idea_id: U256,
    #[serde(serialize_with = "crate::decimal::serialize")]
    idea_ref_id: U256,
    author: Address,
    description: String,
    status: IdeaStatus,
    #[serde(serialize_with = "crate::decimal::serialize")]
    timestamp: U256,
    tally: IdeaTally,
}

impl Idea {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exists: bool,
        idea_id: U256,
        idea_ref_id: U256,
        author: Address,
        description: String,
        status: IdeaStatus,
        timestamp: U256,
        tally: IdeaTally,
    ) -> Self {
        Self {
            exists,
            idea_id,
            idea_ref_id,
            author,
            description,
            status,
            timestamp,
            tally,
        }
    }

    /// Whether the contract holds an idea at the requested position
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Per-author sequence number
    pub fn idea_id(&self) -> U256 {
        self.idea_id
    }

    /// Global reference id
    pub fn idea_ref_id(&self) -> U256 {
        self.idea_ref_id
    }

    pub fn author(&self) -> Address {
        self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> IdeaStatus {
        self.status
    }

    /// Creation time in seconds since the Unix epoch
    pub fn timestamp(&self) -> U256 {
        self.timestamp
    }

    /// Creation time, if it fits a calendar date
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let seconds = i64::try_from(self.timestamp).ok()?;
        DateTime::from_timestamp(seconds, 0)
    }

    pub fn tally(&self) -> &IdeaTally {
        &self.tally
    }

    pub fn number_of_supporters(&self) -> U256 {
        self.tally.supporters
    }

    pub fn number_of_abstained(&self) -> U256 {
        self.tally.abstainers
    }

    pub fn number_of_voted_against(&self) -> U256 {
        self.tally.against
    }

    pub fn number_of_participants(&self) -> U256 {
        self.tally.participants
    }
}
