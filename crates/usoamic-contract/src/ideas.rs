//! Idea and Vote Operations
//!
//! Marshalers for the governance part of the contract: submitting and voting
//! on ideas, and reading ideas, votes and their counters back.

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;
use usoamic_error::ContractResult;
use usoamic_types::{Idea, IdeaStatus, Vote, VoteType};

use crate::contract::{last_id, UsoamicContract};
use crate::encode;
use crate::function::ContractFunction;
use crate::schema::{build_idea, build_vote, idea_outputs, vote_outputs};
use crate::transport::NodeTransport;

/// Function name used by `get_vote_by_address`.
///
/// The accessor is dispatched by parameter list alone, so its selector is
/// derived from `(uint256,address,uint256)`.
// TODO: confirm against the deployed ABI whether this should be `getVoteByAddress`
pub const VOTE_BY_ADDRESS_FUNCTION: &str = "";

/// The per-author idea counter is an overload of `getNumberOfIdeas`
pub const IDEAS_BY_ADDRESS_FUNCTION: &str = "getNumberOfIdeas";

impl<T: NodeTransport> UsoamicContract<T> {
    //-------------------------------------------------------------------------
    // Transactions
    //-------------------------------------------------------------------------

    pub async fn add_idea(&self, password: &str, description: &str) -> ContractResult<String> {
        let function = ContractFunction::transaction("addIdea", vec![encode::string(description)]);
        self.execute_transaction(password, function).await
    }

    pub async fn set_idea_status(&self, password: &str, idea_ref_id: U256, status: IdeaStatus) -> ContractResult<String> {
        let function = ContractFunction::transaction(
            "setIdeaStatus",
            vec![encode::uint256(idea_ref_id), encode::ordinal(status)],
        );
        self.execute_transaction(password, function).await
    }

    /// Cast a vote; the contract function is selected by `vote_type`
    pub async fn vote_for_idea(
        &self,
        password: &str,
        vote_type: VoteType,
        idea_ref_id: U256,
        comment: &str,
    ) -> ContractResult<String> {
        let function = ContractFunction::transaction(
            vote_type.function_name(),
            vec![encode::uint256(idea_ref_id), encode::string(comment)],
        );
        self.execute_transaction(password, function).await
    }

    pub async fn support_idea(&self, password: &str, idea_ref_id: U256, comment: &str) -> ContractResult<String> {
        self.vote_for_idea(password, VoteType::Support, idea_ref_id, comment).await
    }

    pub async fn abstain_idea(&self, password: &str, idea_ref_id: U256, comment: &str) -> ContractResult<String> {
        self.vote_for_idea(password, VoteType::Abstain, idea_ref_id, comment).await
    }

    pub async fn against_idea(&self, password: &str, idea_ref_id: U256, comment: &str) -> ContractResult<String> {
        self.vote_for_idea(password, VoteType::Against, idea_ref_id, comment).await
    }

    //-------------------------------------------------------------------------
    // Entity Reads
    //-------------------------------------------------------------------------

    pub async fn get_idea(&self, idea_ref_id: U256) -> ContractResult<Idea> {
        self.read_idea("getIdea", vec![encode::uint256(idea_ref_id)]).await
    }

    pub async fn get_idea_by_address(&self, author: &str, idea_id: U256) -> ContractResult<Idea> {
        let inputs = vec![encode::address(author)?, encode::uint256(idea_id)];
        self.read_idea("getIdeaByAddress", inputs).await
    }

    pub async fn get_vote(&self, idea_ref_id: U256, vote_ref_id: U256) -> ContractResult<Vote> {
        let inputs = vec![encode::uint256(idea_ref_id), encode::uint256(vote_ref_id)];
        self.read_vote("getVote", inputs).await
    }

    pub async fn get_vote_by_address(&self, idea_ref_id: U256, voter: &str, vote_id: U256) -> ContractResult<Vote> {
        let inputs = vec![
            encode::uint256(idea_ref_id),
            encode::address(voter)?,
            encode::uint256(vote_id),
        ];
        self.read_vote(VOTE_BY_ADDRESS_FUNCTION, inputs).await
    }

    async fn read_idea(&self, name: &str, inputs: Vec<DynSolValue>) -> ContractResult<Idea> {
        let function = ContractFunction::new(name, inputs, idea_outputs());
        let values = self.execute_call(&function).await?;
        build_idea(name, &values)
    }

    async fn read_vote(&self, name: &str, inputs: Vec<DynSolValue>) -> ContractResult<Vote> {
        let function = ContractFunction::new(name, inputs, vote_outputs());
        let values = self.execute_call(&function).await?;
        build_vote(name, &values)
    }

    //-------------------------------------------------------------------------
    // Counters and Derived Queries
    //-------------------------------------------------------------------------

    pub async fn get_number_of_ideas(&self) -> ContractResult<U256> {
        self.call_uint256("getNumberOfIdeas", Vec::new()).await
    }

    pub async fn get_number_of_ideas_by_address(&self, author: &str) -> ContractResult<U256> {
        let inputs = vec![encode::address(author)?];
        self.call_uint256(IDEAS_BY_ADDRESS_FUNCTION, inputs).await
    }

    pub async fn get_number_of_votes_by_address(&self, voter: &str, idea_ref_id: U256) -> ContractResult<U256> {
        let inputs = vec![encode::address(voter)?, encode::uint256(idea_ref_id)];
        self.call_uint256("getNumberOfVotesByAddress", inputs).await
    }

    /// Reference id of the most recent idea, `EmptyCollection` if there is none
    pub async fn get_last_idea_id(&self) -> ContractResult<U256> {
        last_id(self.get_number_of_ideas().await?, "ideas")
    }

    /// Per-author id of the author's most recent idea
    pub async fn get_last_idea_id_by_address(&self, author: &str) -> ContractResult<U256> {
        let count = self.get_number_of_ideas_by_address(author).await?;
        last_id(count, &format!("ideas by {}", author))
    }
}
