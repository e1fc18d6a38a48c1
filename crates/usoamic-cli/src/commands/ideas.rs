//! Idea and vote commands

use alloy::primitives::U256;
use tracing::debug;
use usoamic_contract::{NodeTransport, UsoamicContract};
use usoamic_types::IdeaStatus;

use crate::cli::VoteArgs;
use crate::error::CliResult;
use crate::output::Output;

pub async fn add_idea<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    password: &str,
    description: &str,
) -> CliResult<Output> {
    let hash = contract.add_idea(password, description).await?;
    Ok(Output::Transaction(hash))
}

pub async fn set_idea_status<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    password: &str,
    idea_ref_id: U256,
    status: IdeaStatus,
) -> CliResult<Output> {
    let hash = contract.set_idea_status(password, idea_ref_id, status).await?;
    Ok(Output::Transaction(hash))
}

pub async fn vote<T: NodeTransport>(contract: &UsoamicContract<T>, password: &str, args: VoteArgs) -> CliResult<Output> {
    debug!(idea = %args.idea_ref_id, vote_type = %args.vote_type, "casting vote");
    let hash = contract
        .vote_for_idea(password, args.vote_type, args.idea_ref_id, &args.comment)
        .await?;
    Ok(Output::Transaction(hash))
}

pub async fn get_idea<T: NodeTransport>(contract: &UsoamicContract<T>, idea_ref_id: U256) -> CliResult<Output> {
    Ok(Output::Idea(contract.get_idea(idea_ref_id).await?))
}

pub async fn get_idea_by_address<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    author: &str,
    idea_id: U256,
) -> CliResult<Output> {
    Ok(Output::Idea(contract.get_idea_by_address(author, idea_id).await?))
}

pub async fn get_vote<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    idea_ref_id: U256,
    vote_ref_id: U256,
) -> CliResult<Output> {
    Ok(Output::Vote(contract.get_vote(idea_ref_id, vote_ref_id).await?))
}

pub async fn get_vote_by_address<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    idea_ref_id: U256,
    voter: &str,
    vote_id: U256,
) -> CliResult<Output> {
    Ok(Output::Vote(contract.get_vote_by_address(idea_ref_id, voter, vote_id).await?))
}

pub async fn number_of_ideas<T: NodeTransport>(contract: &UsoamicContract<T>) -> CliResult<Output> {
    Ok(Output::Number(contract.get_number_of_ideas().await?))
}

pub async fn number_of_ideas_by_address<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    author: &str,
) -> CliResult<Output> {
    Ok(Output::Number(contract.get_number_of_ideas_by_address(author).await?))
}

pub async fn number_of_votes_by_address<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    voter: &str,
    idea_ref_id: U256,
) -> CliResult<Output> {
    Ok(Output::Number(
        contract.get_number_of_votes_by_address(voter, idea_ref_id).await?,
    ))
}

pub async fn last_idea_id<T: NodeTransport>(contract: &UsoamicContract<T>) -> CliResult<Output> {
    Ok(Output::Number(contract.get_last_idea_id().await?))
}

pub async fn last_idea_id_by_address<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    author: &str,
) -> CliResult<Output> {
    Ok(Output::Number(contract.get_last_idea_id_by_address(author).await?))
}
