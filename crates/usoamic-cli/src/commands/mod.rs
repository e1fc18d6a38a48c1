//! Command Handlers
//!
//! Each subcommand maps to one contract operation. Handlers are generic over
//! the node transport so they run unchanged against the in-memory mock.

pub mod ideas;
pub mod purchases;
pub mod token;

use anyhow::anyhow;
use usoamic_contract::{NodeTransport, UsoamicContract};

use crate::cli::Command;
use crate::error::CliResult;
use crate::output::Output;

/// Run `command` against `contract`
pub async fn execute<T: NodeTransport>(
    contract: &UsoamicContract<T>,
    command: Command,
    password: Option<&str>,
) -> CliResult<Output> {
    match command {
        Command::AddIdea { description } => {
            ideas::add_idea(contract, require_password(password)?, &description).await
        }
        Command::SetIdeaStatus { idea_ref_id, status } => {
            ideas::set_idea_status(contract, require_password(password)?, idea_ref_id, status).await
        }
        Command::Vote(args) => ideas::vote(contract, require_password(password)?, args).await,
        Command::GetIdea { idea_ref_id } => ideas::get_idea(contract, idea_ref_id).await,
        Command::GetIdeaByAddress { author, idea_id } => {
            ideas::get_idea_by_address(contract, &author, idea_id).await
        }
        Command::GetVote { idea_ref_id, vote_ref_id } => {
            ideas::get_vote(contract, idea_ref_id, vote_ref_id).await
        }
        Command::GetVoteByAddress { idea_ref_id, voter, vote_id } => {
            ideas::get_vote_by_address(contract, idea_ref_id, &voter, vote_id).await
        }
        Command::NumberOfIdeas => ideas::number_of_ideas(contract).await,
        Command::NumberOfIdeasByAddress { author } => {
            ideas::number_of_ideas_by_address(contract, &author).await
        }
        Command::NumberOfVotesByAddress { voter, idea_ref_id } => {
            ideas::number_of_votes_by_address(contract, &voter, idea_ref_id).await
        }
        Command::LastIdeaId => ideas::last_idea_id(contract).await,
        Command::LastIdeaIdByAddress { author } => ideas::last_idea_id_by_address(contract, &author).await,

        Command::Balance { address } => token::balance(contract, &address).await,
        Command::Supply => token::supply(contract).await,
        Command::Version => token::version(contract).await,
        Command::Burn { value } => token::burn(contract, require_password(password)?, value).await,
        Command::Transfer { to, value } => {
            token::transfer(contract, require_password(password)?, &to, value).await
        }

        Command::MakePurchase(args) => {
            purchases::make_purchase(contract, require_password(password)?, args).await
        }
        Command::GetPurchase { purchaser, id } => purchases::get_purchase(contract, &purchaser, id).await,
        Command::NumberOfPurchases { purchaser } => {
            purchases::number_of_purchases(contract, &purchaser).await
        }
        Command::LastPurchaseId { purchaser } => purchases::last_purchase_id(contract, &purchaser).await,
    }
}

/// Password for a transaction command, required before any request is built
fn require_password(password: Option<&str>) -> CliResult<&str> {
    password
        .filter(|password| !password.is_empty())
        .ok_or_else(|| anyhow!("this command submits a transaction: pass --password or set USOAMIC_PASSWORD"))
}
