//! Command Definition
//!
//! Global options override the TOML config file; each one can also be set
//! through a `USOAMIC_*` environment variable.

use std::path::PathBuf;

use alloy::primitives::U256;
use clap::{Args, Parser, Subcommand};
use usoamic_contract::encode::parse_uint256;
use usoamic_contract::{ContractResult, UsoamicConfig};
use usoamic_types::{IdeaStatus, VoteType};

//-----------------------------------------------------------------------------
// Global Options
//-----------------------------------------------------------------------------

/// Usoamic contract command-line client
#[derive(Debug, Parser)]
#[command(name = "usoamic", version, about = "Interact with the Usoamic smart contract")]
pub struct Cli {
    /// Config file, defaults to ~/.usoamic/config.toml
    #[arg(long, global = true, env = "USOAMIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint of the node
    #[arg(long, global = true, env = "USOAMIC_NODE")]
    pub node: Option<String>,

    /// Address of the deployed contract
    #[arg(long, global = true, env = "USOAMIC_CONTRACT")]
    pub contract: Option<String>,

    /// Encrypted keystore of the signing account
    #[arg(long, global = true, env = "USOAMIC_ACCOUNT_FILE")]
    pub account_file: Option<PathBuf>,

    /// Per-call timeout in seconds, 0 = no limit
    #[arg(long, global = true, env = "USOAMIC_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Keystore password for commands that submit transactions
    #[arg(long, global = true, env = "USOAMIC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging and full error chains
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn load_config(&self) -> ContractResult<UsoamicConfig> {
        let path = self.config.clone().unwrap_or_else(UsoamicConfig::default_path);
        let config = UsoamicConfig::load_or_default(&path)?;
        Ok(self.apply_overrides(config))
    }

    pub fn apply_overrides(&self, mut config: UsoamicConfig) -> UsoamicConfig {
        if let Some(node) = &self.node {
            config.node_url = node.clone();
        }
        if let Some(contract) = &self.contract {
            config.contract_address = contract.clone();
        }
        if let Some(account_file) = &self.account_file {
            config.account_file = account_file.clone();
        }
        if let Some(timeout) = self.timeout {
            config.call_timeout_secs = timeout;
        }
        config
    }
}

/// Decimal `uint256` argument
fn uint256(value: &str) -> Result<U256, String> {
    parse_uint256(value).map_err(|e| e.to_string())
}

//-----------------------------------------------------------------------------
// Subcommands
//-----------------------------------------------------------------------------

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a new idea
    AddIdea {
        description: String,
    },

    /// Change the status of an idea
    SetIdeaStatus {
        #[arg(value_parser = uint256)]
        idea_ref_id: U256,

        /// open, accepted, rejected or the ordinal
        status: IdeaStatus,
    },

    /// Vote on an idea
    Vote(VoteArgs),

    /// Read an idea by reference id
    GetIdea {
        #[arg(value_parser = uint256)]
        idea_ref_id: U256,
    },

    /// Read an idea by author and per-author id
    GetIdeaByAddress {
        author: String,

        #[arg(value_parser = uint256)]
        idea_id: U256,
    },

    /// Read a vote by idea and vote reference id
    GetVote {
        #[arg(value_parser = uint256)]
        idea_ref_id: U256,

        #[arg(value_parser = uint256)]
        vote_ref_id: U256,
    },

    /// Read a vote by idea, voter and per-voter id
    GetVoteByAddress {
        #[arg(value_parser = uint256)]
        idea_ref_id: U256,

        voter: String,

        #[arg(value_parser = uint256)]
        vote_id: U256,
    },

    /// Total number of ideas
    NumberOfIdeas,

    /// Number of ideas submitted by an author
    NumberOfIdeasByAddress {
        author: String,
    },

    /// Number of votes a voter cast on an idea
    NumberOfVotesByAddress {
        voter: String,

        #[arg(value_parser = uint256)]
        idea_ref_id: U256,
    },

    /// Reference id of the most recent idea
    LastIdeaId,

    /// Id of an author's most recent idea
    LastIdeaIdByAddress {
        author: String,
    },

    /// Token balance of an account
    Balance {
        address: String,
    },

    /// Total token supply
    Supply,

    /// Contract version
    Version,

    /// Burn tokens from the signing account
    Burn {
        #[arg(value_parser = uint256)]
        value: U256,
    },

    /// Transfer tokens to another account
    Transfer {
        to: String,

        #[arg(value_parser = uint256)]
        value: U256,
    },

    /// Pay for an item of an application
    MakePurchase(PurchaseArgs),

    /// Read a purchase by purchaser and id
    GetPurchase {
        purchaser: String,

        #[arg(value_parser = uint256)]
        id: U256,
    },

    /// Number of purchases made by an account
    NumberOfPurchases {
        purchaser: String,
    },

    /// Id of an account's most recent purchase
    LastPurchaseId {
        purchaser: String,
    },
}

#[derive(Debug, Args)]
pub struct VoteArgs {
    #[arg(value_parser = uint256)]
    pub idea_ref_id: U256,

    /// support, abstain or against
    #[arg(long = "type", short = 't')]
    pub vote_type: VoteType,

    /// Comment attached to the vote
    #[arg(long, short, default_value = "")]
    pub comment: String,
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    pub app_id: String,

    pub purchase_id: String,

    #[arg(value_parser = uint256)]
    pub cost: U256,
}
