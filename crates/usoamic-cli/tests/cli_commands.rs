//! Argument parsing and command dispatch against the in-memory transport

use std::io::Write;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;
use clap::Parser;
use usoamic_cli::{commands, Cli, Command, Output};
use usoamic_contract::mock::MOCK_PASSWORD;
use usoamic_contract::{selector_of, ContractError, MockTransport, UsoamicConfig, UsoamicContract};
use usoamic_types::{IdeaStatus, VoteType};

const CONTRACT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const ACCOUNT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["usoamic"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn setup() -> (MockTransport, UsoamicContract<MockTransport>) {
    let mock = MockTransport::new();
    let contract = UsoamicContract::new(mock.clone(), CONTRACT).unwrap();
    (mock, contract)
}

//-----------------------------------------------------------------------------
// Parsing
//-----------------------------------------------------------------------------

#[test]
fn test_parse_vote() {
    let cli = parse(&["vote", "7", "--type", "against", "--comment", "too costly"]);
    match cli.command {
        Command::Vote(args) => {
            assert_eq!(args.idea_ref_id, U256::from(7));
            assert_eq!(args.vote_type, VoteType::Against);
            assert_eq!(args.comment, "too costly");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_status_by_name_and_ordinal() {
    for (arg, expected) in [("accepted", IdeaStatus::Accepted), ("2", IdeaStatus::Rejected)] {
        match parse(&["set-idea-status", "1", arg]).command {
            Command::SetIdeaStatus { status, .. } => assert_eq!(status, expected),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["usoamic", "set-idea-status", "1", "99"]).is_err());
    assert!(Cli::try_parse_from(["usoamic", "vote", "1", "--type", "maybe"]).is_err());
    assert!(Cli::try_parse_from(["usoamic", "burn", "-5"]).is_err());
    assert!(Cli::try_parse_from(["usoamic", "get-idea", "0x10"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["supply", "--json", "--node", "http://node:8545", "--timeout", "10"]);
    assert!(cli.json);
    assert_eq!(cli.node.as_deref(), Some("http://node:8545"));
    assert!(matches!(cli.command, Command::Supply));
}

#[test]
fn test_overrides_replace_config_values() {
    let cli = parse(&["--contract", CONTRACT, "--timeout", "15", "version"]);
    let config = cli.apply_overrides(UsoamicConfig::default());
    assert_eq!(config.contract_address, CONTRACT);
    assert_eq!(config.call_timeout_secs, 15);
    assert_eq!(config.node_url, UsoamicConfig::default().node_url);
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "contract_address = \"{}\"\nnode_url = \"http://file:8545\"", CONTRACT).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = parse(&["--config", &path, "--node", "http://flag:8545", "supply"]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.contract_address, CONTRACT);
    assert_eq!(config.node_url, "http://flag:8545");
}

//-----------------------------------------------------------------------------
// Dispatch
//-----------------------------------------------------------------------------

#[tokio::test]
async fn test_execute_read() {
    let (mock, contract) = setup();
    mock.respond("getNumberOfIdeas()", vec![DynSolValue::Uint(U256::from(4), 256)]);

    let output = commands::execute(&contract, parse(&["last-idea-id"]).command, None)
        .await
        .unwrap();
    assert_eq!(output, Output::Number(U256::from(3)));
}

#[tokio::test]
async fn test_execute_vote() {
    let (mock, contract) = setup();
    let command = parse(&["vote", "3", "-t", "abstain"]).command;

    let output = commands::execute(&contract, command, Some(MOCK_PASSWORD)).await.unwrap();
    assert!(matches!(output, Output::Transaction(_)));
    assert_eq!(
        mock.transactions()[0].selector(),
        Some(selector_of("abstainIdea(uint256,string)"))
    );
}

#[tokio::test]
async fn test_transaction_requires_password() {
    let (mock, contract) = setup();
    let command = parse(&["burn", "10"]).command;

    assert!(commands::execute(&contract, command, None).await.is_err());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_contract_error_is_preserved() {
    let (mock, contract) = setup();
    mock.respond("getNumberOfPurchasesByAddress(address)", vec![DynSolValue::Uint(U256::ZERO, 256)]);

    let error = commands::execute(&contract, parse(&["last-purchase-id", ACCOUNT]).command, None)
        .await
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ContractError>(),
        Some(ContractError::EmptyCollection(_))
    ));
}

#[tokio::test]
async fn test_invalid_address_makes_no_call() {
    let (mock, contract) = setup();
    let error = commands::execute(&contract, parse(&["balance", "0x12"]).command, None)
        .await
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ContractError>(),
        Some(ContractError::InvalidArgument(_))
    ));
    assert_eq!(mock.call_count(), 0);
}
