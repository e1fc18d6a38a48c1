//! Command Output Rendering
//!
//! Results are printed as readable text by default and as JSON with `--json`.

use alloy::primitives::U256;
use colored::Colorize;
use serde::Serialize;
use serde_json::{json, Value};
use usoamic_types::{Idea, Purchase, Vote};

/// Result of a single command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Hash of a submitted transaction
    Transaction(String),
    Number(#[serde(serialize_with = "usoamic_types::decimal::serialize")] U256),
    Text(String),
    Idea(Idea),
    Vote(Vote),
    Purchase(Purchase),
}

impl Output {
    pub fn to_json(&self) -> serde_json::Result<Value> {
        Ok(json!({
            "success": true,
            "data": serde_json::to_value(self)?,
        }))
    }

    pub fn render_text(&self) -> String {
        match self {
            Output::Transaction(hash) => format!("{} {}", "Transaction submitted:".green(), hash),
            Output::Number(value) => value.to_string(),
            Output::Text(text) => text.clone(),
            Output::Idea(idea) => render_idea(idea),
            Output::Vote(vote) => render_vote(vote),
            Output::Purchase(purchase) => render_purchase(purchase),
        }
    }
}

fn field(name: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<14} {}", format!("{}:", name).cyan(), value)
}

fn render_idea(idea: &Idea) -> String {
    let created = idea
        .created_at()
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| idea.timestamp().to_string());

    [
        format!("{} #{}", "Idea".bold(), idea.idea_ref_id()),
        field("exists", idea.exists()),
        field("author", idea.author()),
        field("id", idea.idea_id()),
        field("description", idea.description()),
        field("status", idea.status()),
        field("created", created),
        field("supporters", idea.number_of_supporters()),
        field("abstained", idea.number_of_abstained()),
        field("against", idea.number_of_voted_against()),
        field("participants", idea.number_of_participants()),
    ]
    .join("\n")
}

fn render_vote(vote: &Vote) -> String {
    [
        format!("{} #{} on idea #{}", "Vote".bold(), vote.vote_id(), vote.idea_id()),
        field("exists", vote.exists()),
        field("voter", vote.voter()),
        field("type", vote.vote_type()),
        field("comment", vote.comment()),
    ]
    .join("\n")
}

fn render_purchase(purchase: &Purchase) -> String {
    [
        format!("{} #{}", "Purchase".bold(), purchase.id()),
        field("app", purchase.app_id()),
        field("item", purchase.purchase_id()),
        field("cost", purchase.cost()),
        field("purchaser", purchase.purchaser()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;
    use usoamic_types::VoteType;

    #[test]
    fn test_number_text() {
        assert_eq!(Output::Number(U256::from(42)).render_text(), "42");
    }

    #[test]
    fn test_number_json_matches_text() {
        let output = Output::Number(U256::from(42));
        assert_eq!(output.to_json().unwrap()["data"]["value"], "42");
        assert_eq!(output.render_text(), "42");
    }

    #[test]
    fn test_purchase_json_is_decimal() {
        let purchase = Purchase::new("app".into(), "item".into(), U256::from(250), Address::ZERO, U256::from(3));
        let json = Output::Purchase(purchase).to_json().unwrap();
        assert_eq!(json["data"]["kind"], "purchase");
        assert_eq!(json["data"]["value"]["cost"], "250");
        assert_eq!(json["data"]["value"]["id"], "3");
    }

    #[test]
    fn test_transaction_json() {
        let json = Output::Transaction("0xabc".into()).to_json().unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["kind"], "transaction");
        assert_eq!(json["data"]["value"], "0xabc");
    }

    #[test]
    fn test_vote_text() {
        colored::control::set_override(false);
        let vote = Vote::new(true, U256::from(5), U256::from(2), Address::ZERO, VoteType::Abstain, "hmm".into());
        let text = Output::Vote(vote).render_text();
        assert!(text.starts_with("Vote #2 on idea #5"));
        assert!(text.contains("abstain"));
        assert!(text.contains("hmm"));
    }
}
