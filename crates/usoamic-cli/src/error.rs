//! CLI Error Handling
//!
//! Prints command failures to stderr, with the cause chain under `--verbose`
//! and as a JSON document under `--json`. Contract errors carry their stable
//! code into the JSON output.

use chrono::prelude::*;
use colored::Colorize;
use serde_json::{json, Value};
use usoamic_error::ContractError;

/// Shared error handler for command line operations
#[derive(Debug, Clone)]
pub struct CliErrorHandler {
    pub verbose: bool,
    pub json: bool,
}

impl CliErrorHandler {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Structured form of `error`
    pub fn error_value(&self, error: &anyhow::Error) -> Value {
        let mut value = json!({
            "success": false,
            "error": error.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        });

        if let Some(contract_error) = error.downcast_ref::<ContractError>() {
            let message = contract_error.to_message();
            value["code"] = json!(message.code);
            value["error_code"] = json!(message.error_code);
        }
        if self.verbose {
            let causes: Vec<String> = error.chain().skip(1).map(|cause| cause.to_string()).collect();
            value["causes"] = json!(causes);
        }
        value
    }

    /// Report `error` and return what was reported
    pub fn handle_error(&self, error: &anyhow::Error) -> Value {
        let value = self.error_value(error);

        if self.json {
            eprintln!("{}", value);
            return value;
        }

        eprintln!("{} {}", "Error:".red().bold(), error);
        if self.verbose {
            for cause in error.chain().skip(1) {
                eprintln!("{} {}", "Caused by:".yellow(), cause);
            }
        }
        value
    }
}

/// CLI result type alias
pub type CliResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_code_in_json() {
        let handler = CliErrorHandler::new(false, true);
        let error = anyhow::Error::new(ContractError::empty_collection("no ideas yet"));
        let value = handler.error_value(&error);

        assert_eq!(value["success"], false);
        assert_eq!(value["error_code"], "CONTRACT_EMPTY_COLLECTION");
        assert_eq!(value["error"], "Empty collection: no ideas yet");
        assert!(value.get("causes").is_none());
    }

    #[test]
    fn test_verbose_includes_causes() {
        let handler = CliErrorHandler::new(true, false);
        let error = anyhow::Error::new(ContractError::call_failed("execution reverted"))
            .context("number-of-ideas failed");
        let value = handler.error_value(&error);

        assert_eq!(value["causes"][0], "Call failed: execution reverted");
        assert_eq!(value["error_code"], "CONTRACT_CALL_FAILED");
    }

    #[test]
    fn test_plain_error_has_no_code() {
        let handler = CliErrorHandler::new(false, false);
        let value = handler.error_value(&anyhow::anyhow!("password required"));
        assert!(value.get("code").is_none());
    }
}
