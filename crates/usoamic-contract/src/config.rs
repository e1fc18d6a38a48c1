//! Client Configuration
//!
//! Account file, contract address and node endpoint, loaded from TOML and
//! supplied at construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use usoamic_error::{ContractError, ContractResult};

use crate::encode::parse_address;

/// Directory under the home directory holding config and keystore
pub const CONFIG_DIR: &str = ".usoamic";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:8545";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsoamicConfig {
    /// Encrypted keystore holding the signing account
    pub account_file: PathBuf,

    /// Address of the deployed contract
    pub contract_address: String,

    /// JSON-RPC endpoint of the node
    pub node_url: String,

    /// Per-call timeout in seconds, 0 = no limit
    pub call_timeout_secs: u64,
}

impl Default for UsoamicConfig {
    fn default() -> Self {
        Self {
            account_file: base_dir().join("account.json"),
            contract_address: String::new(),
            node_url: DEFAULT_NODE_URL.to_string(),
            call_timeout_secs: 0,
        }
    }
}

/// `~/.usoamic`, or `./.usoamic` when no home directory is known
fn base_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(CONFIG_DIR)
}

impl UsoamicConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        base_dir().join(CONFIG_FILE)
    }

    /// Load a config file
    pub fn load(path: &Path) -> ContractResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ContractError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&raw)
            .map_err(|e| ContractError::config(format!("{}: {}", path.display(), e)))
    }

    /// Load a config file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> ContractResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(raw: &str) -> ContractResult<Self> {
        toml::from_str(raw).map_err(|e| ContractError::config(format!("invalid config: {}", e)))
    }

    pub fn to_toml(&self) -> ContractResult<String> {
        toml::to_string_pretty(self).map_err(|e| ContractError::config(format!("cannot serialize config: {}", e)))
    }

    /// Call timeout, `None` when unlimited
    pub fn call_timeout(&self) -> Option<Duration> {
        (self.call_timeout_secs > 0).then(|| Duration::from_secs(self.call_timeout_secs))
    }

    /// Check the contract address and node URL
    pub fn validate(&self) -> ContractResult<()> {
        if self.contract_address.trim().is_empty() {
            return Err(ContractError::config("contract address is not set"));
        }
        parse_address(&self.contract_address)
            .map_err(|e| ContractError::config(format!("contract address: {}", e)))?;

        let url = url::Url::parse(&self.node_url)
            .map_err(|e| ContractError::config(format!("node url '{}': {}", self.node_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ContractError::config(format!(
                "node url '{}' has unsupported scheme '{}'",
                self.node_url, other
            ))),
        }
    }
}
