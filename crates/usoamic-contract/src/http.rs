//! HTTP Node Transport
//!
//! [`NodeTransport`] over a JSON-RPC node using the alloy HTTP provider.
//! Timeouts are applied per request when configured; there are no retries.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Bytes;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;
use usoamic_error::{ContractError, ContractResult};

use crate::account::{CredentialsProvider, KeystoreAccount};
use crate::config::UsoamicConfig;
use crate::transport::{CallRequest, NodeTransport};

/// Transport talking to a node over HTTP JSON-RPC
#[derive(Debug, Clone)]
pub struct HttpTransport {
    node_url: Url,
    credentials: Arc<dyn CredentialsProvider>,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(
        node_url: &str,
        credentials: Arc<dyn CredentialsProvider>,
        timeout: Option<Duration>,
    ) -> ContractResult<Self> {
        let node_url = Url::parse(node_url)
            .map_err(|e| ContractError::config(format!("node url '{}': {}", node_url, e)))?;
        Ok(Self {
            node_url,
            credentials,
            timeout,
        })
    }

    /// Transport for the node and keystore named in `config`
    pub fn from_config(config: &UsoamicConfig) -> ContractResult<Self> {
        let account = KeystoreAccount::new(config.account_file.clone());
        Self::new(&config.node_url, Arc::new(account), config.call_timeout())
    }

    pub fn node_url(&self) -> &Url {
        &self.node_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn with_timeout<T, F>(&self, operation: &str, future: F) -> ContractResult<T>
    where
        F: Future<Output = ContractResult<T>> + Send,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, future).await.map_err(|_| {
                ContractError::Timeout(format!("{} exceeded {}s", operation, limit.as_secs()))
            })?,
            None => future.await,
        }
    }
}

#[async_trait]
impl NodeTransport for HttpTransport {
    async fn call(&self, request: CallRequest) -> ContractResult<Bytes> {
        let provider = ProviderBuilder::new().on_http(self.node_url.clone());
        let tx = TransactionRequest::default()
            .with_to(request.to)
            .with_input(request.data);

        debug!(to = %request.to, node = %self.node_url, "eth_call");
        self.with_timeout("eth_call", async {
            provider
                .call(&tx)
                .await
                .map_err(|e| ContractError::call_failed(e.to_string()))
        })
        .await
    }

    async fn send_transaction(&self, password: &str, request: CallRequest) -> ContractResult<String> {
        let signer = self.credentials.unlock(password)?;
        let from = signer.address();
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(self.node_url.clone());
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(request.to)
            .with_input(request.data);

        let tx_hash = self
            .with_timeout("eth_sendRawTransaction", async {
                provider
                    .send_transaction(tx)
                    .await
                    .map(|pending| *pending.tx_hash())
                    .map_err(|e| ContractError::transaction_failed(e.to_string()))
            })
            .await?;

        info!(from = %from, tx_hash = %tx_hash, "transaction submitted");
        Ok(tx_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = UsoamicConfig {
            call_timeout_secs: 5,
            ..UsoamicConfig::default()
        };
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(transport.node_url().as_str(), "http://127.0.0.1:8545/");
    }

    #[test]
    fn test_rejects_bad_url() {
        let account = Arc::new(KeystoreAccount::new("account.json"));
        assert!(matches!(
            HttpTransport::new("not a url", account, None),
            Err(ContractError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unlock_failure_is_transaction_failed() {
        let account = Arc::new(KeystoreAccount::new("/nonexistent/account.json"));
        let transport = HttpTransport::new("http://127.0.0.1:1", account, None).unwrap();
        let request = CallRequest::new(Default::default(), Bytes::new());
        assert!(matches!(
            transport.send_transaction("pw", request).await,
            Err(ContractError::TransactionFailed(_))
        ));
    }
}
