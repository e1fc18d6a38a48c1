//! Account Credentials
//!
//! Signing credentials are unlocked from an encrypted JSON keystore file with
//! the account password, once per transaction.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use alloy::signers::local::{LocalSigner, PrivateKeySigner};
use tracing::debug;
use usoamic_error::{ContractError, ContractResult};

/// Source of signing credentials
pub trait CredentialsProvider: Debug + Send + Sync {
    /// Unlock the signing key with `password`
    fn unlock(&self, password: &str) -> ContractResult<PrivateKeySigner>;
}

/// Credentials stored in an encrypted keystore file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreAccount {
    path: PathBuf,
}

impl KeystoreAccount {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl CredentialsProvider for KeystoreAccount {
    fn unlock(&self, password: &str) -> ContractResult<PrivateKeySigner> {
        if !self.exists() {
            return Err(ContractError::transaction_failed(format!(
                "account file {} not found",
                self.path.display()
            )));
        }

        let signer = LocalSigner::decrypt_keystore(&self.path, password).map_err(|e| {
            ContractError::transaction_failed(format!(
                "unable to unlock account {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(address = %signer.address(), "account unlocked");
        Ok(signer)
    }
}
