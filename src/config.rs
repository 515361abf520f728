//! Command-line and environment configuration.
//!
//! Every setting can be passed as a flag or through its `TODO_*`
//! environment variable. Values are read once at startup.

use crate::task::domain::{AccountAddress, TaskDomainError};
use clap::Args;
use std::time::Duration;
use thiserror::Error;

/// Default JSON-RPC endpoint of a local development node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Default base URL of the content store API.
pub const DEFAULT_CONTENT_API_URL: &str = "https://deep-index.moralis.io/api/v2";
/// Default interval between receipt polls, in milliseconds.
pub const DEFAULT_CONFIRMATION_POLL_MS: u64 = 1000;

/// Errors raised while validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The contract address is malformed.
    #[error("invalid contract address: {0}")]
    ContractAddress(#[source] TaskDomainError),

    /// The wallet account is malformed.
    #[error("invalid account: {0}")]
    Account(#[source] TaskDomainError),

    /// A mutation needs the content store key but none was given.
    #[error("TODO_API_KEY (or --api-key) is required to upload task descriptions")]
    MissingApiKey,

    /// The poll interval is zero.
    #[error("confirmation poll interval must be greater than zero")]
    ZeroPollInterval,
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Address of the deployed todo contract.
    #[arg(long = "contract", env = "TODO_CONTRACT_ADDRESS")]
    pub contract_address: String,

    /// JSON-RPC endpoint of the node.
    #[arg(long, env = "TODO_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Account used to sign mutations; absent means no wallet is connected.
    #[arg(long, env = "TODO_ACCOUNT")]
    pub account: Option<String>,

    /// Content store API key.
    #[arg(long, env = "TODO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the content store API.
    #[arg(long, env = "TODO_CONTENT_API_URL", default_value = DEFAULT_CONTENT_API_URL)]
    pub content_api_url: String,

    /// Interval between transaction receipt polls, in milliseconds.
    #[arg(long, env = "TODO_CONFIRMATION_POLL_MS", default_value_t = DEFAULT_CONFIRMATION_POLL_MS)]
    pub confirmation_poll_ms: u64,
}

impl AppConfig {
    /// Parses the contract address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ContractAddress`] when the value is malformed.
    pub fn contract(&self) -> Result<AccountAddress, ConfigError> {
        AccountAddress::parse(&self.contract_address).map_err(ConfigError::ContractAddress)
    }

    /// Parses the optional wallet account.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Account`] when a value is present but
    /// malformed.
    pub fn wallet_account(&self) -> Result<Option<AccountAddress>, ConfigError> {
        self.account
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(AccountAddress::parse)
            .transpose()
            .map_err(ConfigError::Account)
    }

    /// Returns the content store key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no non-empty key is set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Returns the receipt poll interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPollInterval`] when the interval is zero.
    pub fn poll_interval(&self) -> Result<Duration, ConfigError> {
        if self.confirmation_poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(Duration::from_millis(self.confirmation_poll_ms))
    }
}
