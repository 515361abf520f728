//! Fixed wallet provider.

use crate::task::{domain::AccountAddress, ports::WalletProvider};

/// Wallet whose connection state is fixed at construction.
///
/// Used by the command-line front end, where the account comes from
/// configuration, and by tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticWallet {
    account: Option<AccountAddress>,
}

impl StaticWallet {
    /// Wallet connected as `account`.
    #[must_use]
    pub const fn connected(account: AccountAddress) -> Self {
        Self {
            account: Some(account),
        }
    }

    /// Wallet with no connected account.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self { account: None }
    }

    /// Wallet connected when `account` is present.
    #[must_use]
    pub const fn from_option(account: Option<AccountAddress>) -> Self {
        Self { account }
    }
}

impl WalletProvider for StaticWallet {
    fn active_account(&self) -> Option<AccountAddress> {
        self.account
    }
}
