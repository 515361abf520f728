//! Identity port for the active wallet account.

use crate::task::domain::AccountAddress;

/// Supplies the account that signs contract writes.
pub trait WalletProvider: Send + Sync {
    /// Returns the active account. `None` means no wallet is connected.
    fn active_account(&self) -> Option<AccountAddress>;
}
