//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-chain task identifier.
///
/// The contract assigns ids as unsigned integers; the client carries them in
/// their decimal string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(u128);

impl TaskId {
    /// Creates a task identifier from the integer assigned on chain.
    #[must_use]
    pub const fn from_chain(value: u128) -> Self {
        Self(value)
    }

    /// Parses a task identifier from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is empty or
    /// is not an unsigned decimal integer.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(TaskDomainError::InvalidTaskId(raw));
        }
        trimmed
            .parse::<u128>()
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidTaskId(raw))
    }

    /// Returns the numeric value used in contract calls.
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference used to look up a task's descriptive text.
///
/// The value is whatever the content store handed back at upload time. No
/// structure is assumed beyond "a string the fetcher understands".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPath(String);

impl ContentPath {
    /// Wraps a content reference exactly as given.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fetch endpoint for this reference.
    ///
    /// Content is served as a folder entry, so the endpoint always ends with
    /// a trailing slash. Surrounding whitespace is not part of the endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let path = self.0.trim();
        if path.ends_with('/') {
            return path.to_owned();
        }
        format!("{path}/")
    }
}

impl AsRef<str> for ContentPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally owned account address (20 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress([u8; 20]);

impl AccountAddress {
    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parses a `0x`-prefixed hex address. Checksum casing is accepted but
    /// not verified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidAccountAddress`] when the value is
    /// not 40 hex digits after the prefix.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        decode_prefixed_hex::<20>(value)
            .map(Self)
            .ok_or_else(|| TaskDomainError::InvalidAccountAddress(value.to_owned()))
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(value: AccountAddress) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Hash identifying a submitted transaction (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionHash([u8; 32]);

impl TransactionHash {
    /// Creates a transaction hash from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a `0x`-prefixed hex transaction hash.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransactionHash`] when the value is
    /// not 64 hex digits after the prefix.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        decode_prefixed_hex::<32>(value)
            .map(Self)
            .ok_or_else(|| TaskDomainError::InvalidTransactionHash(value.to_owned()))
    }
}

impl TryFrom<String> for TransactionHash {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TransactionHash> for String {
    fn from(value: TransactionHash) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

fn decode_prefixed_hex<const N: usize>(value: &str) -> Option<[u8; N]> {
    let digits = value
        .trim()
        .strip_prefix("0x")
        .or_else(|| value.trim().strip_prefix("0X"))?;
    let mut bytes = [0_u8; N];
    hex::decode_to_slice(digits, &mut bytes).ok()?;
    Some(bytes)
}
