//! L1 address used by the sandbox contracts to reference their cross-layer portal.
//!
//! The contracts only store and report the address. A zero address means the contract is
//! deployed without any L1 counterpart.

use std::{fmt, str::FromStr};

use borsh::{BorshDeserialize, BorshSerialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Length of an Ethereum address in bytes.
pub const ETH_ADDRESS_LEN: usize = 20;

/// A 20-byte Ethereum address.
///
/// Serialized to JSON as a lowercase `0x`-prefixed hex string and to Borsh as the raw bytes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct EthAddress([u8; ETH_ADDRESS_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EthAddressError {
    #[error("invalid hex in address `{0}`")]
    InvalidHex(String),
    #[error("invalid address length: expected {ETH_ADDRESS_LEN} bytes, got {0} hex digits")]
    InvalidLength(usize),
}

impl EthAddress {
    pub const ZERO: Self = Self([0; ETH_ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ETH_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; ETH_ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ETH_ADDRESS_LEN]> for EthAddress {
    fn from(bytes: [u8; ETH_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<EthAddress> for [u8; ETH_ADDRESS_LEN] {
    fn from(address: EthAddress) -> Self {
        address.0
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EthAddress {
    type Err = EthAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != ETH_ADDRESS_LEN * 2 {
            return Err(EthAddressError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; ETH_ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| EthAddressError::InvalidHex(s.to_string()))?;

        Ok(Self(bytes))
    }
}
