// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    pub const GENESIS: BlockHeight = BlockHeight(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nanoseconds since the unix epoch.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn new(value: i64) -> Result<Self, BlockchainError> {
        if value < 0 {
            return Err(BlockchainError::InvalidTimestamp);
        }
        Ok(Timestamp(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash(0x{})", hex::encode(self.0))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(v: [u8; 32]) -> Self {
        BlockHash(v)
    }
}

/// Validator address: the first 20 bytes of SHA-256 over the ed25519 public key.
///
/// `Display` renders the canonical uppercase hex form used in diagnostics.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; ADDRESS_LEN]);

pub const ADDRESS_LEN: usize = 20;

impl Address {
    pub const LEN: usize = ADDRESS_LEN;

    pub fn from_slice(bytes: &[u8]) -> Result<Self, BlockchainError> {
        if bytes.len() != Self::LEN {
            return Err(BlockchainError::InvalidAddress);
        }
        let mut arr = [0u8; Self::LEN];
        arr.copy_from_slice(bytes);
        Ok(Address(arr))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; Self::LEN]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for Address {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| BlockchainError::InvalidAddress)?;
        Address::from_slice(&bytes)
    }
}

static CHAIN_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+)_([1-9][0-9]*)-([1-9][0-9]*)$").expect("chain id pattern compiles")
});

/// A chain identifier accepted for migration targets: `<name>_<eip155>-<epoch>`.
///
/// Identifiers already stored in consensus state are kept as plain strings;
/// only new identifiers go through this type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub const MAX_LEN: usize = 48;

    pub fn new(id: impl Into<String>) -> Result<Self, BlockchainError> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(BlockchainError::InvalidChainId(id));
        }
        Ok(ChainId(id))
    }

    /// Pure format check, no side effects.
    pub fn is_valid(id: &str) -> bool {
        if id.len() > Self::MAX_LEN {
            return false;
        }
        CHAIN_ID_PATTERN.is_match(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChainId {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::new(s)
    }
}

impl TryFrom<String> for ChainId {
    type Error = BlockchainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ChainId::new(value)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ChainId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockchainError {
    #[error("invalid chain id: {0:?}")]
    InvalidChainId(String),
    #[error("invalid timestamp")]
    InvalidTimestamp,
    #[error("invalid address format")]
    InvalidAddress,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("signature slot {index} out of range (commit has {len} slots)")]
    InvalidSignatureIndex { index: usize, len: usize },
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<bincode::Error> for BlockchainError {
    fn from(err: bincode::Error) -> Self {
        BlockchainError::SerializationError(err.to_string())
    }
}
