// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use blockchain_core::BlockchainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("genesis chain id is empty")]
    EmptyChainId,
    #[error("genesis chain id is too long: {len} > {max}")]
    ChainIdTooLong { len: usize, max: usize },
    #[error("genesis validator {index} has invalid public key")]
    InvalidPublicKey { index: usize },
    #[error("genesis validator {index} has non-positive power {power}")]
    InvalidPower { index: usize, power: i64 },
    #[error("genesis validator {index} address {given} does not match public key ({derived})")]
    AddressMismatch {
        index: usize,
        given: String,
        derived: String,
    },
    #[error("invalid genesis app hash: {0}")]
    InvalidAppHash(String),
    #[error("genesis time is out of range")]
    InvalidGenesisTime,
    #[error("i/o error: {0}")]
    IoError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

impl From<std::io::Error> for GenesisError {
    fn from(e: std::io::Error) -> Self {
        GenesisError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for GenesisError {
    fn from(e: serde_json::Error) -> Self {
        GenesisError::SerializationError(e.to_string())
    }
}
