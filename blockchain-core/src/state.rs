// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use serde::{Deserialize, Serialize};

use crate::crypto::{address_from_pubkey, pubkey_from_bytes, PublicKey};
use crate::types::{Address, BlockHeight, BlockchainError, Timestamp};
use crate::vote::BlockId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

impl Version {
    pub const BLOCK_PROTOCOL: u64 = 11;

    pub fn current() -> Self {
        Version {
            block: Self::BLOCK_PROTOCOL,
            app: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validator {
    pub address: Address,
    pub pub_key: [u8; 32],
    pub voting_power: i64,
}

impl Validator {
    pub fn new(pub_key: &PublicKey, voting_power: i64) -> Self {
        Validator {
            address: address_from_pubkey(pub_key),
            pub_key: pub_key.to_bytes(),
            voting_power,
        }
    }

    pub fn public_key(&self) -> Result<PublicKey, BlockchainError> {
        pubkey_from_bytes(&self.pub_key)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorSet {
    pub validators: Vec<Validator>,
    pub proposer: Option<Address>,
}

impl ValidatorSet {
    pub fn new(validators: Vec<Validator>) -> Self {
        let proposer = validators.first().map(|v| v.address);
        ValidatorSet {
            validators,
            proposer,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn get_by_address(&self, address: &Address) -> Option<&Validator> {
        self.validators.iter().find(|v| &v.address == address)
    }

    pub fn total_voting_power(&self) -> i64 {
        self.validators
            .iter()
            .fold(0i64, |acc, v| acc.saturating_add(v.voting_power))
    }
}

/// The persisted record a node resumes consensus from.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsensusState {
    pub version: Version,
    pub chain_id: String,
    pub initial_height: BlockHeight,

    pub last_block_height: BlockHeight,
    pub last_block_id: BlockId,
    pub last_block_time: Timestamp,

    pub next_validators: ValidatorSet,
    pub validators: ValidatorSet,
    pub last_validators: ValidatorSet,
    pub last_height_validators_changed: BlockHeight,

    pub last_results_hash: Vec<u8>,
    pub app_hash: Vec<u8>,
}

impl ConsensusState {
    /// A state without validators was never initialised.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BlockchainError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlockchainError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
