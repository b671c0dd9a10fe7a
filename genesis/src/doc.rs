// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! The genesis document a node's state is initialised from.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use blockchain_core::{address_from_pubkey, pubkey_from_bytes, Address, PublicKey, Timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::GenesisError;

/// Chain ids stored in a genesis file may be longer than the ones the
/// migration tool accepts; this is the node's own limit.
pub const MAX_GENESIS_CHAIN_ID_LEN: usize = 50;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenesisValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Standard base64 of the 32-byte ed25519 public key.
    pub pub_key: String,
    pub power: i64,
    #[serde(default)]
    pub name: String,
}

impl GenesisValidator {
    pub fn public_key(&self, index: usize) -> Result<PublicKey, GenesisError> {
        let raw = general_purpose::STANDARD
            .decode(self.pub_key.trim())
            .map_err(|_| GenesisError::InvalidPublicKey { index })?;
        pubkey_from_bytes(&raw).map_err(|_| GenesisError::InvalidPublicKey { index })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenesisDoc {
    pub genesis_time: DateTime<Utc>,
    pub chain_id: String,
    #[serde(default = "default_initial_height")]
    pub initial_height: u64,
    #[serde(default)]
    pub validators: Vec<GenesisValidator>,
    /// Hex encoded; empty for a fresh application.
    #[serde(default)]
    pub app_hash: String,
}

fn default_initial_height() -> u64 {
    1
}

impl GenesisDoc {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenesisError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            GenesisError::IoError(format!("couldn't read genesis file {}: {e}", path.display()))
        })?;
        let mut doc = Self::from_json(&raw)?;
        doc.validate_and_complete()?;
        debug!(
            "loaded genesis: path={}, chain_id={}, validators={}",
            path.display(),
            doc.chain_id,
            doc.validators.len()
        );
        Ok(doc)
    }

    pub fn from_json(raw: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, GenesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks basic invariants and fills in defaults (initial height,
    /// validator addresses).
    pub fn validate_and_complete(&mut self) -> Result<(), GenesisError> {
        if self.chain_id.is_empty() {
            return Err(GenesisError::EmptyChainId);
        }
        if self.chain_id.len() > MAX_GENESIS_CHAIN_ID_LEN {
            return Err(GenesisError::ChainIdTooLong {
                len: self.chain_id.len(),
                max: MAX_GENESIS_CHAIN_ID_LEN,
            });
        }
        if self.initial_height == 0 {
            self.initial_height = 1;
        }
        self.app_hash_bytes()?;
        self.genesis_timestamp()?;

        for (index, v) in self.validators.iter_mut().enumerate() {
            if v.power <= 0 {
                return Err(GenesisError::InvalidPower {
                    index,
                    power: v.power,
                });
            }
            let derived = address_from_pubkey(&v.public_key(index)?);
            match &v.address {
                Some(given) => {
                    let parsed: Address =
                        given.parse().map_err(|_| GenesisError::AddressMismatch {
                            index,
                            given: given.clone(),
                            derived: derived.to_string(),
                        })?;
                    if parsed != derived {
                        return Err(GenesisError::AddressMismatch {
                            index,
                            given: given.clone(),
                            derived: derived.to_string(),
                        });
                    }
                }
                None => v.address = Some(derived.to_string()),
            }
        }
        Ok(())
    }

    pub fn app_hash_bytes(&self) -> Result<Vec<u8>, GenesisError> {
        hex::decode(&self.app_hash).map_err(|e| GenesisError::InvalidAppHash(e.to_string()))
    }

    pub fn genesis_timestamp(&self) -> Result<Timestamp, GenesisError> {
        let nanos = self
            .genesis_time
            .timestamp_nanos_opt()
            .ok_or(GenesisError::InvalidGenesisTime)?;
        Timestamp::new(nanos).map_err(|_| GenesisError::InvalidGenesisTime)
    }
}
