// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use blockchain_core::{BlockHeight, ConsensusState, ValidatorSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{de, ser, ConsensusStateStore, StoreError};

const STATE_KEY: &[u8] = b"stateKey";

/// Full validator sets are written at least this often so lookups never walk
/// back further than one interval.
pub const VALSET_CHECKPOINT_INTERVAL: u64 = 100_000;

fn validators_key(height: u64) -> Vec<u8> {
    format!("validatorsKey:{height}").into_bytes()
}

/// Validator set bookkeeping for one height. The set itself is only stored
/// when it changed at that height or the height is a checkpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorsInfo {
    pub last_height_changed: u64,
    pub validator_set: Option<ValidatorSet>,
}

pub struct StateStore {
    db: sled::Db,
}

impl StateStore {
    pub fn new(db: sled::Db) -> Self {
        StateStore { db }
    }

    pub fn load(&self) -> Result<Option<ConsensusState>, StoreError> {
        let Some(raw) = self.db.get(STATE_KEY)? else {
            return Ok(None);
        };
        let state = ConsensusState::from_bytes(&raw)?;
        if state.is_empty() {
            return Ok(None);
        }
        Ok(Some(state))
    }

    /// Writes the state record and its validators info in one batch, then
    /// flushes.
    pub fn save(&self, state: &ConsensusState) -> Result<(), StoreError> {
        let mut batch = sled::Batch::default();

        let overflow = || StoreError::HeightOverflow(state.last_block_height);
        let mut next_height = state
            .last_block_height
            .value()
            .checked_add(1)
            .ok_or_else(overflow)?;
        if next_height == 1 {
            // Nothing committed yet: the first block is signed by the
            // current set.
            next_height = state.initial_height.value();
            put_validators_info(&mut batch, next_height, next_height, &state.validators)?;
        }
        put_validators_info(
            &mut batch,
            next_height.checked_add(1).ok_or_else(overflow)?,
            state.last_height_validators_changed.value(),
            &state.next_validators,
        )?;
        batch.insert(STATE_KEY, state.to_bytes()?);

        self.db.apply_batch(batch)?;
        self.db.flush()?;
        info!(
            "saved consensus state: chain_id={}, last_block_height={}",
            state.chain_id, state.last_block_height
        );
        Ok(())
    }

    pub fn load_validators_info(&self, height: u64) -> Result<Option<ValidatorsInfo>, StoreError> {
        match self.db.get(validators_key(height))? {
            Some(raw) => Ok(Some(de(&raw)?)),
            None => Ok(None),
        }
    }

    /// Resolves the validator set that signs block `height`.
    pub fn load_validators(&self, height: BlockHeight) -> Result<ValidatorSet, StoreError> {
        let missing = || StoreError::NoValidatorsForHeight(height);
        let info = self.load_validators_info(height.value())?.ok_or_else(missing)?;
        if let Some(set) = info.validator_set {
            return Ok(set);
        }

        let stored_at = last_stored_height_for(height.value(), info.last_height_changed);
        debug!(
            "validator set not stored at height {}; reading height {}",
            height, stored_at
        );
        self.load_validators_info(stored_at)?
            .and_then(|i| i.validator_set)
            .ok_or_else(missing)
    }
}

impl ConsensusStateStore for StateStore {
    fn load_state(&self) -> Result<Option<ConsensusState>, StoreError> {
        self.load()
    }

    fn save_state(&self, state: &ConsensusState) -> Result<(), StoreError> {
        self.save(state)
    }
}

fn put_validators_info(
    batch: &mut sled::Batch,
    height: u64,
    last_height_changed: u64,
    set: &ValidatorSet,
) -> Result<(), StoreError> {
    let store_set = height == last_height_changed || height % VALSET_CHECKPOINT_INTERVAL == 0;
    let info = ValidatorsInfo {
        last_height_changed,
        validator_set: store_set.then(|| set.clone()),
    };
    batch.insert(validators_key(height), ser(&info)?);
    Ok(())
}

fn last_stored_height_for(height: u64, last_height_changed: u64) -> u64 {
    let checkpoint = height - height % VALSET_CHECKPOINT_INTERVAL;
    checkpoint.max(last_height_changed)
}
