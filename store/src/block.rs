// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use blockchain_core::{BlockHeight, Commit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{de, ser, SeenCommitStore, StoreError};

const BLOCK_STORE_KEY: &[u8] = b"blockStore";

fn seen_commit_key(height: BlockHeight) -> Vec<u8> {
    format!("SC:{}", height.value()).into_bytes()
}

/// Range of heights the block store holds.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockStoreState {
    pub base: u64,
    pub height: u64,
}

pub struct BlockStore {
    db: sled::Db,
}

impl BlockStore {
    pub fn new(db: sled::Db) -> Self {
        BlockStore { db }
    }

    pub fn load_block_store_state(&self) -> Result<BlockStoreState, StoreError> {
        match self.db.get(BLOCK_STORE_KEY)? {
            Some(raw) => de(&raw),
            None => Ok(BlockStoreState::default()),
        }
    }

    pub fn save_block_store_state(&self, bss: &BlockStoreState) -> Result<(), StoreError> {
        self.db.insert(BLOCK_STORE_KEY, ser(bss)?)?;
        self.db.flush()?;
        Ok(())
    }

    pub fn base(&self) -> Result<BlockHeight, StoreError> {
        Ok(BlockHeight(self.load_block_store_state()?.base))
    }

    pub fn height(&self) -> Result<BlockHeight, StoreError> {
        Ok(BlockHeight(self.load_block_store_state()?.height))
    }

    pub fn load_seen_commit(&self, height: BlockHeight) -> Result<Option<Commit>, StoreError> {
        match self.db.get(seen_commit_key(height))? {
            Some(raw) => Ok(Some(Commit::from_bytes(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrites the seen commit at `height` and flushes.
    pub fn save_seen_commit(&self, height: BlockHeight, commit: &Commit) -> Result<(), StoreError> {
        self.db.insert(seen_commit_key(height), commit.to_bytes()?)?;
        self.db.flush()?;
        debug!(
            "saved seen commit: height={}, slots={}",
            height,
            commit.signatures.len()
        );
        Ok(())
    }
}

impl SeenCommitStore for BlockStore {
    fn load_seen_commit(&self, height: BlockHeight) -> Result<Option<Commit>, StoreError> {
        BlockStore::load_seen_commit(self, height)
    }

    fn save_seen_commit(&self, height: BlockHeight, commit: &Commit) -> Result<(), StoreError> {
        BlockStore::save_seen_commit(self, height, commit)
    }
}
