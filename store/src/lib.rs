// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! On-disk stores of a node's data directory.
//!
//! Each logical database (`blockstore`, `state`, `application`) is a sled
//! database under `<db_dir>/<id>.db`. Records are bincode encoded.

pub mod block;
pub mod db;
pub mod multistore;
pub mod state;

use std::path::PathBuf;

use blockchain_core::{BlockHeight, BlockchainError, Commit, ConsensusState};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use crate::block::{BlockStore, BlockStoreState};
pub use crate::db::{DbContext, DbProvider, SledProvider};
pub use crate::multistore::{CommitId, CommitInfo, CommitMultiStore, StoreInfo};
pub use crate::state::{StateStore, ValidatorsInfo};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("couldn't open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: sled::Error,
    },
    #[error("database error: {0}")]
    Db(#[from] sled::Error),
    #[error("codec error: {0}")]
    Codec(String),
    #[error("commit info for version {0} not found")]
    MissingCommitInfo(u64),
    #[error("no validator set stored for height {0}")]
    NoValidatorsForHeight(BlockHeight),
    #[error("height {0} has no successor")]
    HeightOverflow(BlockHeight),
}

impl From<bincode::Error> for StoreError {
    fn from(e: bincode::Error) -> Self {
        StoreError::Codec(e.to_string())
    }
}

impl From<BlockchainError> for StoreError {
    fn from(e: BlockchainError) -> Self {
        StoreError::Codec(e.to_string())
    }
}

/// Read/write access to seen commits, keyed by height.
pub trait SeenCommitStore {
    fn load_seen_commit(&self, height: BlockHeight) -> Result<Option<Commit>, StoreError>;
    fn save_seen_commit(&self, height: BlockHeight, commit: &Commit) -> Result<(), StoreError>;
}

/// Read/write access to the single consensus state record.
pub trait ConsensusStateStore {
    /// `None` when the database holds no (or an empty) state.
    fn load_state(&self) -> Result<Option<ConsensusState>, StoreError>;
    fn save_state(&self, state: &ConsensusState) -> Result<(), StoreError>;
}

pub(crate) fn ser<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serialize(value)?)
}

pub(crate) fn de<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    Ok(bincode::deserialize(bytes)?)
}
