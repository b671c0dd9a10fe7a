// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! Commit bookkeeping of the application's multi-store.
//!
//! Only the version pointer and the per-substore commit ids are kept here;
//! the substores' own trees are opaque to this crate.

use blockchain_core::{hash_data, merkle_root};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{de, ser, StoreError};

const LATEST_VERSION_KEY: &[u8] = b"s/latest";

fn commit_info_key(version: u64) -> Vec<u8> {
    format!("s/{version}").into_bytes()
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitId {
    pub version: u64,
    pub hash: Vec<u8>,
}

impl CommitId {
    pub fn is_zero(&self) -> bool {
        self.version == 0 && self.hash.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    pub commit_id: CommitId,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitInfo {
    pub version: u64,
    pub store_infos: Vec<StoreInfo>,
}

impl CommitInfo {
    /// Merkle root over `sha256(name || store hash)` leaves sorted by store
    /// name. No substores hash to an empty value.
    pub fn hash(&self) -> Vec<u8> {
        if self.store_infos.is_empty() {
            return Vec::new();
        }
        let mut sorted: Vec<&StoreInfo> = self.store_infos.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        let leaves: Vec<[u8; 32]> = sorted
            .iter()
            .map(|s| {
                let mut buf = Vec::with_capacity(s.name.len() + s.commit_id.hash.len());
                buf.extend_from_slice(s.name.as_bytes());
                buf.extend_from_slice(&s.commit_id.hash);
                hash_data(&buf)
            })
            .collect();
        merkle_root(&leaves).to_vec()
    }

    pub fn commit_id(&self) -> CommitId {
        CommitId {
            version: self.version,
            hash: self.hash(),
        }
    }
}

pub struct CommitMultiStore {
    db: sled::Db,
    last_commit_id: CommitId,
}

impl CommitMultiStore {
    pub fn new(db: sled::Db) -> Self {
        CommitMultiStore {
            db,
            last_commit_id: CommitId::default(),
        }
    }

    /// Reads the latest committed version; a fresh store stays at version 0.
    pub fn load_latest_version(&mut self) -> Result<(), StoreError> {
        let version: u64 = match self.db.get(LATEST_VERSION_KEY)? {
            Some(raw) => de(&raw)?,
            None => 0,
        };
        if version == 0 {
            self.last_commit_id = CommitId::default();
            debug!("application store has no commits");
            return Ok(());
        }
        let raw = self
            .db
            .get(commit_info_key(version))?
            .ok_or(StoreError::MissingCommitInfo(version))?;
        let info: CommitInfo = de(&raw)?;
        self.last_commit_id = info.commit_id();
        debug!("loaded application commit: version={}", version);
        Ok(())
    }

    pub fn last_commit_id(&self) -> CommitId {
        self.last_commit_id.clone()
    }

    pub fn load_commit_info(&self, version: u64) -> Result<Option<CommitInfo>, StoreError> {
        match self.db.get(commit_info_key(version))? {
            Some(raw) => Ok(Some(de(&raw)?)),
            None => Ok(None),
        }
    }

    /// Records the next version with the given substore commits.
    pub fn commit(&mut self, store_infos: Vec<StoreInfo>) -> Result<CommitId, StoreError> {
        let info = CommitInfo {
            version: self.last_commit_id.version + 1,
            store_infos,
        };
        let mut batch = sled::Batch::default();
        batch.insert(commit_info_key(info.version), ser(&info)?);
        batch.insert(LATEST_VERSION_KEY, ser(&info.version)?);
        self.db.apply_batch(batch)?;
        self.db.flush()?;

        self.last_commit_id = info.commit_id();
        info!("application commit: version={}", info.version);
        Ok(self.last_commit_id.clone())
    }
}
