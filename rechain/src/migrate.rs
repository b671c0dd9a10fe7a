// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! The chain id migration of a node data directory.
//!
//! Both records are staged in memory before anything is written. The commit
//! is published first and the state record second; the two live in separate
//! databases, so a failure between the writes leaves a re-signed commit next
//! to the old state, which a rerun repairs.

use std::path::Path;

use blockchain_core::{BlockHeight, ChainId, Commit, ConsensusState};
use consensus::{resign_commit, verify_commit, PrivValidator};
use genesis::{make_genesis_state, GenesisDoc};
use store::db::{APPLICATION_DB, BLOCKSTORE_DB, STATE_DB};
use store::{
    BlockStore, CommitMultiStore, ConsensusStateStore, DbContext, DbProvider, SeenCommitStore,
    SledProvider, StateStore,
};
use tracing::{info, warn};

use crate::config::HomeConfig;
use crate::error::MigrateError;
use crate::keys::read_keys;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub old_chain_id: String,
    pub new_chain_id: ChainId,
    pub height: BlockHeight,
    pub resigned: usize,
}

pub struct Stores {
    pub block: BlockStore,
    pub state: StateStore,
    pub app: CommitMultiStore,
}

/// Opens the three databases of `config`'s data directory and loads the
/// application store's latest version.
pub fn open_stores<P: DbProvider>(config: &HomeConfig, provider: &P) -> Result<Stores, MigrateError> {
    let state_db = config.state_db_path();
    if !state_db.is_dir() {
        return Err(MigrateError::NotFound(state_db));
    }
    let db_dir = config.db_dir();

    let mut app = CommitMultiStore::new(provider.open(&DbContext::new(APPLICATION_DB, &db_dir))?);
    app.load_latest_version()?;
    let state = StateStore::new(provider.open(&DbContext::new(STATE_DB, &db_dir))?);
    let block = BlockStore::new(provider.open(&DbContext::new(BLOCKSTORE_DB, &db_dir))?);

    Ok(Stores { block, state, app })
}

/// The stored state, or the genesis state when nothing was stored yet.
pub fn load_state_or_genesis<S: ConsensusStateStore>(
    states: &S,
    genesis_path: &Path,
) -> Result<ConsensusState, MigrateError> {
    if let Some(state) = states.load_state()? {
        return Ok(state);
    }
    info!("no stored state; using genesis: {}", genesis_path.display());
    let doc = GenesisDoc::load(genesis_path)?;
    Ok(make_genesis_state(&doc)?)
}

/// Re-signs the seen commit at `state.last_block_height` and rewrites the
/// state under `new_chain_id` with `app_hash`.
pub fn migrate<B, S, P>(
    blocks: &B,
    states: &S,
    state: ConsensusState,
    new_chain_id: &ChainId,
    signers: &[P],
    app_hash: Vec<u8>,
) -> Result<Outcome, MigrateError>
where
    B: SeenCommitStore,
    S: ConsensusStateStore,
    P: PrivValidator,
{
    if state.chain_id == new_chain_id.as_str() {
        return Err(MigrateError::NoOp {
            chain_id: state.chain_id,
        });
    }
    let height = state.last_block_height;
    let commit = blocks
        .load_seen_commit(height)?
        .ok_or(MigrateError::MissingSeenCommit(height))?;

    let (commit, resigned) = stage_commit(commit, &state, new_chain_id, signers)?;
    let old_chain_id = state.chain_id.clone();
    let new_state = ConsensusState {
        chain_id: new_chain_id.to_string(),
        app_hash,
        ..state
    };

    blocks.save_seen_commit(height, &commit)?;
    info!("seen commit rewritten: height={}", height);
    states.save_state(&new_state)?;
    info!("consensus state rewritten: {} -> {}", old_chain_id, new_chain_id);

    Ok(Outcome {
        old_chain_id,
        new_chain_id: new_chain_id.clone(),
        height,
        resigned,
    })
}

fn stage_commit<P: PrivValidator>(
    mut commit: Commit,
    state: &ConsensusState,
    new_chain_id: &ChainId,
    signers: &[P],
) -> Result<(Commit, usize), MigrateError> {
    let report = resign_commit(&mut commit, new_chain_id, signers)?;
    if state.last_validators.is_empty() {
        warn!("state has no last validators; re-signed commit not verified");
    } else {
        verify_commit(new_chain_id.as_str(), &commit, &state.last_validators)?;
    }
    Ok((commit, report.resigned))
}

/// Validates inputs, opens the data directory described by `config` and runs
/// the migration.
pub fn run(config: &HomeConfig, new_chain_id: &str, keys_file: &Path) -> Result<Outcome, MigrateError> {
    let chain_id = ChainId::new(new_chain_id)
        .map_err(|_| MigrateError::Validation(new_chain_id.to_string()))?;
    let signers = read_keys(keys_file)?;

    let stores = open_stores(config, &SledProvider)?;
    let state = load_state_or_genesis(&stores.state, &config.genesis_path())?;

    let stored_height = stores.block.height()?;
    if stored_height < state.last_block_height {
        warn!(
            "block store height {} is behind state height {}",
            stored_height, state.last_block_height
        );
    }
    let app_hash = stores.app.last_commit_id().hash;

    migrate(
        &stores.block,
        &stores.state,
        state,
        &chain_id,
        &signers,
        app_hash,
    )
}
