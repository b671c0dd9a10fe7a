// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use blockchain_core::{
    BlockHeight, BlockId, ConsensusState, Validator, ValidatorSet, Version,
};
use tracing::info;

use crate::doc::GenesisDoc;
use crate::types::GenesisError;

/// Builds the state a node starts from before its first block.
///
/// `last_block_height` is zero and there are no last validators; the
/// current and next sets are both the genesis set.
pub fn make_genesis_state(doc: &GenesisDoc) -> Result<ConsensusState, GenesisError> {
    let mut validators = Vec::with_capacity(doc.validators.len());
    for (index, v) in doc.validators.iter().enumerate() {
        if v.power <= 0 {
            return Err(GenesisError::InvalidPower {
                index,
                power: v.power,
            });
        }
        validators.push(Validator::new(&v.public_key(index)?, v.power));
    }
    let set = ValidatorSet::new(validators);
    let initial_height = BlockHeight(doc.initial_height.max(1));

    let state = ConsensusState {
        version: Version::current(),
        chain_id: doc.chain_id.clone(),
        initial_height,
        last_block_height: BlockHeight::GENESIS,
        last_block_id: BlockId::default(),
        last_block_time: doc.genesis_timestamp()?,
        next_validators: set.clone(),
        validators: set,
        last_validators: ValidatorSet::default(),
        last_height_validators_changed: initial_height,
        last_results_hash: Vec::new(),
        app_hash: doc.app_hash_bytes()?,
    };
    info!(
        "genesis state built: chain_id={}, initial_height={}, validators={}",
        state.chain_id,
        state.initial_height,
        state.validators.len()
    );
    Ok(state)
}
