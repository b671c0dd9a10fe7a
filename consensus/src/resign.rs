// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! Re-signing a stored commit under a different chain id.

use blockchain_core::{
    verify_signature_bytes, Address, BlockHeight, ChainId, Commit, ValidatorSet,
};
use tracing::{debug, info};

use crate::validator::PrivValidator;
use crate::ConsensusError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResignReport {
    pub height: BlockHeight,
    pub resigned: usize,
}

/// Linear scan by exact address; validator sets are small.
pub fn find_signer<'a, P: PrivValidator>(signers: &'a [P], address: &Address) -> Option<&'a P> {
    signers.iter().find(|s| &s.address() == address)
}

/// Replaces every slot signature in `commit` with one made under `chain_id`.
///
/// Slot order, addresses, flags and timestamps are left untouched. Stops at the
/// first slot without a matching signer; slots before it stay re-signed in
/// memory, so the caller must not persist the commit after an error.
pub fn resign_commit<P: PrivValidator>(
    commit: &mut Commit,
    chain_id: &ChainId,
    signers: &[P],
) -> Result<ResignReport, ConsensusError> {
    for idx in 0..commit.signatures.len() {
        let mut vote = commit.get_vote(idx)?;
        let address = vote.validator_address;

        let signer = find_signer(signers, &address)
            .ok_or(ConsensusError::SignerNotFound { address })?;
        signer.sign_vote(chain_id.as_str(), &mut vote)?;

        debug!(
            "re-signed commit slot: height={}, index={}, validator={}",
            commit.height, idx, address
        );
        commit.signatures[idx].signature = vote.signature;
    }

    info!(
        "commit re-signed: height={}, slots={}, chain_id={}",
        commit.height,
        commit.signatures.len(),
        chain_id
    );

    Ok(ResignReport {
        height: commit.height,
        resigned: commit.signatures.len(),
    })
}

/// Checks every non-absent slot against the public key recorded in `validators`.
///
/// Returns the number of slots verified.
pub fn verify_commit(
    chain_id: &str,
    commit: &Commit,
    validators: &ValidatorSet,
) -> Result<usize, ConsensusError> {
    let mut verified = 0usize;
    for (idx, slot) in commit.signatures.iter().enumerate() {
        if slot.is_absent() {
            continue;
        }
        let validator = validators
            .get_by_address(&slot.validator_address)
            .ok_or(ConsensusError::UnknownValidator {
                address: slot.validator_address,
                index: idx,
            })?;
        let public_key = validator.public_key()?;
        let msg = commit.vote_sign_bytes(chain_id, idx)?;
        if !verify_signature_bytes(&msg, &slot.signature, &public_key) {
            return Err(ConsensusError::VerificationFailed {
                address: slot.validator_address,
                index: idx,
            });
        }
        verified += 1;
    }
    Ok(verified)
}
