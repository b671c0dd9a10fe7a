// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! Votes, proposals and the canonical byte layouts validators sign.
//!
//! The chain id is part of every canonical payload, so a signature produced
//! under one chain id never verifies under another.

use serde::{Deserialize, Serialize};

use crate::types::{Address, BlockHash, BlockHeight, BlockchainError, Timestamp};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignedMsgType {
    Prevote = 1,
    Precommit = 2,
    Proposal = 32,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: BlockHash,
}

impl PartSetHeader {
    pub fn is_zero(&self) -> bool {
        self.total == 0 && self.hash.is_zero()
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BlockId {
    pub hash: BlockHash,
    pub part_set_header: PartSetHeader,
}

impl BlockId {
    /// A zero block id stands for a vote on nil.
    pub fn is_zero(&self) -> bool {
        self.hash.is_zero() && self.part_set_header.is_zero()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub msg_type: SignedMsgType,
    pub height: BlockHeight,
    pub round: i32,
    pub block_id: BlockId,
    pub timestamp: Timestamp,
    pub validator_address: Address,
    pub validator_index: u32,
    pub signature: Vec<u8>,
}

impl Vote {
    pub fn sign_bytes(&self, chain_id: &str) -> Result<Vec<u8>, BlockchainError> {
        vote_sign_bytes(chain_id, self)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proposal {
    pub height: BlockHeight,
    pub round: i32,
    pub pol_round: i32,
    pub block_id: BlockId,
    pub timestamp: Timestamp,
    pub signature: Vec<u8>,
}

impl Proposal {
    pub fn sign_bytes(&self, chain_id: &str) -> Result<Vec<u8>, BlockchainError> {
        proposal_sign_bytes(chain_id, self)
    }
}

// Field order is part of the signed format.
#[derive(Serialize)]
struct CanonicalVote<'a> {
    msg_type: u8,
    height: u64,
    round: i64,
    block_id: Option<&'a BlockId>,
    timestamp: i64,
    chain_id: &'a str,
}

#[derive(Serialize)]
struct CanonicalProposal<'a> {
    msg_type: u8,
    height: u64,
    round: i64,
    pol_round: i64,
    block_id: Option<&'a BlockId>,
    timestamp: i64,
    chain_id: &'a str,
}

/// Canonical bytes of `vote` under `chain_id`. The signature, address and index are not signed.
pub fn vote_sign_bytes(chain_id: &str, vote: &Vote) -> Result<Vec<u8>, BlockchainError> {
    let canonical = CanonicalVote {
        msg_type: vote.msg_type as u8,
        height: vote.height.value(),
        round: i64::from(vote.round),
        block_id: canonical_block_id(&vote.block_id),
        timestamp: vote.timestamp.value(),
        chain_id,
    };
    Ok(bincode::serialize(&canonical)?)
}

pub fn proposal_sign_bytes(chain_id: &str, proposal: &Proposal) -> Result<Vec<u8>, BlockchainError> {
    let canonical = CanonicalProposal {
        msg_type: SignedMsgType::Proposal as u8,
        height: proposal.height.value(),
        round: i64::from(proposal.round),
        pol_round: i64::from(proposal.pol_round),
        block_id: canonical_block_id(&proposal.block_id),
        timestamp: proposal.timestamp.value(),
        chain_id,
    };
    Ok(bincode::serialize(&canonical)?)
}

fn canonical_block_id(block_id: &BlockId) -> Option<&BlockId> {
    if block_id.is_zero() {
        None
    } else {
        Some(block_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote() -> Vote {
        Vote {
            msg_type: SignedMsgType::Precommit,
            height: BlockHeight(10),
            round: 0,
            block_id: BlockId {
                hash: BlockHash([1u8; 32]),
                part_set_header: PartSetHeader {
                    total: 1,
                    hash: BlockHash([2u8; 32]),
                },
            },
            timestamp: Timestamp(1_700_000_000_000_000_000),
            validator_address: Address([3u8; 20]),
            validator_index: 0,
            signature: Vec::new(),
        }
    }

    #[test]
    fn sign_bytes_depend_on_chain_id() {
        let v = vote();
        assert_ne!(
            v.sign_bytes("abc_1-1").unwrap(),
            v.sign_bytes("abc_1-2").unwrap()
        );
    }

    #[test]
    fn sign_bytes_ignore_signature_and_index() {
        let a = vote();
        let mut b = vote();
        b.signature = vec![9u8; 64];
        b.validator_index = 7;
        assert_eq!(a.sign_bytes("abc_1-1").unwrap(), b.sign_bytes("abc_1-1").unwrap());
    }

    #[test]
    fn nil_vote_differs_from_block_vote() {
        let a = vote();
        let mut b = vote();
        b.block_id = BlockId::default();
        assert_ne!(a.sign_bytes("abc_1-1").unwrap(), b.sign_bytes("abc_1-1").unwrap());
    }
}
