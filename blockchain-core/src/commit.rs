use serde::{Deserialize, Serialize};

use crate::types::{Address, BlockHeight, BlockchainError, Timestamp};
use crate::vote::{vote_sign_bytes, BlockId, SignedMsgType, Vote};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlockIdFlag {
    /// No vote was received from the validator.
    Absent,
    /// Voted for the committed block.
    Commit,
    /// Voted for nil.
    Nil,
}

/// One validator's signature slot inside a commit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitSig {
    pub block_id_flag: BlockIdFlag,
    pub validator_address: Address,
    pub timestamp: Timestamp,
    pub signature: Vec<u8>,
}

impl CommitSig {
    pub fn new_absent() -> Self {
        CommitSig {
            block_id_flag: BlockIdFlag::Absent,
            validator_address: Address::default(),
            timestamp: Timestamp::default(),
            signature: Vec::new(),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.block_id_flag == BlockIdFlag::Absent
    }

    /// The block id this slot voted for, given the commit's block id.
    pub fn block_id(&self, commit_block_id: &BlockId) -> BlockId {
        match self.block_id_flag {
            BlockIdFlag::Commit => *commit_block_id,
            BlockIdFlag::Absent | BlockIdFlag::Nil => BlockId::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub height: BlockHeight,
    pub round: i32,
    pub block_id: BlockId,
    pub signatures: Vec<CommitSig>,
}

impl Commit {
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Rebuilds the precommit that produced slot `index`.
    pub fn get_vote(&self, index: usize) -> Result<Vote, BlockchainError> {
        let sig = self
            .signatures
            .get(index)
            .ok_or(BlockchainError::InvalidSignatureIndex {
                index,
                len: self.signatures.len(),
            })?;
        Ok(Vote {
            msg_type: SignedMsgType::Precommit,
            height: self.height,
            round: self.round,
            block_id: sig.block_id(&self.block_id),
            timestamp: sig.timestamp,
            validator_address: sig.validator_address,
            validator_index: index as u32,
            signature: sig.signature.clone(),
        })
    }

    pub fn vote_sign_bytes(&self, chain_id: &str, index: usize) -> Result<Vec<u8>, BlockchainError> {
        let vote = self.get_vote(index)?;
        vote_sign_bytes(chain_id, &vote)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BlockchainError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlockchainError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
