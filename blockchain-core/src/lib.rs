//! Core consensus records shared by the chain maintenance tooling.

pub mod commit;
pub mod crypto;
pub mod state;
pub mod types;
pub mod vote;

pub use crate::commit::{BlockIdFlag, Commit, CommitSig};
pub use crate::crypto::{
    address_from_pubkey, generate_keypair, hash_data, merkle_root, pubkey_from_bytes,
    sign_message, verify_signature, verify_signature_bytes, PublicKey, SecretKey,
};
pub use crate::state::{ConsensusState, Validator, ValidatorSet, Version};
pub use crate::types::{
    Address, BlockHash, BlockHeight, BlockchainError, ChainId, Timestamp,
};
pub use crate::vote::{
    proposal_sign_bytes, vote_sign_bytes, BlockId, PartSetHeader, Proposal, SignedMsgType, Vote,
};
