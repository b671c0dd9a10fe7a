// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

//! Validator signing identities and commit re-signing.

pub mod resign;
pub mod validator;

use blockchain_core::{Address, BlockchainError};
use thiserror::Error;

pub use crate::resign::{find_signer, resign_commit, verify_commit, ResignReport};
pub use crate::validator::{PrivValidator, SigningIdentity};

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("Signer Not Found;Signer Address: {address}")]
    SignerNotFound { address: Address },
    #[error("invalid key length: expected {expected} bytes, got {0}", expected = SigningIdentity::KEYPAIR_LEN)]
    KeyLength(usize),
    #[error("invalid key encoding: {0}")]
    KeyEncoding(String),
    #[error("validator {address} at slot {index} is not in the validator set")]
    UnknownValidator { address: Address, index: usize },
    #[error("signature of validator {address} at slot {index} does not verify")]
    VerificationFailed { address: Address, index: usize },
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}
