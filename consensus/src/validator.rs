use std::fmt;

use base64::Engine;
use blockchain_core::{
    address_from_pubkey, sign_message, Address, Proposal, PublicKey, SecretKey, Vote,
};
use ed25519_dalek::{SigningKey, KEYPAIR_LENGTH};
use zeroize::Zeroizing;

use crate::ConsensusError;

/// Anything able to sign consensus messages on behalf of one validator.
pub trait PrivValidator {
    fn pub_key(&self) -> PublicKey;

    fn address(&self) -> Address {
        address_from_pubkey(&self.pub_key())
    }

    /// Signs `vote` under `chain_id` and stores the signature in the vote.
    fn sign_vote(&self, chain_id: &str, vote: &mut Vote) -> Result<(), ConsensusError>;

    /// Signs `proposal` under `chain_id` and stores the signature in the proposal.
    fn sign_proposal(&self, chain_id: &str, proposal: &mut Proposal)
        -> Result<(), ConsensusError>;
}

/// An in-memory ed25519 validator key together with its derived address.
#[derive(Clone)]
pub struct SigningIdentity {
    key: SecretKey,
    address: Address,
}

impl SigningIdentity {
    pub const KEYPAIR_LEN: usize = KEYPAIR_LENGTH;

    pub fn new(key: SecretKey) -> Self {
        let address = address_from_pubkey(&key.verifying_key());
        Self { key, address }
    }

    /// Accepts the 64-byte `seed || public key` encoding.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self, ConsensusError> {
        let arr: &[u8; KEYPAIR_LENGTH] = bytes
            .try_into()
            .map_err(|_| ConsensusError::KeyLength(bytes.len()))?;
        let key = SigningKey::from_keypair_bytes(arr)
            .map_err(|e| ConsensusError::KeyEncoding(e.to_string()))?;
        Ok(Self::new(key))
    }

    pub fn from_base64(encoded: &str) -> Result<Self, ConsensusError> {
        let raw = Zeroizing::new(
            base64::engine::general_purpose::STANDARD
                .decode(encoded.trim())
                .map_err(|e| ConsensusError::KeyEncoding(e.to_string()))?,
        );
        Self::from_keypair_bytes(&raw)
    }

    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        Zeroizing::new(self.key.to_keypair_bytes())
    }

    pub fn to_base64(&self) -> Zeroizing<String> {
        let bytes = self.to_keypair_bytes();
        Zeroizing::new(base64::engine::general_purpose::STANDARD.encode(&*bytes))
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl PrivValidator for SigningIdentity {
    fn pub_key(&self) -> PublicKey {
        self.key.verifying_key()
    }

    fn address(&self) -> Address {
        self.address
    }

    fn sign_vote(&self, chain_id: &str, vote: &mut Vote) -> Result<(), ConsensusError> {
        let msg = vote.sign_bytes(chain_id)?;
        vote.signature = sign_message(&msg, &self.key).to_bytes().to_vec();
        Ok(())
    }

    fn sign_proposal(
        &self,
        chain_id: &str,
        proposal: &mut Proposal,
    ) -> Result<(), ConsensusError> {
        let msg = proposal.sign_bytes(chain_id)?;
        proposal.signature = sign_message(&msg, &self.key).to_bytes().to_vec();
        Ok(())
    }
}
