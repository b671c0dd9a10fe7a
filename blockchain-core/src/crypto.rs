use crate::types::{Address, BlockchainError, ADDRESS_LEN};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub type PublicKey = VerifyingKey;
pub type SecretKey = SigningKey;

pub const PUBLIC_KEY_LEN: usize = 32;

pub fn hash_data(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Binary SHA-256 merkle root over pre-hashed leaves; an odd node is paired with itself.
pub fn merkle_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    if leaves.is_empty() {
        return hash_data(&[][..]);
    }

    let mut hashes: Vec<[u8; 32]> = leaves.to_vec();

    while hashes.len() > 1 {
        let mut next = Vec::with_capacity(hashes.len().div_ceil(2));
        for pair in hashes.chunks(2) {
            let left = pair[0];
            let right = if pair.len() == 2 { pair[1] } else { pair[0] };
            let mut buf = Vec::with_capacity(64);
            buf.extend_from_slice(&left);
            buf.extend_from_slice(&right);
            next.push(hash_data(&buf));
        }
        hashes = next;
    }

    hashes[0]
}

pub fn address_from_pubkey(pubkey: &PublicKey) -> Address {
    let hash = hash_data(pubkey.as_bytes());
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(&hash[..ADDRESS_LEN]);
    Address(out)
}

pub fn pubkey_from_bytes(bytes: &[u8]) -> Result<PublicKey, BlockchainError> {
    let arr: [u8; PUBLIC_KEY_LEN] = bytes
        .try_into()
        .map_err(|_| BlockchainError::InvalidPublicKey)?;
    VerifyingKey::from_bytes(&arr).map_err(|_| BlockchainError::InvalidPublicKey)
}

pub fn generate_keypair() -> (PublicKey, SecretKey) {
    let mut rng = OsRng;
    let mut secret_bytes = [0u8; 32];
    rng.fill_bytes(secret_bytes.as_mut());
    let secret = SigningKey::from_bytes(&secret_bytes);
    let public = secret.verifying_key();
    (public, secret)
}

pub fn sign_message(message: &[u8], secret_key: &SecretKey) -> Signature {
    secret_key.sign(message)
}

pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    public_key.verify(message, signature).is_ok()
}

/// Verifies a raw signature as stored in a commit slot.
pub fn verify_signature_bytes(message: &[u8], signature: &[u8], public_key: &PublicKey) -> bool {
    match Signature::from_slice(signature) {
        Ok(sig) => verify_signature(message, &sig, public_key),
        Err(_) => false,
    }
}
