//! Signing keys file: one standard base64 ed25519 keypair per line.

use std::fs;
use std::path::Path;

use consensus::{PrivValidator, SigningIdentity};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::MigrateError;

pub fn read_keys(path: &Path) -> Result<Vec<SigningIdentity>, MigrateError> {
    let raw = fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| MigrateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let keys = parse_keys(&raw)?;
    if keys.is_empty() {
        warn!("keys file holds no keys: {}", path.display());
    }
    Ok(keys)
}

/// Blank lines are skipped; line numbers in errors are 1-based.
pub fn parse_keys(raw: &str) -> Result<Vec<SigningIdentity>, MigrateError> {
    let mut keys = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let identity = SigningIdentity::from_base64(line).map_err(|e| MigrateError::Decode {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        debug!("loaded signing key: line={}, address={}", idx + 1, identity.address());
        keys.push(identity);
    }
    Ok(keys)
}
