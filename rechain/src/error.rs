use std::path::PathBuf;

use blockchain_core::{Address, BlockHeight};
use consensus::ConsensusError;
use genesis::GenesisError;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("invalid chainId: {0}")]
    Validation(String),
    #[error("path not exists {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid key on line {line}: {reason}")]
    Decode { line: usize, reason: String },
    #[error("Failed!\n{chain_id} = {chain_id}\nNothing to change!")]
    NoOp { chain_id: String },
    #[error("Signer Not Found;Signer Address: {address}")]
    SignerNotFound { address: Address },
    #[error("no seen commit stored at height {0}")]
    MissingSeenCommit(BlockHeight),
    #[error("re-signed commit rejected: {0}")]
    Consensus(ConsensusError),
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Genesis(#[from] GenesisError),
}

impl MigrateError {
    /// A validator of the stored commit has no key; the data directory can
    /// only be migrated once the missing key is supplied.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MigrateError::SignerNotFound { .. })
    }
}

impl From<ConsensusError> for MigrateError {
    fn from(e: ConsensusError) -> Self {
        match e {
            ConsensusError::SignerNotFound { address } => MigrateError::SignerNotFound { address },
            other => MigrateError::Consensus(other),
        }
    }
}
