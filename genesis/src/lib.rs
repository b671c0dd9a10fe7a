//! Genesis document handling.
//!
//! A node that has never committed a block has no consensus state on disk;
//! its starting state is derived from the genesis document instead.

pub mod doc;
pub mod state;
pub mod types;

pub use crate::doc::{GenesisDoc, GenesisValidator, MAX_GENESIS_CHAIN_ID_LEN};
pub use crate::state::make_genesis_state;
pub use crate::types::GenesisError;
