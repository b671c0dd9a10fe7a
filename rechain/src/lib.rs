//! Offline chain id migration for a node's data directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod keys;
pub mod migrate;

pub use crate::cli::{normalize_args, Cli, Invocation, USAGE};
pub use crate::config::HomeConfig;
pub use crate::error::MigrateError;
pub use crate::keys::{parse_keys, read_keys};
pub use crate::migrate::{load_state_or_genesis, migrate, open_stores, run, Outcome, Stores};
