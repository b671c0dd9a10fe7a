use std::path::{Path, PathBuf};

use tracing::debug;

use crate::StoreError;

pub const BLOCKSTORE_DB: &str = "blockstore";
pub const STATE_DB: &str = "state";
pub const APPLICATION_DB: &str = "application";

/// Names a logical database inside a data directory.
#[derive(Clone, Copy, Debug)]
pub struct DbContext<'a> {
    pub id: &'a str,
    pub db_dir: &'a Path,
}

impl<'a> DbContext<'a> {
    pub fn new(id: &'a str, db_dir: &'a Path) -> Self {
        DbContext { id, db_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.db_dir.join(format!("{}.db", self.id))
    }
}

pub trait DbProvider {
    fn open(&self, ctx: &DbContext<'_>) -> Result<sled::Db, StoreError>;
}

/// Opens (or creates) an on-disk sled database at `<db_dir>/<id>.db`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SledProvider;

impl DbProvider for SledProvider {
    fn open(&self, ctx: &DbContext<'_>) -> Result<sled::Db, StoreError> {
        let path = ctx.path();
        let db = sled::Config::new()
            .path(&path)
            .open()
            .map_err(|source| StoreError::Open {
                path: path.clone(),
                source,
            })?;
        debug!("opened database: id={}, path={}", ctx.id, path.display());
        Ok(db)
    }
}
