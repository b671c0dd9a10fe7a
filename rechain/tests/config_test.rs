use std::path::PathBuf;

use rechain::HomeConfig;
use tempfile::tempdir;

#[test]
fn defaults_resolve_under_home() {
    let dir = tempdir().unwrap();
    let cfg = HomeConfig {
        root_dir: dir.path().to_path_buf(),
        ..HomeConfig::default()
    };
    assert_eq!(cfg.db_dir(), dir.path().join("data"));
    assert_eq!(cfg.state_db_path(), dir.path().join("data").join("state.db"));
    assert_eq!(
        cfg.genesis_path(),
        dir.path().join("config").join("genesis.json")
    );
}

#[test]
fn config_file_and_env_are_layered() {
    let dir = tempdir().unwrap();
    let file_cfg = HomeConfig {
        root_dir: PathBuf::new(),
        db_dir: PathBuf::from("db"),
        genesis_file: PathBuf::from("/etc/chain/genesis.json"),
    };
    file_cfg
        .save_to_file(&HomeConfig::config_path(dir.path()))
        .unwrap();

    let loaded = HomeConfig::load_from_file(&HomeConfig::config_path(dir.path())).unwrap();
    assert_eq!(loaded.db_dir, PathBuf::from("db"));
    assert_eq!(
        loaded.genesis_path(),
        PathBuf::from("/etc/chain/genesis.json")
    );

    let merged = HomeConfig {
        root_dir: dir.path().to_path_buf(),
        ..loaded
    }
    .merge_with_vars(|key| (key == "RECHAIN_DB_DIR").then(|| "other".to_string()));
    assert_eq!(merged.db_dir(), dir.path().join("other"));
    assert_eq!(merged.genesis_file, PathBuf::from("/etc/chain/genesis.json"));
}

#[test]
fn partial_config_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = HomeConfig::config_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "db_dir = \"chaindata\"\n").unwrap();

    let cfg = HomeConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.db_dir, PathBuf::from("chaindata"));
    assert_eq!(cfg.genesis_file, PathBuf::from("config").join("genesis.json"));
}
