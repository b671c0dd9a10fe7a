use std::path::PathBuf;

use rechain::{Cli, Invocation, USAGE};

#[test]
fn accepts_single_dash_long_flags() {
    let cli = Cli::try_parse_normalized([
        "rechain", "-home", "/node", "-id", "abc_1-2", "-k", "keys.txt",
    ])
    .unwrap();
    assert_eq!(
        cli.into_invocation(),
        Some(Invocation {
            home: PathBuf::from("/node"),
            chain_id: "abc_1-2".to_string(),
            keys_file: PathBuf::from("keys.txt"),
        })
    );
}

#[test]
fn accepts_double_dash_and_equals_forms() {
    let cli = Cli::try_parse_normalized([
        "rechain",
        "--home=/node",
        "-id=abc_1-2",
        "--keys",
        "keys.txt",
    ])
    .unwrap();
    let inv = cli.into_invocation().unwrap();
    assert_eq!(inv.home, PathBuf::from("/node"));
    assert_eq!(inv.chain_id, "abc_1-2");
}

#[test]
fn accepts_double_dash_k() {
    let cli = Cli::try_parse_normalized([
        "rechain", "-home", "/node", "-id", "abc_1-2", "--k", "keys.txt",
    ])
    .unwrap();
    assert_eq!(
        cli.into_invocation().unwrap().keys_file,
        PathBuf::from("keys.txt")
    );

    let cli = Cli::try_parse_normalized(["rechain", "--k=keys.txt"]).unwrap();
    assert_eq!(cli.keys, Some(PathBuf::from("keys.txt")));
}

#[test]
fn missing_or_empty_flag_means_usage() {
    let cli = Cli::try_parse_normalized(["rechain", "-home", "/node", "-id", "abc_1-2"]).unwrap();
    assert!(cli.into_invocation().is_none());

    let cli = Cli::try_parse_normalized(["rechain", "-home", "/node", "-id", "", "-k", "k"])
        .unwrap();
    assert!(cli.into_invocation().is_none());

    let cli = Cli::try_parse_normalized(["rechain"]).unwrap();
    assert!(cli.into_invocation().is_none());
}

#[test]
fn usage_text_names_all_flags() {
    assert!(USAGE.starts_with("Usage: -home"));
    assert!(USAGE.contains("-id [new chainId]"));
    assert!(USAGE.contains("-k [keysfile"));
}
