use std::fs;

use blockchain_core::generate_keypair;
use consensus::{PrivValidator, SigningIdentity};
use rand::Rng;
use rechain::{parse_keys, read_keys, MigrateError};
use tempfile::tempdir;

fn encoded_key() -> (SigningIdentity, String) {
    let (_, sk) = generate_keypair();
    let id = SigningIdentity::new(sk);
    let line = id.to_base64().to_string();
    (id, line)
}

#[test]
fn keys_round_trip_with_blank_lines() {
    let mut rng = rand::thread_rng();
    let keys: Vec<(SigningIdentity, String)> = (0..8).map(|_| encoded_key()).collect();

    let mut body = String::new();
    for (_, line) in &keys {
        for _ in 0..rng.gen_range(0..3) {
            body.push_str(if rng.gen_bool(0.5) { "\n" } else { "   \n" });
        }
        body.push_str(line);
        body.push('\n');
    }
    body.push_str("\n\n");

    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.txt");
    fs::write(&path, body).unwrap();

    let loaded = read_keys(&path).unwrap();
    assert_eq!(loaded.len(), keys.len());
    for (got, (want, _)) in loaded.iter().zip(&keys) {
        assert_eq!(*got.to_keypair_bytes(), *want.to_keypair_bytes());
        assert_eq!(got.address(), want.address());
    }
}

#[test]
fn bad_base64_reports_line_number() {
    let (_, good) = encoded_key();
    let err = parse_keys(&format!("{good}\n\n%%%not-base64%%%\n")).unwrap_err();
    assert!(matches!(err, MigrateError::Decode { line: 3, .. }));
}

#[test]
fn wrong_length_is_decode_error() {
    let err = parse_keys("AAAA\n").unwrap_err();
    match err {
        MigrateError::Decode { line, reason } => {
            assert_eq!(line, 1);
            assert!(reason.contains("length"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_file_yields_no_keys() {
    assert!(parse_keys("\n\n").unwrap().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_keys(&dir.path().join("absent.txt")),
        Err(MigrateError::Io { .. })
    ));
}
