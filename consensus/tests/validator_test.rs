use base64::Engine;
use blockchain_core::{
    address_from_pubkey, generate_keypair, BlockHash, BlockHeight, BlockId, PartSetHeader,
    Proposal, Timestamp,
};
use consensus::{ConsensusError, PrivValidator, SigningIdentity};

#[test]
fn base64_keypair_roundtrip() {
    let (pk, sk) = generate_keypair();
    let encoded = base64::engine::general_purpose::STANDARD.encode(sk.to_keypair_bytes());

    let id = SigningIdentity::from_base64(&encoded).unwrap();
    assert_eq!(id.pub_key(), pk);
    assert_eq!(id.address(), address_from_pubkey(&pk));
    assert_eq!(*id.to_keypair_bytes(), sk.to_keypair_bytes());
    assert_eq!(id.to_base64().as_str(), encoded);
}

#[test]
fn rejects_bad_encodings() {
    assert!(matches!(
        SigningIdentity::from_base64("not base64!"),
        Err(ConsensusError::KeyEncoding(_))
    ));

    let short = base64::engine::general_purpose::STANDARD.encode([1u8; 32]);
    assert!(matches!(
        SigningIdentity::from_base64(&short),
        Err(ConsensusError::KeyLength(32))
    ));

    // Public half does not belong to the seed.
    let (_, a) = generate_keypair();
    let (b, _) = generate_keypair();
    let mut mixed = a.to_keypair_bytes();
    mixed[32..].copy_from_slice(b.as_bytes());
    assert!(matches!(
        SigningIdentity::from_keypair_bytes(&mixed),
        Err(ConsensusError::KeyEncoding(_))
    ));
}

#[test]
fn debug_output_hides_key_material() {
    let (_, sk) = generate_keypair();
    let id = SigningIdentity::new(sk);
    let dbg = format!("{id:?}");
    assert!(dbg.contains(&id.address().to_string()));
    assert!(!dbg.contains(id.to_base64().as_str()));
}

#[test]
fn proposal_signature_binds_chain_id() {
    let (pk, sk) = generate_keypair();
    let id = SigningIdentity::new(sk);
    let mut proposal = Proposal {
        height: BlockHeight(5),
        round: 0,
        pol_round: -1,
        block_id: BlockId {
            hash: BlockHash([1u8; 32]),
            part_set_header: PartSetHeader::default(),
        },
        timestamp: Timestamp(42),
        signature: Vec::new(),
    };
    id.sign_proposal("abc_1-1", &mut proposal).unwrap();
    assert_eq!(proposal.signature.len(), 64);

    let ok = proposal.sign_bytes("abc_1-1").unwrap();
    let other = proposal.sign_bytes("abc_1-2").unwrap();
    assert!(blockchain_core::verify_signature_bytes(&ok, &proposal.signature, &pk));
    assert!(!blockchain_core::verify_signature_bytes(&other, &proposal.signature, &pk));
}
