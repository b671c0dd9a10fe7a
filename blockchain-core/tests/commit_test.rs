use blockchain_core::{
    Address, BlockHash, BlockHeight, BlockId, BlockIdFlag, BlockchainError, Commit, CommitSig,
    PartSetHeader, SignedMsgType, Timestamp,
};

fn block_id() -> BlockId {
    BlockId {
        hash: BlockHash([4u8; 32]),
        part_set_header: PartSetHeader {
            total: 2,
            hash: BlockHash([5u8; 32]),
        },
    }
}

fn commit() -> Commit {
    Commit {
        height: BlockHeight(100),
        round: 1,
        block_id: block_id(),
        signatures: vec![
            CommitSig {
                block_id_flag: BlockIdFlag::Commit,
                validator_address: Address([1u8; 20]),
                timestamp: Timestamp(11),
                signature: vec![1u8; 64],
            },
            CommitSig {
                block_id_flag: BlockIdFlag::Nil,
                validator_address: Address([2u8; 20]),
                timestamp: Timestamp(12),
                signature: vec![2u8; 64],
            },
            CommitSig::new_absent(),
        ],
    }
}

#[test]
fn get_vote_rebuilds_precommit() {
    let c = commit();
    let v = c.get_vote(0).unwrap();
    assert_eq!(v.msg_type, SignedMsgType::Precommit);
    assert_eq!(v.height, BlockHeight(100));
    assert_eq!(v.round, 1);
    assert_eq!(v.block_id, block_id());
    assert_eq!(v.timestamp, Timestamp(11));
    assert_eq!(v.validator_address, Address([1u8; 20]));
    assert_eq!(v.validator_index, 0);
    assert_eq!(v.signature, vec![1u8; 64]);
}

#[test]
fn nil_and_absent_slots_vote_for_zero_block_id() {
    let c = commit();
    assert!(c.get_vote(1).unwrap().block_id.is_zero());
    let absent = c.get_vote(2).unwrap();
    assert!(absent.block_id.is_zero());
    assert!(absent.validator_address.is_empty());
    assert!(c.signatures[2].is_absent());
}

#[test]
fn get_vote_out_of_range() {
    let c = commit();
    assert_eq!(
        c.get_vote(3).unwrap_err(),
        BlockchainError::InvalidSignatureIndex { index: 3, len: 3 }
    );
}

#[test]
fn commit_sign_bytes_bind_chain_id() {
    let c = commit();
    assert_ne!(
        c.vote_sign_bytes("abc_1-1", 0).unwrap(),
        c.vote_sign_bytes("abc_1-2", 0).unwrap()
    );
}

#[test]
fn commit_serialization_preserves_slots() {
    let c = commit();
    let back = Commit::from_bytes(&c.to_bytes().unwrap()).unwrap();
    assert_eq!(back, c);
    assert_eq!(back.len(), 3);
}
