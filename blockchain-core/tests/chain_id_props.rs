use blockchain_core::ChainId;
use proptest::prelude::*;

fn valid_id() -> impl Strategy<Value = String> {
    ("[a-z]{1,20}", "[1-9][0-9]{0,8}", "[1-9][0-9]{0,8}")
        .prop_map(|(name, eip155, epoch)| format!("{name}_{eip155}-{epoch}"))
}

proptest! {
    #[test]
    fn well_formed_ids_are_accepted(id in valid_id()) {
        prop_assert!(id.len() <= ChainId::MAX_LEN);
        prop_assert!(ChainId::is_valid(&id));
    }

    #[test]
    fn uppercase_letters_are_rejected(id in valid_id()) {
        let upper = id.to_ascii_uppercase();
        prop_assert!(!ChainId::is_valid(&upper));
    }

    #[test]
    fn swapped_separators_are_rejected(id in valid_id()) {
        let swapped: String = id
            .chars()
            .map(|c| match c {
                '_' => '-',
                '-' => '_',
                other => other,
            })
            .collect();
        prop_assert!(!ChainId::is_valid(&swapped));
    }

    #[test]
    fn overlong_ids_are_rejected(pad in 49usize..80) {
        let name = "a".repeat(pad - 4);
        let id = format!("{name}_1-1");
        prop_assert!(id.len() > ChainId::MAX_LEN);
        prop_assert!(!ChainId::is_valid(&id));
    }

    #[test]
    fn arbitrary_strings_agree_with_grammar(s in "\\PC{0,60}") {
        let expected = s.len() <= ChainId::MAX_LEN && {
            match s.split_once('_') {
                Some((name, rest)) => {
                    !name.is_empty()
                        && name.chars().all(|c| c.is_ascii_lowercase())
                        && match rest.split_once('-') {
                            Some((a, b)) => is_positive(a) && is_positive(b),
                            None => false,
                        }
                }
                None => false,
            }
        };
        prop_assert_eq!(ChainId::is_valid(&s), expected);
    }
}

fn is_positive(s: &str) -> bool {
    !s.is_empty() && !s.starts_with('0') && s.chars().all(|c| c.is_ascii_digit())
}
