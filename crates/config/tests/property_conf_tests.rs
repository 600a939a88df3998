//! Property-based tests for `bitcoin.conf` parsing.
//!
//! Test coverage:
//! - Single `key=value` lines parse to exactly that pair
//! - Comment lines never contribute entries
//! - Only the first `=` splits; later ones stay in the value
//! - The last occurrence of a duplicated key wins

use bitcoin_rpc_config::BitcoinConf;
use proptest::prelude::*;

/// Keys as they appear in real configs: no `=`, no newline, not a comment.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("rpcuser".to_string()),
        Just("rpcpassword".to_string()),
        Just("rpcport".to_string()),
        "[a-z][a-z0-9_.]{0,20}".prop_map(String::from),
    ]
}

/// Values without surrounding whitespace or line breaks.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9!@#$%^&*/:._-]{1,32}".prop_map(String::from),
        "[a-zA-Z0-9]{1,8}=[a-zA-Z0-9=]{0,8}".prop_map(String::from),
    ]
}

proptest! {
    #[test]
    fn prop_key_value_line_roundtrips(key in key_strategy(), value in value_strategy()) {
        let conf = BitcoinConf::parse(&format!("{}={}\n", key, value));
        prop_assert_eq!(conf.len(), 1);
        prop_assert_eq!(conf.get(&key), Some(value.as_str()));
    }

    #[test]
    fn prop_value_whitespace_is_trimmed(
        key in key_strategy(),
        value in "[a-zA-Z0-9]{1,16}",
        lead in "[ \t]{0,4}",
        trail in "[ \t]{0,4}",
    ) {
        let conf = BitcoinConf::parse(&format!("{}={}{}{}", key, lead, value, trail));
        prop_assert_eq!(conf.get(&key), Some(value.as_str()));
    }

    #[test]
    fn prop_comment_lines_are_ignored(body in "[a-zA-Z0-9 =_]{0,40}") {
        let conf = BitcoinConf::parse(&format!("#{}\n", body));
        prop_assert!(conf.is_empty());
    }

    #[test]
    fn prop_last_duplicate_wins(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let conf = BitcoinConf::parse(&format!("{}={}\n{}={}\n", key, first, key, second));
        prop_assert_eq!(conf.len(), 1);
        prop_assert_eq!(conf.get(&key), Some(second.as_str()));
    }
}
