//! Tokenizer output is always usable by the finder.

use hitmark::tokenize::is_stop_word;
use hitmark::{smart_tokenize, TokenType};
use proptest::prelude::*;

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 가-힣,.!?()만원억]{0,24}").unwrap()
}

proptest! {
    /// Property: no token is empty, whitespace-padded or a stop-word.
    #[test]
    fn prop_tokens_non_empty(query in query_strategy()) {
        for token in smart_tokenize(&query) {
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(token.text.trim(), token.text.as_str());
            prop_assert!(!token.text.starts_with(',') && !token.text.ends_with('.'));
            prop_assert!(!is_stop_word(&token.original));
        }
    }

    /// Property: each token is a piece of the word it came from.
    #[test]
    fn prop_tokens_come_from_their_word(query in query_strategy()) {
        for token in smart_tokenize(&query) {
            prop_assert!(token.original.contains(&token.text));
            prop_assert!(query.contains(&token.original));
        }
    }

    /// Property: pure script runs keep their script type.
    #[test]
    fn prop_single_script_words(word in "[a-z]{1,8}") {
        let tokens = smart_tokenize(&format!("{}x", word));
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].token_type, TokenType::English);
    }

    /// Property: tokenizing is deterministic.
    #[test]
    fn prop_deterministic(query in query_strategy()) {
        prop_assert_eq!(smart_tokenize(&query), smart_tokenize(&query));
    }
}
