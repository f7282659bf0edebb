//! Property tests for whole lexing passes.

use jsonlex_scanner::{scan, Scanner, TokenKind};
use proptest::prelude::*;

/// Characters that drive every branch of the scanner, mixed with arbitrary ones.
fn json_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec![
            '{', '}', '[', ']', ':', ',', '"', '\\', '-', '+', '.', 'e', 'E', '0', '1', '9',
            't', 'r', 'u', 'f', 'a', 'l', 's', 'n', ' ', '\t', '\n', '\r', '\u{3000}', '\u{00E9}',
        ]),
        1 => any::<char>(),
    ]
}

fn json_like() -> impl Strategy<Value = String> {
    prop::collection::vec(json_char(), 0..96).prop_map(|chars| chars.into_iter().collect())
}

/// A lexically valid token, in source form.
fn valid_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["{", "}", "[", "]", ":", ",", "true", "false", "null"])
            .prop_map(String::from),
        "-?[0-9]{1,4}(\\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?",
        "\"([^\"\\\\\n]|\\\\[\"\\\\/bfnrt])*\"",
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "\t", "\n", "\r\n", "  ", "\u{3000}"])
}

proptest! {
    #[test]
    fn scanning_is_deterministic(source in json_like()) {
        let first: Vec<_> = scan(&source).collect();
        let second: Vec<_> = scan(&source).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pass_ends_with_exactly_one_terminal_token(source in json_like()) {
        let tokens: Vec<_> = scan(&source).collect();
        prop_assert!(tokens.len() <= source.len() + 1);
        let (last, rest) = tokens.split_last().expect("a pass yields at least one token");
        prop_assert!(last.is_end());
        prop_assert!(rest.iter().all(|t| !t.is_end()));
    }

    #[test]
    fn tokens_are_ordered_and_sliceable(source in json_like()) {
        let mut previous_end = 0;
        for token in scan(&source) {
            prop_assert!(token.start >= previous_end, "{} overlaps the previous token", token);
            prop_assert!(token.end() <= source.len());
            prop_assert!(source.is_char_boundary(token.start));
            prop_assert!(source.is_char_boundary(token.end()));
            let _ = token.slice(&source);
            previous_end = token.end();
        }
    }

    #[test]
    fn every_non_terminal_pull_advances(source in json_like()) {
        let mut scanner = Scanner::new(&source);
        loop {
            let before = scanner.position();
            let Some(token) = scanner.next() else { break };
            if !token.is_end() {
                prop_assert!(token.count > 0);
                prop_assert!(scanner.position() > before);
                prop_assert_eq!(scanner.position(), token.end());
            }
        }
        prop_assert!(scanner.position() <= source.len());
    }

    #[test]
    fn valid_tokens_cover_all_non_whitespace_text(
        parts in prop::collection::vec((valid_token(), separator()), 0..24),
    ) {
        let mut source = String::new();
        for (token, sep) in &parts {
            source.push_str(token);
            source.push_str(sep);
        }

        let tokens: Vec<_> = scan(&source).collect();
        let (last, body) = tokens.split_last().expect("a pass yields at least one token");
        prop_assert_eq!(last.kind, TokenKind::EndOfFile);
        prop_assert_eq!(last.start, source.len());

        let scanned: Vec<&str> = body.iter().map(|t| t.slice(&source)).collect();
        let expected: Vec<&str> = parts.iter().map(|(token, _)| token.as_str()).collect();
        prop_assert_eq!(scanned, expected);
    }
}
