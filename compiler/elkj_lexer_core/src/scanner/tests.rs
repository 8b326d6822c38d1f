use pretty_assertions::assert_eq;

use super::*;
use crate::kind::PropertyKey;

/// Helper: scan and return kinds only.
fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

/// Helper: scan and return `(kind, lexeme)` pairs.
fn lexemes(source: &str) -> Vec<(TokenKind, &str)> {
    let mut pos = 0usize;
    tokenize(source)
        .into_iter()
        .map(|t| {
            let end = pos + t.len as usize;
            let lexeme = &source[pos..end];
            pos = end;
            (t.kind, lexeme)
        })
        .collect()
}

/// Helper: concatenate every token's lexeme.
fn reconstruct(source: &str) -> String {
    lexemes(source).into_iter().map(|(_, lexeme)| lexeme).collect()
}

#[test]
fn scanner_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Scanner<'_>>();
    assert_send_sync::<SourceBuffer>();
    assert_send_sync::<RawToken>();
}

// === End Of Input ===

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(tokenize(""), vec![]);
}

#[test]
fn end_of_input_is_idempotent() {
    let buf = SourceBuffer::new("{}");
    let mut scanner = Scanner::new(buf.cursor());
    assert!(scanner.next_token().is_some());
    assert!(scanner.next_token().is_some());
    assert_eq!(scanner.next_token(), None);
    assert_eq!(scanner.next_token(), None);
    assert_eq!(scanner.pos(), 2);
}

#[test]
fn scan_at_end_returns_none() {
    let buf = SourceBuffer::new("null");
    assert_eq!(scan_at(&buf, 4), None);
    assert_eq!(scan_at(&buf, 100), None);
}

#[test]
fn scan_at_mid_buffer() {
    let buf = SourceBuffer::new("{ \"x\": 1.5 }");
    assert_eq!(
        scan_at(&buf, 2),
        Some(RawToken {
            kind: TokenKind::KeyX,
            len: 3
        })
    );
    assert_eq!(
        scan_at(&buf, 7),
        Some(RawToken {
            kind: TokenKind::Float,
            len: 3
        })
    );
}

// === Punctuation And Literals ===

#[test]
fn punctuation() {
    assert_eq!(
        kinds("{}[],:"),
        vec![
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Comma,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn scalar_literals() {
    assert_eq!(
        kinds("true false null"),
        vec![
            TokenKind::True,
            TokenKind::Whitespace,
            TokenKind::False,
            TokenKind::Whitespace,
            TokenKind::Null,
        ]
    );
}

#[test]
fn quoted_scalar_literals_are_strings() {
    assert_eq!(kinds("\"true\""), vec![TokenKind::String]);
    assert_eq!(kinds("'null'"), vec![TokenKind::String]);
}

// === Reserved Keys ===

#[test]
fn every_key_spelling_yields_its_kind() {
    for key in PropertyKey::ALL {
        let name = key.name();
        for spelling in [format!("\"{name}\""), format!("'{name}'"), name.to_string()] {
            assert_eq!(
                tokenize(&spelling),
                vec![RawToken {
                    kind: key.token_kind(),
                    len: u32::try_from(spelling.len()).expect("short spelling"),
                }],
                "spelling {spelling:?}"
            );
        }
    }
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(
        tokenize("childrenX"),
        vec![RawToken {
            kind: TokenKind::Id,
            len: 9
        }]
    );
    assert_eq!(kinds("widths"), vec![TokenKind::Id]);
    assert_eq!(kinds("Children"), vec![TokenKind::Id]);
}

#[test]
fn escaped_keyword_is_an_identifier() {
    assert_eq!(
        tokenize("^children"),
        vec![RawToken {
            kind: TokenKind::Id,
            len: 9
        }]
    );
}

#[test]
fn layout_options_and_properties_stay_distinct() {
    assert_eq!(
        kinds("layoutOptions properties"),
        vec![
            TokenKind::KeyLayoutOptions,
            TokenKind::Whitespace,
            TokenKind::KeyProperties,
        ]
    );
}

// === Numbers ===

#[test]
fn numeric_forms() {
    assert_eq!(kinds("42"), vec![TokenKind::SignedInt]);
    assert_eq!(kinds("-7"), vec![TokenKind::SignedInt]);
    assert_eq!(kinds("3.14"), vec![TokenKind::Float]);
    assert_eq!(kinds("2e10"), vec![TokenKind::Float]);
    assert_eq!(kinds("1.5e-3"), vec![TokenKind::Float]);
}

#[test]
fn bare_sign_is_unrecognized() {
    assert_eq!(
        tokenize("+"),
        vec![RawToken {
            kind: TokenKind::Unrecognized,
            len: 1
        }]
    );
    assert_eq!(
        kinds("- 5"),
        vec![
            TokenKind::Unrecognized,
            TokenKind::Whitespace,
            TokenKind::SignedInt,
        ]
    );
}

#[test]
fn trailing_dot_splits_number() {
    assert_eq!(
        lexemes("1."),
        vec![(TokenKind::SignedInt, "1"), (TokenKind::Unrecognized, ".")]
    );
}

#[test]
fn incomplete_exponent_splits_number() {
    assert_eq!(
        lexemes("1.5e"),
        vec![(TokenKind::Float, "1.5"), (TokenKind::Id, "e")]
    );
    assert_eq!(
        lexemes("7e"),
        vec![(TokenKind::SignedInt, "7"), (TokenKind::Id, "e")]
    );
}

// === Strings ===

#[test]
fn escaped_quote_inside_string() {
    assert_eq!(
        tokenize(r#""a\"b""#),
        vec![RawToken {
            kind: TokenKind::String,
            len: 6
        }]
    );
}

#[test]
fn unterminated_string_consumes_rest() {
    assert_eq!(
        lexemes("{\"id\": \"n1, }"),
        vec![
            (TokenKind::LeftBrace, "{"),
            (TokenKind::KeyId, "\"id\""),
            (TokenKind::Colon, ":"),
            (TokenKind::Whitespace, " "),
            (TokenKind::String, "\"n1, }"),
        ]
    );
}

#[test]
fn strings_hold_multibyte_text() {
    assert_eq!(
        lexemes("\"\u{00FC}ber \u{1F600}\""),
        vec![(TokenKind::String, "\"\u{00FC}ber \u{1F600}\"")]
    );
}

// === Comments And Whitespace ===

#[test]
fn adjacent_block_comments() {
    assert_eq!(
        lexemes("/* a */ /* b */"),
        vec![
            (TokenKind::MlComment, "/* a */"),
            (TokenKind::Whitespace, " "),
            (TokenKind::MlComment, "/* b */"),
        ]
    );
}

#[test]
fn line_comment_takes_its_terminator() {
    assert_eq!(
        lexemes("// one\r\n// two\nx"),
        vec![
            (TokenKind::SlComment, "// one\r\n"),
            (TokenKind::SlComment, "// two\n"),
            (TokenKind::KeyX, "x"),
        ]
    );
}

#[test]
fn lone_carriage_return_goes_to_whitespace() {
    assert_eq!(
        lexemes("// c\r\r\n1"),
        vec![
            (TokenKind::SlComment, "// c"),
            (TokenKind::Whitespace, "\r\r\n"),
            (TokenKind::SignedInt, "1"),
        ]
    );
}

#[test]
fn line_comment_ending_the_buffer() {
    // No line terminator before end of input.
    let source = format!("//{}", "c".repeat(61));
    assert_eq!(
        tokenize(&source),
        vec![RawToken {
            kind: TokenKind::SlComment,
            len: 63
        }]
    );
}

#[test]
fn single_slash_is_unrecognized() {
    assert_eq!(
        lexemes("/x"),
        vec![(TokenKind::Unrecognized, "/"), (TokenKind::KeyX, "x")]
    );
}

#[test]
fn whitespace_is_one_token() {
    assert_eq!(
        tokenize(" \t\r\n\n  "),
        vec![RawToken {
            kind: TokenKind::Whitespace,
            len: 7
        }]
    );
}

// === Unrecognized Input ===

#[test]
fn unrecognized_covers_one_character() {
    assert_eq!(
        lexemes("\u{00E9}\u{4E2D}#"),
        vec![
            (TokenKind::Unrecognized, "\u{00E9}"),
            (TokenKind::Unrecognized, "\u{4E2D}"),
            (TokenKind::Unrecognized, "#"),
        ]
    );
}

#[test]
fn interior_null_is_unrecognized() {
    assert_eq!(
        lexemes("1\0 2"),
        vec![
            (TokenKind::SignedInt, "1"),
            (TokenKind::Unrecognized, "\0"),
            (TokenKind::Whitespace, " "),
            (TokenKind::SignedInt, "2"),
        ]
    );
}

#[test]
fn byte_order_mark_is_unrecognized() {
    assert_eq!(
        lexemes("\u{FEFF}{}"),
        vec![
            (TokenKind::Unrecognized, "\u{FEFF}"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
        ]
    );
}

// === Whole Documents ===

#[test]
fn small_graph() {
    let source = r#"{ id: root, children: [ { "id": 'n1', width: 30, height: -2.5e1 } ] }"#;
    let significant: Vec<TokenKind> = kinds(source)
        .into_iter()
        .filter(|k| !k.is_trivia())
        .collect();
    assert_eq!(
        significant,
        vec![
            TokenKind::LeftBrace,
            TokenKind::KeyId,
            TokenKind::Colon,
            TokenKind::Id,
            TokenKind::Comma,
            TokenKind::KeyChildren,
            TokenKind::Colon,
            TokenKind::LeftBracket,
            TokenKind::LeftBrace,
            TokenKind::KeyId,
            TokenKind::Colon,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::KeyWidth,
            TokenKind::Colon,
            TokenKind::SignedInt,
            TokenKind::Comma,
            TokenKind::KeyHeight,
            TokenKind::Colon,
            TokenKind::Float,
            TokenKind::RightBrace,
            TokenKind::RightBracket,
            TokenKind::RightBrace,
        ]
    );
    assert_eq!(reconstruct(source), source);
}

#[test]
fn restart_from_boundary_reproduces_suffix() {
    let source = "{ \"edges\": [ { sources: [n1], targets: [n2] } ] } // done";
    let buf = SourceBuffer::new(source);
    let full = tokenize(source);
    let mut offset = 0u32;
    for (i, tok) in full.iter().enumerate() {
        let resumed: Vec<RawToken> = Scanner::starting_at(&buf, offset).collect();
        assert_eq!(resumed, full[i..].to_vec(), "restart at {offset}");
        offset += tok.len;
    }
}

// === Property Tests ===

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    /// Fragments that steer random input towards interesting boundaries.
    fn elk_fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("{".to_string()),
            Just("}".to_string()),
            Just("[".to_string()),
            Just(",".to_string()),
            Just(":".to_string()),
            Just("\"".to_string()),
            Just("'".to_string()),
            Just("\\".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("//".to_string()),
            Just("\r\n".to_string()),
            Just("-".to_string()),
            Just("1.5e".to_string()),
            Just("^".to_string()),
            Just("children".to_string()),
            Just("'ports'".to_string()),
            Just("\"labels\"".to_string()),
            "[a-zA-Z_0-9 .+eE]{1,4}",
            any::<char>().prop_map(String::from),
        ]
    }

    fn elk_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(elk_fragment(), 0..40).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn tokens_tile_arbitrary_input(source in any::<String>()) {
            let tokens = tokenize(&source);
            prop_assert!(tokens.iter().all(|t| t.len > 0));
            let total: usize = tokens.iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn lexemes_reconstruct_input(source in elk_like()) {
            prop_assert_eq!(reconstruct(&source), source);
        }

        #[test]
        fn token_count_bounded_by_length(source in elk_like()) {
            prop_assert!(tokenize(&source).len() <= source.len());
        }

        #[test]
        fn restart_matches_suffix(source in elk_like(), pick in any::<prop::sample::Index>()) {
            let full = tokenize(&source);
            prop_assume!(!full.is_empty());
            let i = pick.index(full.len());
            let offset: u32 = full[..i].iter().map(|t| t.len).sum();
            let buf = SourceBuffer::new(&source);
            let resumed: Vec<RawToken> = Scanner::starting_at(&buf, offset).collect();
            prop_assert_eq!(resumed, full[i..].to_vec());
        }

        #[test]
        fn key_spellings_are_interchangeable(
            pick in any::<prop::sample::Index>(),
            prefix in "[ ,:{\\[]{0,3}",
            suffix in "[ ,:}\\]]{0,3}",
        ) {
            let key = PropertyKey::ALL[pick.index(PropertyKey::ALL.len())];
            let name = key.name();
            let spellings = [format!("\"{name}\""), format!("'{name}'"), name.to_string()];
            let streams: Vec<Vec<TokenKind>> = spellings
                .iter()
                .map(|s| kinds(&format!("{prefix}{s}{suffix}")))
                .collect();
            prop_assert_eq!(&streams[0], &streams[1]);
            prop_assert_eq!(&streams[1], &streams[2]);
            prop_assert!(streams[0].contains(&key.token_kind()));
        }

        #[test]
        fn trivia_never_touches_trivia_of_same_kind(source in elk_like()) {
            let tokens = tokenize(&source);
            for pair in tokens.windows(2) {
                prop_assert!(
                    !(pair[0].kind == TokenKind::Whitespace && pair[1].kind == TokenKind::Whitespace),
                    "adjacent whitespace tokens in {:?}", source
                );
            }
        }
    }
}
