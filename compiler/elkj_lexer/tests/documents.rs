//! Whole-document tests over ELK JSON fixtures in `tests/fixtures/`.

use std::collections::HashSet;

use elkj_lexer::{
    check_tokens, ident_text, lex, parse_float, parse_signed_int, relex_from, unescape_string,
    KeyGroup, LexIssueKind, LineOffsetTable, PropertyKey, SourceBuffer, TokenKind,
};
use pretty_assertions::assert_eq;

const HIERARCHY: &str = include_str!("fixtures/hierarchy.json");
const RELAXED: &str = include_str!("fixtures/relaxed.elkj");
const BROKEN: &str = include_str!("fixtures/broken.elkj");

#[test]
fn fixtures_round_trip() {
    for source in [HIERARCHY, RELAXED, BROKEN] {
        let buf = SourceBuffer::new(source);
        assert_eq!(lex(&buf).tokens.reconstruct(), source);
    }
}

#[test]
fn strict_json_document_is_clean() {
    let buf = SourceBuffer::new(HIERARCHY);
    let output = lex(&buf);
    assert_eq!(output.issues, vec![]);
    assert!(output
        .tokens
        .iter()
        .all(|t| t.kind != TokenKind::Id && t.kind != TokenKind::Unrecognized));
}

#[test]
fn strict_json_uses_every_structural_key() {
    let buf = SourceBuffer::new(HIERARCHY);
    let output = lex(&buf);
    let keys: HashSet<PropertyKey> = output.tokens.iter().filter_map(|t| t.property_key()).collect();
    for key in [
        PropertyKey::Id,
        PropertyKey::LayoutOptions,
        PropertyKey::Properties,
        PropertyKey::Children,
        PropertyKey::Ports,
        PropertyKey::Labels,
        PropertyKey::Edges,
        PropertyKey::Sources,
        PropertyKey::Targets,
        PropertyKey::Width,
        PropertyKey::Height,
        PropertyKey::X,
        PropertyKey::Y,
        PropertyKey::Text,
    ] {
        assert!(keys.contains(&key), "{key} not found");
    }
}

#[test]
fn properties_and_layout_options_share_a_group() {
    let buf = SourceBuffer::new(HIERARCHY);
    let output = lex(&buf);
    let option_groups: Vec<TokenKind> = output
        .tokens
        .iter()
        .filter(|t| t.property_key().map(PropertyKey::group) == Some(KeyGroup::LayoutOptions))
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        option_groups,
        vec![TokenKind::KeyLayoutOptions, TokenKind::KeyProperties]
    );
}

#[test]
fn values_cook() {
    let buf = SourceBuffer::new(HIERARCHY);
    let output = lex(&buf);
    let strings: Vec<String> = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .filter_map(|t| unescape_string(t.lexeme).ok())
        .map(|s| s.into_owned())
        .take(4)
        .collect();
    assert_eq!(strings, vec!["root", "elk.algorithm", "layered", "elk.direction"]);

    let ints: Vec<i64> = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::SignedInt)
        .filter_map(|t| parse_signed_int(t.lexeme).ok())
        .collect();
    assert_eq!(ints, vec![30, 30, 5, 5, -12, 40, 40, 25]);

    let floats: Vec<f64> = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Float)
        .filter_map(|t| parse_float(t.lexeme).ok())
        .collect();
    assert_eq!(floats, vec![0.5, 25.0]);
}

#[test]
fn relaxed_document_is_clean() {
    let buf = SourceBuffer::new(RELAXED);
    let output = lex(&buf);
    assert_eq!(output.issues, vec![]);
}

#[test]
fn relaxed_spellings_match_strict_kinds() {
    let buf = SourceBuffer::new(RELAXED);
    let output = lex(&buf);
    let kinds: Vec<TokenKind> = output.tokens.significant().map(|t| t.kind).take(8).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::KeyId,
            TokenKind::Colon,
            TokenKind::Id,
            TokenKind::Comma,
            TokenKind::KeyLayoutOptions,
            TokenKind::Colon,
            TokenKind::LeftBrace,
        ]
    );
}

#[test]
fn relaxed_escaped_identifier_is_not_a_key() {
    let buf = SourceBuffer::new(RELAXED);
    let output = lex(&buf);
    let escaped = output
        .tokens
        .iter()
        .find(|t| t.lexeme.starts_with('^'))
        .map(|t| (t.kind, ident_text(t.lexeme)));
    assert_eq!(escaped, Some((TokenKind::Id, "children")));
}

#[test]
fn relaxed_label_text_unescapes() {
    let buf = SourceBuffer::new(RELAXED);
    let output = lex(&buf);
    let label = output
        .tokens
        .iter()
        .find(|t| t.lexeme.starts_with("'it"))
        .and_then(|t| unescape_string(t.lexeme).ok());
    assert_eq!(label.as_deref(), Some("it's \"quoted\""));
}

#[test]
fn relaxed_trivia_is_preserved() {
    let buf = SourceBuffer::new(RELAXED);
    let output = lex(&buf);
    let comments: Vec<TokenKind> = output
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::MlComment | TokenKind::SlComment))
        .map(|t| t.kind)
        .collect();
    assert_eq!(comments, vec![TokenKind::MlComment, TokenKind::SlComment]);
}

#[test]
fn broken_document_reports_issues_with_positions() {
    let buf = SourceBuffer::new(BROKEN);
    let output = lex(&buf);
    let table = LineOffsetTable::build(BROKEN);
    let located: Vec<(u32, u32, LexIssueKind)> = output
        .issues
        .iter()
        .map(|issue| {
            let (line, col) = table.offset_to_line_col(BROKEN, issue.span.start);
            (line, col, issue.kind)
        })
        .collect();
    assert_eq!(
        located,
        vec![
            (3, 6, LexIssueKind::UnrecognizedChar { ch: '-' }),
            (4, 11, LexIssueKind::UnrecognizedChar { ch: '.' }),
            (5, 21, LexIssueKind::UnrecognizedChar { ch: '\u{00A7}' }),
            (6, 21, LexIssueKind::UnterminatedString { quote: '\'' }),
        ]
    );
    assert!(output.has_errors());
}

#[test]
fn broken_string_swallows_the_rest() {
    let buf = SourceBuffer::new(BROKEN);
    let output = lex(&buf);
    let last = output.tokens.iter().last();
    assert_eq!(last.map(|t| t.kind), Some(TokenKind::String));
    assert_eq!(last.map(|t| t.lexeme), Some("'never closed } ] }\n"));
}

#[test]
fn check_tokens_is_repeatable() {
    let buf = SourceBuffer::new(BROKEN);
    let output = lex(&buf);
    assert_eq!(check_tokens(&output.tokens, &buf), output.issues);
}

#[test]
fn relex_tail_of_fixture() {
    let buf = SourceBuffer::new(HIERARCHY);
    let full = lex(&buf).tokens;
    let mid = full.len() / 2;
    let offset = full[mid].span.start;
    assert_eq!(relex_from(&buf, offset).as_slice(), &full.as_slice()[mid..]);
}
