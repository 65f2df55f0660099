// Lexer behaviour observed through the public API

use cedarc::options::QuotePolicy;
use cedarc::parser::lexer::{Lexer, Token, TokenKind};

fn lex(source: &str) -> Vec<Token> {
    Lexer::with_quotes(source, QuotePolicy::Keep).collect()
}

#[test]
fn test_relexing_lexemes_reproduces_kinds() {
    let source = r#"
        start
            define Foo -> Bar :
                echo "say \"hi\""
                repeat 3 .. 10 until halt
                x = (a + b) * c / d - e, { }
            end
        end
    "#;

    let first = lex(source);
    let joined = first
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let second = lex(&joined);

    let first_kinds: Vec<_> = first.iter().map(|t| &t.kind).collect();
    let second_kinds: Vec<_> = second.iter().map(|t| &t.kind).collect();
    assert_eq!(first_kinds, second_kinds);
}

#[test]
fn test_lexemes_cover_source_text() {
    let tokens = lex(r#"echo "a b"->x"#);
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["echo", "\"a b\"", "->", "x"]);
}

#[test]
fn test_unrecognized_input_does_not_stop_lexing() {
    let kinds: Vec<_> = Lexer::new("start # echo ! end").map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Start,
            TokenKind::Unrecognized("#".to_string()),
            TokenKind::Echo,
            TokenKind::Unrecognized("!".to_string()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_tokenize_ends_with_eof() {
    let tokens = Lexer::new("start end").tokenize();
    assert_eq!(tokens.len(), 3);
    assert!(tokens[2].is_eof());
}
