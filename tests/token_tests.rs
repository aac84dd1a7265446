use rblex::{render_tokens, tokenize, Token, TokenKind};

#[test]
fn token_display_format() {
    assert_eq!(
        Token::new(TokenKind::Identifier, "foo", 3).to_string(),
        "{foo, identifier, 3}"
    );
    assert_eq!(Token::new(TokenKind::NotEq, "!=", 1).to_string(), "{!=, !=, 1}");
    assert_eq!(Token::new(TokenKind::Eof, "", 2).to_string(), "{, eof, 2}");
    assert_eq!(
        Token::new(TokenKind::KwEndBlock, "END", 1).to_string(),
        "{END, END, 1}"
    );
}

#[test]
fn token_equality_compares_kind_lexeme_and_line() {
    let a = Token::new(TokenKind::Number, "1", 1);
    assert_eq!(a, Token::new(TokenKind::Number, "1", 1));
    assert_ne!(a, Token::new(TokenKind::Number, "1", 2));
    assert_ne!(a, Token::new(TokenKind::Number, "2", 1));
    assert_ne!(a, Token::new(TokenKind::Identifier, "1", 1));
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::KwWhile));
    assert_eq!(TokenKind::keyword("BEGIN"), Some(TokenKind::KwBeginBlock));
    assert_eq!(TokenKind::keyword("While"), None);
    assert_eq!(TokenKind::keyword("begin1"), None);
    assert_eq!(TokenKind::keyword("identifier"), None);
}

#[test]
fn only_reserved_words_are_keywords() {
    assert!(TokenKind::KwYield.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::String.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}

#[test]
fn render_one_token_per_line() {
    let rendered = render_tokens(&tokenize("x = \"hi\"\ny >= 2.5"));
    assert_eq!(
        rendered,
        "{x, identifier, 1}\n\
         {=, =, 1}\n\
         {\"hi\", string, 1}\n\
         {y, identifier, 2}\n\
         {>=, >=, 2}\n\
         {2.5, number, 2}\n\
         {, eof, 2}\n"
    );
}

#[test]
fn render_error_tokens_inline() {
    let rendered = render_tokens(&tokenize("a ? \"b"));
    assert_eq!(
        rendered,
        "{a, identifier, 1}\n{?, error, 1}\n{\"b, error, 1}\n{, eof, 1}\n"
    );
}
