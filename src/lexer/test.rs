use super::*;
use logos::Logos;

#[test]
fn test_basic_tokens() {
    let input = "O12 V3";
    let tokens = tokenize(input).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].0, Token::Opcode(12));
    assert_eq!(tokens[0].0.kind(), "opcode");
    assert_eq!(&input[tokens[0].1.clone()], "O12");
    assert_eq!(tokens[1].0, Token::Variable(3));
    assert_eq!(tokens[1].0.kind(), "variable");
    assert_eq!(&input[tokens[1].1.clone()], "V3");
}

#[test]
fn test_all_kinds() {
    let input = "
    O0 Lloop1
    O17 D-5 42
    O18 V1 -7 Lend
    ";
    let mut lexer = Token::lexer(input);

    assert_eq!(lexer.next(), Some(Ok(Token::Opcode(0))));
    assert_eq!(lexer.next(), Some(Ok(Token::Label("Lloop1".to_string()))));
    assert_eq!(lexer.next(), Some(Ok(Token::Opcode(17))));
    assert_eq!(lexer.next(), Some(Ok(Token::Data(-5))));
    assert_eq!(lexer.next(), Some(Ok(Token::Number("42".to_string()))));
    assert_eq!(lexer.next(), Some(Ok(Token::Opcode(18))));
    assert_eq!(lexer.next(), Some(Ok(Token::Variable(1))));
    assert_eq!(lexer.next(), Some(Ok(Token::Number("-7".to_string()))));
    assert_eq!(lexer.next(), Some(Ok(Token::Label("Lend".to_string()))));
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_data_tokens() {
    for n in [0i64, 1, 9, 10, 255, 123456789] {
        let tokens = tokenize(&format!("D{}", n)).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Data(n));

        if n > 0 {
            let tokens = tokenize(&format!("D-{}", n)).unwrap();
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].0, Token::Data(-n));
        }
    }
}

#[test]
fn test_tokens_without_whitespace() {
    let tokens = tokenize("O1V0D5").unwrap();
    let tokens: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
    assert_eq!(
        tokens,
        vec![Token::Opcode(1), Token::Variable(0), Token::Data(5)]
    );
}

#[test]
fn test_whitespace_only() {
    assert!(tokenize(" \t\n\r\n ").unwrap().is_empty());
}

#[test]
fn test_lex_error_position() {
    let err = tokenize("O12 V3 #").unwrap_err();
    assert_eq!(err.span, 7..8);
    assert_eq!(err.lexeme, "#");

    // a bare prefix letter is not a token
    let err = tokenize("O1 V").unwrap_err();
    assert_eq!(err.span.start, 3);
}

#[test]
fn test_lex_error_overflow() {
    let err = tokenize("D99999999999999999999999").unwrap_err();
    assert_eq!(err.span.start, 0);
}

#[test]
fn test_display_matches_lexeme() {
    let input = "O15 V2 D-4 Lx9 -3";
    for (token, span) in tokenize(input).unwrap() {
        assert_eq!(token.to_string(), &input[span]);
    }
}

#[test]
fn test_numbers_keep_their_digits() {
    let tokens: Vec<Token> = tokenize("007 -0 99999999999999999999")
        .unwrap()
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Number("007".to_string()),
            Token::Number("-0".to_string()),
            Token::Number("99999999999999999999".to_string()),
        ]
    );
}
