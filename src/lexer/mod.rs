use crate::error::LexError;

use logos::Logos;

use std::fmt;
use std::ops::Range;

#[cfg(test)]
pub mod test;

pub type Spanned<T> = (T, Range<usize>);

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \n\r\t\f]+")] // Ignore this regex pattern between tokens
#[derive(Clone)]
pub enum Token {
    #[regex(r"O[0-9]+", |lex| lex.slice()[1..].parse::<u32>().ok())]
    Opcode(u32),

    #[regex(r"V[0-9]+", |lex| lex.slice()[1..].parse::<usize>().ok())]
    Variable(usize),

    #[regex(r"D-?[0-9]+", |lex| lex.slice()[1..].parse::<i64>().ok())]
    Data(i64),

    #[regex(r"L[a-zA-Z0-9]+", |lex| lex.slice().to_string())]
    Label(String),

    /// Only ever used as a label name, so the digits are kept as written.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
}

impl Token {
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Opcode(_) => "opcode",
            Token::Variable(_) => "variable",
            Token::Data(_) => "data",
            Token::Label(_) => "label",
            Token::Number(_) => "number",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Opcode(code) => write!(f, "O{}", code),
            Token::Variable(index) => write!(f, "V{}", index),
            Token::Data(value) => write!(f, "D{}", value),
            Token::Label(name) => write!(f, "{}", name),
            Token::Number(digits) => write!(f, "{}", digits),
        }
    }
}

/// Lexes the whole source up front. The first unrecognized slice aborts,
/// nothing is handed to the parser in that case.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<Token>>, LexError> {
    let mut lexer = Token::lexer(source).spanned();
    let mut tokens = vec![];

    while let Some((token, span)) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LexError {
                    lexeme: source[span.clone()].to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}
