pub mod instruction;

#[cfg(test)]
pub mod test;

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::{Spanned, Token};

use std::iter::Peekable;
use std::ops::Range;

type TokenIter = Peekable<std::vec::IntoIter<Spanned<Token>>>;

pub struct Parser {
    tokens: TokenIter,
    /// Span used for errors raised at end of input.
    eof: Range<usize>,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned<Token>>) -> Self {
        let end = tokens.last().map(|(_, span)| span.end).unwrap_or(0);
        Parser {
            tokens: tokens.into_iter().peekable(),
            eof: end..end,
        }
    }

    /// `program := instruction+`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while self.tokens.peek().is_some() {
            let (instruction, span) = self.parse_instruction()?;
            program.instructions.push(instruction);
            program.spans.push(span);
        }

        if program.is_empty() {
            return Err(ParseError::EmptyProgram);
        }
        Ok(program)
    }
}
