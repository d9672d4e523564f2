pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;

pub use error::{Error, Result};

use ast::Program;
use interpreter::{Interpreter, RunConfig};
use parser::Parser;

use std::io::{BufRead, Write};

/// Tokenizes and parses a whole source file.
pub fn parse(source: &str) -> Result<Program> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse_program()?)
}

/// Links and runs `program` until it falls off its end.
pub fn run<R: BufRead, W: Write>(
    program: &Program,
    input: R,
    output: W,
    config: RunConfig,
) -> Result<()> {
    let mut interpreter = Interpreter::new(program, input, output)?.with_config(config);
    interpreter.run()?;
    Ok(())
}
