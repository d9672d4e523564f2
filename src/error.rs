//! Error types for every stage, from lexing to execution.

use crate::ast::Opcode;

use thiserror::Error;

use std::ops::Range;

pub type Result<T> = std::result::Result<T, Error>;

/// Any fatal error raised while turning source into side effects.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unrecognized input `{lexeme}` at offset {}", .span.start)]
pub struct LexError {
    pub lexeme: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("program is empty, expected at least one instruction")]
    EmptyProgram,

    #[error("unknown opcode O{code}")]
    UnknownOpcode { code: u32, span: Range<usize> },

    #[error("expected {expected}, found {found} `{lexeme}`")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        lexeme: String,
        span: Range<usize>,
        /// The instruction whose operands were being read.
        opcode: Option<Opcode>,
    },

    #[error("expected {expected} but reached end of input")]
    UnexpectedEof {
        expected: &'static str,
        span: Range<usize>,
        opcode: Option<Opcode>,
    },
}

impl ParseError {
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            ParseError::UnexpectedToken { opcode, .. } | ParseError::UnexpectedEof { opcode, .. } => {
                *opcode
            }
            _ => None,
        }
    }

    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ParseError::EmptyProgram => None,
            ParseError::UnknownOpcode { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. } => Some(span.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    #[error("label `{name}` is defined at instruction {first} and again at {second}")]
    DuplicateLabel {
        name: String,
        first: usize,
        second: usize,
    },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("read of unbound variable V{index}")]
    UnboundVariable { index: usize },

    #[error("jump to unknown label `{name}`")]
    UnknownLabel { name: String },

    #[error("{op} expects a scalar in V{index}, found a sequence")]
    TypeMismatch { op: &'static str, index: usize },

    #[error("{op} expects a scalar operand, found a sequence")]
    ExpectedScalar { op: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },

    #[error("negative exponent {exponent}")]
    NegativeExponent { exponent: i64 },

    #[error("negative array index {index}")]
    NegativeIndex { index: i64 },

    #[error("array index {index} needs more memory than can be allocated")]
    ArrayTooLarge { index: i64 },

    #[error("{value} is not a valid unicode code point")]
    InvalidCodePoint { value: i64 },

    #[error("end of input while reading into V{index}")]
    EndOfInput { index: usize },

    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("at instruction {pc}: {source}")]
    At {
        pc: usize,
        #[source]
        source: Box<RuntimeError>,
    },
}

impl RuntimeError {
    /// Attaches the position of the failing instruction.
    pub fn at(self, pc: usize) -> Self {
        match self {
            RuntimeError::At { .. } => self,
            other => RuntimeError::At {
                pc,
                source: Box::new(other),
            },
        }
    }

    pub fn pc(&self) -> Option<usize> {
        match self {
            RuntimeError::At { pc, .. } => Some(*pc),
            _ => None,
        }
    }

    /// The error without its position wrapper.
    pub fn root(&self) -> &RuntimeError {
        match self {
            RuntimeError::At { source, .. } => source.root(),
            other => other,
        }
    }
}
