//! Executes a parsed [`Program`] against a fresh register file.
//!
//! The run loop owns all mutable state: the program counter, the register
//! [`Context`] and the I/O handles. Instructions never jump by themselves,
//! they return a [`Flow`] and the loop moves the program counter.

pub mod array;
pub mod context;
pub mod eval;
pub mod io;
pub mod link;


pub use context::{Cell, Context};
pub use link::LabelTable;

use crate::ast::{Instruction, Program};
use crate::error::{LinkError, RuntimeError};

use tracing::{debug, trace};

use std::io::{BufRead, Write};

/// Outcome of evaluating a single instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<'p> {
    Continue,
    Jump(&'p str),
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Upper bound on executed instructions. `None` runs until the program
    /// falls off its end, which may be never.
    pub max_steps: Option<u64>,
}

pub struct Interpreter<'p, R, W> {
    program: &'p Program,
    labels: LabelTable,
    context: Context,
    input: R,
    output: W,
    config: RunConfig,
    pc: usize,
    steps: u64,
}

impl<'p, R: BufRead, W: Write> Interpreter<'p, R, W> {
    /// Links the program. Nothing runs until [`Interpreter::run`].
    pub fn new(program: &'p Program, input: R, output: W) -> Result<Self, LinkError> {
        Ok(Interpreter {
            program,
            labels: LabelTable::link(program)?,
            context: Context::new(),
            input,
            output,
            config: RunConfig::default(),
            pc: 0,
            steps: 0,
        })
    }

    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(
            instructions = self.program.len(),
            labels = self.labels.len(),
            "run started"
        );

        let result = loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(err) => break Err(err.at(self.pc)),
            }
        };
        self.output.flush()?;

        debug!(steps = self.steps, ok = result.is_ok(), "run finished");
        result
    }

    /// Executes the instruction at `pc`. Returns `false` once the program
    /// counter has run off the end.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        let program = self.program;
        let Some(instr) = program.instructions.get(self.pc) else {
            return Ok(false);
        };

        if let Instruction::Label(_) = instr {
            self.pc += 1;
            return Ok(true);
        }

        if let Some(limit) = self.config.max_steps {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }
        self.steps += 1;

        trace!(pc = self.pc, %instr, "execute");
        match self.execute(instr)? {
            Flow::Continue => self.pc += 1,
            Flow::Jump(name) => {
                let target = self
                    .labels
                    .resolve(name)
                    .ok_or_else(|| RuntimeError::UnknownLabel {
                        name: name.to_string(),
                    })?;
                trace!(from = self.pc, to = target, label = name, "jump");
                self.pc = target;
            }
        }
        Ok(true)
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
