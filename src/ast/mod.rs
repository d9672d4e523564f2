pub mod opcode;

#[cfg(test)]
pub mod test;

pub use opcode::{Opcode, Operand};

use std::fmt;
use std::ops::Range;

/// An instruction operand that evaluates to a register cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Variable(Variable),
    Constant(i64),
}

/// A register reference, `V<index>` in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub index: usize,
}

impl Variable {
    pub fn new(index: usize) -> Self {
        Variable { index }
    }
}

impl From<Variable> for Value {
    fn from(var: Variable) -> Self {
        Value::Variable(var)
    }
}

/// A label name. Labels are kept as names here and only resolved to
/// positions when the program is linked.
pub type LabelRef = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Label(LabelRef),

    Mov { dest: Variable, src: Value },
    Add { dest: Variable, src: Value },
    Sub { dest: Variable, src: Value },
    Mul { dest: Variable, src: Value },
    Div { dest: Variable, src: Value },
    Mod { dest: Variable, src: Value },
    Exp { dest: Variable, src: Value },
    And { dest: Variable, src: Value },
    Or { dest: Variable, src: Value },
    Xor { dest: Variable, src: Value },
    Not { dest: Variable },

    Print { value: Value },
    Input { dest: Variable },

    GetArr {
        dest: Variable,
        index: Value,
        array: Variable,
    },
    SetArr {
        array: Variable,
        index: Value,
        value: Value,
    },

    Goto { target: LabelRef },
    JumpIf { condition: Value, target: LabelRef },
    /// Jump table: continues at `targets[selector]`, falls through when the
    /// selector is out of range.
    Switch {
        selector: Value,
        targets: Vec<LabelRef>,
    },
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Label(_) => Opcode::Label,
            Instruction::Mov { .. } => Opcode::Mov,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Div { .. } => Opcode::Div,
            Instruction::Mod { .. } => Opcode::Mod,
            Instruction::Exp { .. } => Opcode::Exp,
            Instruction::And { .. } => Opcode::And,
            Instruction::Or { .. } => Opcode::Or,
            Instruction::Xor { .. } => Opcode::Xor,
            Instruction::Not { .. } => Opcode::Not,
            Instruction::Print { .. } => Opcode::Print,
            Instruction::Input { .. } => Opcode::Input,
            Instruction::GetArr { .. } => Opcode::GetArr,
            Instruction::SetArr { .. } => Opcode::SetArr,
            Instruction::Goto { .. } => Opcode::Goto,
            Instruction::JumpIf { .. } => Opcode::JumpIf,
            Instruction::Switch { .. } => Opcode::Switch,
        }
    }
}

/// A parsed program. Spans point back into the source for diagnostics and
/// always have the same length as `instructions`.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub spans: Vec<Range<usize>>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let spans = vec![0..0; instructions.len()];
        Program {
            instructions,
            spans,
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn span(&self, pc: usize) -> Option<Range<usize>> {
        self.spans.get(pc).cloned()
    }

    /// One instruction per line, prefixed by its position.
    pub fn listing(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(pc, instr)| format!("{:04}  {}\n", pc, instr))
            .collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.index)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Variable(var) => write!(f, "{}", var),
            Value::Constant(value) => write!(f, "D{}", value),
        }
    }
}

// Renders back to source syntax, so a listing can be fed to the parser again.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{}", self.opcode().code())?;
        match self {
            Instruction::Label(name) | Instruction::Goto { target: name } => {
                write!(f, " {}", name)
            }
            Instruction::Mov { dest, src }
            | Instruction::Add { dest, src }
            | Instruction::Sub { dest, src }
            | Instruction::Mul { dest, src }
            | Instruction::Div { dest, src }
            | Instruction::Mod { dest, src }
            | Instruction::Exp { dest, src }
            | Instruction::And { dest, src }
            | Instruction::Or { dest, src }
            | Instruction::Xor { dest, src } => write!(f, " {} {}", dest, src),
            Instruction::Not { dest } | Instruction::Input { dest } => write!(f, " {}", dest),
            Instruction::Print { value } => write!(f, " {}", value),
            Instruction::GetArr { dest, index, array } => {
                write!(f, " {} {} {}", dest, index, array)
            }
            Instruction::SetArr {
                array,
                index,
                value,
            } => write!(f, " {} {} {}", array, index, value),
            Instruction::JumpIf { condition, target } => write!(f, " {} {}", condition, target),
            Instruction::Switch { selector, targets } => {
                write!(f, " {}", selector)?;
                for target in targets {
                    write!(f, " {}", target)?;
                }
                Ok(())
            }
        }
    }
}
