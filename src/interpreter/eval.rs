use crate::ast::{Instruction, Value, Variable};
use crate::error::RuntimeError;
use crate::interpreter::{Cell, Flow, Interpreter};

use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
}

impl Arith {
    fn name(&self) -> &'static str {
        match self {
            Arith::Add => "add",
            Arith::Sub => "sub",
            Arith::Mul => "mul",
            Arith::Div => "div",
            Arith::Mod => "mod",
            Arith::Exp => "exp",
        }
    }

    fn apply(&self, a: i64, b: i64) -> Result<i64, RuntimeError> {
        let overflow = RuntimeError::Overflow { op: self.name() };
        match self {
            Arith::Add => a.checked_add(b).ok_or(overflow),
            Arith::Sub => a.checked_sub(b).ok_or(overflow),
            Arith::Mul => a.checked_mul(b).ok_or(overflow),
            Arith::Div => floor_div(a, b),
            Arith::Mod => floor_mod(a, b),
            Arith::Exp => {
                if b < 0 {
                    return Err(RuntimeError::NegativeExponent { exponent: b });
                }
                match a {
                    0 => return Ok((b == 0) as i64),
                    1 => return Ok(1),
                    -1 => return Ok(if b % 2 == 0 { 1 } else { -1 }),
                    _ => {}
                }
                u32::try_from(b)
                    .ok()
                    .and_then(|b| a.checked_pow(b))
                    .ok_or(overflow)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Logic {
    And,
    Or,
    Xor,
}

impl Logic {
    fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            Logic::And => a && b,
            Logic::Or => a || b,
            Logic::Xor => a != b,
        }
    }
}

/// Division rounding toward negative infinity.
pub fn floor_div(a: i64, b: i64) -> Result<i64, RuntimeError> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let q = a
        .checked_div(b)
        .ok_or(RuntimeError::Overflow { op: "div" })?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Remainder matching [`floor_div`]: takes the sign of the divisor.
pub fn floor_mod(a: i64, b: i64) -> Result<i64, RuntimeError> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    // i64::MIN % -1 overflows in hardware, the true remainder is 0
    let r = a.checked_rem(b).unwrap_or(0);
    if r != 0 && ((r < 0) != (b < 0)) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

impl<'p, R: BufRead, W: Write> Interpreter<'p, R, W> {
    pub(crate) fn execute(&mut self, instr: &'p Instruction) -> Result<Flow<'p>, RuntimeError> {
        match instr {
            Instruction::Label(_) => {}

            Instruction::Mov { dest, src } => {
                let cell = self.context.eval(src)?.into_owned();
                self.context.write(dest.index, cell);
            }
            Instruction::Add { dest, src } => self.arith(Arith::Add, dest, src)?,
            Instruction::Sub { dest, src } => self.arith(Arith::Sub, dest, src)?,
            Instruction::Mul { dest, src } => self.arith(Arith::Mul, dest, src)?,
            Instruction::Div { dest, src } => self.arith(Arith::Div, dest, src)?,
            Instruction::Mod { dest, src } => self.arith(Arith::Mod, dest, src)?,
            Instruction::Exp { dest, src } => self.arith(Arith::Exp, dest, src)?,

            Instruction::And { dest, src } => self.logic(Logic::And, dest, src)?,
            Instruction::Or { dest, src } => self.logic(Logic::Or, dest, src)?,
            Instruction::Xor { dest, src } => self.logic(Logic::Xor, dest, src)?,
            Instruction::Not { dest } => {
                let value = self.context.read(dest.index)?.truthy();
                self.context.write(dest.index, Cell::from_bool(!value));
            }

            Instruction::Print { value } => self.print(value)?,
            Instruction::Input { dest } => self.input(dest)?,

            Instruction::GetArr { dest, index, array } => self.get_arr(dest, index, array)?,
            Instruction::SetArr {
                array,
                index,
                value,
            } => self.set_arr(array, index, value)?,

            Instruction::Goto { target } => return Ok(Flow::Jump(target)),
            Instruction::JumpIf { condition, target } => {
                if self.context.eval(condition)?.truthy() {
                    return Ok(Flow::Jump(target));
                }
            }
            Instruction::Switch { selector, targets } => {
                let selector = self.context.eval_scalar(selector, "switch")?;
                if let Some(target) = usize::try_from(selector)
                    .ok()
                    .and_then(|i| targets.get(i))
                {
                    return Ok(Flow::Jump(target));
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn arith(&mut self, op: Arith, dest: &Variable, src: &Value) -> Result<(), RuntimeError> {
        let result = {
            let a = self.context.read(dest.index)?;
            let b = self.context.eval(src)?;
            combine(op, dest, src, a, &b)?
        };

        self.context.write(dest.index, result);
        Ok(())
    }

    fn logic(&mut self, op: Logic, dest: &Variable, src: &Value) -> Result<(), RuntimeError> {
        let a = self.context.read(dest.index)?.truthy();
        let b = self.context.eval(src)?.truthy();
        self.context.write(dest.index, Cell::from_bool(op.apply(a, b)));
        Ok(())
    }
}

fn combine(
    op: Arith,
    dest: &Variable,
    src: &Value,
    a: &Cell,
    b: &Cell,
) -> Result<Cell, RuntimeError> {
    match (a, b) {
        (Cell::Scalar(a), Cell::Scalar(b)) => Ok(Cell::Scalar(op.apply(*a, *b)?)),
        (Cell::Sequence(a), Cell::Sequence(b)) if op == Arith::Add => {
            Ok(Cell::Sequence(a.iter().chain(b).copied().collect()))
        }
        (Cell::Sequence(_), _) => Err(RuntimeError::TypeMismatch {
            op: op.name(),
            index: dest.index,
        }),
        (_, Cell::Sequence(_)) => Err(match src {
            Value::Variable(var) => RuntimeError::TypeMismatch {
                op: op.name(),
                index: var.index,
            },
            Value::Constant(_) => RuntimeError::ExpectedScalar { op: op.name() },
        }),
    }
}
