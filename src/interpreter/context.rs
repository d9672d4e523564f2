use crate::ast::Value;
use crate::error::RuntimeError;

use std::borrow::Cow;
use std::collections::HashMap;

/// The content of one register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Scalar(i64),
    Sequence(Vec<i64>),
}

impl Cell {
    /// Scalars are true when nonzero, sequences when non-empty.
    pub fn truthy(&self) -> bool {
        match self {
            Cell::Scalar(value) => *value != 0,
            Cell::Sequence(items) => !items.is_empty(),
        }
    }

    pub fn from_bool(value: bool) -> Cell {
        Cell::Scalar(value as i64)
    }

    /// A scalar becomes a one-element sequence.
    pub fn into_sequence(self) -> Vec<i64> {
        match self {
            Cell::Scalar(value) => vec![value],
            Cell::Sequence(items) => items,
        }
    }

    pub fn as_slice(&self) -> &[i64] {
        match self {
            Cell::Scalar(value) => std::slice::from_ref(value),
            Cell::Sequence(items) => items,
        }
    }

    /// Reads the element at `index` as if the cell were a sequence;
    /// anything out of range reads as 0.
    pub fn element(&self, index: i64) -> i64 {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.as_slice().get(index).copied())
            .unwrap_or(0)
    }

    pub fn as_scalar(&self) -> Option<i64> {
        match self {
            Cell::Scalar(value) => Some(*value),
            Cell::Sequence(_) => None,
        }
    }
}

/// The register file. Registers spring into existence on first write.
#[derive(Debug, Default)]
pub struct Context {
    registers: HashMap<usize, Cell>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    pub fn read(&self, index: usize) -> Result<&Cell, RuntimeError> {
        self.registers
            .get(&index)
            .ok_or(RuntimeError::UnboundVariable { index })
    }

    pub fn write(&mut self, index: usize, cell: Cell) {
        self.registers.insert(index, cell);
    }

    /// The register viewed as a mutable sequence. An unbound register starts
    /// out empty and a scalar is promoted in place.
    pub fn sequence_mut(&mut self, index: usize) -> &mut Vec<i64> {
        let cell = self
            .registers
            .entry(index)
            .or_insert_with(|| Cell::Sequence(vec![]));
        if let Cell::Scalar(_) = cell {
            *cell = Cell::Sequence(cell.clone().into_sequence());
        }
        match cell {
            Cell::Sequence(items) => items,
            Cell::Scalar(_) => unreachable!("scalar promoted above"),
        }
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    pub fn eval(&self, value: &Value) -> Result<Cow<'_, Cell>, RuntimeError> {
        match value {
            Value::Variable(var) => self.read(var.index).map(Cow::Borrowed),
            Value::Constant(value) => Ok(Cow::Owned(Cell::Scalar(*value))),
        }
    }

    /// Evaluates an operand that has to be a scalar, `op` names the
    /// instruction for the error.
    pub fn eval_scalar(&self, value: &Value, op: &'static str) -> Result<i64, RuntimeError> {
        self.eval(value)?
            .as_scalar()
            .ok_or(RuntimeError::ExpectedScalar { op })
    }
}
