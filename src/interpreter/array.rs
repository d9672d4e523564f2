use crate::ast::{Value, Variable};
use crate::error::RuntimeError;
use crate::interpreter::{Cell, Interpreter};

use std::io::{BufRead, Write};

impl<'p, R: BufRead, W: Write> Interpreter<'p, R, W> {
    /// `dest = array[index]`, reading 0 outside the sequence. A scalar
    /// register reads as a one-element sequence.
    pub(crate) fn get_arr(
        &mut self,
        dest: &Variable,
        index: &Value,
        array: &Variable,
    ) -> Result<(), RuntimeError> {
        let index = self.context.eval_scalar(index, "getarr")?;
        let element = self.context.read(array.index)?.element(index);
        self.context.write(dest.index, Cell::Scalar(element));
        Ok(())
    }

    /// `array[index] = value`, growing the sequence with zeros as needed.
    pub(crate) fn set_arr(
        &mut self,
        array: &Variable,
        index: &Value,
        value: &Value,
    ) -> Result<(), RuntimeError> {
        let index = self.context.eval_scalar(index, "setarr")?;
        let value = self.context.eval_scalar(value, "setarr")?;
        let slot = usize::try_from(index).map_err(|_| RuntimeError::NegativeIndex { index })?;

        let items = self.context.sequence_mut(array.index);
        if items.len() <= slot {
            items
                .try_reserve(slot + 1 - items.len())
                .map_err(|_| RuntimeError::ArrayTooLarge { index })?;
            items.resize(slot + 1, 0);
        }
        items[slot] = value;
        Ok(())
    }
}
