use crate::ast::{Value, Variable};
use crate::error::RuntimeError;
use crate::interpreter::{Cell, Interpreter};

use std::io::{BufRead, Write};

impl<'p, R: BufRead, W: Write> Interpreter<'p, R, W> {
    /// Scalars print in decimal, sequences as text, one code point per
    /// element. A trailing 0 terminator is printed as-is.
    pub(crate) fn print(&mut self, value: &Value) -> Result<(), RuntimeError> {
        let line = match &*self.context.eval(value)? {
            Cell::Scalar(value) => value.to_string(),
            Cell::Sequence(items) => items
                .iter()
                .map(|&value| {
                    u32::try_from(value)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or(RuntimeError::InvalidCodePoint { value })
                })
                .collect::<Result<String, _>>()?,
        };
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Reads a line, without its terminator, into `dest` as a
    /// zero-terminated sequence of code points.
    pub(crate) fn input(&mut self, dest: &Variable) -> Result<(), RuntimeError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RuntimeError::EndOfInput { index: dest.index });
        }
        let line = line
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(&line);

        let mut items: Vec<i64> = line.chars().map(|c| c as i64).collect();
        items.push(0);
        self.context.write(dest.index, Cell::Sequence(items));
        Ok(())
    }
}
